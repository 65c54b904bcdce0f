//! 错误类型

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// 自定义时间文本解析失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    #[error("expected `minutes:seconds`, found no ':' in {0:?}")]
    MissingSeparator(String),

    #[error("expected exactly two fields, found {0}")]
    FieldCount(usize),

    #[error("{field} is not an integer: {source}")]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("time value does not fit in 64 bits")]
    Overflow,
}

/// 提示音加载或播放失败
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("alert asset {name:?} not found (searched {searched:?})")]
    AssetNotFound { name: String, searched: Vec<PathBuf> },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no audio output device: {0}")]
    Output(#[from] rodio::StreamError),

    #[error("failed to create audio sink: {0}")]
    Sink(#[from] rodio::PlayError),

    #[error("failed to decode alert asset: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// 字体加载失败
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid font data: {0}")]
    Parse(String),

    #[error("no usable font found")]
    NotFound,
}

/// 启动阶段的致命错误
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid widget config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create framebuffer surface: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}
