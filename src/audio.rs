//! 提示音
//!
//! 启动时把提示音文件读入内存并打开输出设备，倒计时结束时交给 rodio 播放，不阻塞 UI 线程。
//! 文件缺失、无音频设备、解码失败都只记录日志。

use crate::error::AudioError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 倒计时结束时的提示
pub trait AlertSink {
    fn play(&mut self);
}

/// 基于 rodio 的提示音播放器
pub struct AlertPlayer {
    data: Option<Arc<[u8]>>,
    // OutputStream 不是 Send，只在 UI 线程持有；启动时打开，播放时不再碰设备
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl AlertPlayer {
    /// 按文件名查找并加载提示音，同时打开音频设备；任一步失败都返回静音的播放器
    pub fn load(file_name: &str) -> Self {
        let mut player = match Self::read_asset(file_name) {
            Ok((path, data)) => {
                info!("🔊 alert sound: {} ({} bytes)", path.display(), data.len());
                Self::from_bytes(data)
            }
            Err(e) => {
                warn!("alert sound unavailable: {}", e);
                return Self::silent();
            }
        };
        if let Err(e) = player.open_output() {
            warn!("alert disabled: {}", e);
        }
        player
    }

    /// 打开默认输出设备，可能阻塞，只在启动时调用
    pub fn open_output(&mut self) -> Result<(), AudioError> {
        if self.output.is_none() {
            self.output = Some(OutputStream::try_default()?);
        }
        Ok(())
    }

    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            data: Some(data.into()),
            output: None,
        }
    }

    pub fn silent() -> Self {
        Self { data: None, output: None }
    }

    pub fn has_asset(&self) -> bool {
        self.data.is_some()
    }

    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }

    /// 候选目录：可执行文件所在目录（安装位置），其下的 assets/，以及源码仓库的 assets/
    pub fn search_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
            dirs.push(exe_dir.join("assets"));
            dirs.push(exe_dir);
        }
        dirs.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));
        dirs
    }

    /// 在候选目录中查找提示音文件
    pub fn locate(file_name: &str, dirs: &[PathBuf]) -> Result<PathBuf, AudioError> {
        dirs.iter()
            .map(|dir| dir.join(file_name))
            .find(|path| path.is_file())
            .ok_or_else(|| AudioError::AssetNotFound {
                name: file_name.to_string(),
                searched: dirs.to_vec(),
            })
    }

    fn read_asset(file_name: &str) -> Result<(PathBuf, Vec<u8>), AudioError> {
        let path = Self::locate(file_name, &Self::search_dirs())?;
        let data = std::fs::read(&path)
            .map_err(|source| AudioError::Read { path: path.clone(), source })?;
        Ok((path, data))
    }

    fn try_play(&mut self) -> Result<(), AudioError> {
        let Some(data) = self.data.clone() else {
            debug!("no alert asset loaded, skipping playback");
            return Ok(());
        };

        let Some((_, handle)) = &self.output else {
            debug!("no audio output device, skipping playback");
            return Ok(());
        };

        let sink = Sink::try_new(handle)?;
        sink.append(Decoder::new(Cursor::new(data))?);
        // 播放在 rodio 的混音线程进行，detach 后 sink 放完自行结束
        sink.detach();
        Ok(())
    }
}

impl AlertSink for AlertPlayer {
    fn play(&mut self) {
        if let Err(e) = self.try_play() {
            warn!("failed to play alert: {}", e);
        }
    }
}
