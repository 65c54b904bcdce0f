//! 时间显示格式与自定义时间解析

use crate::error::ParseTimeError;

/// 倒计时结束时显示的文本
pub const FINISHED_TEXT: &str = "Over!";

/// 秒数格式化为 `MM:SS`
///
/// 分钟不做上限截断（`3661` -> `61:01`）。负数按向下取整的除法处理，
/// 例如 `-300` -> `-5:00`。
pub fn format_time(seconds: i64) -> String {
    let mins = seconds.div_euclid(60);
    let secs = seconds.rem_euclid(60);
    format!("{:02}:{:02}", mins, secs)
}

/// 解析 `minutes:seconds`
///
/// 两个字段都必须是整数（允许首尾空白和正负号），不做范围检查：
/// `"0:75"`、`"-5:00"` 都按字面换算成秒数。
pub fn parse_custom_time(text: &str) -> Result<i64, ParseTimeError> {
    let text = text.trim();
    if !text.contains(':') {
        return Err(ParseTimeError::MissingSeparator(text.to_string()));
    }

    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != 2 {
        return Err(ParseTimeError::FieldCount(fields.len()));
    }

    let minutes = parse_field(fields[0], "minutes")?;
    let seconds = parse_field(fields[1], "seconds")?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or(ParseTimeError::Overflow)
}

fn parse_field(token: &str, field: &'static str) -> Result<i64, ParseTimeError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|source| ParseTimeError::InvalidNumber { field, source })
}
