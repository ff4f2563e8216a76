use std::io;
use thiserror::Error;
use crate::models::conversion::Format;

/// 轉換引擎的錯誤種類
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConversionError {
    /// 輸入或輸出格式不是六種已知格式之一
    #[error("不支援的格式：'{tag}'")]
    UnsupportedFormat { tag: String },

    /// 輸入字串不符合其宣告格式的語法
    #[error("無效的 {format} 輸入：'{input}'")]
    InvalidInput { format: Format, input: String },

    /// 格式化階段無法輸出此數值
    #[error("無法轉換為 {format}：{reason}")]
    FormatFailed { format: Format, reason: String },
}

impl ConversionError {
    pub fn unsupported(tag: &str) -> Self {
        ConversionError::UnsupportedFormat { tag: tag.to_string() }
    }

    pub fn invalid(format: Format, input: &str) -> Self {
        ConversionError::InvalidInput { format, input: input.to_string() }
    }
}

impl From<ConversionError> for io::Error {
    fn from(e: ConversionError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e)
    }
}
