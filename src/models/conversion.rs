use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::models::error::ConversionError;

/// 六種數字表示法，輸入與輸出共用同一組標籤
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Format {
    Text,
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Base64,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::Text,
        Format::Binary,
        Format::Octal,
        Format::Decimal,
        Format::Hexadecimal,
        Format::Base64,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Binary => "binary",
            Format::Octal => "octal",
            Format::Decimal => "decimal",
            Format::Hexadecimal => "hexadecimal",
            Format::Base64 => "base64",
        }
    }

    /// 位置記數法的基數，text 與 base64 沒有
    pub fn radix(&self) -> Option<u32> {
        match self {
            Format::Binary => Some(2),
            Format::Octal => Some(8),
            Format::Decimal => Some(10),
            Format::Hexadecimal => Some(16),
            Format::Text | Format::Base64 => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ConversionError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == tag)
            .ok_or_else(|| ConversionError::unsupported(tag))
    }
}

// JSON 請求，欄位名稱沿用網頁表單的 camelCase
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub input: String,
    #[serde(rename = "inputType")]
    pub input_type: String,
    #[serde(rename = "outputType")]
    pub output_type: String,
}

// JSON 回應，result 與 error 恰有一個有值
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    result: Option<String>,
    error: Option<String>,
}

impl ConversionResponse {
    pub fn success(result: String) -> Self {
        ConversionResponse { result: Some(result), error: None }
    }

    pub fn failure(error: &ConversionError) -> Self {
        ConversionResponse { result: None, error: Some(error.to_string()) }
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<Result<String, ConversionError>> for ConversionResponse {
    fn from(outcome: Result<String, ConversionError>) -> Self {
        match outcome {
            Ok(result) => ConversionResponse::success(result),
            Err(e) => ConversionResponse::failure(&e),
        }
    }
}

/// 一次解析後輸出到所有格式的結果，依 Format::ALL 的順序排列
#[derive(Debug)]
pub struct FormatListing {
    pub entries: Vec<(Format, Result<String, ConversionError>)>,
}
