use std::io;
use crate::models::conversion::Format;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 待轉換的值，JSON 模式下由 stdin 讀取故為 None
    pub input: Option<String>,
    pub input_type: Format,
    /// None 表示輸出所有格式
    pub output_type: Option<Format>,
    pub json: bool,
    pub log_level: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<String>;
}
