use std::io::{self, Read, Write};
use log::{error, info};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionRequest;
use crate::utils::utils::format_listing_line;

// 轉換執行適配器，連接 CLI 配置與 Facade
pub struct ConversionAdapter {
    facade: Box<dyn ConversionFacadeTrait>,
}

impl ConversionAdapter {
    pub fn new(facade: Box<dyn ConversionFacadeTrait>) -> Self {
        ConversionAdapter { facade }
    }

    /// 依配置執行轉換，JSON 模式由 reader 讀取請求，結果寫入 writer
    pub fn run_with<R: Read, W: Write>(&self, config: &AppConfig, mut reader: R, mut writer: W) -> io::Result<String> {
        if config.json {
            let mut body = String::new();
            reader.read_to_string(&mut body)?;
            let request: ConversionRequest = serde_json::from_str(&body).map_err(|e| {
                error!("無法解析 JSON 請求：{}", e);
                io::Error::new(io::ErrorKind::InvalidData, format!("無效的 JSON 請求: {}", e))
            })?;
            let response = self.facade.convert_request(&request);
            let line = serde_json::to_string(&response)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(writer, "{}", line)?;
            return Ok(line);
        }

        let input = config.input.as_deref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "缺少待轉換的值")
        })?;

        match config.output_type {
            Some(output_type) => {
                let result = self
                    .facade
                    .convert(input, config.input_type.as_str(), output_type.as_str())?;
                writeln!(writer, "{}", result)?;
                Ok(result)
            }
            None => {
                let listing = self.facade.convert_all(input, config.input_type.as_str())?;
                let mut lines = Vec::with_capacity(listing.entries.len());
                for (format, result) in &listing.entries {
                    let line = match result {
                        Ok(value) => format_listing_line(format.as_str(), value),
                        Err(e) => format_listing_line(format.as_str(), &format!("錯誤：{}", e)),
                    };
                    writeln!(writer, "{}", line)?;
                    lines.push(line);
                }
                info!("已輸出 {} 種格式", lines.len());
                Ok(lines.join("\n"))
            }
        }
    }
}

impl Default for ConversionAdapter {
    fn default() -> Self {
        ConversionAdapter::new(Box::new(ConversionFacade::default()))
    }
}

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<String> {
        let stdout = io::stdout();
        self.run_with(&config, io::stdin().lock(), stdout.lock())
    }
}
