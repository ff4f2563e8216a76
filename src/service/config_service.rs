use std::io;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::models::conversion::Format;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：十進位輸入，輸出所有格式
pub struct DefaultConfigAdapter {
    input: String,
}

impl DefaultConfigAdapter {
    pub fn new(input: String) -> Self {
        DefaultConfigAdapter { input }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: Some(self.input.clone()),
            input_type: Format::Decimal,
            output_type: None, // 所有格式
            json: false,
            log_level: "info".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_adapter_lists_every_format_from_decimal() {
        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new("42".to_string())));
        let config = service.get_config().unwrap();
        assert_eq!(config.input.as_deref(), Some("42"));
        assert_eq!(config.input_type, Format::Decimal);
        assert_eq!(config.output_type, None);
        assert!(!config.json);
    }
}
