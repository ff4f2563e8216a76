use std::io;
use clap::Parser;
use crate::config::config::{validate_cli_args, Cli};
use crate::action::interactive::process_interactive_mode;
use crate::utils::utils::setup_logging;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::models::conversion::Format;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;

pub fn process_args(args: Vec<String>) -> io::Result<String> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<String> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref().unwrap_or("info"))?;
    validate_cli_args(&cli)?;

    // 僅提供 INPUT 時使用預設配置
    let is_default_config = cli.from.is_none() && cli.to.is_none() && !cli.json;

    let config_port: Box<dyn ConfigPort> = match (&cli.input, is_default_config) {
        (Some(input), true) => {
            log::info!("未提供格式參數，使用預設配置：十進位輸入，輸出所有格式");
            Box::new(DefaultConfigAdapter::new(input.clone()))
        }
        _ => Box::new(CliConfigAdapter::new(cli.clone())),
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter::default());
    let output = conversion_port.execute(config.clone())?;

    // 若啟用 --show-config，在轉換後顯示配置
    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    Ok(output)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_cli_args(&self.cli)?;
        Ok(AppConfig {
            input: self.cli.input.clone(),
            input_type: self.cli.from.unwrap_or(Format::Decimal),
            output_type: self.cli.to,
            json: self.cli.json,
            log_level: self.cli.log_level.clone().unwrap_or("info".to_string()),
        })
    }
}
