use clap::Parser;
use std::io;
use crate::models::conversion::Format;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "radix_convert",
    about = "在英文、二進位、八進位、十進位、十六進位與 base64 之間轉換數值",
    long_about = "將非負整數在六種表示法之間轉換：text、binary、octal、decimal、hexadecimal、base64。\n未指定 --to 時輸出所有格式；使用 --json 從 stdin 讀取 {\"input\",\"inputType\",\"outputType\"} 請求並輸出 {\"result\",\"error\"} 回應。\n不帶任何參數執行時進入互動模式。"
)]
pub struct Cli {
    /// 待轉換的值
    pub input: Option<String>,
    #[arg(short, long)]
    pub from: Option<Format>,
    #[arg(short, long)]
    pub to: Option<Format>,
    #[arg(long, default_value_t = false)]
    pub json: bool,
    #[arg(long, value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: Option<String>,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

pub fn validate_cli_args(cli: &Cli) -> io::Result<()> {
    if cli.json {
        if cli.input.is_some() || cli.from.is_some() || cli.to.is_some() {
            log::error!("JSON 模式不接受 INPUT、--from 或 --to");
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "JSON 模式下請由 stdin 提供請求，不可同時指定 INPUT、--from 或 --to",
            ));
        }
        return Ok(());
    }
    if cli.input.is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "缺少待轉換的值，請提供 INPUT 或使用 --json",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats_by_tag() {
        let cli = Cli::try_parse_from(["radix_convert", "ff", "--from", "hexadecimal", "-t", "base64"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some("ff"));
        assert_eq!(cli.from, Some(Format::Hexadecimal));
        assert_eq!(cli.to, Some(Format::Base64));
        assert!(validate_cli_args(&cli).is_ok());
    }

    #[test]
    fn rejects_unknown_format_tag() {
        assert!(Cli::try_parse_from(["radix_convert", "5", "--from", "roman"]).is_err());
    }

    #[test]
    fn json_mode_takes_no_positional_input() {
        let cli = Cli::try_parse_from(["radix_convert", "--json"]).unwrap();
        assert!(validate_cli_args(&cli).is_ok());

        let cli = Cli::try_parse_from(["radix_convert", "--json", "5"]).unwrap();
        assert!(validate_cli_args(&cli).is_err());
    }

    #[test]
    fn plain_mode_requires_input() {
        let cli = Cli::try_parse_from(["radix_convert", "--to", "binary"]).unwrap();
        assert!(validate_cli_args(&cli).is_err());
    }
}
