use dialoguer::{Confirm, Input, Select};
use std::io;

use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::Format;
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<String> {
    setup_logging("warn")?;
    println!("=== 歡迎使用互動模式 ===");
    let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::default());

    let mut conversions = 0usize;
    loop {
        let input_type = select_format("選擇輸入格式", Format::Decimal)?;
        let input = get_input_value(input_type)?;
        let output_type = select_format("選擇輸出格式", Format::Text)?;

        match facade.convert(&input, input_type.as_str(), output_type.as_str()) {
            Ok(result) => {
                println!("結果：{}", result);
                conversions += 1;
            }
            Err(e) => println!("錯誤：{}", e),
        }

        if !get_continue_option()? {
            break;
        }
    }
    Ok(format!("互動模式完成 {} 次轉換", conversions))
}

pub fn select_format(prompt: &str, default: Format) -> io::Result<Format> {
    let items: Vec<&str> = Format::ALL.iter().map(|f| f.as_str()).collect();
    let default_index = Format::ALL.iter().position(|f| *f == default).unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("格式選擇失敗: {}", e)))?;
    Ok(Format::ALL[index])
}

pub fn get_input_value(format: Format) -> io::Result<String> {
    let example = match format {
        Format::Text => "twenty one",
        Format::Binary => "101010",
        Format::Octal => "52",
        Format::Decimal => "42",
        Format::Hexadecimal => "2a",
        Format::Base64 => "Kg==",
    };
    Input::new()
        .with_prompt(format!("請輸入 {} 值（例如：{}）", format, example))
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_continue_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否繼續轉換其他數值？")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("選項輸入失敗: {}", e)))
}
