use base64::{engine::general_purpose, Engine};
use log::{debug, warn};
use num_bigint::BigUint;
use crate::models::conversion::Format;
use crate::models::error::ConversionError;
use crate::service::text::parse_text;
use crate::service::traits::i_service::ParseServiceTrait;

/// Parse 服務，將六種格式的字串轉為非負整數並實現 ParseServiceTrait
pub struct ParseService;

impl ParseService {
    /// 創建新的 ParseService 實例
    pub fn new() -> Self {
        ParseService
    }
}

impl Default for ParseService {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseServiceTrait for ParseService {
    fn parse(&self, input: &str, format: Format) -> Result<BigUint, ConversionError> {
        let parsed = match format {
            Format::Text => parse_text(input),
            Format::Base64 => parse_base64(input),
            Format::Binary | Format::Octal | Format::Decimal | Format::Hexadecimal => {
                // radix() 對位置記數法一定有值
                format.radix().and_then(|radix| parse_radix(input, radix))
            }
        };
        match parsed {
            Some(value) => {
                debug!("解析 {} 輸入 '{}' 得到 {}", format, input, value);
                Ok(value)
            }
            None => {
                warn!("無效的 {} 輸入：'{}'", format, input);
                Err(ConversionError::invalid(format, input))
            }
        }
    }
}

/// 只接受該基數的數字字元，不接受正負號、前綴、空白或底線
pub fn parse_radix(input: &str, radix: u32) -> Option<BigUint> {
    if input.is_empty() || !input.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::parse_bytes(input.as_bytes(), radix)
}

/// 標準 base64 解碼後以小端序讀取為整數
pub fn parse_base64(input: &str) -> Option<BigUint> {
    let bytes = general_purpose::STANDARD.decode(input).ok()?;
    if bytes.is_empty() {
        return None;
    }
    Some(BigUint::from_bytes_le(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str, format: Format) -> Result<BigUint, ConversionError> {
        ParseService::new().parse(input, format)
    }

    fn is_invalid(input: &str, format: Format) -> bool {
        matches!(parse(input, format), Err(ConversionError::InvalidInput { .. }))
    }

    #[test]
    fn parses_positional_notations() {
        assert_eq!(parse("101010", Format::Binary), Ok(BigUint::from(42u32)));
        assert_eq!(parse("777", Format::Octal), Ok(BigUint::from(511u32)));
        assert_eq!(parse("0042", Format::Decimal), Ok(BigUint::from(42u32)));
        assert_eq!(parse("fF", Format::Hexadecimal), Ok(BigUint::from(255u32)));
        assert_eq!(parse("0", Format::Binary), Ok(BigUint::from(0u32)));
    }

    #[test]
    fn parses_values_wider_than_u128() {
        let hex = "1".to_string() + &"0".repeat(40);
        let value = parse(&hex, Format::Hexadecimal).unwrap();
        assert_eq!(value.bits(), 161);
    }

    #[test]
    fn rejects_malformed_positional_input() {
        assert!(is_invalid("102", Format::Binary));
        assert!(is_invalid("0b101", Format::Binary));
        assert!(is_invalid(" 101", Format::Binary));
        assert!(is_invalid("89", Format::Octal));
        assert!(is_invalid("-1", Format::Decimal));
        assert!(is_invalid("+1", Format::Decimal));
        assert!(is_invalid("1_000", Format::Decimal));
        assert!(is_invalid("", Format::Decimal));
        assert!(is_invalid("gg", Format::Hexadecimal));
        assert!(is_invalid("0xff", Format::Hexadecimal));
    }

    #[test]
    fn base64_is_little_endian() {
        assert_eq!(parse("AAE=", Format::Base64), Ok(BigUint::from(256u32)));
        assert_eq!(parse("AQA=", Format::Base64), Ok(BigUint::from(1u32)));
        assert_eq!(parse("KgA=", Format::Base64), Ok(BigUint::from(42u32)));
        assert_eq!(parse("/w==", Format::Base64), Ok(BigUint::from(255u32)));
    }

    #[test]
    fn base64_single_zero_byte_is_zero() {
        assert_eq!(parse("AA==", Format::Base64), Ok(BigUint::from(0u32)));
    }

    #[test]
    fn rejects_malformed_base64() {
        assert!(is_invalid("invalid!", Format::Base64));
        assert!(is_invalid("not_base64", Format::Base64));
        assert!(is_invalid("!!!", Format::Base64));
        assert!(is_invalid("AA", Format::Base64));
        assert!(is_invalid("", Format::Base64));
    }

    #[test]
    fn text_goes_through_word_parser() {
        assert_eq!(parse("five", Format::Text), Ok(BigUint::from(5u32)));
        assert!(is_invalid("apple", Format::Text));
    }
}
