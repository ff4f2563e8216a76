use base64::{engine::general_purpose, Engine};
use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::Zero;
use crate::models::conversion::Format;
use crate::models::error::ConversionError;
use crate::service::text::{number_to_words, text_limit};
use crate::service::traits::i_service::FormatServiceTrait;

/// Format 服務，將整數輸出為六種格式並實現 FormatServiceTrait
pub struct FormatService;

impl FormatService {
    /// 創建新的 FormatService 實例
    pub fn new() -> Self {
        FormatService
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatServiceTrait for FormatService {
    fn format(&self, value: &BigUint, format: Format) -> Result<String, ConversionError> {
        let output = match format {
            Format::Text => number_to_words(value).ok_or_else(|| {
                warn!("數值過大，無法以英文輸出：{} 位元", value.bits());
                ConversionError::FormatFailed {
                    format,
                    reason: format!("數值必須小於 {}", text_limit()),
                }
            })?,
            Format::Base64 => format_base64(value),
            Format::Binary | Format::Octal | Format::Decimal | Format::Hexadecimal => {
                let radix = format.radix().ok_or_else(|| ConversionError::FormatFailed {
                    format,
                    reason: "缺少基數".to_string(),
                })?;
                value.to_str_radix(radix)
            }
        };
        debug!("輸出 {} 為 {}：'{}'", value, format, output);
        Ok(output)
    }
}

/// 以最短小端序位元組編碼，0 編為單一 0x00 位元組
///
/// 不會輸出多餘的尾端 0x00，因此 42 編為 "Kg=="；解碼端仍接受 "KgA="。
pub fn format_base64(value: &BigUint) -> String {
    let bytes = if value.is_zero() {
        vec![0u8]
    } else {
        value.to_bytes_le()
    };
    general_purpose::STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(n: u64, format: Format) -> String {
        FormatService::new().format(&BigUint::from(n), format).unwrap()
    }

    #[test]
    fn positional_output_has_no_prefix_or_padding() {
        assert_eq!(format(42, Format::Binary), "101010");
        assert_eq!(format(64, Format::Octal), "100");
        assert_eq!(format(255, Format::Hexadecimal), "ff");
        assert_eq!(format(1_000_000, Format::Decimal), "1000000");
        for f in [Format::Binary, Format::Octal, Format::Decimal, Format::Hexadecimal] {
            assert_eq!(format(0, f), "0");
        }
    }

    #[test]
    fn base64_uses_minimal_little_endian_bytes() {
        assert_eq!(format(0, Format::Base64), "AA==");
        assert_eq!(format(1, Format::Base64), "AQ==");
        assert_eq!(format(42, Format::Base64), "Kg==");
        assert_eq!(format(256, Format::Base64), "AAE=");
        assert_eq!(format(65535, Format::Base64), "//8=");
    }

    #[test]
    fn zero_encodes_to_one_zero_byte() {
        let encoded = format(0, Format::Base64);
        let bytes = general_purpose::STANDARD.decode(encoded).unwrap();
        assert_eq!(bytes, vec![0u8]);
    }

    #[test]
    fn text_output_uses_english_words() {
        assert_eq!(format(0, Format::Text), "zero");
        assert_eq!(format(5, Format::Text), "five");
        assert_eq!(format(123, Format::Text), "one hundred and twenty-three");
    }

    #[test]
    fn text_output_fails_beyond_largest_scale() {
        let result = FormatService::new().format(&text_limit(), Format::Text);
        assert!(matches!(
            result,
            Err(ConversionError::FormatFailed { format: Format::Text, .. })
        ));
    }
}
