use log::{debug, info};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionRequest, ConversionResponse, Format, FormatListing};
use crate::models::error::ConversionError;
use crate::service::format::FormatService;
use crate::service::parse::ParseService;
use crate::service::traits::i_service::{FormatServiceTrait, ParseServiceTrait};

/// 以預設服務執行單次轉換
pub fn convert(input: &str, input_format: &str, output_format: &str) -> Result<String, ConversionError> {
    ConversionFacade::default().convert(input, input_format, output_format)
}

pub struct ConversionFacade {
    parse_service: Box<dyn ParseServiceTrait>,
    format_service: Box<dyn FormatServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        parse_service: Box<dyn ParseServiceTrait>,
        format_service: Box<dyn FormatServiceTrait>,
    ) -> Self {
        ConversionFacade {
            parse_service,
            format_service,
        }
    }
}

impl Default for ConversionFacade {
    fn default() -> Self {
        ConversionFacade::new(Box::new(ParseService::new()), Box::new(FormatService::new()))
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn convert(&self, input: &str, input_format: &str, output_format: &str) -> Result<String, ConversionError> {
        // 輸入格式先於解析檢查，輸出格式在解析後才檢查
        let input_format: Format = input_format.parse()?;
        let value = self.parse_service.parse(input, input_format)?;
        let output_format: Format = output_format.parse()?;
        let output = self.format_service.format(&value, output_format)?;
        info!("轉換完成：{} '{}' -> {} '{}'", input_format, input, output_format, output);
        Ok(output)
    }

    fn convert_request(&self, request: &ConversionRequest) -> ConversionResponse {
        debug!("收到轉換請求：{:?}", request);
        self.convert(&request.input, &request.input_type, &request.output_type).into()
    }

    fn convert_all(&self, input: &str, input_format: &str) -> Result<FormatListing, ConversionError> {
        let input_format: Format = input_format.parse()?;
        let value = self.parse_service.parse(input, input_format)?;
        let entries = Format::ALL
            .iter()
            .map(|&format| (format, self.format_service.format(&value, format)))
            .collect();
        info!("已將 {} '{}' 輸出為所有格式", input_format, input);
        Ok(FormatListing { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn unknown_input_tag_is_reported_before_parsing() {
        // 輸入本身也無效，但格式錯誤優先
        let err = convert("zz", "roman", "decimal").unwrap_err();
        assert_eq!(err, ConversionError::unsupported("roman"));
    }

    #[test]
    fn invalid_input_is_reported_before_unknown_output_tag() {
        let err = convert("102", "binary", "roman").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { format: Format::Binary, .. }));
    }

    #[test]
    fn unknown_output_tag() {
        let err = convert("5", "decimal", "unknown").unwrap_err();
        assert_eq!(err, ConversionError::unsupported("unknown"));
    }

    struct FailingFormatter;

    impl FormatServiceTrait for FailingFormatter {
        fn format(&self, _value: &BigUint, format: Format) -> Result<String, ConversionError> {
            Err(ConversionError::FormatFailed { format, reason: "test".to_string() })
        }
    }

    #[test]
    fn format_failure_is_propagated_verbatim() {
        let facade = ConversionFacade::new(Box::new(ParseService::new()), Box::new(FailingFormatter));
        let err = facade.convert("5", "decimal", "text").unwrap_err();
        assert_eq!(err, ConversionError::FormatFailed { format: Format::Text, reason: "test".to_string() });
    }

    #[test]
    fn listing_keeps_failures_in_their_slot() {
        let facade = ConversionFacade::new(Box::new(ParseService::new()), Box::new(FailingFormatter));
        let listing = facade.convert_all("5", "decimal").unwrap();
        assert_eq!(listing.entries.len(), 6);
        assert!(listing.entries.iter().all(|(_, result)| result.is_err()));
    }
}
