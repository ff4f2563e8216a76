use crate::models::conversion::{ConversionRequest, ConversionResponse, FormatListing};
use crate::models::error::ConversionError;

// Facade 接口，負責協調解析與格式化兩個階段
pub trait ConversionFacadeTrait: Send + Sync {
    /// 將輸入由一種格式轉換為另一種格式
    /// # 參數
    /// - input: 原始輸入字串
    /// - input_format: 輸入格式標籤
    /// - output_format: 輸出格式標籤
    /// # 回傳
    /// - 成功時返回輸出字串，失敗時返回 UnsupportedFormat、InvalidInput 或 FormatFailed
    fn convert(&self, input: &str, input_format: &str, output_format: &str) -> Result<String, ConversionError>;

    /// 處理 JSON 請求，回應中 result 與 error 恰有一個有值
    fn convert_request(&self, request: &ConversionRequest) -> ConversionResponse;

    /// 解析一次後輸出到所有格式
    fn convert_all(&self, input: &str, input_format: &str) -> Result<FormatListing, ConversionError>;
}
