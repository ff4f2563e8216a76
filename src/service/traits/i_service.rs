use num_bigint::BigUint;
use crate::models::conversion::Format;
use crate::models::error::ConversionError;

// Parse 服務接口，負責將各格式字串轉為整數
pub trait ParseServiceTrait: Send + Sync {
    /// 依宣告的輸入格式解析字串
    /// # 參數
    /// - input: 原始輸入字串
    /// - format: 輸入格式
    /// # 回傳
    /// - 成功時返回非負整數，失敗時返回 InvalidInput
    fn parse(&self, input: &str, format: Format) -> Result<BigUint, ConversionError>;
}

// Format 服務接口，負責將整數輸出為各格式字串
pub trait FormatServiceTrait: Send + Sync {
    /// 依宣告的輸出格式輸出整數
    /// # 參數
    /// - value: 解析後的整數
    /// - format: 輸出格式
    /// # 回傳
    /// - 成功時返回格式化字串，無法輸出時返回 FormatFailed
    fn format(&self, value: &BigUint, format: Format) -> Result<String, ConversionError>;
}
