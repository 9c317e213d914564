//! # EOQ Core
//!
//! 經濟訂購量（EOQ）核心資料模型與類型定義

pub mod config;
pub mod input;
pub mod order;
pub mod product;
pub mod report;
pub mod result;
pub mod search;
pub mod shipping;

// Re-export 主要類型
pub use config::EoqConfig;
pub use input::EoqInput;
pub use order::{Order, OrderStatus};
pub use product::Product;
pub use report::EoqReport;
pub use result::EoqResult;
pub use search::{filter_by_search, Searchable};
pub use shipping::Shipping;

/// EOQ 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum EoqError {
    #[error("缺少必填欄位: {0}")]
    MissingField(&'static str),

    #[error("無法解析數值: {field} = {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} 必須大於 0，實際為 {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} 不是有限數值")]
    NonFinite { field: &'static str },

    #[error("無效的訂購量: {0}")]
    InvalidOrderQuantity(f64),

    #[error("計算結果溢位: {0}")]
    NonFiniteResult(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

impl EoqError {
    /// 是否為輸入驗證類錯誤（可由使用者修正輸入）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EoqError::MissingField(_)
                | EoqError::InvalidNumber { .. }
                | EoqError::NonPositive { .. }
                | EoqError::NonFinite { .. }
                | EoqError::InvalidOrderQuantity(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EoqError>;
