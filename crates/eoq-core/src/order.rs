//! 訂單模型（後端 /orders 回傳格式）

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, Searchable};

/// 訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    /// 後端回傳未知狀態
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// 是否仍在處理中（未完成且未取消）
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped
        )
    }
}

/// 訂單記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// 訂單ID
    pub id: u64,

    /// 訂單日期
    pub date: NaiveDate,

    /// 商品名稱
    pub product: String,

    /// 客戶
    pub customer: String,

    /// 訂單總額
    pub total_price: Decimal,

    /// 狀態
    pub status: OrderStatus,
}

impl Order {
    /// 解析訂單列表 JSON
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Searchable for Order {
    fn search_key(&self) -> &str {
        &self.product
    }
}
