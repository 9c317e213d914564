//! 出貨模型（後端 /shipping 回傳格式）

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, Searchable};

/// 出貨記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    /// 出貨ID
    pub id: u64,

    /// 對應訂單ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// 物流商
    pub courier: String,

    /// 追蹤單號
    pub tracking: String,

    /// 客戶
    pub customer: String,

    /// 總額
    pub total_price: Decimal,

    /// 狀態（自由文字）
    pub status: String,

    /// 預計送達日
    pub estimated: NaiveDate,
}

impl Shipping {
    /// 解析出貨列表 JSON
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// 是否已超過預計送達日
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        today > self.estimated && !self.status.eq_ignore_ascii_case("delivered")
    }
}

impl Searchable for Shipping {
    fn search_key(&self) -> &str {
        &self.courier
    }
}
