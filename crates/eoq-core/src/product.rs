//! 商品模型（後端 /products 回傳格式）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, Searchable};

/// 商品記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 商品ID
    pub id: u64,

    /// 商品名稱
    #[serde(rename = "product")]
    pub name: String,

    /// 料號
    pub sku: String,

    /// 儲位
    #[serde(default)]
    pub location: String,

    /// 單價
    pub price: Decimal,

    /// 現有庫存
    pub stock: Decimal,
}

impl Product {
    /// 創建新的商品記錄
    pub fn new(id: u64, name: String, sku: String, price: Decimal, stock: Decimal) -> Self {
        Self {
            id,
            name,
            sku,
            location: String::new(),
            price,
            stock,
        }
    }

    /// 建構器模式：設置儲位
    pub fn with_location(mut self, location: String) -> Self {
        self.location = location;
        self
    }

    /// 解析單筆商品 JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 解析商品列表 JSON
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// 庫存金額（單價 × 庫存）
    pub fn stock_value(&self) -> Decimal {
        self.price * self.stock
    }

    /// 是否缺貨
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= Decimal::ZERO
    }
}

impl Searchable for Product {
    fn search_key(&self) -> &str {
        &self.name
    }
}
