//! EOQ 計算配置

use serde::{Deserialize, Serialize};

use crate::{EoqError, Result};

/// 一年天數（再訂購點預設換算基準）
pub const DEFAULT_DAYS_PER_YEAR: u32 = 365;

/// 顯示用小數位數
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// rust_decimal 可表示的最大小數位數
const MAX_DECIMAL_PLACES: u32 = 28;

/// EOQ 計算參數配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoqConfig {
    /// 一年天數（年需求量換算為日需求量）
    pub days_per_year: u32,

    /// 顯示結果的小數位數
    pub decimal_places: u32,
}

impl EoqConfig {
    /// 創建預設配置（365 天、2 位小數）
    pub fn new() -> Self {
        Self {
            days_per_year: DEFAULT_DAYS_PER_YEAR,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }

    /// 建構器模式：設置一年天數
    pub fn with_days_per_year(mut self, days: u32) -> Self {
        self.days_per_year = days;
        self
    }

    /// 建構器模式：設置小數位數
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.days_per_year == 0 {
            return Err(EoqError::InvalidConfig("days_per_year 不可為 0".to_string()));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(EoqError::InvalidConfig(format!(
                "decimal_places 最大為 {}，實際為 {}",
                MAX_DECIMAL_PLACES, self.decimal_places
            )));
        }
        Ok(())
    }

    /// 日需求量
    pub fn daily_demand(&self, annual_demand: f64) -> f64 {
        annual_demand / f64::from(self.days_per_year)
    }
}

impl Default for EoqConfig {
    fn default() -> Self {
        Self::new()
    }
}
