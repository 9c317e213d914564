//! EOQ 輸入模型

use serde::{Deserialize, Serialize};

use crate::{EoqError, Result};

/// 欄位名稱（錯誤訊息與表單共用）
pub const FIELD_ANNUAL_DEMAND: &str = "annualDemand";
pub const FIELD_ORDERING_COST: &str = "orderingCost";
pub const FIELD_HOLDING_COST: &str = "holdingCost";
pub const FIELD_LEAD_TIME_DAYS: &str = "leadTimeDays";

/// EOQ 計算輸入（單次計算，不持久化）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoqInput {
    /// 年需求量 (D)
    pub annual_demand: f64,

    /// 每次訂購成本 (S)
    pub ordering_cost: f64,

    /// 單位年持有成本 (H)
    pub holding_cost: f64,

    /// 前置時間（天），可選 (L)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time_days: Option<f64>,
}

impl EoqInput {
    /// 創建新的輸入（無前置時間）
    pub fn new(annual_demand: f64, ordering_cost: f64, holding_cost: f64) -> Self {
        Self {
            annual_demand,
            ordering_cost,
            holding_cost,
            lead_time_days: None,
        }
    }

    /// 建構器模式：設置前置時間
    pub fn with_lead_time_days(mut self, days: f64) -> Self {
        self.lead_time_days = Some(days);
        self
    }

    /// 驗證輸入
    ///
    /// D、S、H 必須為大於 0 的有限數值；H 為 0 時拒絕（避免除以零）。
    /// 前置時間若提供則必須為有限數值，≤ 0 視為未提供。
    pub fn validate(&self) -> Result<()> {
        require_positive(FIELD_ANNUAL_DEMAND, self.annual_demand)?;
        require_positive(FIELD_ORDERING_COST, self.ordering_cost)?;
        require_positive(FIELD_HOLDING_COST, self.holding_cost)?;

        if let Some(days) = self.lead_time_days {
            if !days.is_finite() {
                return Err(EoqError::NonFinite {
                    field: FIELD_LEAD_TIME_DAYS,
                });
            }
        }

        Ok(())
    }

    /// 有效前置時間：僅在 L > 0 時返回
    pub fn effective_lead_time(&self) -> Option<f64> {
        self.lead_time_days.filter(|days| *days > 0.0)
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EoqError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(EoqError::NonPositive { field, value });
    }
    Ok(())
}
