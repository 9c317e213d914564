//! EOQ 計算結果模型

use serde::{Deserialize, Serialize};

/// EOQ 計算結果（全精度，每次計算重新產生）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoqResult {
    /// 經濟訂購量 Q* = sqrt(2DS/H)
    pub economic_order_quantity: f64,

    /// 年訂購成本 (D/Q*)·S
    pub annual_ordering_cost: f64,

    /// 年持有成本 (Q*/2)·H
    pub annual_holding_cost: f64,

    /// 年總成本 = 年訂購成本 + 年持有成本
    pub total_annual_cost: f64,

    /// 再訂購點 D·(L/365)，僅在前置時間 > 0 時存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reorder_point: Option<f64>,
}

impl EoqResult {
    /// 每年訂購次數 D/Q*
    pub fn orders_per_year(&self, annual_demand: f64) -> f64 {
        annual_demand / self.economic_order_quantity
    }

    /// 訂購週期（天）
    pub fn cycle_days(&self, annual_demand: f64, days_per_year: u32) -> f64 {
        f64::from(days_per_year) / self.orders_per_year(annual_demand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EoqResult {
        EoqResult {
            economic_order_quantity: 200.0,
            annual_ordering_cost: 250.0,
            annual_holding_cost: 250.0,
            total_annual_cost: 500.0,
            reorder_point: None,
        }
    }

    #[test]
    fn test_orders_per_year() {
        let result = sample();
        assert_eq!(result.orders_per_year(1000.0), 5.0);
        assert_eq!(result.cycle_days(1000.0, 365), 73.0);
    }

    #[test]
    fn test_reorder_point_omitted_in_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("reorderPoint").is_none());
        assert_eq!(json["economicOrderQuantity"], 200.0);
    }
}
