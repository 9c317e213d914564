//! EOQ 顯示報表（四捨五入後的結果）

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{EoqError, EoqResult, Result};

/// EOQ 顯示結果
///
/// 只在最終輸出時四捨五入，計算過程中的中間值保持全精度。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoqReport {
    /// 經濟訂購量
    pub economic_order_quantity: Decimal,

    /// 年總成本
    pub total_annual_cost: Decimal,

    /// 再訂購點
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reorder_point: Option<Decimal>,
}

impl EoqReport {
    /// 由全精度結果產生顯示報表
    pub fn from_result(result: &EoqResult, decimal_places: u32) -> Result<Self> {
        Ok(Self {
            economic_order_quantity: round_for_display(
                result.economic_order_quantity,
                decimal_places,
            )?,
            total_annual_cost: round_for_display(result.total_annual_cost, decimal_places)?,
            reorder_point: result
                .reorder_point
                .map(|rop| round_for_display(rop, decimal_places))
                .transpose()?,
        })
    }
}

/// 四捨五入（中間值遠離零），對應 toFixed 的顯示習慣
pub fn round_for_display(value: f64, decimal_places: u32) -> Result<Decimal> {
    let decimal = Decimal::try_from(value)
        .map_err(|_| EoqError::NonFiniteResult(format!("{} 無法轉換為 Decimal", value)))?;
    Ok(decimal.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_round_two_places() {
        assert_eq!(
            round_for_display(223.606797749979, 2).unwrap(),
            Decimal::from_str("223.61").unwrap()
        );
        assert_eq!(round_for_display(100.0, 2).unwrap(), Decimal::from(100));
    }

    #[test]
    fn test_round_rejects_non_finite() {
        assert!(round_for_display(f64::INFINITY, 2).is_err());
        assert!(round_for_display(f64::NAN, 2).is_err());
    }

    #[test]
    fn test_report_from_result() {
        let result = EoqResult {
            economic_order_quantity: 223.606797749979,
            annual_ordering_cost: 223.606797749979,
            annual_holding_cost: 223.606797749979,
            total_annual_cost: 447.213595499958,
            reorder_point: Some(27.397260273972602),
        };

        let report = EoqReport::from_result(&result, 2).unwrap();
        assert_eq!(report.economic_order_quantity, Decimal::from_str("223.61").unwrap());
        assert_eq!(report.total_annual_cost, Decimal::from_str("447.21").unwrap());
        assert_eq!(report.reorder_point, Some(Decimal::from_str("27.40").unwrap()));
    }
}
