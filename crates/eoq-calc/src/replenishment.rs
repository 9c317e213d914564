//! 補貨建議
//!
//! 以商品現有庫存對照 EOQ 再訂購點，決定是否下單、何時下單與下單數量。

use chrono::{Days, NaiveDate};
use eoq_core::report::round_for_display;
use eoq_core::{EoqError, EoqInput, Product};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::EoqCalculator;

/// 補貨建議
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentAdvice {
    /// 建議ID
    pub id: Uuid,

    /// 料號
    pub sku: String,

    /// 現有庫存
    pub on_hand: Decimal,

    /// 再訂購點（顯示精度），無前置時間時不存在
    pub reorder_point: Option<Decimal>,

    /// 是否應立即下單
    pub should_reorder: bool,

    /// 建議訂購量（EOQ 無條件進位至整數）
    pub suggested_quantity: Decimal,

    /// 距離觸及再訂購點的天數，已觸及時為 0，否則至少為 1
    pub days_until_reorder: Option<u32>,

    /// 建議下單日期
    pub order_date: Option<NaiveDate>,
}

/// 補貨建議計算器
pub struct ReplenishmentAdvisor {
    calculator: EoqCalculator,
}

impl ReplenishmentAdvisor {
    pub fn new(calculator: EoqCalculator) -> Self {
        Self { calculator }
    }

    /// 產生單一商品的補貨建議
    pub fn advise(
        &self,
        product: &Product,
        input: &EoqInput,
        today: NaiveDate,
    ) -> eoq_core::Result<ReplenishmentAdvice> {
        let result = self.calculator.calculate(input)?;
        let config = self.calculator.config();

        let suggested_quantity = Decimal::try_from(result.economic_order_quantity)
            .map_err(|_| {
                EoqError::NonFiniteResult(format!(
                    "EOQ {} 無法轉換為 Decimal",
                    result.economic_order_quantity
                ))
            })?
            .ceil();

        let reorder_point = result
            .reorder_point
            .map(|rop| round_for_display(rop, config.decimal_places))
            .transpose()?;

        // 以回報的再訂購點判斷，使建議內容自洽
        let (should_reorder, days_until_reorder) = match reorder_point {
            Some(rop) if product.stock <= rop => (true, Some(0)),
            Some(rop) => {
                let excess = (product.stock - rop).to_f64().ok_or_else(|| {
                    EoqError::NonFiniteResult(format!("庫存 {} 無法轉換為 f64", product.stock))
                })?;

                let days_to_rop = excess / config.daily_demand(input.annual_demand);
                if !days_to_rop.is_finite() {
                    return Err(EoqError::NonFiniteResult(format!(
                        "日需求量下溢，無法推算下單日 (D={})",
                        input.annual_demand
                    )));
                }

                // 尚未觸及再訂購點時至少 1 天；超出 u32 時飽和
                (false, Some((days_to_rop.floor() as u32).max(1)))
            }
            None => (product.is_out_of_stock(), None),
        };

        let order_date = days_until_reorder
            .map(|days| {
                today.checked_add_days(Days::new(u64::from(days))).ok_or_else(|| {
                    EoqError::NonFiniteResult(format!("{} 加 {} 天超出日期範圍", today, days))
                })
            })
            .transpose()?;

        tracing::debug!(
            "商品 {} 庫存 {}，再訂購點 {:?}，應下單: {}",
            product.sku,
            product.stock,
            reorder_point,
            should_reorder
        );

        Ok(ReplenishmentAdvice {
            id: Uuid::new_v4(),
            sku: product.sku.clone(),
            on_hand: product.stock,
            reorder_point,
            should_reorder,
            suggested_quantity,
            days_until_reorder,
            order_date,
        })
    }

    /// 產生多個商品的補貨計劃
    ///
    /// 單一商品計算失敗不影響其他商品，失敗項目記錄於 `failed`。
    pub fn due_now(&self, products: &[(Product, EoqInput)], today: NaiveDate) -> ReplenishmentPlan {
        let mut plan = ReplenishmentPlan::default();
        for (product, input) in products {
            match self.advise(product, input, today) {
                Ok(advice) if advice.should_reorder => plan.due.push(advice),
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!("商品 {} 補貨建議失敗: {}", product.sku, err);
                    plan.failed.push((product.sku.clone(), err));
                }
            }
        }
        plan
    }
}

/// 補貨計劃
#[derive(Debug, Default)]
pub struct ReplenishmentPlan {
    /// 應立即下單的建議
    pub due: Vec<ReplenishmentAdvice>,

    /// 計算失敗的料號與錯誤
    pub failed: Vec<(String, EoqError)>,
}

impl Default for ReplenishmentAdvisor {
    fn default() -> Self {
        Self::new(EoqCalculator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn product(stock: i64) -> Product {
        Product::new(
            1,
            "Bolt M8".to_string(),
            "BLT-008".to_string(),
            Decimal::new(15, 1),
            Decimal::from(stock),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
    }

    #[test]
    fn test_not_yet_due() {
        // 日需求 10，庫存 300 可撐 30 天，前置時間 10 天 => 20 天後下單
        let input = EoqInput::new(3650.0, 50.0, 2.0).with_lead_time_days(10.0);
        let advice = ReplenishmentAdvisor::default()
            .advise(&product(300), &input, today())
            .unwrap();

        assert!(!advice.should_reorder);
        assert_eq!(advice.reorder_point, Some(Decimal::from(100)));
        assert_eq!(advice.days_until_reorder, Some(20));
        assert_eq!(advice.order_date, NaiveDate::from_ymd_opt(2025, 11, 21));
        // sqrt(2*3650*50/2) = 427.2 => 428
        assert_eq!(advice.suggested_quantity, Decimal::from(428));
    }

    #[rstest]
    #[case(100)]
    #[case(40)]
    #[case(0)]
    #[case(-5)]
    fn test_due_now(#[case] stock: i64) {
        let input = EoqInput::new(3650.0, 50.0, 2.0).with_lead_time_days(10.0);
        let advice = ReplenishmentAdvisor::default()
            .advise(&product(stock), &input, today())
            .unwrap();

        assert!(advice.should_reorder);
        assert_eq!(advice.days_until_reorder, Some(0));
        assert_eq!(advice.order_date, Some(today()));
    }

    #[test]
    fn test_without_lead_time() {
        let input = EoqInput::new(3650.0, 50.0, 2.0);
        let advisor = ReplenishmentAdvisor::default();

        let stocked = advisor.advise(&product(10), &input, today()).unwrap();
        assert!(!stocked.should_reorder);
        assert_eq!(stocked.reorder_point, None);
        assert_eq!(stocked.days_until_reorder, None);
        assert_eq!(stocked.order_date, None);

        let empty = advisor.advise(&product(0), &input, today()).unwrap();
        assert!(empty.should_reorder);
    }

    #[test]
    fn test_invalid_input_propagates() {
        let input = EoqInput::new(3650.0, 50.0, 0.0);
        assert!(ReplenishmentAdvisor::default()
            .advise(&product(10), &input, today())
            .is_err());
    }

    #[test]
    fn test_due_now_filters() {
        let input = EoqInput::new(3650.0, 50.0, 2.0).with_lead_time_days(10.0);
        let products = vec![
            (product(300), input),
            (product(50), input),
        ];

        let plan = ReplenishmentAdvisor::default().due_now(&products, today());
        assert_eq!(plan.due.len(), 1);
        assert_eq!(plan.due[0].on_hand, Decimal::from(50));
        assert!(plan.failed.is_empty());
    }

    #[test]
    fn test_due_now_keeps_going_after_failure() {
        let valid = EoqInput::new(3650.0, 50.0, 2.0).with_lead_time_days(10.0);
        let invalid = EoqInput::new(3650.0, 50.0, 0.0);
        let products = vec![
            (product(50), invalid),
            (product(40), valid),
        ];

        let plan = ReplenishmentAdvisor::default().due_now(&products, today());
        assert_eq!(plan.due.len(), 1);
        assert_eq!(plan.failed.len(), 1);
        assert_eq!(plan.failed[0].0, "BLT-008");
        assert!(plan.failed[0].1.is_validation());
    }

    #[rstest]
    #[case("27.399", true)]
    #[case("27.40", true)]
    #[case("27.41", false)]
    fn test_decision_matches_reported_reorder_point(#[case] stock: &str, #[case] due: bool) {
        // 再訂購點 1000 × 10/365 = 27.397…，回報為 27.40
        let input = EoqInput::new(1000.0, 50.0, 2.0).with_lead_time_days(10.0);
        let mut item = product(0);
        item.stock = Decimal::from_str(stock).unwrap();

        let advice = ReplenishmentAdvisor::default()
            .advise(&item, &input, today())
            .unwrap();

        let rop = advice.reorder_point.unwrap();
        assert_eq!(rop, Decimal::from_str("27.40").unwrap());
        assert_eq!(advice.should_reorder, due);
        assert_eq!(advice.should_reorder, advice.on_hand <= rop);
        if due {
            assert_eq!(advice.days_until_reorder, Some(0));
            assert_eq!(advice.order_date, Some(today()));
        } else {
            // 不足一天的餘裕仍至少延後 1 天
            assert_eq!(advice.days_until_reorder, Some(1));
            assert!(advice.order_date.unwrap() > today());
        }
    }

    #[test]
    fn test_underflowing_daily_demand_is_error() {
        // 最小次正規數 D 除以 365 下溢為 0
        let input = EoqInput::new(5e-324, 1e300, 1.0).with_lead_time_days(10.0);
        let err = ReplenishmentAdvisor::default()
            .advise(&product(10), &input, today())
            .unwrap_err();

        assert!(matches!(err, EoqError::NonFiniteResult(_)));
    }
}
