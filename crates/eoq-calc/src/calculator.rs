//! EOQ 主計算器

use eoq_core::{EoqConfig, EoqError, EoqInput, EoqReport, EoqResult};

/// EOQ 計算器
///
/// 無狀態純計算：相同輸入永遠得到相同輸出，可跨執行緒共用。
#[derive(Debug, Clone, Default)]
pub struct EoqCalculator {
    config: EoqConfig,
}

impl EoqCalculator {
    /// 創建新的計算器
    pub fn new(config: EoqConfig) -> eoq_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 取得配置
    pub fn config(&self) -> &EoqConfig {
        &self.config
    }

    /// 主 EOQ 計算入口
    ///
    /// 1. Q* = sqrt(2DS/H)
    /// 2. 年總成本 = (D/Q*)·S + (Q*/2)·H
    /// 3. 前置時間 > 0 時，再訂購點 = D·(L/365)
    pub fn calculate(&self, input: &EoqInput) -> eoq_core::Result<EoqResult> {
        input.validate()?;

        let d = input.annual_demand;
        let s = input.ordering_cost;
        let h = input.holding_cost;

        let quantity = ((2.0 * d * s) / h).sqrt();
        ensure_finite("economicOrderQuantity", quantity)?;
        if quantity <= 0.0 {
            // D·S 下溢為 0
            return Err(EoqError::NonFiniteResult(
                "economicOrderQuantity 下溢為 0".to_string(),
            ));
        }

        let annual_ordering_cost = (d / quantity) * s;
        let annual_holding_cost = (quantity / 2.0) * h;
        let total_annual_cost = annual_ordering_cost + annual_holding_cost;
        ensure_finite("totalAnnualCost", total_annual_cost)?;

        let reorder_point = match input.effective_lead_time() {
            Some(lead_time) => {
                let rop = d * (lead_time / f64::from(self.config.days_per_year));
                ensure_finite("reorderPoint", rop)?;
                Some(rop)
            }
            None => None,
        };

        tracing::debug!(
            "EOQ 計算：D={} S={} H={} => Q*={:.4} 年總成本={:.4} 再訂購點={:?}",
            d,
            s,
            h,
            quantity,
            total_annual_cost,
            reorder_point
        );

        Ok(EoqResult {
            economic_order_quantity: quantity,
            annual_ordering_cost,
            annual_holding_cost,
            total_annual_cost,
            reorder_point,
        })
    }

    /// 任意訂購量下的年總成本 (D/Q)·S + (Q/2)·H
    pub fn annual_cost_at(&self, input: &EoqInput, quantity: f64) -> eoq_core::Result<f64> {
        input.validate()?;
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(EoqError::InvalidOrderQuantity(quantity));
        }

        let cost = (input.annual_demand / quantity) * input.ordering_cost
            + (quantity / 2.0) * input.holding_cost;
        ensure_finite("totalAnnualCost", cost)?;
        Ok(cost)
    }

    /// 計算並四捨五入為顯示報表
    pub fn report(&self, input: &EoqInput) -> eoq_core::Result<EoqReport> {
        let result = self.calculate(input)?;
        EoqReport::from_result(&result, self.config.decimal_places)
    }
}

fn ensure_finite(name: &str, value: f64) -> eoq_core::Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EoqError::NonFiniteResult(format!("{} = {}", name, value)))
    }
}
