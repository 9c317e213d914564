//! # EOQ
//!
//! 經濟訂購量（Economic Order Quantity）計算引擎
//!
//! - [`eoq_core`]：輸入、結果、配置、商品/訂單/出貨等資料模型
//! - [`eoq_calc`]：EOQ 計算、表單解析、批量計算、補貨建議

pub use eoq_calc::{
    BatchCalculator, BatchEntry, BatchSummary, CommaGroupingParser, DotGroupingParser,
    EoqCalculator, EoqForm, NumberParser, ReplenishmentAdvice, ReplenishmentAdvisor,
    ReplenishmentPlan,
};
pub use eoq_core::{
    filter_by_search, EoqConfig, EoqError, EoqInput, EoqReport, EoqResult, Order, OrderStatus,
    Product, Result, Searchable, Shipping,
};

/// 解析表單文字並計算顯示報表（預設點號千分位格式）
pub fn calculate_form(calculator: &EoqCalculator, form: &EoqForm) -> Result<EoqReport> {
    let input = form.to_input(&DotGroupingParser)?;
    tracing::debug!("表單解析完成: {:?}", input);
    calculator.report(&input)
}
