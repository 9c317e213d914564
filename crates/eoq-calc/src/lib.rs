//! # EOQ Calculation Engine
//!
//! 經濟訂購量計算引擎

pub mod batch;
pub mod calculator;
pub mod parsing;
pub mod replenishment;

// Re-export 主要類型
pub use batch::{BatchCalculator, BatchEntry, BatchSummary};
pub use calculator::EoqCalculator;
pub use parsing::{CommaGroupingParser, DotGroupingParser, EoqForm, NumberParser};
pub use replenishment::{ReplenishmentAdvice, ReplenishmentAdvisor, ReplenishmentPlan};
