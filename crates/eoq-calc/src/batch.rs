//! 批量 EOQ 計算（多商品並行）

use eoq_core::{EoqInput, EoqResult};
use rayon::prelude::*;

use crate::EoqCalculator;

/// 單筆批量計算結果
#[derive(Debug)]
pub struct BatchEntry {
    /// 商品/料號識別
    pub key: String,

    /// 計算結果（單筆失敗不影響其他筆）
    pub outcome: eoq_core::Result<EoqResult>,
}

/// 批量計算摘要
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,

    /// 成功筆數的年總成本合計
    pub total_annual_cost: f64,
}

/// 批量計算器
pub struct BatchCalculator {
    calculator: EoqCalculator,
}

impl BatchCalculator {
    pub fn new(calculator: EoqCalculator) -> Self {
        Self { calculator }
    }

    /// 並行計算所有項目，結果順序與輸入一致
    pub fn calculate_all(&self, items: &[(String, EoqInput)]) -> Vec<BatchEntry> {
        tracing::info!("開始批量 EOQ 計算：{} 筆", items.len());
        let start_time = std::time::Instant::now();

        let entries: Vec<BatchEntry> = items
            .par_iter()
            .map(|(key, input)| {
                let outcome = self.calculator.calculate(input);
                if let Err(err) = &outcome {
                    tracing::warn!("{} 計算失敗: {}", key, err);
                }
                BatchEntry {
                    key: key.clone(),
                    outcome,
                }
            })
            .collect();

        tracing::info!("批量 EOQ 計算完成，耗時 {:?}", start_time.elapsed());
        entries
    }

    /// 彙總批量結果
    pub fn summarize(entries: &[BatchEntry]) -> BatchSummary {
        entries
            .iter()
            .fold(BatchSummary::default(), |mut summary, entry| {
                match &entry.outcome {
                    Ok(result) => {
                        summary.succeeded += 1;
                        summary.total_annual_cost += result.total_annual_cost;
                    }
                    Err(_) => summary.failed += 1,
                }
                summary
            })
    }
}

impl Default for BatchCalculator {
    fn default() -> Self {
        Self::new(EoqCalculator::default())
    }
}
