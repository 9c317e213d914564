//! 表單數值解析（在地化千分位/小數點）
//!
//! 核心計算只接受已解析的數值；文字解析屬於輸入層，可替換。

use eoq_core::input::{
    FIELD_ANNUAL_DEMAND, FIELD_HOLDING_COST, FIELD_LEAD_TIME_DAYS, FIELD_ORDERING_COST,
};
use eoq_core::{EoqError, EoqInput};

/// 數值解析器
pub trait NumberParser {
    /// 將已去除前後空白的文字正規化為可解析的格式
    fn normalize(&self, text: &str) -> String;

    /// 解析欄位文字；空字串視為缺少欄位
    fn parse_number(&self, field: &'static str, text: &str) -> eoq_core::Result<f64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(EoqError::MissingField(field));
        }

        self.normalize(trimmed)
            .parse::<f64>()
            .map_err(|_| EoqError::InvalidNumber {
                field,
                value: text.to_string(),
            })
    }
}

/// 點號為千分位、逗號為小數點（例：`1.000,5` → 1000.5）
#[derive(Debug, Clone, Copy, Default)]
pub struct DotGroupingParser;

impl NumberParser for DotGroupingParser {
    fn normalize(&self, text: &str) -> String {
        text.replace('.', "").replace(',', ".")
    }
}

/// 逗號為千分位、點號為小數點（例：`1,000.5` → 1000.5）
#[derive(Debug, Clone, Copy, Default)]
pub struct CommaGroupingParser;

impl NumberParser for CommaGroupingParser {
    fn normalize(&self, text: &str) -> String {
        text.replace(',', "")
    }
}

/// EOQ 表單原始文字
#[derive(Debug, Clone, Default)]
pub struct EoqForm {
    pub demand: String,
    pub ordering_cost: String,
    pub holding_cost: String,
    pub lead_time: Option<String>,
}

impl EoqForm {
    /// 創建表單（無前置時間）
    pub fn new(demand: &str, ordering_cost: &str, holding_cost: &str) -> Self {
        Self {
            demand: demand.to_string(),
            ordering_cost: ordering_cost.to_string(),
            holding_cost: holding_cost.to_string(),
            lead_time: None,
        }
    }

    /// 建構器模式：設置前置時間文字
    pub fn with_lead_time(mut self, lead_time: &str) -> Self {
        self.lead_time = Some(lead_time.to_string());
        self
    }

    /// 轉換為計算輸入
    pub fn to_input(&self, parser: &impl NumberParser) -> eoq_core::Result<EoqInput> {
        let mut input = EoqInput::new(
            parser.parse_number(FIELD_ANNUAL_DEMAND, &self.demand)?,
            parser.parse_number(FIELD_ORDERING_COST, &self.ordering_cost)?,
            parser.parse_number(FIELD_HOLDING_COST, &self.holding_cost)?,
        );

        // 前置時間空白視為未提供
        if let Some(text) = self.lead_time.as_deref().filter(|t| !t.trim().is_empty()) {
            input = input.with_lead_time_days(parser.parse_number(FIELD_LEAD_TIME_DAYS, text)?);
        }

        Ok(input)
    }
}
