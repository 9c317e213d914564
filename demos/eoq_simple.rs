//! 簡單 EOQ 計算示例

use eoq::{calculate_form, EoqCalculator, EoqConfig, EoqForm};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== 簡單 EOQ 計算示例 ===\n");

    let calculator = EoqCalculator::new(EoqConfig::default())?;

    // 表單文字：點號為千分位
    let form = EoqForm::new("3.650", "50", "2").with_lead_time("10");
    println!(
        "輸入: 年需求 {}, 訂購成本 {}, 持有成本 {}, 前置時間 {:?}",
        form.demand, form.ordering_cost, form.holding_cost, form.lead_time
    );

    let report = calculate_form(&calculator, &form)?;
    println!("經濟訂購量: {} units", report.economic_order_quantity);
    println!("年總成本: ${}", report.total_annual_cost);
    match report.reorder_point {
        Some(rop) => println!("再訂購點: {} units", rop),
        None => println!("再訂購點: —"),
    }

    // 持有成本為 0：不產生結果
    let invalid = EoqForm::new("1000", "50", "0");
    if let Err(err) = calculate_form(&calculator, &invalid) {
        println!("\n無效輸入: {}", err);
    }

    Ok(())
}
