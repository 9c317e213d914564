//! 商品補貨建議示例

use chrono::Local;
use eoq::{BatchCalculator, EoqInput, Product, ReplenishmentAdvisor};
use tracing_subscriber::EnvFilter;

const PRODUCTS_JSON: &str = r#"[
    {"id": 1, "product": "Bolt M8", "sku": "BLT-008", "location": "A-01", "price": 1.5, "stock": 1200},
    {"id": 2, "product": "Nut M8", "sku": "NUT-008", "location": "A-02", "price": 0.25, "stock": 90},
    {"id": 3, "product": "Washer 10mm", "sku": "WSH-010", "location": "B-01", "price": 0.1, "stock": 0}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== 商品補貨建議示例 ===\n");

    let products = Product::list_from_json(PRODUCTS_JSON)?;
    let input = EoqInput::new(7300.0, 40.0, 0.8).with_lead_time_days(7.0);

    let items: Vec<_> = products
        .iter()
        .map(|p| (p.sku.clone(), input))
        .collect();
    let entries = BatchCalculator::default().calculate_all(&items);
    let summary = BatchCalculator::summarize(&entries);
    println!(
        "批量計算: 成功 {} 筆, 失敗 {} 筆, 年總成本合計 {:.2}\n",
        summary.succeeded, summary.failed, summary.total_annual_cost
    );

    let today = Local::now().date_naive();
    let advisor = ReplenishmentAdvisor::default();
    for product in &products {
        let advice = advisor.advise(product, &input, today)?;
        println!(
            "  - {} ({}): 庫存 {}, 再訂購點 {:?}, 應下單 {}, 建議量 {}, 下單日 {:?}",
            product.name,
            advice.sku,
            advice.on_hand,
            advice.reorder_point,
            advice.should_reorder,
            advice.suggested_quantity,
            advice.order_date
        );
    }

    Ok(())
}
