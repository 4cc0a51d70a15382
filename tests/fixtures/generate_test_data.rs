// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成四张输入表的示例 CSV 文件
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use chrono::{Duration, NaiveDate};
use csv::Writer;
use std::error::Error;
use std::fs;

const OUT_DIR: &str = "tests/fixtures/datasets";

const WAREHOUSES: &[&str] = &["Chicago", "Dallas", "Memphis", "Seattle"];
const CATEGORIES: &[&str] = &["Electronics", "Furniture", "Apparel", "Food"];
const CARRIERS: &[&str] = &["FedEx", "UPS", "DHL", "USPS"];

fn main() -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(OUT_DIR)?;

    generate_orders()?;
    generate_inventory()?;
    generate_suppliers()?;
    generate_shipments()?;

    println!("示例数据已生成: {}", OUT_DIR);
    Ok(())
}

/// 240 单,横跨 2025-09 ~ 2026-02,约 85% 准时
fn generate_orders() -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_path(format!("{}/orders_data.csv", OUT_DIR))?;
    writer.write_record([
        "Order_ID",
        "Order_Date",
        "Expected_Delivery",
        "Actual_Delivery",
        "On_Time_Delivery",
        "Warehouse",
        "Category",
        "Total_Value",
    ])?;

    let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    for i in 0..240u32 {
        let order_date = start + Duration::days((i as i64 * 7) % 180);
        let expected = order_date + Duration::days(4 + (i % 5) as i64);
        // 约 85% 准时; 少量缺失实际送达
        let on_time = i % 7 != 0;
        let actual = if i % 40 == 39 {
            String::new()
        } else if on_time {
            (expected - Duration::days((i % 2) as i64)).to_string()
        } else {
            (expected + Duration::days(1 + (i % 4) as i64)).to_string()
        };

        writer.write_record([
            format!("ORD{:04}", i),
            order_date.to_string(),
            expected.to_string(),
            actual,
            if on_time { "Yes".into() } else { "No".into() },
            WAREHOUSES[(i % 4) as usize].to_string(),
            CATEGORIES[(i % 4) as usize].to_string(),
            format!("{:.2}", 150.0 + (i as f64 * 37.0) % 2000.0),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn generate_inventory() -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_path(format!("{}/inventory_data.csv", OUT_DIR))?;
    writer.write_record([
        "Product",
        "Warehouse",
        "Category",
        "Current_Stock",
        "Reorder_Point",
        "Avg_Monthly_Demand",
        "Days_of_Inventory",
        "Stock_Status",
    ])?;

    for i in 0..48u32 {
        let demand = 20.0 + (i as f64 * 13.0) % 80.0;
        let (stock, status) = match i % 6 {
            0 => (demand * 0.2, "Low Stock"),
            5 => (demand * 8.0, "Overstock"),
            _ => (demand * 2.0, "Normal"),
        };
        let days = stock / demand * 30.0;

        writer.write_record([
            format!("Product-{:03}", i),
            WAREHOUSES[(i % 4) as usize].to_string(),
            CATEGORIES[(i / 12) as usize].to_string(),
            format!("{:.0}", stock),
            format!("{:.0}", demand * 1.5),
            format!("{:.0}", demand),
            format!("{:.1}", days),
            status.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn generate_suppliers() -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_path(format!("{}/supplier_performance.csv", OUT_DIR))?;
    writer.write_record([
        "Supplier",
        "Category",
        "On_Time_Delivery_Rate",
        "Quality_Score",
        "Defect_Rate_Percent",
        "Total_Orders",
    ])?;

    for i in 0..12u32 {
        writer.write_record([
            format!("Supplier-{:02}", i),
            CATEGORIES[(i % 4) as usize].to_string(),
            format!("{:.1}", 70.0 + (i as f64 * 2.5) % 28.0),
            format!("{:.1}", 65.0 + (i as f64 * 3.0) % 33.0),
            format!("{:.2}", 0.5 + (i as f64 * 0.7) % 6.0),
            format!("{}", 50 + i * 17),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// 一单一运单,另含 3 条指向缺失订单的运单（连接剔除观测用例）
fn generate_shipments() -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_path(format!("{}/shipping_costs.csv", OUT_DIR))?;
    writer.write_record([
        "Shipping_ID",
        "Order_ID",
        "Carrier",
        "Shipping_Method",
        "Shipping_Cost",
        "Distance_KM",
        "Weight_KG",
    ])?;

    for i in 0..240u32 {
        writer.write_record([
            format!("SHP{:04}", i),
            format!("ORD{:04}", i),
            CARRIERS[(i % 4) as usize].to_string(),
            if i % 3 == 0 { "Express".into() } else { "Ground".into() },
            format!("{:.2}", 15.0 + (i as f64 * 11.0) % 180.0),
            format!("{:.0}", 50.0 + (i as f64 * 29.0) % 1500.0),
            format!("{:.1}", 2.0 + (i as f64 * 1.3) % 40.0),
        ])?;
    }
    for i in 0..3u32 {
        writer.write_record([
            format!("SHP9{:03}", i),
            format!("ORDX{:03}", i),
            CARRIERS[(i % 4) as usize].to_string(),
            "Ground".to_string(),
            "42.00".to_string(),
            "300".to_string(),
            "8.0".to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
