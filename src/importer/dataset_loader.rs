// ==========================================
// 供应链分析系统 - 数据集加载器
// ==========================================
// 职责: 原始记录 → 类型化领域实体
// 红线: 加载失败即终止运行,不做部分加载
// 行号从 2 起计（对应文件中的数据行,首行为表头）
// ==========================================

use crate::domain::types::StockStatus;
use crate::domain::{InventoryItem, Order, Shipment, Supplier};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;

/// 数据集加载器
///
/// 四张输入表各有一个 load_* 方法; 列名必须与数据字典一致
pub struct DatasetLoader;

impl DatasetLoader {
    /// 加载订单表 (orders_data)
    pub fn load_orders<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<Order>> {
        const REL: &str = "orders";
        let records = UniversalFileParser.parse(path)?;

        let mut orders = Vec::with_capacity(records.len());
        for (idx, row) in records.iter().enumerate() {
            let row_no = idx + 2;
            orders.push(Order {
                order_id: require(REL, row, "Order_ID", row_no)?,
                order_date: parse_date(REL, row, "Order_Date", row_no)?,
                expected_delivery: parse_date(REL, row, "Expected_Delivery", row_no)?,
                actual_delivery: parse_date_opt(REL, row, "Actual_Delivery", row_no)?,
                on_time: parse_yes_no(REL, row, "On_Time_Delivery", row_no)?,
                warehouse: require(REL, row, "Warehouse", row_no)?,
                category: require(REL, row, "Category", row_no)?,
                total_value: parse_f64(REL, row, "Total_Value", row_no)?,
            });
        }

        tracing::info!("订单数据加载完成: {} 条", orders.len());
        Ok(orders)
    }

    /// 加载库存表 (inventory_data)
    pub fn load_inventory<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<InventoryItem>> {
        const REL: &str = "inventory";
        let records = UniversalFileParser.parse(path)?;

        let mut items = Vec::with_capacity(records.len());
        for (idx, row) in records.iter().enumerate() {
            let row_no = idx + 2;
            let status_raw = require(REL, row, "Stock_Status", row_no)?;
            let stock_status = StockStatus::parse(&status_raw).ok_or_else(|| {
                ImportError::InvalidEnumValue {
                    relation: REL,
                    row: row_no,
                    field: "Stock_Status",
                    value: status_raw.clone(),
                }
            })?;

            items.push(InventoryItem {
                product: require(REL, row, "Product", row_no)?,
                warehouse: require(REL, row, "Warehouse", row_no)?,
                category: require(REL, row, "Category", row_no)?,
                current_stock: parse_f64(REL, row, "Current_Stock", row_no)?,
                reorder_point: parse_f64(REL, row, "Reorder_Point", row_no)?,
                avg_monthly_demand: parse_f64(REL, row, "Avg_Monthly_Demand", row_no)?,
                days_of_inventory: parse_f64(REL, row, "Days_of_Inventory", row_no)?,
                stock_status,
            });
        }

        tracing::info!("库存数据加载完成: {} 条", items.len());
        Ok(items)
    }

    /// 加载供应商绩效表 (supplier_performance)
    pub fn load_suppliers<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<Supplier>> {
        const REL: &str = "supplier";
        let records = UniversalFileParser.parse(path)?;

        let mut suppliers = Vec::with_capacity(records.len());
        for (idx, row) in records.iter().enumerate() {
            let row_no = idx + 2;
            suppliers.push(Supplier {
                name: require(REL, row, "Supplier", row_no)?,
                category: require(REL, row, "Category", row_no)?,
                on_time_rate: parse_f64(REL, row, "On_Time_Delivery_Rate", row_no)?,
                quality_score: parse_f64(REL, row, "Quality_Score", row_no)?,
                defect_rate_pct: parse_f64(REL, row, "Defect_Rate_Percent", row_no)?,
                total_orders: parse_i64(REL, row, "Total_Orders", row_no)?,
            });
        }

        tracing::info!("供应商数据加载完成: {} 条", suppliers.len());
        Ok(suppliers)
    }

    /// 加载运单表 (shipping_costs)
    pub fn load_shipments<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<Shipment>> {
        const REL: &str = "shipping";
        let records = UniversalFileParser.parse(path)?;

        let mut shipments = Vec::with_capacity(records.len());
        for (idx, row) in records.iter().enumerate() {
            let row_no = idx + 2;
            shipments.push(Shipment {
                shipping_id: require(REL, row, "Shipping_ID", row_no)?,
                order_id: require(REL, row, "Order_ID", row_no)?,
                carrier: require(REL, row, "Carrier", row_no)?,
                shipping_method: require(REL, row, "Shipping_Method", row_no)?,
                cost: parse_f64(REL, row, "Shipping_Cost", row_no)?,
                distance_km: parse_f64(REL, row, "Distance_KM", row_no)?,
                weight_kg: parse_f64(REL, row, "Weight_KG", row_no)?,
            });
        }

        tracing::info!("运单数据加载完成: {} 条", shipments.len());
        Ok(shipments)
    }
}

// ==========================================
// 字段级解析辅助函数
// ==========================================

/// 提取必填字符串字段
fn require(
    relation: &'static str,
    row: &HashMap<String, String>,
    field: &'static str,
    row_no: usize,
) -> ImportResult<String> {
    match row.get(field).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ImportError::FieldMissing {
            relation,
            row: row_no,
            field,
        }),
    }
}

/// 解析必填浮点数
fn parse_f64(
    relation: &'static str,
    row: &HashMap<String, String>,
    field: &'static str,
    row_no: usize,
) -> ImportResult<f64> {
    let value = require(relation, row, field, row_no)?;
    value
        .parse::<f64>()
        .map_err(|_| ImportError::TypeConversionError {
            relation,
            row: row_no,
            field,
            message: format!("无法解析为浮点数: {}", value),
        })
}

/// 解析必填整数
fn parse_i64(
    relation: &'static str,
    row: &HashMap<String, String>,
    field: &'static str,
    row_no: usize,
) -> ImportResult<i64> {
    let value = require(relation, row, field, row_no)?;
    value
        .parse::<i64>()
        .map_err(|_| ImportError::TypeConversionError {
            relation,
            row: row_no,
            field,
            message: format!("无法解析为整数: {}", value),
        })
}

/// 解析必填日期 (YYYY-MM-DD)
fn parse_date(
    relation: &'static str,
    row: &HashMap<String, String>,
    field: &'static str,
    row_no: usize,
) -> ImportResult<NaiveDate> {
    let value = require(relation, row, field, row_no)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| ImportError::DateFormatError {
        relation,
        row: row_no,
        field,
        value,
    })
}

/// 解析可空日期（空串视为 NULL,非空但不可解析仍为错误）
fn parse_date_opt(
    relation: &'static str,
    row: &HashMap<String, String>,
    field: &'static str,
    row_no: usize,
) -> ImportResult<Option<NaiveDate>> {
    match row.get(field).map(|v| v.trim()) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ImportError::DateFormatError {
                relation,
                row: row_no,
                field,
                value: value.to_string(),
            }),
    }
}

/// 解析 Yes/No 标记（大小写不敏感）
fn parse_yes_no(
    relation: &'static str,
    row: &HashMap<String, String>,
    field: &'static str,
    row_no: usize,
) -> ImportResult<bool> {
    let value = require(relation, row, field, row_no)?;
    match value.to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(ImportError::InvalidEnumValue {
            relation,
            row: row_no,
            field,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_csv(lines: &[&str]) -> NamedTempFile {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let mut f = file.reopen().unwrap();
        for line in lines {
            writeln!(f, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_load_orders_typed_fields() {
        let file = write_temp_csv(&[
            "Order_ID,Order_Date,Expected_Delivery,Actual_Delivery,On_Time_Delivery,Warehouse,Category,Total_Value",
            "ORD001,2026-01-05,2026-01-10,2026-01-09,Yes,Chicago,Electronics,1250.50",
            "ORD002,2026-01-06,2026-01-11,,No,Dallas,Furniture,830.00",
        ]);

        let orders = DatasetLoader.load_orders(file.path()).unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders[0].on_time);
        assert_eq!(orders[0].delivery_days(), Some(4));
        // 实际送达缺失 → None,不参与均值
        assert_eq!(orders[1].actual_delivery, None);
        assert_eq!(orders[1].delivery_days(), None);
    }

    #[test]
    fn test_load_orders_bad_date_is_fatal() {
        let file = write_temp_csv(&[
            "Order_ID,Order_Date,Expected_Delivery,Actual_Delivery,On_Time_Delivery,Warehouse,Category,Total_Value",
            "ORD001,05/01/2026,2026-01-10,2026-01-09,Yes,Chicago,Electronics,1250.50",
        ]);

        let result = DatasetLoader.load_orders(file.path());
        assert!(matches!(result, Err(ImportError::DateFormatError { row: 2, .. })));
    }

    #[test]
    fn test_load_orders_missing_column_is_fatal() {
        let file = write_temp_csv(&[
            "Order_ID,Order_Date,Expected_Delivery,Actual_Delivery,Warehouse,Category,Total_Value",
            "ORD001,2026-01-05,2026-01-10,2026-01-09,Chicago,Electronics,1250.50",
        ]);

        let result = DatasetLoader.load_orders(file.path());
        assert!(matches!(
            result,
            Err(ImportError::FieldMissing { field: "On_Time_Delivery", .. })
        ));
    }

    #[test]
    fn test_load_inventory_rejects_unknown_status() {
        let file = write_temp_csv(&[
            "Product,Warehouse,Category,Current_Stock,Reorder_Point,Avg_Monthly_Demand,Days_of_Inventory,Stock_Status",
            "Widget,Chicago,Electronics,120,40,60,45.0,Plenty",
        ]);

        let result = DatasetLoader.load_inventory(file.path());
        assert!(matches!(result, Err(ImportError::InvalidEnumValue { .. })));
    }

    #[test]
    fn test_load_suppliers_and_shipments() {
        let suppliers_file = write_temp_csv(&[
            "Supplier,Category,On_Time_Delivery_Rate,Quality_Score,Defect_Rate_Percent,Total_Orders",
            "Acme Corp,Electronics,90,95,1,200",
        ]);
        let shipments_file = write_temp_csv(&[
            "Shipping_ID,Order_ID,Carrier,Shipping_Method,Shipping_Cost,Distance_KM,Weight_KG",
            "SHP001,ORD001,FedEx,Express,45.20,320,12.5",
        ]);

        let suppliers = DatasetLoader.load_suppliers(suppliers_file.path()).unwrap();
        assert!((suppliers[0].performance_score() - 72.0).abs() < 1e-9);

        let shipments = DatasetLoader.load_shipments(shipments_file.path()).unwrap();
        assert_eq!(shipments[0].order_id, "ORD001");
        assert!((shipments[0].cost - 45.20).abs() < 1e-9);
    }
}
