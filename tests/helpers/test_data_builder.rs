// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================
// 用途: 在临时目录生成四张输入表的 CSV 文件
// ==========================================

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

// ==========================================
// 订单行构建器
// ==========================================

pub struct OrderRow {
    pub order_id: String,
    pub order_date: String,
    pub expected_delivery: String,
    pub actual_delivery: String, // 空串 = NULL
    pub on_time: &'static str,
    pub warehouse: String,
    pub category: String,
    pub total_value: f64,
}

impl OrderRow {
    pub fn new(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            order_date: "2026-01-10".to_string(),
            expected_delivery: "2026-01-15".to_string(),
            actual_delivery: "2026-01-14".to_string(),
            on_time: "Yes",
            warehouse: "Chicago".to_string(),
            category: "Electronics".to_string(),
            total_value: 500.0,
        }
    }

    pub fn dates(mut self, ordered: &str, expected: &str, actual: &str) -> Self {
        self.order_date = ordered.to_string();
        self.expected_delivery = expected.to_string();
        self.actual_delivery = actual.to_string();
        self
    }

    pub fn late(mut self) -> Self {
        self.on_time = "No";
        self
    }

    pub fn warehouse(mut self, warehouse: &str) -> Self {
        self.warehouse = warehouse.to_string();
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.total_value = value;
        self
    }

    fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            self.order_id,
            self.order_date,
            self.expected_delivery,
            self.actual_delivery,
            self.on_time,
            self.warehouse,
            self.category,
            self.total_value
        )
    }
}

// ==========================================
// 数据集写出
// ==========================================

pub struct DatasetBuilder {
    dir: PathBuf,
}

impl DatasetBuilder {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn write_orders(&self, rows: &[OrderRow]) -> PathBuf {
        let path = self.dir.join("orders_data.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "Order_ID,Order_Date,Expected_Delivery,Actual_Delivery,On_Time_Delivery,Warehouse,Category,Total_Value"
        )
        .unwrap();
        for row in rows {
            writeln!(file, "{}", row.csv_line()).unwrap();
        }
        path
    }

    /// (product, category, stock, demand, days, status)
    pub fn write_inventory(&self, rows: &[(&str, &str, f64, f64, f64, &str)]) -> PathBuf {
        let path = self.dir.join("inventory_data.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "Product,Warehouse,Category,Current_Stock,Reorder_Point,Avg_Monthly_Demand,Days_of_Inventory,Stock_Status"
        )
        .unwrap();
        for (product, category, stock, demand, days, status) in rows {
            writeln!(
                file,
                "{},Chicago,{},{},40,{},{},{}",
                product, category, stock, demand, days, status
            )
            .unwrap();
        }
        path
    }

    /// (name, category, on_time, quality, defect, orders)
    pub fn write_suppliers(&self, rows: &[(&str, &str, f64, f64, f64, i64)]) -> PathBuf {
        let path = self.dir.join("supplier_performance.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "Supplier,Category,On_Time_Delivery_Rate,Quality_Score,Defect_Rate_Percent,Total_Orders"
        )
        .unwrap();
        for (name, category, on_time, quality, defect, orders) in rows {
            writeln!(
                file,
                "{},{},{},{},{},{}",
                name, category, on_time, quality, defect, orders
            )
            .unwrap();
        }
        path
    }

    /// (shipping_id, order_id, carrier, cost, distance)
    pub fn write_shipments(&self, rows: &[(&str, &str, &str, f64, f64)]) -> PathBuf {
        let path = self.dir.join("shipping_costs.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "Shipping_ID,Order_ID,Carrier,Shipping_Method,Shipping_Cost,Distance_KM,Weight_KG"
        )
        .unwrap();
        for (shipping_id, order_id, carrier, cost, distance) in rows {
            writeln!(
                file,
                "{},{},{},Ground,{},{},10.0",
                shipping_id, order_id, carrier, cost, distance
            )
            .unwrap();
        }
        path
    }
}
