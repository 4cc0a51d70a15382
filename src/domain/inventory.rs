// ==========================================
// 供应链分析系统 - 库存领域模型
// ==========================================
// 依据: inventory_data 表 (一行一 SKU×仓库)
// ==========================================

use crate::domain::types::StockStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// InventoryItem - 库存记录
// ==========================================
// 红线: stock_status 由上游给定,本系统不重新判定阈值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    // ===== 标识维度 =====
    pub product: String,   // 商品名称
    pub warehouse: String, // 所在仓库
    pub category: String,  // 商品品类

    // ===== 库存数量 =====
    pub current_stock: f64,  // 当前库存量
    pub reorder_point: f64,  // 补货点
    pub avg_monthly_demand: f64, // 月均需求量

    // ===== 派生于上游的指标 =====
    pub days_of_inventory: f64,   // 库存可用天数
    pub stock_status: StockStatus, // 库存状态 (Low Stock/Normal/Overstock)
}
