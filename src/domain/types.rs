// ==========================================
// 供应链分析系统 - 领域类型定义
// ==========================================
// 依据: 输入数据字典 (orders/inventory/supplier/shipping)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 库存状态 (Stock Status)
// ==========================================
// 红线: 状态由上游数据给定,本系统不推导阈值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Low Stock")]
    LowStock, // 低库存,需要补货
    Normal,   // 正常
    Overstock, // 积压,库存过剩
}

impl StockStatus {
    /// 从输入字段解析库存状态
    ///
    /// 接受数据文件中的原始取值: "Low Stock" / "Normal" / "Overstock"
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Low Stock" => Some(StockStatus::LowStock),
            "Normal" => Some(StockStatus::Normal),
            "Overstock" => Some(StockStatus::Overstock),
            _ => None,
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::Normal => write!(f, "Normal"),
            StockStatus::Overstock => write!(f, "Overstock"),
        }
    }
}
