// ==========================================
// 供应链分析系统 - 运单领域模型
// ==========================================
// 依据: shipping_costs 表 (一行一运单)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Shipment - 运单记录
// ==========================================
// order_id 外键指向 Order; 无匹配订单的运单在成本合并时被剔除并计数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    // ===== 主键与关联 =====
    pub shipping_id: String, // 运单唯一标识
    pub order_id: String,    // 关联订单号（FK）

    // ===== 承运维度 =====
    pub carrier: String,         // 承运商
    pub shipping_method: String, // 运输方式

    // ===== 度量 =====
    pub cost: f64,        // 运费
    pub distance_km: f64, // 运输距离（km）
    pub weight_kg: f64,   // 货物重量（kg）
}
