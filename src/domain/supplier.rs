// ==========================================
// 供应链分析系统 - 供应商领域模型
// ==========================================
// 依据: supplier_performance 表 (一行一供应商)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Supplier - 供应商绩效记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    // ===== 标识维度 =====
    pub name: String,     // 供应商名称
    pub category: String, // 供货品类

    // ===== 绩效指标 =====
    pub on_time_rate: f64,    // 准时交付率（%）
    pub quality_score: f64,   // 质量评分（0-100）
    pub defect_rate_pct: f64, // 缺陷率（%）
    pub total_orders: i64,    // 累计订单数
}

impl Supplier {
    /// 综合绩效评分
    ///
    /// 公式: 0.4×准时率 + 0.4×质量分 − 2×缺陷率
    /// 无下界约束,缺陷率高时可为负
    pub fn performance_score(&self) -> f64 {
        self.on_time_rate * 0.4 + self.quality_score * 0.4 - self.defect_rate_pct * 2.0
    }
}
