// ==========================================
// 供应链分析系统 - 供应商绩效引擎
// ==========================================
// 职责: 整体均值 / 绩效评分 / 头尾部供应商选取
// 红线: 无状态引擎,所有方法都是纯函数
// 红线: 头尾部独立选取,供应商 < 8 家时允许重叠
// ==========================================

use crate::domain::Supplier;
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ==========================================
// SupplierScore - 供应商评分行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierScore {
    /// 供应商名称
    pub name: String,

    /// 供货品类
    pub category: String,

    /// 准时交付率（%）
    pub on_time_rate: f64,

    /// 质量评分
    pub quality_score: f64,

    /// 缺陷率（%）
    pub defect_rate_pct: f64,

    /// 累计订单数
    pub total_orders: i64,

    /// 综合绩效评分 = 0.4×准时率 + 0.4×质量分 − 2×缺陷率
    pub performance_score: f64,
}

// ==========================================
// SupplierReport - 供应商绩效汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierReport {
    /// 供应商总数
    pub total_suppliers: usize,

    /// 平均准时率（%）
    pub avg_on_time_rate: f64,

    /// 平均质量评分
    pub avg_quality_score: f64,

    /// 平均缺陷率（%）
    pub avg_defect_rate: f64,

    /// 全量评分表,按绩效评分降序（同分按名称升序）
    pub ranked: Vec<SupplierScore>,

    /// 头部供应商（默认 5 家）
    pub top: Vec<SupplierScore>,

    /// 尾部供应商（默认 3 家,独立选取）
    pub bottom: Vec<SupplierScore>,
}

// ==========================================
// SupplierEngine - 供应商绩效引擎
// ==========================================
pub struct SupplierEngine;

impl SupplierEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算供应商绩效指标
    ///
    /// # 参数
    /// - `suppliers`: 供应商快照（非空,均值对空表无定义）
    /// - `top_n` / `bottom_n`: 头尾部选取数
    pub fn analyze(
        &self,
        suppliers: &[Supplier],
        top_n: usize,
        bottom_n: usize,
    ) -> EngineResult<SupplierReport> {
        if suppliers.is_empty() {
            return Err(EngineError::EmptyRelation {
                relation: "supplier",
                step: "supplier_performance",
            });
        }

        let n = suppliers.len() as f64;
        let avg_on_time_rate = suppliers.iter().map(|s| s.on_time_rate).sum::<f64>() / n;
        let avg_quality_score = suppliers.iter().map(|s| s.quality_score).sum::<f64>() / n;
        let avg_defect_rate = suppliers.iter().map(|s| s.defect_rate_pct).sum::<f64>() / n;

        // 评分降序,同分按名称升序保证确定性
        let mut ranked: Vec<SupplierScore> = suppliers.iter().map(Self::score).collect();
        ranked.sort_by(|a, b| Self::desc_by_score(a, b));

        let top: Vec<SupplierScore> = ranked.iter().take(top_n).cloned().collect();

        // 尾部独立选取: 评分升序,同分按名称升序
        let mut ascending = ranked.clone();
        ascending.sort_by(|a, b| Self::asc_by_score(a, b));
        let bottom: Vec<SupplierScore> = ascending.into_iter().take(bottom_n).collect();

        Ok(SupplierReport {
            total_suppliers: suppliers.len(),
            avg_on_time_rate,
            avg_quality_score,
            avg_defect_rate,
            ranked,
            top,
            bottom,
        })
    }

    fn score(supplier: &Supplier) -> SupplierScore {
        SupplierScore {
            name: supplier.name.clone(),
            category: supplier.category.clone(),
            on_time_rate: supplier.on_time_rate,
            quality_score: supplier.quality_score,
            defect_rate_pct: supplier.defect_rate_pct,
            total_orders: supplier.total_orders,
            performance_score: supplier.performance_score(),
        }
    }

    fn desc_by_score(a: &SupplierScore, b: &SupplierScore) -> Ordering {
        b.performance_score
            .partial_cmp(&a.performance_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    }

    fn asc_by_score(a: &SupplierScore, b: &SupplierScore) -> Ordering {
        a.performance_score
            .partial_cmp(&b.performance_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    }
}

impl Default for SupplierEngine {
    fn default() -> Self {
        Self::new()
    }
}
