// ==========================================
// 供应链分析系统 - 趋势指标引擎
// ==========================================
// 职责: 日历月分桶 / 月度环比增长
// 红线: 无状态引擎,所有方法都是纯函数
// 红线: 首月无上一期,环比为 None 而非 0
// ==========================================

use crate::domain::Order;
use crate::engine::derivation::OrderFact;
use serde::{Deserialize, Serialize};

// ==========================================
// MonthlyTrend - 月度趋势行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// 月度桶 (YYYY-MM)
    pub year_month: String,

    /// 订单数
    pub orders: usize,

    /// 营收合计
    pub revenue: f64,

    /// 准时率（%）
    pub on_time_rate: f64,

    /// 订单数环比（%）; 首月为 None
    pub order_growth_pct: Option<f64>,

    /// 营收环比（%）; 首月或上月营收为 0 时为 None
    pub revenue_growth_pct: Option<f64>,
}

// ==========================================
// TrendEngine - 趋势指标引擎
// ==========================================
pub struct TrendEngine;

impl TrendEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算月度趋势,按月份升序输出
    ///
    /// # 参数
    /// - `orders`: 订单快照
    /// - `facts`: 订单派生事实,与 orders 按下标对应
    pub fn analyze(&self, orders: &[Order], facts: &[OrderFact]) -> Vec<MonthlyTrend> {
        // 按月分桶
        let mut months: Vec<String> = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (idx, fact) in facts.iter().enumerate() {
            match months.iter().position(|m| *m == fact.year_month) {
                Some(pos) => groups[pos].push(idx),
                None => {
                    months.push(fact.year_month.clone());
                    groups.push(vec![idx]);
                }
            }
        }

        // YYYY-MM 字典序即时间序
        let mut buckets: Vec<(String, Vec<usize>)> = months.into_iter().zip(groups).collect();
        buckets.sort_by(|a, b| a.0.cmp(&b.0));

        let mut rows: Vec<MonthlyTrend> = buckets
            .into_iter()
            .map(|(year_month, indices)| {
                let count = indices.len();
                let revenue: f64 = indices.iter().map(|&i| orders[i].total_value).sum();
                let on_time = indices.iter().filter(|&&i| orders[i].on_time).count();

                MonthlyTrend {
                    year_month,
                    orders: count,
                    revenue,
                    on_time_rate: on_time as f64 / count as f64 * 100.0,
                    order_growth_pct: None,
                    revenue_growth_pct: None,
                }
            })
            .collect();

        // 环比: (当月 − 上月) / 上月 × 100; 首月保持 None
        for i in 1..rows.len() {
            let prev_orders = rows[i - 1].orders;
            let prev_revenue = rows[i - 1].revenue;

            rows[i].order_growth_pct = if prev_orders == 0 {
                None
            } else {
                Some((rows[i].orders as f64 - prev_orders as f64) / prev_orders as f64 * 100.0)
            };
            rows[i].revenue_growth_pct = if prev_revenue == 0.0 {
                None
            } else {
                Some((rows[i].revenue - prev_revenue) / prev_revenue * 100.0)
            };
        }

        rows
    }
}

impl Default for TrendEngine {
    fn default() -> Self {
        Self::new()
    }
}
