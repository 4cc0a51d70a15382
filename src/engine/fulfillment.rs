// ==========================================
// 供应链分析系统 - 履约指标引擎
// ==========================================
// 职责: 准时率 / 送达耗时 / 延误 / 仓库绩效排名
// 红线: 无状态引擎,所有方法都是纯函数
// 红线: 订单表为空 → 显式报错,不传播 NaN
// ==========================================

use crate::domain::Order;
use crate::engine::derivation::OrderFact;
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

// ==========================================
// WarehousePerformance - 仓库绩效行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehousePerformance {
    /// 仓库名称
    pub warehouse: String,

    /// 订单数
    pub total_orders: usize,

    /// 准时率（%）
    pub on_time_rate: f64,

    /// 订单总金额
    pub total_revenue: f64,

    /// 平均送达耗时（天）; 该仓库全部订单缺实际送达时为 None
    pub avg_delivery_days: Option<f64>,
}

// ==========================================
// FulfillmentReport - 履约指标汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentReport {
    /// 订单总数
    pub total_orders: usize,

    /// 准时订单数
    pub on_time_orders: usize,

    /// 整体准时率（%）
    pub on_time_rate: f64,

    /// 平均送达耗时（天）,剔除实际送达缺失的订单
    pub avg_delivery_days: Option<f64>,

    /// 迟到订单数
    pub late_orders: usize,

    /// 迟到占比（%）
    pub late_rate: f64,

    /// 迟到订单平均延误（天）; 无迟到订单时为 None
    pub avg_delay_days: Option<f64>,

    /// 仓库绩效,按准时率降序（同率保持输入顺序）
    pub warehouses: Vec<WarehousePerformance>,
}

// ==========================================
// FulfillmentEngine - 履约指标引擎
// ==========================================
pub struct FulfillmentEngine;

impl FulfillmentEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算履约指标
    ///
    /// # 参数
    /// - `orders`: 订单快照（非空）
    /// - `facts`: 订单派生事实,与 orders 按下标对应
    pub fn analyze(&self, orders: &[Order], facts: &[OrderFact]) -> EngineResult<FulfillmentReport> {
        if orders.is_empty() {
            return Err(EngineError::EmptyRelation {
                relation: "orders",
                step: "fulfillment",
            });
        }

        let total_orders = orders.len();
        let on_time_orders = orders.iter().filter(|o| o.on_time).count();
        let on_time_rate = on_time_orders as f64 / total_orders as f64 * 100.0;

        // 平均送达耗时: 剔除实际送达缺失的行
        let avg_delivery_days = mean_i64(facts.iter().filter_map(|f| f.delivery_days));

        // 迟到订单: 延误均值同样剔除缺失行; 零迟到 → None
        let late: Vec<&Order> = orders.iter().filter(|o| !o.on_time).collect();
        let avg_delay_days = mean_i64(late.iter().filter_map(|o| o.delay_days()));

        let warehouses = self.warehouse_rollup(orders, facts);

        Ok(FulfillmentReport {
            total_orders,
            on_time_orders,
            on_time_rate,
            avg_delivery_days,
            late_orders: late.len(),
            late_rate: late.len() as f64 / total_orders as f64 * 100.0,
            avg_delay_days,
            warehouses,
        })
    }

    /// 仓库绩效汇总,按准时率降序（稳定排序,同率保持首见顺序）
    fn warehouse_rollup(&self, orders: &[Order], facts: &[OrderFact]) -> Vec<WarehousePerformance> {
        // 保持首见顺序的分组
        let mut names: Vec<String> = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (idx, order) in orders.iter().enumerate() {
            match names.iter().position(|n| *n == order.warehouse) {
                Some(pos) => groups[pos].push(idx),
                None => {
                    names.push(order.warehouse.clone());
                    groups.push(vec![idx]);
                }
            }
        }

        let mut rows: Vec<WarehousePerformance> = names
            .into_iter()
            .zip(groups)
            .map(|(warehouse, indices)| {
                let total = indices.len();
                let on_time = indices.iter().filter(|&&i| orders[i].on_time).count();
                let revenue = indices.iter().map(|&i| orders[i].total_value).sum();
                let avg_days = mean_i64(indices.iter().filter_map(|&i| facts[i].delivery_days));

                WarehousePerformance {
                    warehouse,
                    total_orders: total,
                    on_time_rate: on_time as f64 / total as f64 * 100.0,
                    total_revenue: revenue,
                    avg_delivery_days: avg_days,
                }
            })
            .collect();

        // Vec::sort_by 为稳定排序,同率保持输入顺序
        rows.sort_by(|a, b| {
            b.on_time_rate
                .partial_cmp(&a.on_time_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows
    }
}

impl Default for FulfillmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 整数序列均值; 空序列为 None
fn mean_i64(values: impl Iterator<Item = i64>) -> Option<f64> {
    let mut sum = 0i64;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}
