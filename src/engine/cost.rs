// ==========================================
// 供应链分析系统 - 成本与运费引擎
// ==========================================
// 职责: 订单×运单合并 / 承运商汇总 / 高运费识别
// 红线: 无状态引擎,所有方法都是纯函数
// 红线: 连接为显式配置操作,未匹配行数必须可观测
// 红线: 分位插值口径显式固定,不依赖库默认值
// ==========================================

use crate::config::{JoinPolicy, PercentileMethod};
use crate::domain::{Order, Shipment};
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// JoinedShipment - 合并后的运单行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedShipment {
    /// 运单号
    pub shipping_id: String,

    /// 订单号
    pub order_id: String,

    /// 承运商
    pub carrier: String,

    /// 运费
    pub cost: f64,

    /// 运输距离（km）
    pub distance_km: f64,

    /// 订单金额
    pub order_value: f64,

    /// 发货仓库
    pub warehouse: String,
}

// ==========================================
// CarrierAnalysis - 承运商汇总行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierAnalysis {
    /// 承运商
    pub carrier: String,

    /// 运单数
    pub shipments: usize,

    /// 运费合计
    pub total_cost: f64,

    /// 平均运费
    pub avg_cost: f64,

    /// 平均距离（km）
    pub avg_distance_km: f64,

    /// 单位距离成本 = 运费合计 / (运单数 × 平均距离); 分母为 0 时 None
    pub cost_per_km: Option<f64>,
}

// ==========================================
// CostReport - 成本指标汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostReport {
    /// 订单金额合计（全量订单表）
    pub total_order_value: f64,

    /// 运费合计（全量运单表）
    pub total_shipping_cost: f64,

    /// 运费占订单金额比（%）; 订单金额为 0 时 None
    pub shipping_pct_of_value: Option<f64>,

    /// 承运商汇总,按运费合计降序
    pub carriers: Vec<CarrierAnalysis>,

    /// 高运费阈值（配置分位,全量运单口径）; 运单表为空时 None
    pub high_cost_threshold: Option<f64>,

    /// 高运费运单（严格高于阈值,取自合并行）
    pub high_cost_shipments: Vec<JoinedShipment>,

    /// 路线优化节省估算 = 高运费合计 × 节省比例（示意值）
    pub projected_savings: f64,

    /// 连接中被剔除的运单数（订单缺失）
    pub dropped_shipments: usize,

    /// 连接中未被任何运单引用的订单数
    pub dropped_orders: usize,
}

// ==========================================
// CostEngine - 成本与运费引擎
// ==========================================
pub struct CostEngine {
    join_policy: JoinPolicy,
    percentile_method: PercentileMethod,
    high_cost_quantile: f64,
    savings_rate: f64,
}

impl CostEngine {
    pub fn new(
        join_policy: JoinPolicy,
        percentile_method: PercentileMethod,
        high_cost_quantile: f64,
        savings_rate: f64,
    ) -> Self {
        Self {
            join_policy,
            percentile_method,
            high_cost_quantile,
            savings_rate,
        }
    }

    /// 计算成本指标
    pub fn analyze(&self, orders: &[Order], shipments: &[Shipment]) -> EngineResult<CostReport> {
        let total_order_value: f64 = orders.iter().map(|o| o.total_value).sum();
        let total_shipping_cost: f64 = shipments.iter().map(|s| s.cost).sum();
        let shipping_pct_of_value = if total_order_value == 0.0 {
            None
        } else {
            Some(total_shipping_cost / total_order_value * 100.0)
        };

        // 订单×运单内连接; 未匹配行数两侧都要统计
        let (joined, dropped_shipments, dropped_orders) = self.join(orders, shipments);
        if dropped_shipments > 0 || dropped_orders > 0 {
            tracing::warn!(
                "成本合并剔除未匹配行: 运单 {} 条, 订单 {} 条",
                dropped_shipments,
                dropped_orders
            );
        }

        let carriers = self.carrier_rollup(shipments);

        // 高运费阈值: 全量运单成本的配置分位
        let mut costs: Vec<f64> = shipments.iter().map(|s| s.cost).collect();
        costs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let high_cost_threshold = if costs.is_empty() {
            None
        } else {
            Some(percentile(&costs, self.high_cost_quantile, self.percentile_method)?)
        };

        let high_cost_shipments: Vec<JoinedShipment> = match high_cost_threshold {
            Some(threshold) => joined
                .iter()
                .filter(|j| j.cost > threshold)
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        let projected_savings =
            high_cost_shipments.iter().map(|j| j.cost).sum::<f64>() * self.savings_rate;

        Ok(CostReport {
            total_order_value,
            total_shipping_cost,
            shipping_pct_of_value,
            carriers,
            high_cost_threshold,
            high_cost_shipments,
            projected_savings,
            dropped_shipments,
            dropped_orders,
        })
    }

    /// 订单×运单连接,返回 (合并行, 剔除运单数, 未引用订单数)
    fn join(
        &self,
        orders: &[Order],
        shipments: &[Shipment],
    ) -> (Vec<JoinedShipment>, usize, usize) {
        // 目前仅内连接一种策略; match 保证新增策略时此处必须扩展
        match self.join_policy {
            JoinPolicy::Inner => {
                let mut joined = Vec::new();
                let mut matched_orders: HashSet<&str> = HashSet::new();
                let mut dropped_shipments = 0usize;

                for shipment in shipments {
                    match orders.iter().find(|o| o.order_id == shipment.order_id) {
                        Some(order) => {
                            matched_orders.insert(order.order_id.as_str());
                            joined.push(JoinedShipment {
                                shipping_id: shipment.shipping_id.clone(),
                                order_id: shipment.order_id.clone(),
                                carrier: shipment.carrier.clone(),
                                cost: shipment.cost,
                                distance_km: shipment.distance_km,
                                order_value: order.total_value,
                                warehouse: order.warehouse.clone(),
                            });
                        }
                        None => dropped_shipments += 1,
                    }
                }

                let dropped_orders = orders
                    .iter()
                    .filter(|o| !matched_orders.contains(o.order_id.as_str()))
                    .count();

                (joined, dropped_shipments, dropped_orders)
            }
        }
    }

    /// 承运商汇总（首见顺序分组,按运费合计降序输出）
    fn carrier_rollup(&self, shipments: &[Shipment]) -> Vec<CarrierAnalysis> {
        let mut names: Vec<String> = Vec::new();
        let mut groups: Vec<Vec<&Shipment>> = Vec::new();
        for shipment in shipments {
            match names.iter().position(|n| *n == shipment.carrier) {
                Some(pos) => groups[pos].push(shipment),
                None => {
                    names.push(shipment.carrier.clone());
                    groups.push(vec![shipment]);
                }
            }
        }

        let mut rows: Vec<CarrierAnalysis> = names
            .into_iter()
            .zip(groups)
            .map(|(carrier, group)| {
                let count = group.len();
                let total_cost: f64 = group.iter().map(|s| s.cost).sum();
                let avg_cost = total_cost / count as f64;
                let avg_distance_km =
                    group.iter().map(|s| s.distance_km).sum::<f64>() / count as f64;

                let denom = count as f64 * avg_distance_km;
                let cost_per_km = if denom == 0.0 { None } else { Some(total_cost / denom) };

                CarrierAnalysis {
                    carrier,
                    shipments: count,
                    total_cost,
                    avg_cost,
                    avg_distance_km,
                    cost_per_km,
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total_cost
                .partial_cmp(&a.total_cost)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows
    }
}

/// 有序序列的分位数（命名操作,口径随配置显式固定）
///
/// # 参数
/// - `sorted`: 升序非空序列
/// - `q`: 分位（0~1）
pub fn percentile(sorted: &[f64], q: f64, method: PercentileMethod) -> EngineResult<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(EngineError::InvalidQuantile(q));
    }
    debug_assert!(!sorted.is_empty());

    match method {
        // 顺序统计量间线性插值: 位置 (n−1)×q
        PercentileMethod::Linear => {
            let pos = (sorted.len() - 1) as f64 * q;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let frac = pos - lower as f64;
            Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
        }
        // 最近秩: 第 ceil(q×n) 个顺序统计量
        PercentileMethod::NearestRank => {
            let rank = (q * sorted.len() as f64).ceil() as usize;
            let idx = rank.max(1) - 1;
            Ok(sorted[idx.min(sorted.len() - 1)])
        }
    }
}
