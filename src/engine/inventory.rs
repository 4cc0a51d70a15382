// ==========================================
// 供应链分析系统 - 库存指标引擎
// ==========================================
// 职责: 状态分布 / 低库存与积压清单 / 品类周转
// 红线: 无状态引擎,所有方法都是纯函数
// 红线: 品类库存为 0 时周转率取 ∞ 哨兵,不崩溃
// ==========================================

use crate::domain::types::StockStatus;
use crate::domain::InventoryItem;
use serde::{Deserialize, Serialize};

// ==========================================
// StatusCount - 库存状态分布行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    /// 库存状态
    pub status: StockStatus,

    /// 条目数
    pub count: usize,

    /// 占比（%）
    pub pct: f64,
}

// ==========================================
// CategorySummary - 品类库存汇总行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    /// 品类
    pub category: String,

    /// 当前库存合计
    pub total_stock: f64,

    /// 月均需求合计
    pub total_monthly_demand: f64,

    /// 平均库存可用天数
    pub avg_days_of_inventory: f64,

    /// 年化周转率 = 月需求×12 / 当前库存; 库存为 0 时为 ∞
    pub turnover_ratio: f64,
}

// ==========================================
// InventoryReport - 库存指标汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryReport {
    /// SKU×仓库条目总数
    pub total_items: usize,

    /// 状态分布,按首见顺序
    pub status_distribution: Vec<StatusCount>,

    /// 低库存清单,按可用天数升序（最紧急在前）
    pub low_stock: Vec<InventoryItem>,

    /// 积压清单,按当前库存降序（积压最大在前）
    pub overstock: Vec<InventoryItem>,

    /// 品类汇总,按首见顺序
    pub categories: Vec<CategorySummary>,
}

// ==========================================
// InventoryEngine - 库存指标引擎
// ==========================================
pub struct InventoryEngine;

impl InventoryEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算库存指标
    pub fn analyze(&self, items: &[InventoryItem]) -> InventoryReport {
        let total_items = items.len();

        // 状态分布（首见顺序,保证输出确定性）
        let mut status_distribution: Vec<StatusCount> = Vec::new();
        for item in items {
            match status_distribution
                .iter_mut()
                .find(|s| s.status == item.stock_status)
            {
                Some(entry) => entry.count += 1,
                None => status_distribution.push(StatusCount {
                    status: item.stock_status,
                    count: 1,
                    pct: 0.0,
                }),
            }
        }
        for entry in &mut status_distribution {
            entry.pct = if total_items == 0 {
                0.0
            } else {
                entry.count as f64 / total_items as f64 * 100.0
            };
        }

        // 低库存: 可用天数升序
        let mut low_stock: Vec<InventoryItem> = items
            .iter()
            .filter(|i| i.stock_status == StockStatus::LowStock)
            .cloned()
            .collect();
        low_stock.sort_by(|a, b| {
            a.days_of_inventory
                .partial_cmp(&b.days_of_inventory)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // 积压: 当前库存降序
        let mut overstock: Vec<InventoryItem> = items
            .iter()
            .filter(|i| i.stock_status == StockStatus::Overstock)
            .cloned()
            .collect();
        overstock.sort_by(|a, b| {
            b.current_stock
                .partial_cmp(&a.current_stock)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let categories = self.category_rollup(items);

        InventoryReport {
            total_items,
            status_distribution,
            low_stock,
            overstock,
            categories,
        }
    }

    /// 品类汇总（首见顺序）
    fn category_rollup(&self, items: &[InventoryItem]) -> Vec<CategorySummary> {
        let mut names: Vec<String> = Vec::new();
        let mut groups: Vec<Vec<&InventoryItem>> = Vec::new();
        for item in items {
            match names.iter().position(|n| *n == item.category) {
                Some(pos) => groups[pos].push(item),
                None => {
                    names.push(item.category.clone());
                    groups.push(vec![item]);
                }
            }
        }

        names
            .into_iter()
            .zip(groups)
            .map(|(category, group)| {
                let total_stock: f64 = group.iter().map(|i| i.current_stock).sum();
                let total_demand: f64 = group.iter().map(|i| i.avg_monthly_demand).sum();
                let avg_days: f64 =
                    group.iter().map(|i| i.days_of_inventory).sum::<f64>() / group.len() as f64;

                // 库存为 0 → ∞ 哨兵（需求也为 0 时约定同样取 ∞,见测试）
                let turnover_ratio = if total_stock == 0.0 {
                    f64::INFINITY
                } else {
                    total_demand * 12.0 / total_stock
                };

                CategorySummary {
                    category,
                    total_stock,
                    total_monthly_demand: total_demand,
                    avg_days_of_inventory: avg_days,
                    turnover_ratio,
                }
            })
            .collect()
    }
}

impl Default for InventoryEngine {
    fn default() -> Self {
        Self::new()
    }
}
