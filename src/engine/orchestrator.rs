// ==========================================
// 供应链分析系统 - 引擎编排器
// ==========================================
// 用途: 协调五大指标引擎的固定执行顺序
// 顺序: 履约 → 库存 → 供应商 → 成本 → 趋势
// 红线: 单线程同步批处理,每步产出独立派生表
// ==========================================

use crate::config::AnalysisConfig;
use crate::domain::{InventoryItem, Order, Shipment, Supplier};
use crate::engine::cost::{CostEngine, CostReport};
use crate::engine::derivation::{OrderDerivation, OrderFact};
use crate::engine::error::EngineResult;
use crate::engine::fulfillment::{FulfillmentEngine, FulfillmentReport};
use crate::engine::inventory::{InventoryEngine, InventoryReport};
use crate::engine::supplier::{SupplierEngine, SupplierReport};
use crate::engine::trend::{MonthlyTrend, TrendEngine};
use serde::{Deserialize, Serialize};
use tracing::info;

// ==========================================
// ExecutiveSummary - 管理层摘要
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    /// 整体准时率（%）
    pub on_time_rate: f64,

    /// 平均送达耗时（天）
    pub avg_delivery_days: Option<f64>,

    /// 低库存条目数
    pub low_stock_items: usize,

    /// 积压条目数
    pub overstock_items: usize,

    /// 运费合计
    pub total_shipping_cost: f64,

    /// 绩效最佳仓库
    pub best_warehouse: String,

    /// 绩效最佳供应商
    pub top_supplier: String,
}

// ==========================================
// AnalysisResult - 一次运行的全部派生结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 订单派生事实表
    pub order_facts: Vec<OrderFact>,

    /// 履约指标
    pub fulfillment: FulfillmentReport,

    /// 库存指标
    pub inventory: InventoryReport,

    /// 供应商绩效
    pub supplier: SupplierReport,

    /// 成本指标
    pub cost: CostReport,

    /// 月度趋势
    pub trends: Vec<MonthlyTrend>,

    /// 管理层摘要
    pub summary: ExecutiveSummary,
}

// ==========================================
// AnalysisOrchestrator - 引擎编排器
// ==========================================
pub struct AnalysisOrchestrator {
    config: AnalysisConfig,
    derivation: OrderDerivation,
    fulfillment: FulfillmentEngine,
    inventory: InventoryEngine,
    supplier: SupplierEngine,
    trend: TrendEngine,
}

impl AnalysisOrchestrator {
    /// 创建新的编排器实例
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            derivation: OrderDerivation::new(),
            fulfillment: FulfillmentEngine::new(),
            inventory: InventoryEngine::new(),
            supplier: SupplierEngine::new(),
            trend: TrendEngine::new(),
            config,
        }
    }

    /// 执行完整分析流程
    ///
    /// # 参数
    /// - `orders` / `inventory` / `suppliers` / `shipments`: 四张只读输入快照
    ///
    /// # 返回
    /// 全部派生表与管理层摘要; 任一步失败即整体失败
    pub fn run(
        &self,
        orders: &[Order],
        inventory: &[InventoryItem],
        suppliers: &[Supplier],
        shipments: &[Shipment],
    ) -> EngineResult<AnalysisResult> {
        info!("开始分析: 订单 {} / 库存 {} / 供应商 {} / 运单 {}",
            orders.len(), inventory.len(), suppliers.len(), shipments.len());

        // 0. 派生列（独立成表,不回写快照）
        let order_facts = self.derivation.derive(orders);

        // 1. 履约指标
        info!("步骤 1/5: 履约指标");
        let fulfillment = self.fulfillment.analyze(orders, &order_facts)?;

        // 2. 库存指标
        info!("步骤 2/5: 库存指标");
        let inventory_report = self.inventory.analyze(inventory);

        // 3. 供应商绩效
        info!("步骤 3/5: 供应商绩效");
        let supplier_report = self.supplier.analyze(
            suppliers,
            self.config.top_suppliers,
            self.config.bottom_suppliers,
        )?;

        // 4. 成本指标
        info!("步骤 4/5: 成本指标");
        let cost_engine = CostEngine::new(
            self.config.join_policy,
            self.config.percentile_method,
            self.config.high_cost_quantile,
            self.config.savings_rate,
        );
        let cost = cost_engine.analyze(orders, shipments)?;

        // 5. 月度趋势
        info!("步骤 5/5: 月度趋势");
        let trends = self.trend.analyze(orders, &order_facts);

        let summary = ExecutiveSummary {
            on_time_rate: fulfillment.on_time_rate,
            avg_delivery_days: fulfillment.avg_delivery_days,
            low_stock_items: inventory_report.low_stock.len(),
            overstock_items: inventory_report.overstock.len(),
            total_shipping_cost: cost.total_shipping_cost,
            // 履约引擎保证订单非空,仓库排名至少一行
            best_warehouse: fulfillment
                .warehouses
                .first()
                .map(|w| w.warehouse.clone())
                .unwrap_or_default(),
            top_supplier: supplier_report
                .top
                .first()
                .map(|s| s.name.clone())
                .unwrap_or_default(),
        };

        info!("分析完成");
        Ok(AnalysisResult {
            order_facts,
            fulfillment,
            inventory: inventory_report,
            supplier: supplier_report,
            cost,
            trends,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::StockStatus;
    use chrono::{Duration, NaiveDate};

    fn order(id: &str, month: u32, on_time: bool, warehouse: &str, value: f64) -> Order {
        let d = NaiveDate::from_ymd_opt(2026, month, 10).unwrap();
        Order {
            order_id: id.to_string(),
            order_date: d,
            expected_delivery: d + Duration::days(5),
            actual_delivery: Some(d + Duration::days(if on_time { 4 } else { 7 })),
            on_time,
            warehouse: warehouse.to_string(),
            category: "Electronics".to_string(),
            total_value: value,
        }
    }

    fn fixture() -> (Vec<Order>, Vec<InventoryItem>, Vec<Supplier>, Vec<Shipment>) {
        let orders = vec![
            order("ORD01", 1, true, "Chicago", 500.0),
            order("ORD02", 1, false, "Dallas", 300.0),
            order("ORD03", 2, true, "Chicago", 700.0),
        ];
        let inventory = vec![InventoryItem {
            product: "Widget".to_string(),
            warehouse: "Chicago".to_string(),
            category: "Electronics".to_string(),
            current_stock: 10.0,
            reorder_point: 40.0,
            avg_monthly_demand: 30.0,
            days_of_inventory: 8.0,
            stock_status: StockStatus::LowStock,
        }];
        let suppliers = vec![Supplier {
            name: "Acme".to_string(),
            category: "Electronics".to_string(),
            on_time_rate: 90.0,
            quality_score: 95.0,
            defect_rate_pct: 1.0,
            total_orders: 100,
        }];
        let shipments = vec![Shipment {
            shipping_id: "SHP01".to_string(),
            order_id: "ORD01".to_string(),
            carrier: "FedEx".to_string(),
            shipping_method: "Ground".to_string(),
            cost: 45.0,
            distance_km: 320.0,
            weight_kg: 12.5,
        }];
        (orders, inventory, suppliers, shipments)
    }

    #[test]
    fn test_run_produces_all_reports_and_summary() {
        let (orders, inventory, suppliers, shipments) = fixture();
        let result = AnalysisOrchestrator::new(AnalysisConfig::default())
            .run(&orders, &inventory, &suppliers, &shipments)
            .unwrap();

        assert_eq!(result.fulfillment.total_orders, 3);
        assert_eq!(result.order_facts.len(), 3);
        assert_eq!(result.trends.len(), 2);
        assert_eq!(result.summary.low_stock_items, 1);
        assert_eq!(result.summary.top_supplier, "Acme");
        assert_eq!(result.summary.best_warehouse, "Chicago");
        // 未被运单引用的两单计入剔除观测
        assert_eq!(result.cost.dropped_orders, 2);
    }

    #[test]
    fn test_run_fails_fast_on_empty_orders() {
        let (_, inventory, suppliers, shipments) = fixture();
        let result = AnalysisOrchestrator::new(AnalysisConfig::default())
            .run(&[], &inventory, &suppliers, &shipments);
        assert!(result.is_err());
    }
}
