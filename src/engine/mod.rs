// ==========================================
// 供应链分析系统 - 引擎层
// ==========================================
// 职责: 指标计算管线,五大引擎 + 派生列服务
// 红线: 引擎无状态,只读输入快照,每步输出新派生表
// ==========================================

pub mod cost;
pub mod derivation;
pub mod error;
pub mod fulfillment;
pub mod inventory;
pub mod orchestrator;
pub mod supplier;
pub mod trend;

// 重导出核心引擎
pub use cost::{percentile, CarrierAnalysis, CostEngine, CostReport, JoinedShipment};
pub use derivation::{OrderDerivation, OrderFact};
pub use error::{EngineError, EngineResult};
pub use fulfillment::{FulfillmentEngine, FulfillmentReport, WarehousePerformance};
pub use inventory::{CategorySummary, InventoryEngine, InventoryReport, StatusCount};
pub use orchestrator::{AnalysisOrchestrator, AnalysisResult, ExecutiveSummary};
pub use supplier::{SupplierEngine, SupplierReport, SupplierScore};
pub use trend::{MonthlyTrend, TrendEngine};
