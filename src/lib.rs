// ==========================================
// 供应链分析系统 - 核心库
// ==========================================
// 技术栈: Rust + CSV/Excel + rust_xlsxwriter
// 系统定位: 回顾性业务报表 (单次批处理)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 指标计算
pub mod engine;

// 配置层 - 分析配置
pub mod config;

// 报表层 - 文本报告
pub mod report;

// 导出层 - 电子表格 / CSV
pub mod export;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::StockStatus;

// 领域实体
pub use domain::{InventoryItem, Order, Shipment, Supplier};

// 引擎
pub use engine::{
    AnalysisOrchestrator, AnalysisResult, CostEngine, ExecutiveSummary, FulfillmentEngine,
    InventoryEngine, OrderDerivation, SupplierEngine, TrendEngine,
};

// 配置
pub use config::{AnalysisConfig, JoinPolicy, PercentileMethod};

/// 系统版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
