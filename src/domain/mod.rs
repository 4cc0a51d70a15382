// ==========================================
// 供应链分析系统 - 领域模型层
// ==========================================
// 职责: 定义四张输入表的实体与共享类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// 红线: 实体为只读快照,一次运行内不增删改
// ==========================================

pub mod inventory;
pub mod order;
pub mod shipment;
pub mod supplier;
pub mod types;

// 重导出核心类型
pub use inventory::InventoryItem;
pub use order::Order;
pub use shipment::Shipment;
pub use supplier::Supplier;
pub use types::StockStatus;
