// ==========================================
// 供应链分析系统 - 导出层
// ==========================================
// 职责: 派生结果的文件落盘 (xlsx / CSV)
// 红线: 不计算新指标,行序沿用派生表
// ==========================================

pub mod csv_tables;
pub mod error;
pub mod xlsx;

pub use csv_tables::{read_warehouse_csv, write_warehouse_csv};
pub use error::{ExportError, ExportResult};
pub use xlsx::write_workbook;
