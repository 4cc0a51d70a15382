// ==========================================
// 供应链分析系统 - 导入层
// ==========================================
// 职责: 外部数据导入,生成内部只读快照
// 支持: Excel, CSV
// 红线: 任何加载错误在指标计算前终止运行
// ==========================================

// 模块声明
pub mod dataset_loader;
pub mod error;
pub mod file_parser;

// 重导出核心类型
pub use dataset_loader::DatasetLoader;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
