// ==========================================
// 供应链分析系统 - 配置层
// ==========================================
// 职责: 分析运行参数管理,JSON 覆写 + 代码默认值
// ==========================================

pub mod analysis_config;

// 重导出核心配置类型
pub use analysis_config::{AnalysisConfig, InputPaths, JoinPolicy, PercentileMethod};
