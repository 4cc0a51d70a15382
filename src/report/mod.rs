// ==========================================
// 供应链分析系统 - 报表层
// ==========================================
// 职责: 派生结果的人读呈现,不计算新指标
// ==========================================

pub mod text_report;

pub use text_report::render;
