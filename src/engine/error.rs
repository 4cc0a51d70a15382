// ==========================================
// 供应链分析系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 口径: 空关系导致的除零必须显式报错,
//       过滤后可能为空的比率返回 None/哨兵,不报错
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("输入关系为空: {relation}（步骤 {step} 无法计算比率）")]
    EmptyRelation {
        relation: &'static str,
        step: &'static str,
    },

    #[error("分位取值非法: {0}（要求 0 ≤ q ≤ 1）")]
    InvalidQuantile(f64),
}

/// 引擎层 Result 别名
pub type EngineResult<T> = Result<T, EngineError>;
