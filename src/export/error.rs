// ==========================================
// 供应链分析系统 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("电子表格写入失败: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV 写入/读取失败: {0}")]
    CsvError(#[from] csv::Error),

    #[error("文件操作失败: {0}")]
    IoError(#[from] std::io::Error),
}

/// 导出模块 Result 别名
pub type ExportResult<T> = Result<T, ExportError>;
