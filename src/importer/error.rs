// ==========================================
// 供应链分析系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("必填字段缺失 (表 {relation}, 行 {row}): {field}")]
    FieldMissing {
        relation: &'static str,
        row: usize,
        field: &'static str,
    },

    #[error("类型转换失败 (表 {relation}, 行 {row}, 字段 {field}): {message}")]
    TypeConversionError {
        relation: &'static str,
        row: usize,
        field: &'static str,
        message: String,
    },

    #[error("日期格式错误 (表 {relation}, 行 {row}, 字段 {field}): 期望 YYYY-MM-DD，实际 {value}")]
    DateFormatError {
        relation: &'static str,
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("枚举取值非法 (表 {relation}, 行 {row}, 字段 {field}): {value}")]
    InvalidEnumValue {
        relation: &'static str,
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// 导入模块 Result 别名
pub type ImportResult<T> = Result<T, ImportError>;

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}
