// ==========================================
// 供应链分析系统 - 分析配置
// ==========================================
// 职责: 一次分析运行的全部可调参数
// 存储: 可选 JSON 配置文件,缺省使用默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ==========================================
// 连接策略 (Join Policy)
// ==========================================
// 订单×运单成本合并的显式策略; 目前仅内连接,
// 但未匹配行数始终被统计并输出,不做静默丢弃
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinPolicy {
    #[default]
    Inner,
}

// ==========================================
// 分位数插值方法 (Percentile Method)
// ==========================================
// 高运费阈值的插值口径必须显式固定,
// 不同口径会改变高成本运单数与节省估算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileMethod {
    /// 顺序统计量间线性插值（canonical 口径）
    #[default]
    Linear,
    /// 最近秩
    NearestRank,
}

/// 四张输入表的文件路径
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputPaths {
    #[serde(default = "default_orders_path")]
    pub orders: PathBuf,
    #[serde(default = "default_inventory_path")]
    pub inventory: PathBuf,
    #[serde(default = "default_supplier_path")]
    pub suppliers: PathBuf,
    #[serde(default = "default_shipping_path")]
    pub shipping: PathBuf,
}

fn default_orders_path() -> PathBuf {
    PathBuf::from("orders_data.csv")
}
fn default_inventory_path() -> PathBuf {
    PathBuf::from("inventory_data.csv")
}
fn default_supplier_path() -> PathBuf {
    PathBuf::from("supplier_performance.csv")
}
fn default_shipping_path() -> PathBuf {
    PathBuf::from("shipping_costs.csv")
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            orders: default_orders_path(),
            inventory: default_inventory_path(),
            suppliers: default_supplier_path(),
            shipping: default_shipping_path(),
        }
    }
}

impl InputPaths {
    /// 以数据目录为根拼接四个默认文件名
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            orders: dir.join("orders_data.csv"),
            inventory: dir.join("inventory_data.csv"),
            suppliers: dir.join("supplier_performance.csv"),
            shipping: dir.join("shipping_costs.csv"),
        }
    }
}

// ==========================================
// AnalysisConfig - 分析运行配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// 输入文件路径
    #[serde(default)]
    pub input: InputPaths,

    /// 成本合并连接策略
    #[serde(default)]
    pub join_policy: JoinPolicy,

    /// 分位数插值方法
    #[serde(default)]
    pub percentile_method: PercentileMethod,

    /// 高运费阈值分位（0~1）
    #[serde(default = "default_high_cost_quantile")]
    pub high_cost_quantile: f64,

    /// 路线优化节省估算比例（示意值,非预测）
    #[serde(default = "default_savings_rate")]
    pub savings_rate: f64,

    /// 头部供应商选取数
    #[serde(default = "default_top_suppliers")]
    pub top_suppliers: usize,

    /// 尾部供应商选取数
    #[serde(default = "default_bottom_suppliers")]
    pub bottom_suppliers: usize,

    /// 电子表格导出路径
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
}

fn default_high_cost_quantile() -> f64 {
    0.90
}
fn default_savings_rate() -> f64 {
    0.15
}
fn default_top_suppliers() -> usize {
    5
}
fn default_bottom_suppliers() -> usize {
    3
}
fn default_export_path() -> PathBuf {
    PathBuf::from("supply_chain_analysis_results.xlsx")
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: InputPaths::default(),
            join_policy: JoinPolicy::default(),
            percentile_method: PercentileMethod::default(),
            high_cost_quantile: default_high_cost_quantile(),
            savings_rate: default_savings_rate(),
            top_suppliers: default_top_suppliers(),
            bottom_suppliers: default_bottom_suppliers(),
            export_path: default_export_path(),
        }
    }
}

impl AnalysisConfig {
    /// 从 JSON 配置文件加载; 缺失字段取默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
