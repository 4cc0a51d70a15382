// ==========================================
// 供应链分析系统 - 批处理主入口
// ==========================================
// 技术栈: Rust + CSV/Excel
// 系统定位: 一次性批处理,加载 → 计算 → 报告/导出
// ==========================================

use anyhow::Context;
use supply_chain_analytics::config::{AnalysisConfig, InputPaths};
use supply_chain_analytics::engine::AnalysisOrchestrator;
use supply_chain_analytics::importer::DatasetLoader;
use supply_chain_analytics::{export, logging, report};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("供应链分析系统 - 决策支持报表");
    tracing::info!("系统版本: {}", supply_chain_analytics::VERSION);
    tracing::info!("==================================================");

    // 用法: supply-chain-analytics [数据目录|config.json]
    //   - 无参数: 当前目录下的默认文件名
    //   - 目录:   目录下的默认文件名
    //   - .json:  完整配置文件
    let config = match std::env::args().nth(1) {
        Some(arg) if arg.ends_with(".json") => {
            AnalysisConfig::from_file(&arg).with_context(|| format!("读取配置失败: {}", arg))?
        }
        Some(dir) => AnalysisConfig {
            input: InputPaths::in_dir(&dir),
            ..AnalysisConfig::default()
        },
        None => AnalysisConfig::default(),
    };

    // 加载四张输入表（任一失败即终止,不做部分加载）
    let loader = DatasetLoader;
    let orders = loader
        .load_orders(&config.input.orders)
        .context("订单表加载失败")?;
    let inventory = loader
        .load_inventory(&config.input.inventory)
        .context("库存表加载失败")?;
    let suppliers = loader
        .load_suppliers(&config.input.suppliers)
        .context("供应商表加载失败")?;
    let shipments = loader
        .load_shipments(&config.input.shipping)
        .context("运单表加载失败")?;

    // 执行分析管线
    let orchestrator = AnalysisOrchestrator::new(config.clone());
    let result = orchestrator
        .run(&orders, &inventory, &suppliers, &shipments)
        .context("指标计算失败")?;

    // 文本报告 → stdout
    print!("{}", report::render(&result));

    // 电子表格导出
    export::write_workbook(&result, &config.export_path)
        .with_context(|| format!("导出失败: {}", config.export_path.display()))?;
    println!("\nAnalysis results saved to: {}", config.export_path.display());

    Ok(())
}
