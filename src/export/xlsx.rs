// ==========================================
// 供应链分析系统 - 电子表格导出
// ==========================================
// 职责: AnalysisResult → 多工作表 xlsx
// 工作表: Warehouse_Performance / Supplier_Rankings /
//         Inventory_Summary / Carrier_Analysis /
//         Monthly_Trends / Executive_Summary
// 红线: 纯展示,行序沿用派生表存储顺序
// ==========================================

use crate::engine::AnalysisResult;
use crate::export::error::ExportResult;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// 将分析结果写出为多工作表 xlsx 文件
pub fn write_workbook<P: AsRef<Path>>(result: &AnalysisResult, path: P) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    write_warehouse_sheet(workbook.add_worksheet(), result, &header)?;
    write_supplier_sheet(workbook.add_worksheet(), result, &header)?;
    write_inventory_sheet(workbook.add_worksheet(), result, &header)?;
    write_carrier_sheet(workbook.add_worksheet(), result, &header)?;
    write_trend_sheet(workbook.add_worksheet(), result, &header)?;
    write_summary_sheet(workbook.add_worksheet(), result, &header)?;

    workbook.save(path.as_ref())?;
    tracing::info!("分析结果已导出: {}", path.as_ref().display());
    Ok(())
}

fn write_header(sheet: &mut Worksheet, titles: &[&str], format: &Format) -> ExportResult<()> {
    for (col, title) in titles.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, format)?;
    }
    Ok(())
}

fn write_warehouse_sheet(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> ExportResult<()> {
    sheet.set_name("Warehouse_Performance")?;
    write_header(
        sheet,
        &["Warehouse", "Total_Orders", "On_Time_Rate_%", "Total_Revenue", "Avg_Delivery_Days"],
        header,
    )?;

    for (i, w) in result.fulfillment.warehouses.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &w.warehouse)?;
        sheet.write_number(row, 1, w.total_orders as f64)?;
        sheet.write_number(row, 2, w.on_time_rate)?;
        sheet.write_number(row, 3, w.total_revenue)?;
        match w.avg_delivery_days {
            Some(days) => sheet.write_number(row, 4, days)?,
            None => sheet.write_string(row, 4, "")?,
        };
    }
    Ok(())
}

fn write_supplier_sheet(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> ExportResult<()> {
    sheet.set_name("Supplier_Rankings")?;
    write_header(
        sheet,
        &[
            "Supplier",
            "Category",
            "On_Time_Delivery_Rate",
            "Quality_Score",
            "Defect_Rate_Percent",
            "Total_Orders",
            "Performance_Score",
        ],
        header,
    )?;

    // ranked 已按评分降序
    for (i, s) in result.supplier.ranked.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &s.name)?;
        sheet.write_string(row, 1, &s.category)?;
        sheet.write_number(row, 2, s.on_time_rate)?;
        sheet.write_number(row, 3, s.quality_score)?;
        sheet.write_number(row, 4, s.defect_rate_pct)?;
        sheet.write_number(row, 5, s.total_orders as f64)?;
        sheet.write_number(row, 6, s.performance_score)?;
    }
    Ok(())
}

fn write_inventory_sheet(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> ExportResult<()> {
    sheet.set_name("Inventory_Summary")?;
    write_header(
        sheet,
        &["Category", "Current_Stock", "Avg_Monthly_Demand", "Days_of_Inventory", "Turnover_Ratio"],
        header,
    )?;

    for (i, cat) in result.inventory.categories.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &cat.category)?;
        sheet.write_number(row, 1, cat.total_stock)?;
        sheet.write_number(row, 2, cat.total_monthly_demand)?;
        sheet.write_number(row, 3, cat.avg_days_of_inventory)?;
        // ∞ 哨兵写为字符串,xlsx 数值单元格不接受 inf
        if cat.turnover_ratio.is_infinite() {
            sheet.write_string(row, 4, "inf")?;
        } else {
            sheet.write_number(row, 4, cat.turnover_ratio)?;
        }
    }
    Ok(())
}

fn write_carrier_sheet(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> ExportResult<()> {
    sheet.set_name("Carrier_Analysis")?;
    write_header(
        sheet,
        &["Carrier", "Shipments", "Total_Cost", "Avg_Cost", "Avg_Distance", "Cost_per_KM"],
        header,
    )?;

    for (i, c) in result.cost.carriers.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &c.carrier)?;
        sheet.write_number(row, 1, c.shipments as f64)?;
        sheet.write_number(row, 2, c.total_cost)?;
        sheet.write_number(row, 3, c.avg_cost)?;
        sheet.write_number(row, 4, c.avg_distance_km)?;
        match c.cost_per_km {
            Some(v) => sheet.write_number(row, 5, v)?,
            None => sheet.write_string(row, 5, "")?,
        };
    }
    Ok(())
}

fn write_trend_sheet(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> ExportResult<()> {
    sheet.set_name("Monthly_Trends")?;
    write_header(
        sheet,
        &["Year_Month", "Orders", "Revenue", "On_Time_Rate_%", "Order_Growth_%", "Revenue_Growth_%"],
        header,
    )?;

    for (i, t) in result.trends.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &t.year_month)?;
        sheet.write_number(row, 1, t.orders as f64)?;
        sheet.write_number(row, 2, t.revenue)?;
        sheet.write_number(row, 3, t.on_time_rate)?;
        match t.order_growth_pct {
            Some(v) => sheet.write_number(row, 4, v)?,
            None => sheet.write_string(row, 4, "")?,
        };
        match t.revenue_growth_pct {
            Some(v) => sheet.write_number(row, 5, v)?,
            None => sheet.write_string(row, 5, "")?,
        };
    }
    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    header: &Format,
) -> ExportResult<()> {
    sheet.set_name("Executive_Summary")?;
    write_header(sheet, &["Metric", "Value"], header)?;

    let s = &result.summary;
    let rows: Vec<(&str, String)> = vec![
        ("On-Time Delivery Rate", format!("{:.1}%", s.on_time_rate)),
        (
            "Average Delivery Time (days)",
            s.avg_delivery_days
                .map(|d| format!("{:.1}", d))
                .unwrap_or_else(|| "undefined".to_string()),
        ),
        ("Low Stock Items", s.low_stock_items.to_string()),
        ("Overstock Items", s.overstock_items.to_string()),
        ("Total Shipping Cost", format!("${:.2}", s.total_shipping_cost)),
        ("Best Performing Warehouse", s.best_warehouse.clone()),
        ("Top Supplier", s.top_supplier.clone()),
    ];

    for (i, (metric, value)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, *metric)?;
        sheet.write_string(row, 1, value)?;
    }
    Ok(())
}
