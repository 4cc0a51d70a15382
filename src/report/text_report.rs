// ==========================================
// 供应链分析系统 - 文本报告渲染
// ==========================================
// 职责: 将 AnalysisResult 渲染为分节控制台报告
// 红线: 纯展示,不计算任何新指标
// ==========================================

use crate::engine::AnalysisResult;
use std::fmt::Write;

const RULE: &str = "================================================================================";

/// 渲染完整文本报告
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    // 写 String 不会失败,统一忽略 fmt::Result
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "SUPPLY CHAIN ANALYTICS - COMPREHENSIVE ANALYSIS");
    let _ = writeln!(out, "{}", RULE);

    render_fulfillment(&mut out, result);
    render_inventory(&mut out, result);
    render_suppliers(&mut out, result);
    render_cost(&mut out, result);
    render_trends(&mut out, result);
    render_insights(&mut out, result);

    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "ANALYSIS COMPLETE");
    let _ = writeln!(out, "{}", RULE);

    out
}

fn render_fulfillment(out: &mut String, result: &AnalysisResult) {
    let f = &result.fulfillment;
    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "ORDER FULFILLMENT METRICS");
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "\n   Total Orders: {}", f.total_orders);
    let _ = writeln!(out, "   On-Time Delivery Rate: {:.1}%", f.on_time_rate);
    let _ = writeln!(out, "   Average Delivery Time: {}", fmt_opt_days(f.avg_delivery_days));
    let _ = writeln!(out, "   Late Deliveries: {} ({:.1}%)", f.late_orders, f.late_rate);
    let _ = writeln!(out, "   Average Delay (when late): {}", fmt_opt_days(f.avg_delay_days));

    let _ = writeln!(out, "\n   Performance by Warehouse:");
    let _ = writeln!(
        out,
        "   {:<15} {:>8} {:>12} {:>14} {:>10}",
        "Warehouse", "Orders", "On-Time %", "Revenue", "Avg Days"
    );
    for w in &f.warehouses {
        let _ = writeln!(
            out,
            "   {:<15} {:>8} {:>12.2} {:>14.2} {:>10}",
            w.warehouse,
            w.total_orders,
            w.on_time_rate,
            w.total_revenue,
            w.avg_delivery_days
                .map(|d| format!("{:.2}", d))
                .unwrap_or_else(|| "-".to_string()),
        );
    }
}

fn render_inventory(out: &mut String, result: &AnalysisResult) {
    let inv = &result.inventory;
    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "INVENTORY OPTIMIZATION ANALYSIS");
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "\n   Inventory Status Distribution:");
    for entry in &inv.status_distribution {
        let _ = writeln!(
            out,
            "   - {}: {} items ({:.1}%)",
            entry.status, entry.count, entry.pct
        );
    }

    let _ = writeln!(out, "\n   Low Stock Alerts: {} items need reordering", inv.low_stock.len());
    let _ = writeln!(out, "   Overstock Alerts: {} items have excess inventory", inv.overstock.len());

    if !inv.low_stock.is_empty() {
        let _ = writeln!(out, "\n   Top 10 Critical Low Stock Items:");
        let _ = writeln!(
            out,
            "   {:<20} {:<12} {:>8} {:>9} {:>10}",
            "Product", "Warehouse", "Stock", "Reorder", "Days Left"
        );
        for item in inv.low_stock.iter().take(10) {
            let _ = writeln!(
                out,
                "   {:<20} {:<12} {:>8.0} {:>9.0} {:>10.1}",
                item.product,
                item.warehouse,
                item.current_stock,
                item.reorder_point,
                item.days_of_inventory
            );
        }
    }

    let _ = writeln!(out, "\n   Inventory Metrics by Category:");
    let _ = writeln!(
        out,
        "   {:<15} {:>10} {:>12} {:>10} {:>10}",
        "Category", "Stock", "Mo. Demand", "Avg Days", "Turnover"
    );
    for cat in &inv.categories {
        let _ = writeln!(
            out,
            "   {:<15} {:>10.0} {:>12.0} {:>10.2} {:>10}",
            cat.category,
            cat.total_stock,
            cat.total_monthly_demand,
            cat.avg_days_of_inventory,
            fmt_ratio(cat.turnover_ratio),
        );
    }
}

fn render_suppliers(out: &mut String, result: &AnalysisResult) {
    let sup = &result.supplier;
    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "SUPPLIER PERFORMANCE EVALUATION");
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "\n   Average On-Time Delivery: {:.1}%", sup.avg_on_time_rate);
    let _ = writeln!(out, "   Average Quality Score: {:.1}/100", sup.avg_quality_score);
    let _ = writeln!(out, "   Average Defect Rate: {:.2}%", sup.avg_defect_rate);

    let _ = writeln!(out, "\n   Top {} Performing Suppliers:", sup.top.len());
    render_supplier_table(out, &sup.top);

    let _ = writeln!(out, "\n   Suppliers Requiring Improvement:");
    render_supplier_table(out, &sup.bottom);
}

fn render_supplier_table(out: &mut String, rows: &[crate::engine::SupplierScore]) {
    let _ = writeln!(
        out,
        "   {:<20} {:<15} {:>10} {:>9} {:>8}",
        "Supplier", "Category", "On-Time %", "Quality", "Score"
    );
    for s in rows {
        let _ = writeln!(
            out,
            "   {:<20} {:<15} {:>10.1} {:>9.1} {:>8.2}",
            s.name, s.category, s.on_time_rate, s.quality_score, s.performance_score
        );
    }
}

fn render_cost(out: &mut String, result: &AnalysisResult) {
    let cost = &result.cost;
    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "COST ANALYSIS & OPTIMIZATION OPPORTUNITIES");
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "\n   Total Order Value: ${:.2}", cost.total_order_value);
    let _ = writeln!(out, "   Total Shipping Cost: ${:.2}", cost.total_shipping_cost);
    match cost.shipping_pct_of_value {
        Some(pct) => {
            let _ = writeln!(out, "   Shipping as % of Order Value: {:.2}%", pct);
        }
        None => {
            let _ = writeln!(out, "   Shipping as % of Order Value: undefined (no order value)");
        }
    }
    if cost.dropped_shipments > 0 || cost.dropped_orders > 0 {
        let _ = writeln!(
            out,
            "   (join excluded {} shipments without orders, {} orders without shipments)",
            cost.dropped_shipments, cost.dropped_orders
        );
    }

    let _ = writeln!(out, "\n   Shipping Cost Analysis by Carrier:");
    let _ = writeln!(
        out,
        "   {:<15} {:>9} {:>12} {:>10} {:>10} {:>10}",
        "Carrier", "Shipments", "Total Cost", "Avg Cost", "Avg KM", "Cost/KM"
    );
    for c in &cost.carriers {
        let _ = writeln!(
            out,
            "   {:<15} {:>9} {:>12.2} {:>10.2} {:>10.2} {:>10}",
            c.carrier,
            c.shipments,
            c.total_cost,
            c.avg_cost,
            c.avg_distance_km,
            c.cost_per_km
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    if let Some(threshold) = cost.high_cost_threshold {
        let _ = writeln!(
            out,
            "\n   High-Cost Shipments (>{:.2}, 90th percentile): {}",
            threshold,
            cost.high_cost_shipments.len()
        );
        let _ = writeln!(
            out,
            "   Potential savings from route optimization: ${:.2} (15% reduction)",
            cost.projected_savings
        );
    }
}

fn render_trends(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "TREND ANALYSIS");
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "\n   Recent Monthly Performance (Last 6 Months):");
    let _ = writeln!(
        out,
        "   {:<9} {:>7} {:>12} {:>10} {:>10} {:>11}",
        "Month", "Orders", "Revenue", "On-Time %", "Order Gr%", "Revenue Gr%"
    );
    let start = result.trends.len().saturating_sub(6);
    for row in &result.trends[start..] {
        let _ = writeln!(
            out,
            "   {:<9} {:>7} {:>12.2} {:>10.2} {:>10} {:>11}",
            row.year_month,
            row.orders,
            row.revenue,
            row.on_time_rate,
            fmt_opt_pct(row.order_growth_pct),
            fmt_opt_pct(row.revenue_growth_pct),
        );
    }
}

fn render_insights(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "KEY INSIGHTS & RECOMMENDATIONS");
    let _ = writeln!(out, "{}", RULE);

    let summary = &result.summary;
    let _ = writeln!(out, "\n   STRENGTHS:");
    let _ = writeln!(
        out,
        "   + Overall on-time delivery rate of {:.1}%",
        summary.on_time_rate
    );
    if let Some(best) = result.fulfillment.warehouses.first() {
        let _ = writeln!(
            out,
            "   + {} warehouse leads with {:.1}% on-time rate",
            best.warehouse, best.on_time_rate
        );
    }

    let _ = writeln!(out, "\n   OPPORTUNITIES FOR IMPROVEMENT:");
    let _ = writeln!(
        out,
        "   - {} items at low stock - implement automated reordering",
        summary.low_stock_items
    );
    let _ = writeln!(
        out,
        "   - {} items overstocked - optimize inventory levels",
        summary.overstock_items
    );
    let _ = writeln!(
        out,
        "   - {} late deliveries - strengthen supplier relationships",
        result.fulfillment.late_orders
    );
}

fn fmt_opt_days(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1} days", v),
        None => "undefined".to_string(),
    }
}

fn fmt_opt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

fn fmt_ratio(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.2}", value)
    }
}
