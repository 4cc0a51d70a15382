// ==========================================
// 供应链分析系统 - 派生表 CSV 读写
// ==========================================
// 职责: 仓库绩效表的 CSV 落盘与回读
// 红线: 行序是存储属性,回读不重新排序
// ==========================================

use crate::engine::WarehousePerformance;
use crate::export::error::ExportResult;
use std::path::Path;

/// 仓库绩效表写出为 CSV（沿用表内行序）
pub fn write_warehouse_csv<P: AsRef<Path>>(
    rows: &[WarehousePerformance],
    path: P,
) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// 回读仓库绩效表 CSV（保持文件行序）
pub fn read_warehouse_csv<P: AsRef<Path>>(path: P) -> ExportResult<Vec<WarehousePerformance>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
