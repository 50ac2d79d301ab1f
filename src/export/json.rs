// ==========================================
// 配电网KPI看板演示系统 - JSON导出
// ==========================================
// 职责: 看板聚合数据集落盘为前端消费的 dashboards.json
// ==========================================

use crate::domain::DashboardAggregate;
use crate::export::error::ExportError;
use std::collections::BTreeMap;
use std::path::Path;

/// 前端数据集文件名
pub const DASHBOARD_JSON_FILE: &str = "dashboards.json";

/// 写出看板数据集 (2空格缩进, 键序稳定)
pub fn write_dashboard_json(
    dashboards: &BTreeMap<String, DashboardAggregate>,
    out_path: &Path,
) -> Result<(), ExportError> {
    let text = serde_json::to_string_pretty(dashboards)?;
    std::fs::write(out_path, text)?;
    Ok(())
}
