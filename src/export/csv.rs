// ==========================================
// 配电网KPI看板演示系统 - CSV导出
// ==========================================
// 职责: KPI明细表与看板汇总表的CSV落盘
// ==========================================

use crate::domain::{DashboardSummaryRow, KpiRow};
use crate::export::error::ExportError;
use csv::Writer;
use std::path::Path;

/// KPI明细文件名
pub const KPI_CSV_FILE: &str = "KPI_Dummy_Dataset.csv";
/// 看板汇总文件名
pub const SUMMARY_CSV_FILE: &str = "KPI_Summary_by_Dashboard.csv";

// 明细表表头 (与 xlsx KPI_Data 工作表一致)
pub const KPI_DATA_HEADER: &[&str] = &[
    "Dashboard Name",
    "Department",
    "KPI Name",
    "Exact Formula",
    "Required Data (Profile + Columns)",
    "Columns Used",
    "Formula / Logic Used",
    "Value",
    "Unit",
    "Period",
];

// 汇总表表头
pub const SUMMARY_HEADER: &[&str] = &["Dashboard Name", "KPIs", "Departments"];

/// 写出KPI明细CSV
pub fn write_kpi_rows_csv(rows: &[KpiRow], out_path: &Path) -> Result<(), ExportError> {
    let mut writer = Writer::from_path(out_path)?;
    writer.write_record(KPI_DATA_HEADER)?;
    for row in rows {
        writer.write_record(&kpi_row_cells(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// 写出看板汇总CSV
pub fn write_summary_csv(
    summary: &[DashboardSummaryRow],
    out_path: &Path,
) -> Result<(), ExportError> {
    let mut writer = Writer::from_path(out_path)?;
    writer.write_record(SUMMARY_HEADER)?;
    for row in summary {
        writer.write_record(&[
            row.dashboard_name.clone(),
            row.kpi_count.to_string(),
            row.department_count.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// 明细行展开为单元格序列 (表头顺序)
pub fn kpi_row_cells(row: &KpiRow) -> Vec<String> {
    vec![
        row.dashboard_name.clone(),
        row.department.clone(),
        row.kpi_name.clone(),
        row.exact_formula.clone(),
        row.required_data.clone(),
        row.columns_used.clone(),
        row.formula_logic.clone(),
        row.value.to_string(),
        row.unit.clone(),
        row.period.clone(),
    ]
}
