// ==========================================
// 配电网KPI看板演示系统 - xlsx导出 (可选特性)
// ==========================================
// 职责: KPI_Data 明细表 + Summary_by_Dashboard 汇总表落盘
// 特性: xlsx-export 未启用时拒绝执行并明示缺失组件
// 列宽: max(min(最长单元格, 60) + 2, 10), 按字符数计
// ==========================================

use crate::export::error::ExportError;

/// xlsx工作簿文件名
pub const KPI_XLSX_FILE: &str = "KPI_Dummy_Dataset.xlsx";

/// 检查xlsx导出组件是否编译进当前可执行文件
#[cfg(feature = "xlsx-export")]
pub fn ensure_available() -> Result<(), ExportError> {
    Ok(())
}

#[cfg(not(feature = "xlsx-export"))]
pub fn ensure_available() -> Result<(), ExportError> {
    Err(ExportError::XlsxFeatureDisabled)
}

#[cfg(feature = "xlsx-export")]
pub use enabled::write_kpi_workbook;

#[cfg(not(feature = "xlsx-export"))]
pub fn write_kpi_workbook(
    _rows: &[crate::domain::KpiRow],
    _summary: &[crate::domain::DashboardSummaryRow],
    _out_path: &std::path::Path,
) -> Result<(), ExportError> {
    Err(ExportError::XlsxFeatureDisabled)
}

#[cfg(feature = "xlsx-export")]
mod enabled {
    use super::*;
    use crate::domain::{DashboardSummaryRow, KpiRow};
    use crate::export::csv::{kpi_row_cells, KPI_DATA_HEADER, SUMMARY_HEADER};
    use rust_xlsxwriter::{Workbook, Worksheet};
    use std::path::Path;

    // 单元格计宽上限与列宽下限
    const MAX_CELL_CHARS: usize = 60;
    const MIN_COLUMN_WIDTH: usize = 10;

    /// 写出双工作表工作簿并自适应列宽
    pub fn write_kpi_workbook(
        rows: &[KpiRow],
        summary: &[DashboardSummaryRow],
        out_path: &Path,
    ) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();

        {
            let sheet = workbook.add_worksheet();
            sheet.set_name("KPI_Data")?;
            let mut widths = header_widths(KPI_DATA_HEADER);
            write_header(sheet, KPI_DATA_HEADER)?;
            for (i, row) in rows.iter().enumerate() {
                let r = (i + 1) as u32;
                let cells = kpi_row_cells(row);
                for (c, cell) in cells.iter().enumerate() {
                    // Value 列写数值, 其余写文本
                    if c == 7 {
                        sheet.write_number(r, c as u16, row.value.as_f64())?;
                    } else {
                        sheet.write_string(r, c as u16, cell.as_str())?;
                    }
                    track_width(&mut widths, c, cell);
                }
            }
            apply_widths(sheet, &widths)?;
        }

        {
            let sheet = workbook.add_worksheet();
            sheet.set_name("Summary_by_Dashboard")?;
            let mut widths = header_widths(SUMMARY_HEADER);
            write_header(sheet, SUMMARY_HEADER)?;
            for (i, row) in summary.iter().enumerate() {
                let r = (i + 1) as u32;
                sheet.write_string(r, 0, row.dashboard_name.as_str())?;
                sheet.write_number(r, 1, row.kpi_count as f64)?;
                sheet.write_number(r, 2, row.department_count as f64)?;
                track_width(&mut widths, 0, &row.dashboard_name);
                track_width(&mut widths, 1, &row.kpi_count.to_string());
                track_width(&mut widths, 2, &row.department_count.to_string());
            }
            apply_widths(sheet, &widths)?;
        }

        workbook.save(out_path)?;
        Ok(())
    }

    fn write_header(sheet: &mut Worksheet, header: &[&str]) -> Result<(), ExportError> {
        for (c, title) in header.iter().enumerate() {
            sheet.write_string(0, c as u16, *title)?;
        }
        Ok(())
    }

    fn header_widths(header: &[&str]) -> Vec<usize> {
        header.iter().map(|h| cell_chars(h)).collect()
    }

    fn track_width(widths: &mut [usize], col: usize, cell: &str) {
        if let Some(width) = widths.get_mut(col) {
            *width = (*width).max(cell_chars(cell));
        }
    }

    fn apply_widths(sheet: &mut Worksheet, widths: &[usize]) -> Result<(), ExportError> {
        for (c, max_chars) in widths.iter().enumerate() {
            let width = (max_chars + 2).max(MIN_COLUMN_WIDTH);
            sheet.set_column_width(c as u16, width as f64)?;
        }
        Ok(())
    }

    // 多字节符号按字符计数, 超长单元格截断计宽
    fn cell_chars(cell: &str) -> usize {
        cell.chars().count().min(MAX_CELL_CHARS)
    }
}
