// ==========================================
// 配电网KPI看板演示系统 - 导出层
// ==========================================
// 职责: 数据集落盘 (JSON / CSV / xlsx)
// 红线: 导出层只消费装配结果, 不触碰随机流
// ==========================================

pub mod csv;
pub mod error;
pub mod json;
pub mod xlsx;

pub use error::ExportError;
pub use json::{write_dashboard_json, DASHBOARD_JSON_FILE};
pub use xlsx::KPI_XLSX_FILE;

pub use self::csv::{KPI_CSV_FILE, SUMMARY_CSV_FILE};
