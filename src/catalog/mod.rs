// ==========================================
// 配电网KPI看板演示系统 - 静态目录层
// ==========================================
// 职责: KPI目录与口径对照表 (纯声明式数据)
// 红线: 引擎与具体KPI集合解耦, 换目录不改引擎
// ==========================================

pub mod formula_table;
pub mod kpi_catalog;

pub use formula_table::FORMULA_TABLE;
pub use kpi_catalog::KPI_CATALOG;
