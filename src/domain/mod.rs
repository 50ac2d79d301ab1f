// ==========================================
// 配电网KPI看板演示系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含合成逻辑, 不含导出逻辑
// ==========================================

pub mod dashboard;
pub mod kpi;
pub mod types;

// 重导出核心类型
pub use dashboard::{ChartItem, ChartView, DashboardAggregate, NameValue, TrendDataset};
pub use kpi::{DashboardSummaryRow, FormulaMeta, KpiRow, KpiSnapshot, KpiSpec};
pub use types::{MetricValue, ValueType};
