// ==========================================
// 配电网KPI看板演示系统 - KPI实体定义
// ==========================================
// 职责: KPI定义 / 合成快照 / 口径记录 / 导出行
// 红线: 实体构建后不可变, 不含合成逻辑
// ==========================================

use crate::domain::types::MetricValue;
use crate::domain::ValueType;
use serde::Serialize;

// ==========================================
// KPI定义 (目录记录)
// ==========================================
// 来源: 静态目录表, 字段均为编译期常量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiSpec {
    pub dashboard_id: &'static str,
    pub department: &'static str,
    pub name: &'static str,
    pub value_type: ValueType,
    pub range_low: f64,
    pub range_high: f64,
    pub unit: &'static str,
}

// ==========================================
// KPI合成快照
// ==========================================
// 一次生成运行产出一条; trend 仅对可出图类型存在
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSnapshot {
    pub name: String,
    pub department: String,
    pub value: MetricValue,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Vec<MetricValue>>,
}

// ==========================================
// 指标口径记录 (Formula Metadata)
// ==========================================
// 四个描述性字段, 仅作标注, 从不求值
// 缺失口径用全空记录表示, 不是错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaMeta {
    pub exact_formula: &'static str,
    pub required_data: &'static str,
    pub columns_used: &'static str,
    pub formula_logic: &'static str,
}

impl FormulaMeta {
    /// 空口径记录 (未命中时的哨兵值)
    pub const EMPTY: FormulaMeta = FormulaMeta {
        exact_formula: "",
        required_data: "",
        columns_used: "",
        formula_logic: "",
    };

    pub fn is_empty(&self) -> bool {
        self.exact_formula.is_empty()
            && self.required_data.is_empty()
            && self.columns_used.is_empty()
            && self.formula_logic.is_empty()
    }
}

// ==========================================
// 表格导出行
// ==========================================
/// 明细表一行: 每个KPI一条
#[derive(Debug, Clone, Serialize)]
pub struct KpiRow {
    pub dashboard_name: String,
    pub department: String,
    pub kpi_name: String,
    pub exact_formula: String,
    pub required_data: String,
    pub columns_used: String,
    pub formula_logic: String,
    pub value: MetricValue,
    pub unit: String,
    pub period: String,
}

/// 汇总表一行: 每个看板的KPI数与去重部门数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummaryRow {
    pub dashboard_name: String,
    pub kpi_count: usize,
    pub department_count: usize,
}
