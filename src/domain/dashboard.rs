// ==========================================
// 配电网KPI看板演示系统 - 看板聚合定义
// ==========================================
// 职责: 看板聚合结构与图表视图形状 (前端JSON契约)
// 红线: 构建阶段仅追加 (departments/kpis), 构建后不可变
// ==========================================

use crate::domain::kpi::KpiSnapshot;
use crate::domain::types::MetricValue;
use serde::Serialize;
use std::collections::BTreeMap;

// ==========================================
// 看板聚合 (Dashboard Aggregate)
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct DashboardAggregate {
    pub title: String,
    /// 部门集合, 首见顺序, 去重
    pub departments: Vec<String>,
    /// KPI序列, 目录顺序在本看板内的投影
    pub kpis: Vec<KpiSnapshot>,
    /// 图表键 -> 图表视图 (BTreeMap保证序列化顺序稳定)
    pub charts: BTreeMap<String, ChartView>,
}

impl DashboardAggregate {
    pub fn new(title: &str) -> Self {
        DashboardAggregate {
            title: title.to_string(),
            departments: Vec::new(),
            kpis: Vec::new(),
            charts: BTreeMap::new(),
        }
    }
}

// ==========================================
// 图表视图 (Chart View)
// ==========================================
// 无标签序列化: 每个变体直接落成前端约定的JSON形状
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChartView {
    /// 多序列趋势图 {labels, datasets}
    TrendSeries {
        labels: Vec<String>,
        datasets: Vec<TrendDataset>,
    },
    /// SAIDI/SAIFI 双序列可靠性趋势
    ReliabilityTrend {
        labels: Vec<String>,
        #[serde(rename = "SAIDI")]
        saidi: Vec<MetricValue>,
        #[serde(rename = "SAIFI")]
        saifi: Vec<MetricValue>,
    },
    /// 列表型图表 {name, value, unit}
    ValueList(Vec<ChartItem>),
    /// 列表型图表 {name, value} (无单位)
    NameValueList(Vec<NameValue>),
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendDataset {
    pub name: String,
    pub data: Vec<MetricValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartItem {
    pub name: String,
    pub value: MetricValue,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NameValue {
    pub name: String,
    pub value: MetricValue,
}
