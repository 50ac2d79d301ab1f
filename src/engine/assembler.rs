// ==========================================
// 配电网KPI看板演示系统 - 数据集装配引擎
// ==========================================
// 职责: 单次线性遍历目录, 装配看板聚合 / 导出行 / 汇总行
// 红线: 每次装配从种子重建随机流, 同种子输出逐字节一致
// 红线: 看板内KPI顺序 = 目录顺序在该看板的投影
// ==========================================

use crate::config::PeriodWindow;
use crate::domain::{
    DashboardAggregate, DashboardSummaryRow, KpiRow, KpiSnapshot, KpiSpec,
};
use crate::engine::charts;
use crate::engine::formula::FormulaResolver;
use crate::engine::synthesizer::KpiSynthesizer;
use std::collections::BTreeMap;

// ==========================================
// DatasetAssembler - 数据集装配器
// ==========================================
pub struct DatasetAssembler<'a> {
    catalog: &'a [KpiSpec],
    seed: u64,
    periods: PeriodWindow,
}

impl<'a> DatasetAssembler<'a> {
    pub fn new(catalog: &'a [KpiSpec], seed: u64, periods: PeriodWindow) -> Self {
        DatasetAssembler {
            catalog,
            seed,
            periods,
        }
    }

    /// 装配全部看板聚合 (前端JSON数据集)
    ///
    /// 目录顺序单次遍历: 合成当期值, 可出图类型再合成趋势,
    /// 部门按首见顺序去重累积, KPI追加到所属看板。
    /// 看板聚合在首见其ID时创建, 引擎不依赖具体看板集合。
    pub fn assemble(&self) -> BTreeMap<String, DashboardAggregate> {
        let mut synth = KpiSynthesizer::new(self.seed);
        let labels = self.periods.labels();
        let mut dashboards: BTreeMap<String, DashboardAggregate> = BTreeMap::new();

        for spec in self.catalog {
            let value = synth.synthesize_value(spec.value_type, spec.range_low, spec.range_high);
            let trend = if spec.value_type.is_chartable() {
                Some(synth.synthesize_trend(
                    spec.value_type,
                    spec.range_low,
                    spec.range_high,
                    value,
                    self.periods.count(),
                ))
            } else {
                None
            };

            let aggregate = dashboards
                .entry(spec.dashboard_id.to_string())
                .or_insert_with(|| DashboardAggregate::new(spec.dashboard_id));
            if !aggregate.departments.iter().any(|d| d == spec.department) {
                aggregate.departments.push(spec.department.to_string());
            }
            aggregate.kpis.push(KpiSnapshot {
                name: spec.name.to_string(),
                department: spec.department.to_string(),
                value,
                unit: spec.unit.to_string(),
                trend,
            });
        }

        // 图表视图为装配后派生, 不参与随机流
        for (dashboard_id, aggregate) in dashboards.iter_mut() {
            aggregate.charts = charts::derive_charts(dashboard_id, &labels, &aggregate.kpis);
        }
        dashboards
    }

    /// 生成表格导出行 (每KPI一行, 附口径记录) 与看板汇总行
    ///
    /// 独立于 assemble 的一次完整合成遍历, 与原始导出脚本的
    /// 两个入口各自持有随机流的行为一致。
    pub fn tabulate(&self) -> (Vec<KpiRow>, Vec<DashboardSummaryRow>) {
        let mut synth = KpiSynthesizer::new(self.seed);
        let period = self.periods.period_label();

        let mut rows = Vec::with_capacity(self.catalog.len());
        for spec in self.catalog {
            let value = synth.synthesize_value(spec.value_type, spec.range_low, spec.range_high);
            let meta = FormulaResolver::resolve(spec.name);
            rows.push(KpiRow {
                dashboard_name: spec.dashboard_id.to_string(),
                department: spec.department.to_string(),
                kpi_name: spec.name.to_string(),
                exact_formula: meta.exact_formula.to_string(),
                required_data: meta.required_data.to_string(),
                columns_used: meta.columns_used.to_string(),
                formula_logic: meta.formula_logic.to_string(),
                value,
                unit: spec.unit.to_string(),
                period: period.clone(),
            });
        }

        let summary = summarize(&rows);
        (rows, summary)
    }
}

/// 按看板汇总: KPI行数与去重部门数, 首见顺序
pub fn summarize(rows: &[KpiRow]) -> Vec<DashboardSummaryRow> {
    let mut grouped: Vec<(String, usize, Vec<String>)> = Vec::new();
    for row in rows {
        match grouped.iter_mut().find(|(name, _, _)| name == &row.dashboard_name) {
            Some((_, kpi_count, departments)) => {
                *kpi_count += 1;
                if !departments.contains(&row.department) {
                    departments.push(row.department.clone());
                }
            }
            None => grouped.push((row.dashboard_name.clone(), 1, vec![row.department.clone()])),
        }
    }
    grouped
        .into_iter()
        .map(|(dashboard_name, kpi_count, departments)| DashboardSummaryRow {
            dashboard_name,
            kpi_count,
            department_count: departments.len(),
        })
        .collect()
}
