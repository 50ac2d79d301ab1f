// ==========================================
// 数据集装配测试
// ==========================================
// 职责: 验证看板分组 / 顺序保持 / 图表派生 / 可复现性
// 场景: 目录整体装配 + 规格场景逐条验证
// ==========================================

use grid_kpi_dashboard::catalog::KPI_CATALOG;
use grid_kpi_dashboard::config::PeriodWindow;
use grid_kpi_dashboard::domain::{ChartView, DashboardAggregate, MetricValue};
use grid_kpi_dashboard::engine::synthesizer::KVA_RATING_SET;
use grid_kpi_dashboard::engine::DatasetAssembler;
use std::collections::BTreeMap;

// ==========================================
// 测试辅助函数
// ==========================================

fn default_periods() -> PeriodWindow {
    PeriodWindow::new(2025, 1, 6)
}

fn assemble_default() -> BTreeMap<String, DashboardAggregate> {
    DatasetAssembler::new(KPI_CATALOG, 42, default_periods()).assemble()
}

fn find_kpi<'a>(
    dashboards: &'a BTreeMap<String, DashboardAggregate>,
    dashboard_id: &str,
    name: &str,
) -> &'a grid_kpi_dashboard::KpiSnapshot {
    dashboards[dashboard_id]
        .kpis
        .iter()
        .find(|k| k.name == name)
        .unwrap_or_else(|| panic!("未找到KPI: {}/{}", dashboard_id, name))
}

// ==========================================
// 装配结构
// ==========================================

#[test]
fn test_assemble_groups_all_dashboards() {
    let dashboards = assemble_default();
    assert_eq!(dashboards.len(), 9);
    let total: usize = dashboards.values().map(|d| d.kpis.len()).sum();
    assert_eq!(total, KPI_CATALOG.len());
    for (id, aggregate) in &dashboards {
        assert_eq!(&aggregate.title, id);
    }
}

#[test]
fn test_kpi_order_mirrors_catalog_order() {
    let dashboards = assemble_default();
    for (id, aggregate) in &dashboards {
        let expected: Vec<&str> = KPI_CATALOG
            .iter()
            .filter(|s| s.dashboard_id == id.as_str())
            .map(|s| s.name)
            .collect();
        let actual: Vec<&str> = aggregate.kpis.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(actual, expected, "{} 顺序偏离目录", id);
    }
}

#[test]
fn test_departments_first_seen_order_dedup() {
    let dashboards = assemble_default();
    // Dashboard-2 的部门首见顺序: Operation 在前, Analytics 穿插其后
    assert_eq!(
        dashboards["Dashboard-2"].departments,
        vec!["Operation", "Analytics"]
    );
    // Dashboard-6: Analytics 在前, Finance 收尾
    assert_eq!(
        dashboards["Dashboard-6"].departments,
        vec!["Analytics", "Finance"]
    );
    // 单部门看板不重复累积
    assert_eq!(dashboards["Dashboard-1"].departments, vec!["Finance"]);
}

#[test]
fn test_trend_presence_by_value_type() {
    let dashboards = assemble_default();
    for (id, aggregate) in &dashboards {
        for (kpi, spec) in aggregate
            .kpis
            .iter()
            .zip(KPI_CATALOG.iter().filter(|s| s.dashboard_id == id.as_str()))
        {
            if spec.value_type.is_chartable() {
                let trend = kpi.trend.as_ref().unwrap_or_else(|| {
                    panic!("{} 应有趋势序列", kpi.name)
                });
                assert_eq!(trend.len(), 6);
                assert_eq!(trend[5], kpi.value, "{} 趋势末期未回写", kpi.name);
            } else {
                assert!(kpi.trend.is_none(), "{} 不应有趋势序列", kpi.name);
            }
        }
    }
}

// ==========================================
// 可复现性
// ==========================================

#[test]
fn test_same_seed_byte_identical_output() {
    let first = serde_json::to_string(&assemble_default()).unwrap();
    let second = serde_json::to_string(&assemble_default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_different_seed_diverges() {
    let a = serde_json::to_string(
        &DatasetAssembler::new(KPI_CATALOG, 42, default_periods()).assemble(),
    )
    .unwrap();
    let b = serde_json::to_string(
        &DatasetAssembler::new(KPI_CATALOG, 7, default_periods()).assemble(),
    )
    .unwrap();
    assert_ne!(a, b);
}

// ==========================================
// 图表派生
// ==========================================

#[test]
fn test_dashboard1_loss_trend_chart() {
    let dashboards = assemble_default();
    let charts = &dashboards["Dashboard-1"].charts;
    match &charts["lossTrend"] {
        ChartView::TrendSeries { labels, datasets } => {
            assert_eq!(labels, &["Aug", "Sep", "Oct", "Nov", "Dec", "Jan"]);
            // 名称含 Loss 且单位 % 的KPI取前4条, 名称剥掉 " (%)"
            assert_eq!(datasets.len(), 4);
            assert_eq!(datasets[0].name, "Feeder Loss");
            assert_eq!(datasets[3].name, "AT&C Loss");
            for dataset in datasets {
                assert_eq!(dataset.data.len(), 6);
            }
        }
        other => panic!("lossTrend 形状错误: {:?}", other),
    }
    match &charts["efficiency"] {
        ChartView::ValueList(items) => {
            let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(
                names,
                vec![
                    "Billing Efficiency (%)",
                    "Collection Efficiency (%)",
                    "AT&C Loss (%)"
                ]
            );
        }
        other => panic!("efficiency 形状错误: {:?}", other),
    }
}

#[test]
fn test_dashboard2_reliability_and_outage_charts() {
    let dashboards = assemble_default();
    let charts = &dashboards["Dashboard-2"].charts;
    match &charts["reliabilityTrend"] {
        ChartView::ReliabilityTrend { labels, saidi, saifi } => {
            assert_eq!(labels.len(), 6);
            assert_eq!(saidi.len(), 6);
            assert_eq!(saifi.len(), 6);
            let saidi_kpi = find_kpi(&dashboards, "Dashboard-2", "SAIDI");
            assert_eq!(saidi[5], saidi_kpi.value);
        }
        other => panic!("reliabilityTrend 形状错误: {:?}", other),
    }
    match &charts["outageMetrics"] {
        ChartView::ValueList(items) => {
            // 谓词区分大小写: "Planned outage suppression rate" 的小写 outage 不命中
            let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(
                names,
                vec![
                    "Number of Outages (Frequency)",
                    "Duration of Outages (Minutes)",
                    "MTTI",
                    "MTTR",
                    "Feeders with Maximum Outages"
                ]
            );
        }
        other => panic!("outageMetrics 形状错误: {:?}", other),
    }
}

#[test]
fn test_dashboard5_tamper_names_stripped() {
    let dashboards = assemble_default();
    match &dashboards["Dashboard-5"].charts["tamperByType"] {
        ChartView::NameValueList(items) => {
            let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(
                names,
                vec![
                    "Cover Open",
                    "External Magnet",
                    "Neutral Disturbance",
                    "Neutral Missing"
                ]
            );
        }
        other => panic!("tamperByType 形状错误: {:?}", other),
    }
}

#[test]
fn test_list_chart_caps() {
    let dashboards = assemble_default();
    match &dashboards["Dashboard-3"].charts["loadingBands"] {
        ChartView::ValueList(items) => assert_eq!(items.len(), 5),
        other => panic!("loadingBands 形状错误: {:?}", other),
    }
    match &dashboards["Dashboard-4"].charts["voltageQuality"] {
        // 大小写敏感谓词命中7条, 不足8条封顶
        ChartView::ValueList(items) => assert_eq!(items.len(), 7),
        other => panic!("voltageQuality 形状错误: {:?}", other),
    }
    match &dashboards["Dashboard-8"].charts["mappingAccuracy"] {
        ChartView::ValueList(items) => assert_eq!(items.len(), 3),
        other => panic!("mappingAccuracy 形状错误: {:?}", other),
    }
    match &dashboards["Dashboard-9"].charts["anomalyPhase"] {
        ChartView::ValueList(items) => assert_eq!(items.len(), 10),
        other => panic!("anomalyPhase 形状错误: {:?}", other),
    }
}

// ==========================================
// 规格场景
// ==========================================

#[test]
fn test_scenario_saidi_minutes_kpi() {
    let dashboards = assemble_default();
    let saidi = find_kpi(&dashboards, "Dashboard-2", "SAIDI");
    let value = saidi.value.as_f64();
    assert!((45.0..=380.0).contains(&value));
    // 1位小数
    assert!(((value * 10.0).round() / 10.0 - value).abs() < f64::EPSILON);
    let trend = saidi.trend.as_ref().unwrap();
    assert_eq!(trend.len(), 6);
    assert_eq!(trend[5], saidi.value);
}

#[test]
fn test_scenario_dt_load_kva_kpi() {
    let dashboards = assemble_default();
    let dt_load = find_kpi(&dashboards, "Dashboard-3", "DT Load (kVA)");
    match dt_load.value {
        MetricValue::Int(v) => assert!(KVA_RATING_SET.contains(&v)),
        MetricValue::Float(_) => panic!("kva 应为整数档位"),
    }
    assert!(dt_load.trend.is_none());
}

// ==========================================
// 表格化与汇总
// ==========================================

#[test]
fn test_tabulate_rows_and_summary() {
    let assembler = DatasetAssembler::new(KPI_CATALOG, 42, default_periods());
    let (rows, summary) = assembler.tabulate();

    assert_eq!(rows.len(), KPI_CATALOG.len());
    assert!(rows.iter().all(|r| r.period == "Jan 2025"));

    // 口径命中与未命中并存
    let saidi = rows.iter().find(|r| r.kpi_name == "SAIDI").unwrap();
    assert_eq!(saidi.exact_formula, "Total Interruption Minutes ÷ Total Customers");
    let top_x = rows
        .iter()
        .find(|r| r.kpi_name == "Top X Best/Worst Feeders/DTs")
        .unwrap();
    assert_eq!(top_x.exact_formula, "");

    assert_eq!(summary.len(), 9);
    let d1 = summary.iter().find(|s| s.dashboard_name == "Dashboard-1").unwrap();
    assert_eq!(d1.kpi_count, 9);
    assert_eq!(d1.department_count, 1);
    let d2 = summary.iter().find(|s| s.dashboard_name == "Dashboard-2").unwrap();
    assert_eq!(d2.kpi_count, 22);
    assert_eq!(d2.department_count, 2);
}
