// ==========================================
// 配电网KPI看板演示系统 - 图表视图推导
// ==========================================
// 职责: 按看板固定筛选策略从KPI列表推导图表数据集
// 红线: 保持目录相对顺序, 列表型图表取前N条, 不按大小排序
// 约束: 名称谓词区分大小写 (与前端约定一致)
// ==========================================

use crate::domain::{ChartItem, ChartView, KpiSnapshot, MetricValue, NameValue, TrendDataset};
use std::collections::BTreeMap;

/// 为单个看板推导图表视图集合
pub fn derive_charts(
    dashboard_id: &str,
    labels: &[String],
    kpis: &[KpiSnapshot],
) -> BTreeMap<String, ChartView> {
    let mut charts = BTreeMap::new();
    match dashboard_id {
        "Dashboard-1" => {
            // 损耗趋势: 名称含 Loss 且单位为 %, 取前4条
            charts.insert(
                "lossTrend".to_string(),
                ChartView::TrendSeries {
                    labels: labels.to_vec(),
                    datasets: kpis
                        .iter()
                        .filter(|k| k.name.contains("Loss") && k.unit == "%")
                        .take(4)
                        .map(|k| TrendDataset {
                            name: k.name.replace(" (%)", ""),
                            data: trend_or_flat(k, labels.len()),
                        })
                        .collect(),
                },
            );
            charts.insert(
                "efficiency".to_string(),
                value_list(kpis.iter().filter(|k| {
                    k.name.contains("Efficiency") || k.name.contains("AT&C")
                })),
            );
        }
        "Dashboard-2" => {
            let saidi = kpis.iter().find(|k| k.name == "SAIDI");
            let saifi = kpis.iter().find(|k| k.name == "SAIFI");
            if let (Some(saidi), Some(saifi)) = (saidi, saifi) {
                charts.insert(
                    "reliabilityTrend".to_string(),
                    ChartView::ReliabilityTrend {
                        labels: labels.to_vec(),
                        saidi: trend_or_flat(saidi, labels.len()),
                        saifi: trend_or_flat(saifi, labels.len()),
                    },
                );
            }
            charts.insert(
                "outageMetrics".to_string(),
                value_list(
                    kpis.iter()
                        .filter(|k| {
                            k.name.contains("Outage")
                                || k.name.contains("MTTR")
                                || k.name.contains("MTTI")
                        })
                        .take(6),
                ),
            );
        }
        "Dashboard-3" => {
            charts.insert(
                "loadingBands".to_string(),
                value_list(
                    kpis.iter()
                        .filter(|k| k.name.contains("Loading") || k.name.contains("Load"))
                        .take(5),
                ),
            );
        }
        "Dashboard-4" => {
            charts.insert(
                "voltageQuality".to_string(),
                value_list(
                    kpis.iter()
                        .filter(|k| {
                            k.name.contains("Voltage")
                                || k.name.contains("Power Factor")
                                || k.name.contains("Unbalance")
                        })
                        .take(8),
                ),
            );
        }
        "Dashboard-5" => {
            // 窃电告警分类: 剥掉 "Number of Tamper Alerts (...)" 包装只留类别名
            charts.insert(
                "tamperByType".to_string(),
                ChartView::NameValueList(
                    kpis.iter()
                        .filter(|k| k.name.contains("Tamper"))
                        .map(|k| NameValue {
                            name: k
                                .name
                                .replace("Number of Tamper Alerts (", "")
                                .replace(')', ""),
                            value: k.value,
                        })
                        .collect(),
                ),
            );
        }
        "Dashboard-6" => {
            charts.insert(
                "theftRevenue".to_string(),
                value_list(kpis.iter().filter(|k| {
                    k.name.contains("Theft")
                        || k.name.contains("Revenue")
                        || k.name.contains("Risk")
                })),
            );
        }
        "Dashboard-7" => {
            charts.insert(
                "communication".to_string(),
                value_list(kpis.iter().filter(|k| {
                    k.name.contains("Signal")
                        || k.name.contains("Packet")
                        || k.name.contains("retry")
                        || k.name.contains("Non-reporting")
                })),
            );
        }
        "Dashboard-8" => {
            charts.insert(
                "mappingAccuracy".to_string(),
                value_list(
                    kpis.iter()
                        .filter(|k| {
                            k.name.contains("Mapping")
                                || k.name.contains("mapped")
                                || k.name.contains("Accuracy")
                        })
                        .take(8),
                ),
            );
        }
        "Dashboard-9" => {
            charts.insert("anomalyPhase".to_string(), value_list(kpis.iter().take(10)));
        }
        _ => {}
    }
    charts
}

/// 趋势序列, 无趋势时以当期值铺满 (count 类KPI混入趋势图时的兜底)
fn trend_or_flat(kpi: &KpiSnapshot, period_count: usize) -> Vec<MetricValue> {
    kpi.trend
        .clone()
        .unwrap_or_else(|| vec![kpi.value; period_count])
}

fn value_list<'a>(kpis: impl Iterator<Item = &'a KpiSnapshot>) -> ChartView {
    ChartView::ValueList(
        kpis.map(|k| ChartItem {
            name: k.name.clone(),
            value: k.value,
            unit: k.unit.clone(),
        })
        .collect(),
    )
}
