// ==========================================
// 取值合成引擎测试
// ==========================================
// 职责: 验证各取值类型的合成规则与趋势不变量
// 范围: 整个KPI目录逐条走查
// ==========================================

use grid_kpi_dashboard::catalog::KPI_CATALOG;
use grid_kpi_dashboard::engine::synthesizer::KVA_RATING_SET;
use grid_kpi_dashboard::engine::KpiSynthesizer;
use grid_kpi_dashboard::{MetricValue, ValueType};

const TREND_PERIODS: usize = 6;

/// 小数位校验: 按指定位数四舍五入后不变
fn has_at_most_decimals(value: f64, decimals: u32) -> bool {
    let factor = 10f64.powi(decimals as i32);
    ((value * factor).round() / factor - value).abs() < f64::EPSILON
}

#[test]
fn test_integer_types_within_floored_bounds() {
    let mut synth = KpiSynthesizer::new(42);
    for spec in KPI_CATALOG {
        let value = synth.synthesize_value(spec.value_type, spec.range_low, spec.range_high);
        if matches!(spec.value_type, ValueType::Count | ValueType::Score) {
            match value {
                MetricValue::Int(v) => {
                    assert!(
                        v >= spec.range_low.floor() as i64 && v <= spec.range_high.floor() as i64,
                        "{} 越界: {}",
                        spec.name,
                        v
                    );
                }
                MetricValue::Float(_) => panic!("{} 应为整数值", spec.name),
            }
        }
    }
}

#[test]
fn test_percentage_two_decimals_in_range() {
    let mut synth = KpiSynthesizer::new(42);
    for spec in KPI_CATALOG {
        let value = synth.synthesize_value(spec.value_type, spec.range_low, spec.range_high);
        if spec.value_type == ValueType::Percentage {
            let f = value.as_f64();
            assert!(f >= spec.range_low && f <= spec.range_high, "{} 越界", spec.name);
            assert!(has_at_most_decimals(f, 2), "{} 小数位超限: {}", spec.name, f);
        }
    }
}

#[test]
fn test_index_and_minutes_precision() {
    let mut synth = KpiSynthesizer::new(1);
    for spec in KPI_CATALOG {
        let value = synth.synthesize_value(spec.value_type, spec.range_low, spec.range_high);
        match spec.value_type {
            ValueType::Index => assert!(has_at_most_decimals(value.as_f64(), 3)),
            ValueType::Minutes => assert!(has_at_most_decimals(value.as_f64(), 1)),
            _ => {}
        }
    }
}

#[test]
fn test_kva_always_member_of_rating_set() {
    // 声明区间任意, kva 只能落在固定档位
    let mut synth = KpiSynthesizer::new(5);
    for _ in 0..100 {
        match synth.synthesize_value(ValueType::Kva, 1.0, 9999.0) {
            MetricValue::Int(v) => assert!(KVA_RATING_SET.contains(&v)),
            MetricValue::Float(_) => panic!("kva 应为整数档位"),
        }
    }
}

#[test]
fn test_trend_invariants_catalog_wide() {
    let mut synth = KpiSynthesizer::new(42);
    for spec in KPI_CATALOG {
        if !spec.value_type.is_chartable() {
            continue;
        }
        let value = synth.synthesize_value(spec.value_type, spec.range_low, spec.range_high);
        let trend = synth.synthesize_trend(
            spec.value_type,
            spec.range_low,
            spec.range_high,
            value,
            TREND_PERIODS,
        );

        assert_eq!(trend.len(), TREND_PERIODS, "{} 趋势期数错误", spec.name);
        // 末期与当期值逐位一致
        assert_eq!(trend[TREND_PERIODS - 1], value, "{} 趋势末期未回写", spec.name);

        let anchor = value.as_f64();
        let mut t_low = spec.range_low.max(anchor * 0.7);
        let mut t_high = spec.range_high.min(anchor * 1.3);
        if t_low > t_high {
            std::mem::swap(&mut t_low, &mut t_high);
        }
        // 收紧区间边界非舍入步进对齐: 舍入最多越界半步, score 取整最多下越1
        let tolerance = match spec.value_type {
            ValueType::Percentage => 0.005,
            ValueType::Index => 0.0005,
            ValueType::Minutes => 0.05,
            _ => 1.0,
        };
        for entry in &trend[..TREND_PERIODS - 1] {
            let f = entry.as_f64();
            assert!(
                f >= spec.range_low && f <= spec.range_high,
                "{} 趋势值越出声明区间: {}",
                spec.name,
                f
            );
            assert!(
                f >= t_low - tolerance && f <= t_high + tolerance,
                "{} 趋势值越出收紧区间: {}",
                spec.name,
                f
            );
        }
    }
}

#[test]
fn test_trend_window_degenerates_via_clamp() {
    // 当期值贴近区间上界时, 收紧区间上界被 min 钳回 high
    let mut synth = KpiSynthesizer::new(3);
    let current = MetricValue::Float(99.0);
    let trend = synth.synthesize_trend(ValueType::Percentage, 85.0, 99.5, current, TREND_PERIODS);
    for entry in &trend {
        let f = entry.as_f64();
        assert!((85.0..=99.5).contains(&f));
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = KpiSynthesizer::new(42);
    let mut b = KpiSynthesizer::new(43);
    let series_a: Vec<_> = (0..16)
        .map(|_| a.synthesize_value(ValueType::Percentage, 0.0, 100.0))
        .collect();
    let series_b: Vec<_> = (0..16)
        .map(|_| b.synthesize_value(ValueType::Percentage, 0.0, 100.0))
        .collect();
    assert_ne!(series_a, series_b);
}
