// ==========================================
// 配电网KPI看板演示系统 - 取值合成引擎
// ==========================================
// 职责: 按取值类型生成当期值与历史趋势序列
// 红线: 随机流显式持有, 单线程顺序抽取, 同种子必须同序列
// ==========================================

use crate::domain::{MetricValue, ValueType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 配变额定容量固定档位 (kVA)
pub const KVA_RATING_SET: [i64; 7] = [25, 63, 100, 160, 200, 250, 315];

// ==========================================
// KpiSynthesizer - 取值合成器
// ==========================================
// 显式持有种子化随机流, 同一种子总是产出同一序列
#[derive(Debug)]
pub struct KpiSynthesizer {
    rng: StdRng,
}

impl KpiSynthesizer {
    /// 从固定种子创建合成器
    pub fn new(seed: u64) -> Self {
        KpiSynthesizer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 按取值类型在声明区间内合成一个当期值
    ///
    /// # 规则
    /// - pct: [low, high] 均匀实数, 保留2位小数
    /// - count: [floor(low), floor(high)] 均匀整数 (含端点)
    /// - index: [low, high] 均匀实数, 保留3位小数
    /// - minutes: [low, high] 均匀实数, 保留1位小数
    /// - kva: 固定档位集合均匀抽取, 忽略区间
    /// - score: [floor(low), floor(high)] 均匀整数 (含端点)
    pub fn synthesize_value(&mut self, value_type: ValueType, low: f64, high: f64) -> MetricValue {
        match value_type {
            ValueType::Percentage => MetricValue::Float(round_to(self.rng.gen_range(low..=high), 2)),
            ValueType::Count => MetricValue::Int(self.gen_int_inclusive(low, high)),
            ValueType::Index => MetricValue::Float(round_to(self.rng.gen_range(low..=high), 3)),
            ValueType::Minutes => MetricValue::Float(round_to(self.rng.gen_range(low..=high), 1)),
            ValueType::Kva => {
                let idx = self.rng.gen_range(0..KVA_RATING_SET.len());
                MetricValue::Int(KVA_RATING_SET[idx])
            }
            ValueType::Score => MetricValue::Int(self.gen_int_inclusive(low, high)),
        }
    }

    /// 围绕当期值合成历史趋势序列
    ///
    /// # 规则
    /// - 每期在收紧区间 [max(low, v*0.7), min(high, v*1.3)] 内按 4.1 规则抽取
    /// - 末期强制回写为当期值 (趋势线尾端与看板数字逐位一致)
    /// - 仅对可出图类型调用 (pct/minutes/index/score)
    pub fn synthesize_trend(
        &mut self,
        value_type: ValueType,
        low: f64,
        high: f64,
        current: MetricValue,
        period_count: usize,
    ) -> Vec<MetricValue> {
        let anchor = current.as_f64();
        let mut t_low = low.max(anchor * 0.7);
        let mut t_high = high.min(anchor * 1.3);
        // 负值当期会使 0.7/1.3 因子反向, 归一为有序区间再抽取
        if t_low > t_high {
            std::mem::swap(&mut t_low, &mut t_high);
        }

        let mut series: Vec<MetricValue> = (0..period_count)
            .map(|_| self.synthesize_value(value_type, t_low, t_high))
            .collect();
        if let Some(last) = series.last_mut() {
            *last = current;
        }
        series
    }

    fn gen_int_inclusive(&mut self, low: f64, high: f64) -> i64 {
        self.rng.gen_range(low.floor() as i64..=high.floor() as i64)
    }
}

/// 四舍五入到指定小数位
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
