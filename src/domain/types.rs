// ==========================================
// 配电网KPI看板演示系统 - 领域类型定义
// ==========================================
// 依据: KPI目录的取值类型体系 (封闭枚举)
// 序列化格式: 目录标签小写 (pct/count/index/minutes/kva/score)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 取值类型 (Value Type)
// ==========================================
// 红线: 封闭枚举分派, 新增类型必须同时补合成规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[serde(rename = "pct")]
    Percentage, // 百分比, 2位小数
    Count,      // 计数, 整数
    Index,      // 指数, 3位小数
    Minutes,    // 分钟, 1位小数
    Kva,        // 变压器容量档位, 固定离散集
    Score,      // 评分, 整数
}

impl ValueType {
    /// 是否生成历史趋势序列
    ///
    /// count / kva 类KPI只有当期值, 不出趋势线
    pub fn is_chartable(self) -> bool {
        matches!(
            self,
            ValueType::Percentage | ValueType::Minutes | ValueType::Index | ValueType::Score
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Percentage => write!(f, "pct"),
            ValueType::Count => write!(f, "count"),
            ValueType::Index => write!(f, "index"),
            ValueType::Minutes => write!(f, "minutes"),
            ValueType::Kva => write!(f, "kva"),
            ValueType::Score => write!(f, "score"),
        }
    }
}

// ==========================================
// 指标值 (Metric Value)
// ==========================================
// count/score/kva 必须以JSON整数输出, 其余为浮点
// 趋势末位回写依赖逐位相等, 因此保留原始表示
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Int(v) => v as f64,
            MetricValue::Float(v) => v,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{}", v),
            MetricValue::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_wire_tags() {
        assert_eq!(serde_json::to_string(&ValueType::Percentage).unwrap(), "\"pct\"");
        assert_eq!(serde_json::to_string(&ValueType::Kva).unwrap(), "\"kva\"");
        let vt: ValueType = serde_json::from_str("\"minutes\"").unwrap();
        assert_eq!(vt, ValueType::Minutes);
    }

    #[test]
    fn test_chartable_types() {
        assert!(ValueType::Percentage.is_chartable());
        assert!(ValueType::Minutes.is_chartable());
        assert!(ValueType::Index.is_chartable());
        assert!(ValueType::Score.is_chartable());
        assert!(!ValueType::Count.is_chartable());
        assert!(!ValueType::Kva.is_chartable());
    }

    #[test]
    fn test_metric_value_json_shape() {
        assert_eq!(serde_json::to_string(&MetricValue::Int(25)).unwrap(), "25");
        assert_eq!(
            serde_json::to_string(&MetricValue::Float(93.42)).unwrap(),
            "93.42"
        );
    }
}
