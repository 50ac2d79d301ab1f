// ==========================================
// 配电网KPI看板演示系统 - 口径解析引擎
// ==========================================
// 职责: KPI名称规范化与口径记录查找
// 红线: 按表顺序首个命中即返回, 双向子串包含
// 红线: 未命中返回空记录, 不是错误
// ==========================================

use crate::catalog::FORMULA_TABLE;
use crate::domain::FormulaMeta;

/// KPI名称规范化
///
/// 小写, `;` 与 `/` 替换为空格, 连续空白折叠为单空格, 去首尾空白。
/// 使 "DT/Feeder Reliability Trends" 与 "DT Feeder Reliability Trends"
/// 落到同一键空间。
pub fn normalize_kpi_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace([';', '/'], " ");
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ==========================================
// FormulaResolver - 口径解析器 (纯函数)
// ==========================================
pub struct FormulaResolver;

impl FormulaResolver {
    /// 按名称查找口径记录
    ///
    /// 匹配规则: 规范化名称与表键双向子串包含, 表顺序即匹配顺序,
    /// 首个命中即返回。多键可命中同一名称时顺序有语义, 不可重排。
    pub fn resolve(kpi_name: &str) -> FormulaMeta {
        let normalized = normalize_kpi_name(kpi_name);
        for (key, meta) in FORMULA_TABLE {
            if normalized.contains(key) || key.contains(normalized.as_str()) {
                return *meta;
            }
        }
        FormulaMeta::EMPTY
    }
}
