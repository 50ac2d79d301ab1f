// ==========================================
// 配电网KPI看板演示系统 - 配置层
// ==========================================
// 职责: 生成运行配置 (种子/趋势期数/报告期锚点/端口/目录)
// 存储: 可选JSON配置文件, 缺失时逐字段取默认值
// ==========================================

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认配置文件名 (工作目录下, 可缺失)
pub const DEFAULT_CONFIG_FILE: &str = "kpi_dashboard_config.json";

// ==========================================
// AppConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 随机种子 (固定种子保证每次运行产出一致)
    pub random_seed: u64,
    /// 趋势序列期数
    pub trend_periods: u32,
    /// 报告期锚点: 年
    pub anchor_year: i32,
    /// 报告期锚点: 月 (趋势标签为截止该月的连续月份)
    pub anchor_month: u32,
    /// 静态文件服务端口
    pub http_port: u16,
    /// 导出文件输出目录
    pub output_dir: PathBuf,
    /// 静态文件服务目录
    pub serve_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            random_seed: 42,
            trend_periods: 6,
            anchor_year: 2025,
            anchor_month: 1,
            http_port: 8080,
            output_dir: PathBuf::from("."),
            serve_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// 从JSON文件加载配置, 文件不存在时返回默认配置
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    pub fn period_window(&self) -> PeriodWindow {
        PeriodWindow::new(self.anchor_year, self.anchor_month, self.trend_periods as usize)
    }
}

// ==========================================
// PeriodWindow - 报告期窗口
// ==========================================
// 以锚点月为末期的连续月份窗口, 标签与报告期均由此派生
#[derive(Debug, Clone)]
pub struct PeriodWindow {
    anchor: NaiveDate,
    count: usize,
}

impl PeriodWindow {
    pub fn new(year: i32, month: u32, count: usize) -> Self {
        // 非法年月退回该年1月, 再不行退回纪元起点
        let anchor = NaiveDate::from_ymd_opt(year, month, 1)
            .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
            .unwrap_or_default();
        PeriodWindow { anchor, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// 趋势标签: 截止锚点月的连续月份缩写, 旧在前新在后
    pub fn labels(&self) -> Vec<String> {
        (0..self.count)
            .rev()
            .map(|back| {
                let month = self
                    .anchor
                    .checked_sub_months(Months::new(back as u32))
                    .unwrap_or(self.anchor);
                month.format("%b").to_string()
            })
            .collect()
    }

    /// 报告期标签, 如 "Jan 2025"
    pub fn period_label(&self) -> String {
        self.anchor.format("%b %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_period_window_labels() {
        let window = AppConfig::default().period_window();
        assert_eq!(window.labels(), vec!["Aug", "Sep", "Oct", "Nov", "Dec", "Jan"]);
        assert_eq!(window.period_label(), "Jan 2025");
    }

    #[test]
    fn test_invalid_month_falls_back() {
        let window = PeriodWindow::new(2025, 13, 6);
        assert_eq!(window.period_label(), "Jan 2025");
    }

    #[test]
    fn test_config_defaults_when_file_missing() {
        let config = AppConfig::load_or_default(Path::new("no_such_config.json")).unwrap();
        assert_eq!(config.random_seed, 42);
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn test_config_partial_file_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, r#"{"random_seed": 7}"#).unwrap();
        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.random_seed, 7);
        assert_eq!(config.trend_periods, 6);
    }
}
