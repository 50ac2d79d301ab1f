// ==========================================
// 配电网KPI看板演示系统 - 核心库
// ==========================================
// 技术栈: Rust + axum 静态服务
// 系统定位: 看板演示数据生成 (模拟值, 非真实采集)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 目录层 - 静态KPI目录与口径对照表
pub mod catalog;

// 引擎层 - 合成与装配规则
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// 导出层 - JSON / CSV / xlsx 落盘
pub mod export;

// 静态文件服务
pub mod server;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use catalog::{FORMULA_TABLE, KPI_CATALOG};
pub use domain::{
    DashboardAggregate, DashboardSummaryRow, FormulaMeta, KpiRow, KpiSnapshot, KpiSpec,
    MetricValue, ValueType,
};
pub use engine::{DatasetAssembler, FormulaResolver, KpiSynthesizer};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "配电网KPI看板演示系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
