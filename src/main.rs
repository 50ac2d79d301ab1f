// ==========================================
// 配电网KPI看板演示系统 - 看板服务主入口
// ==========================================
// 技术栈: Rust + axum 静态服务
// 职责: 缺数据时先生成 dashboards.json, 然后启动本地服务
// ==========================================

use std::path::Path;

use grid_kpi_dashboard::catalog::KPI_CATALOG;
use grid_kpi_dashboard::config::{AppConfig, DEFAULT_CONFIG_FILE};
use grid_kpi_dashboard::engine::DatasetAssembler;
use grid_kpi_dashboard::{export, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", grid_kpi_dashboard::APP_NAME);
    tracing::info!("系统版本: {}", grid_kpi_dashboard::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;

    // 前端依赖 dashboards.json, 缺失时先生成一份
    let json_path = config.serve_dir.join(export::DASHBOARD_JSON_FILE);
    if !json_path.exists() {
        tracing::info!("未发现 {}, 先生成看板数据集", export::DASHBOARD_JSON_FILE);
        let assembler =
            DatasetAssembler::new(KPI_CATALOG, config.random_seed, config.period_window());
        let dashboards = assembler.assemble();
        export::write_dashboard_json(&dashboards, &json_path)?;
        tracing::info!("已生成: {} (看板数: {})", json_path.display(), dashboards.len());
    }

    server::spawn_browser_open(config.http_port);
    tracing::info!("浏览器将自动打开, 按 Ctrl+C 停止服务");
    server::serve_static_dir(&config.serve_dir, config.http_port).await
}
