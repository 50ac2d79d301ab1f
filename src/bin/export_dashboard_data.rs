// Export per-dashboard KPI data (values + trend series + chart views) to
// dashboards.json for the frontend.
//
// Usage:
//   cargo run --bin export_dashboard_data -- [output_dir]
//
// Uses the same fixed seed as the workbook generator, so repeated runs of
// either binary agree with themselves.

use std::path::{Path, PathBuf};

use grid_kpi_dashboard::catalog::KPI_CATALOG;
use grid_kpi_dashboard::config::{AppConfig, DEFAULT_CONFIG_FILE};
use grid_kpi_dashboard::engine::DatasetAssembler;
use grid_kpi_dashboard::export;
use grid_kpi_dashboard::logging;
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    logging::init();

    let run_id = Uuid::new_v4();
    tracing::info!("看板JSON导出开始: run_id={}", run_id);

    let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output_dir.clone());
    std::fs::create_dir_all(&out_dir)?;

    let assembler = DatasetAssembler::new(KPI_CATALOG, config.random_seed, config.period_window());
    let dashboards = assembler.assemble();

    let out_path = out_dir.join(export::DASHBOARD_JSON_FILE);
    export::write_dashboard_json(&dashboards, &out_path)?;
    tracing::info!("已导出: {} (看板数: {})", out_path.display(), dashboards.len());

    Ok(())
}
