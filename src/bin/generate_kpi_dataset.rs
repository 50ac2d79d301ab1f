// Generate the dummy KPI dataset workbook (KPI_Data + Summary_by_Dashboard),
// plus csv copies of both tables.
//
// Usage:
//   cargo run --bin generate_kpi_dataset -- [output_dir]
//
// Requires the xlsx-export feature (on by default). Built without it, the
// program refuses to run and says how to enable it.

use std::path::{Path, PathBuf};

use grid_kpi_dashboard::catalog::KPI_CATALOG;
use grid_kpi_dashboard::config::{AppConfig, DEFAULT_CONFIG_FILE};
use grid_kpi_dashboard::engine::DatasetAssembler;
use grid_kpi_dashboard::export::{csv, xlsx};
use grid_kpi_dashboard::logging;
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    logging::init();

    // 缺少可选导出组件时直接拒绝, 不产出半截结果
    if let Err(e) = xlsx::ensure_available() {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    let run_id = Uuid::new_v4();
    tracing::info!("KPI数据集生成开始: run_id={}", run_id);

    let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output_dir.clone());
    std::fs::create_dir_all(&out_dir)?;

    let assembler = DatasetAssembler::new(KPI_CATALOG, config.random_seed, config.period_window());
    let (rows, summary) = assembler.tabulate();

    let xlsx_path = out_dir.join(xlsx::KPI_XLSX_FILE);
    xlsx::write_kpi_workbook(&rows, &summary, &xlsx_path)?;
    tracing::info!("已生成: {} (共{}行)", xlsx_path.display(), rows.len());

    csv::write_kpi_rows_csv(&rows, &out_dir.join(csv::KPI_CSV_FILE))?;
    csv::write_summary_csv(&summary, &out_dir.join(csv::SUMMARY_CSV_FILE))?;
    tracing::info!("CSV副本已生成: {}", out_dir.display());

    Ok(())
}
