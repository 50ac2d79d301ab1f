// ==========================================
// 配电网KPI看板演示系统 - 引擎层
// ==========================================
// 职责: 取值合成 / 趋势推导 / 口径解析 / 数据集装配
// 红线: 引擎只消费静态目录, 无I/O, 无全局可变状态
// ==========================================

pub mod assembler;
pub mod charts;
pub mod formula;
pub mod synthesizer;

// 重导出核心引擎
pub use assembler::{summarize, DatasetAssembler};
pub use formula::{normalize_kpi_name, FormulaResolver};
pub use synthesizer::{KpiSynthesizer, KVA_RATING_SET};
