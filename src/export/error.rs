// ==========================================
// 配电网KPI看板演示系统 - 导出层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出层错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== 可选组件缺失 =====
    #[error("xlsx 导出组件未编译进当前可执行文件: 请使用 `cargo build --features xlsx-export` 重新构建")]
    XlsxFeatureDisabled,

    // ===== IO错误 =====
    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    // ===== 格式化错误 =====
    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "xlsx-export")]
    #[error("xlsx 写入失败: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
