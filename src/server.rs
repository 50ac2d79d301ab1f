// ==========================================
// 配电网KPI看板演示系统 - 静态文件服务
// ==========================================
// 职责: 在本地端口上提供看板前端与数据文件
// 红线: 无路由, 无API, 端口占用直接报错退出, 不重试
// ==========================================

use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// 启动静态文件服务并阻塞运行, Ctrl+C 退出
pub async fn serve_static_dir(dir: &Path, port: u16) -> anyhow::Result<()> {
    let cors = CorsLayer::new().allow_origin(Any);
    let app = Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("服务已启动: http://localhost:{}", port);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("端口 {} 已被占用, 请先停止占用该端口的进程", port);
            } else {
                tracing::error!("绑定端口 {} 失败: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;
    Ok(())
}

/// 服务就绪后自动打开浏览器 (延迟0.8秒)
pub fn spawn_browser_open(port: u16) {
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(800)).await;
        let url = format!("http://localhost:{}", port);
        if let Err(e) = webbrowser::open(&url) {
            tracing::warn!("自动打开浏览器失败: {} ({})", url, e);
        }
    });
}
