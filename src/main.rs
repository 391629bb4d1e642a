use staff_sync::insights::InsightClient;
use staff_sync::sync::MirrorClient;
use staff_sync::{resolve_data_path, router, AppState, AttendanceStore};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path();
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let store = AttendanceStore::load(data_path).await;
    let mirror = MirrorClient::from_env();
    if mirror.is_configured() {
        info!("sheet webhook configured, saves will be mirrored");
    } else {
        info!("SHEETS_WEBHOOK_URL not set, sheet sync runs in demo mode");
    }

    let state = AppState::new(store, mirror, InsightClient::from_env());
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
