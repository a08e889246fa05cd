use progress_widget::{
    balance, config::resolve_port, load_data, resolve_data_path, router, ui::render_index,
    widget::GoalsPanel, AppState, TrackerConfig,
};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let config = TrackerConfig::from_env();
    let store = load_data(&data_path).await;
    info!(
        path = %data_path.display(),
        entries = store.len(),
        sites = ?config.sites,
        "loaded store"
    );

    let balances = balance::load_all(&store, &config);
    for view in &balances {
        info!(site = %view.site, balance = %view.balance_label, fill = %view.fill.text, "general balance");
    }
    let panel = GoalsPanel::wire(&render_index(&config, &balances));

    let state = AppState::new(data_path, config, store, panel);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], resolve_port()));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
