//! osrmd: request dispatch and usage accounting in front of the query engine.
//!
//! - `POST /query` with an already-parsed request
//! - `GET /metrics` for scraping
//!
//! Config path is the first argument (default `osrmd.yaml`).

use tracing_subscriber::{fmt, EnvFilter};

use osrmd_gateway::{app_state, config, router};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "osrmd.yaml".into());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(cfg.server.working_threads)
        .enable_all()
        .build()?;

    // Registry construction failure ends the process before binding.
    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    runtime.block_on(async move {
        tracing::info!(%listen, "osrmd starting");
        let listener = tokio::net::TcpListener::bind(listen).await?;
        axum::serve(listener, app).await
    })?;

    Ok(())
}
