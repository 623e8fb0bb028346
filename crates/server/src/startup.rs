use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::dinosaur::SeaOrmDinosaurStore;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Cross-origin policy: mirror any origin, all methods and headers.
/// Browser clients on other origins may read every endpoint's responses.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(cfg: Option<&configs::AppConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(cfg) => {
            let s = &cfg.server;
            (s.host.clone(), s.port)
        }
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Config file is optional; env vars cover the fallback path.
    let cfg = configs::AppConfig::load_and_validate().ok();

    // DB connection and schema
    let db = match &cfg {
        Some(c) => models::db::connect_with(&c.database).await?,
        None => models::db::connect().await?,
    };
    migration::Migrator::up(&db, None).await?;

    let state = ServerState { store: Arc::new(SeaOrmDinosaurStore::new(db)) };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr(cfg.as_ref())?;
    info!(%addr, "starting dinostore server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
