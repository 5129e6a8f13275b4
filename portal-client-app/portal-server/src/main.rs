use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use portal_api::{build_router, AppState};
use portal_core::navigation::PortalNavigation;
use portal_core::services::{FlowService, GateRules};
use portal_infrastructure::{build_llm_provider, build_state_store};
use portal_shared::config::AppConfig;
use portal_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes the file writer on exit
    let _guard = init_telemetry(&config.telemetry)?;

    info!(name = %config.app.name, env = %config.app.env, "Portal server starting...");

    // Navigation trees are validated once, up front
    let navigation = match PortalNavigation::load() {
        Ok(n) => n,
        Err(e) => {
            error!("Invalid navigation configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(provider = %config.llm.provider, model = %config.llm.model, "Initializing LLM provider...");
    let provider = build_llm_provider(&config.llm)?;
    let flows = FlowService::new(provider)?;

    let shared_store = build_state_store(&config.client_state)?;

    // Create App State
    let state = AppState {
        navigation: Arc::new(navigation),
        flows: Arc::new(flows),
        gate_rules: GateRules::default(),
        client_state: config.client_state.clone(),
        shared_store,
    };

    let app = build_router(state, &config.cors);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
