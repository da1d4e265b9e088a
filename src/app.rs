/*
 * Responsibility
 * - Config load → verifier / gate construction → Router assembly
 * - Middleware order: gate (innermost) → security headers → http (request id, trace, limits)
 * - axum::serve()
 */
use axum::Router;
use std::{panic, process, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::AppError;
use crate::gate::{GatePolicy, RequestGate};
use crate::middleware;
use crate::pages;
use crate::services::auth::build_verifier;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,request_gate=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so we notice immediately.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<(), AppError> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting request gate in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_state(config: &Config) -> AppState {
    // The secret is read once here and owned by the verifier from now on.
    let verifier = build_verifier(config);
    let gate = RequestGate::new(verifier, GatePolicy::default());

    AppState::new(Arc::new(gate))
}

fn build_router(state: AppState) -> Router {
    let router = middleware::gate::apply(pages::routes(), state.clone()).with_state(state);
    let router = middleware::security_headers::apply(router);
    middleware::http::apply(router)
}
