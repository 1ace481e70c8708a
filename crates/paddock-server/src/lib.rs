// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use axum::handler::Handler;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, MethodRouter};
use axum::Router;
use paddock_api::{ROUTE_CLASSIFICATION, ROUTE_HEALTHZ, ROUTE_METRICS, ROUTE_OPENAPI, ROUTE_ROOT};
use paddock_core::EnvPort;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod http;
mod middleware;
mod telemetry;

pub use config::{
    validate_startup_config_contract, ApiConfig, DEFAULT_BIND_ADDR, DEFAULT_CORS_ORIGIN_REGEX,
};

use config::CorsPolicy;
use telemetry::metrics::RequestMetrics;

pub const CRATE_NAME: &str = "paddock-server";

/// Shared, cheaply clonable request state.
///
/// The feature switch is not part of the config: handlers read it through
/// `env` on every request.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiConfig>,
    pub env: Arc<dyn EnvPort>,
    pub(crate) cors: Arc<CorsPolicy>,
    pub(crate) metrics: Arc<RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(api: ApiConfig, env: Arc<dyn EnvPort>) -> Result<Self, String> {
        let cors = CorsPolicy::from_config(&api)?;
        Ok(Self {
            api: Arc::new(api),
            env,
            cors: Arc::new(cors),
            metrics: Arc::new(RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(0)),
        })
    }
}

fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(http::handlers::method_not_allowed_handler)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ROUTE_ROOT, get_only(http::handlers::landing_handler))
        .route(
            ROUTE_CLASSIFICATION,
            get_only(http::handlers::classification_handler),
        )
        .route(ROUTE_HEALTHZ, get_only(http::handlers::healthz_handler))
        .route(ROUTE_METRICS, get_only(http::handlers::metrics_handler))
        .route(ROUTE_OPENAPI, get_only(http::handlers::openapi_handler))
        .fallback(http::handlers::not_found_handler)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::cors::cors_middleware,
        ))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .with_state(state)
}
