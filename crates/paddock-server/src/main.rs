// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use paddock_core::{
    ProcessEnv, ENV_PADDOCK_BIND, ENV_PADDOCK_CORS_ALLOWED_ORIGINS,
    ENV_PADDOCK_CORS_ALLOWED_ORIGIN_REGEX, ENV_PADDOCK_ENABLE_AUDIT_LOG, ENV_PADDOCK_LOG_JSON,
    ENV_PADDOCK_SHUTDOWN_DRAIN_MS, ENV_RUBINHO_CAMPEAO,
};
use paddock_query::FeatureSwitch;
use paddock_server::{build_router, validate_startup_config_contract, ApiConfig, AppState};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_list(name: &str) -> Option<Vec<String>> {
    let raw = env::var(name).ok()?;
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect(),
    )
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                error!("signal handler registration failed; falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn api_config_from_env() -> ApiConfig {
    let defaults = ApiConfig::default();
    ApiConfig {
        bind_addr: env::var(ENV_PADDOCK_BIND).unwrap_or(defaults.bind_addr),
        log_json: env_bool(ENV_PADDOCK_LOG_JSON, defaults.log_json),
        cors_allowed_origins: env_list(ENV_PADDOCK_CORS_ALLOWED_ORIGINS)
            .unwrap_or(defaults.cors_allowed_origins),
        cors_allowed_origin_regex: match env::var(ENV_PADDOCK_CORS_ALLOWED_ORIGIN_REGEX) {
            Ok(raw) if raw.trim().is_empty() => None,
            Ok(raw) => Some(raw),
            Err(_) => defaults.cors_allowed_origin_regex,
        },
        enable_audit_log: env_bool(ENV_PADDOCK_ENABLE_AUDIT_LOG, defaults.enable_audit_log),
        shutdown_drain_ms: env_u64(ENV_PADDOCK_SHUTDOWN_DRAIN_MS, defaults.shutdown_drain_ms),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let api_cfg = api_config_from_env();
    init_tracing(api_cfg.log_json);

    if let Err(e) = validate_startup_config_contract(&api_cfg) {
        error!("invalid startup config: {e}");
        return Err(e);
    }

    let process_env = ProcessEnv;
    info!(
        switch = %FeatureSwitch::resolve(&process_env),
        "{ENV_RUBINHO_CAMPEAO} at startup (re-read per request)"
    );

    let bind_addr = api_cfg.bind_addr.clone();
    let drain = Duration::from_millis(api_cfg.shutdown_drain_ms);
    let state = AppState::new(api_cfg, Arc::new(process_env))?;
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("paddock-server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!("shutdown signal received");
            if !drain.is_zero() {
                tokio::time::sleep(drain).await;
            }
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
