// SPDX-License-Identifier: Apache-2.0

use regex::Regex;
use serde::Serialize;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CORS_ORIGIN_REGEX: &str = r"^https://.*\.vercel\.app$";

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub log_json: bool,
    pub cors_allowed_origins: Vec<String>,
    pub cors_allowed_origin_regex: Option<String>,
    pub enable_audit_log: bool,
    pub shutdown_drain_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_json: true,
            cors_allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
            cors_allowed_origin_regex: Some(DEFAULT_CORS_ORIGIN_REGEX.to_string()),
            enable_audit_log: false,
            shutdown_drain_ms: 0,
        }
    }
}

/// Origins allowed to read responses cross-site.
#[derive(Debug, Clone)]
pub(crate) struct CorsPolicy {
    origins: Vec<String>,
    pattern: Option<Regex>,
}

impl CorsPolicy {
    /// The origin regex must match the whole origin, anchored or not.
    pub(crate) fn from_config(api: &ApiConfig) -> Result<Self, String> {
        let pattern = match api.cors_allowed_origin_regex.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(
                Regex::new(&format!("^(?:{raw})$"))
                    .map_err(|e| format!("invalid cors origin regex {raw}: {e}"))?,
            ),
            _ => None,
        };
        Ok(Self {
            origins: api.cors_allowed_origins.clone(),
            pattern,
        })
    }

    #[must_use]
    pub(crate) fn allows(&self, origin: &str) -> bool {
        self.origins.iter().any(|x| x == origin)
            || self.pattern.as_ref().is_some_and(|re| re.is_match(origin))
    }
}

pub fn validate_startup_config_contract(api: &ApiConfig) -> Result<(), String> {
    api.bind_addr
        .parse::<std::net::SocketAddr>()
        .map_err(|e| format!("invalid bind addr {}: {e}", api.bind_addr))?;
    if api.cors_allowed_origins.iter().any(|o| o.trim().is_empty()) {
        return Err("cors allowed origins must be non-empty".to_string());
    }
    CorsPolicy::from_config(api)?;
    Ok(())
}
