// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod ports;

pub use ports::env::{EnvPort, MemoryEnv, ProcessEnv};

pub const CRATE_NAME: &str = "paddock-core";

/// Feature switch that crowns the synthetic champion when set to `true`.
pub const ENV_RUBINHO_CAMPEAO: &str = "RUBINHO_CAMPEAO";
pub const ENV_PADDOCK_BIND: &str = "PADDOCK_BIND";
pub const ENV_PADDOCK_LOG_JSON: &str = "PADDOCK_LOG_JSON";
pub const ENV_PADDOCK_CORS_ALLOWED_ORIGINS: &str = "PADDOCK_CORS_ALLOWED_ORIGINS";
pub const ENV_PADDOCK_CORS_ALLOWED_ORIGIN_REGEX: &str = "PADDOCK_CORS_ALLOWED_ORIGIN_REGEX";
pub const ENV_PADDOCK_ENABLE_AUDIT_LOG: &str = "PADDOCK_ENABLE_AUDIT_LOG";
pub const ENV_PADDOCK_SHUTDOWN_DRAIN_MS: &str = "PADDOCK_SHUTDOWN_DRAIN_MS";
