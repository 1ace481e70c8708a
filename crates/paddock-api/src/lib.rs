// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

pub mod dto;
pub mod error_mapping;
mod errors;
mod openapi;
mod responses;

pub use dto::{ClassificationResponseDto, ServiceInfoDto};
pub use errors::{ApiError, ApiErrorCode, API_ERROR_CODES};
pub use openapi::openapi_spec;
pub use responses::ApiResponseEnvelope;

pub const CRATE_NAME: &str = "paddock-api";
pub const API_TITLE: &str = "F1 2025 Classification API";
pub const API_VERSION: &str = "1.0.0";

pub const ROUTE_ROOT: &str = "/";
pub const ROUTE_CLASSIFICATION: &str = "/api/classification";
pub const ROUTE_HEALTHZ: &str = "/healthz";
pub const ROUTE_METRICS: &str = "/metrics";
pub const ROUTE_OPENAPI: &str = "/openapi.json";
