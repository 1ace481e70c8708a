// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::http::HeaderMap;

const MAX_PROPAGATED_ID_BYTES: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestTrace {
    pub request_id: String,
    pub correlation_id: Option<String>,
}

fn header_id(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= MAX_PROPAGATED_ID_BYTES)
        .map(ToString::to_string)
}

#[must_use]
pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state
        .request_id_seed
        .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    format!("req-{id:016x}")
}

#[must_use]
pub(crate) fn extract_request_trace(headers: &HeaderMap, state: &AppState) -> RequestTrace {
    RequestTrace {
        request_id: header_id(headers, "x-request-id").unwrap_or_else(|| make_request_id(state)),
        correlation_id: header_id(headers, "x-correlation-id"),
    }
}
