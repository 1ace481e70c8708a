// SPDX-License-Identifier: Apache-2.0

use crate::http::request_tracing::extract_request_trace;
use crate::http::response_contract::with_request_id;
use crate::telemetry::metrics::ROUTE_UNMATCHED;
use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use paddock_api::{ROUTE_CLASSIFICATION, ROUTE_HEALTHZ, ROUTE_METRICS, ROUTE_OPENAPI, ROUTE_ROOT};
use std::time::{Duration, Instant};
use tracing::{info, Instrument};

const KNOWN_ROUTES: [&str; 5] = [
    ROUTE_ROOT,
    ROUTE_CLASSIFICATION,
    ROUTE_HEALTHZ,
    ROUTE_METRICS,
    ROUTE_OPENAPI,
];

fn latency_millis(latency: Duration) -> u64 {
    u64::try_from(latency.as_millis()).unwrap_or(u64::MAX)
}

fn route_label(path: &str) -> &'static str {
    KNOWN_ROUTES
        .iter()
        .copied()
        .find(|route| *route == path)
        .unwrap_or(ROUTE_UNMATCHED)
}

pub(crate) async fn request_tracing_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let route = route_label(&path);
    let trace = extract_request_trace(request.headers(), &state);
    request.extensions_mut().insert(trace.clone());

    let span = tracing::info_span!(
        "http.request",
        request_id = %trace.request_id,
        correlation_id = trace.correlation_id.as_deref().unwrap_or(""),
        method = %method,
        route = %route,
    );

    let response = next.run(request).instrument(span).await;
    let latency = started.elapsed();
    state
        .metrics
        .observe_request(route, response.status(), latency)
        .await;
    if state.api.enable_audit_log {
        info!(
            target: "paddock_audit",
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            request_id = %trace.request_id,
            latency_ms = latency_millis(latency),
            "audit"
        );
    }
    with_request_id(response, &trace.request_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_labels_stay_bounded() {
        assert_eq!(route_label("/api/classification"), "/api/classification");
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/api/classification/1"), ROUTE_UNMATCHED);
        assert_eq!(route_label("/wp-admin"), ROUTE_UNMATCHED);
    }

    #[test]
    fn audit_latency_clamps_instead_of_truncating() {
        assert_eq!(latency_millis(Duration::from_millis(1_250)), 1_250);
        assert_eq!(latency_millis(Duration::MAX), u64::MAX);
    }
}
