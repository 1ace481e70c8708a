// SPDX-License-Identifier: Apache-2.0

use crate::http::request_tracing::RequestTrace;
use crate::http::response_contract::api_error_response;
use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderValue, Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use paddock_api::{openapi_spec, ApiError, ClassificationResponseDto, ServiceInfoDto};
use paddock_query::classification;
use tracing::debug;

fn request_id_of(trace: Option<Extension<RequestTrace>>) -> String {
    trace.map_or_else(
        || "req-unknown".to_string(),
        |Extension(trace)| trace.request_id,
    )
}

pub(crate) async fn landing_handler() -> impl IntoResponse {
    Json(ServiceInfoDto::default())
}

pub(crate) async fn classification_handler(State(state): State<AppState>) -> Response {
    let data = classification(state.env.as_ref());
    let crowned = data.first().is_some_and(|e| e.is_champion);
    state.metrics.observe_classification(crowned);
    debug!(entries = data.len(), crowned, "serving classification");
    let mut response = Json(ClassificationResponseDto::new(data)).into_response();
    response
        .headers_mut()
        .insert("cache-control", HeaderValue::from_static("no-store"));
    response
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    "ok"
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render_prometheus().await;
    (
        [(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        body,
    )
}

pub(crate) async fn openapi_handler() -> impl IntoResponse {
    Json(openapi_spec())
}

pub(crate) async fn not_found_handler(
    uri: Uri,
    trace: Option<Extension<RequestTrace>>,
) -> Response {
    let err = ApiError::route_not_found(uri.path()).with_request_id(request_id_of(trace));
    api_error_response(err)
}

pub(crate) async fn method_not_allowed_handler(
    method: Method,
    uri: Uri,
    trace: Option<Extension<RequestTrace>>,
) -> Response {
    let err = ApiError::method_not_allowed(method.as_str(), uri.path())
        .with_request_id(request_id_of(trace));
    api_error_response(err)
}
