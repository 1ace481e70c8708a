// SPDX-License-Identifier: Apache-2.0

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use paddock_api::error_mapping::map_error;
use paddock_api::ApiError;
use serde_json::json;

#[must_use]
pub(crate) fn api_error_status(err: &ApiError) -> StatusCode {
    StatusCode::from_u16(map_error(err).status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[must_use]
pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = api_error_status(&err);
    (status, Json(json!({"error": err}))).into_response()
}

#[must_use]
pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
