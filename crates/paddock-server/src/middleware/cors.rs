// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const MAX_ORIGIN_BYTES: usize = 256;

fn normalized_header_value(headers: &HeaderMap, name: &str, max_len: usize) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= max_len)
        .map(ToString::to_string)
}

fn allow_origin(resp: &mut Response, origin: &str) {
    if let Ok(v) = HeaderValue::from_str(origin) {
        resp.headers_mut().insert("access-control-allow-origin", v);
    }
    resp.headers_mut().insert(
        "access-control-allow-credentials",
        HeaderValue::from_static("true"),
    );
    resp.headers_mut()
        .insert("vary", HeaderValue::from_static("Origin"));
}

pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let raw_origin = normalized_header_value(req.headers(), "origin", MAX_ORIGIN_BYTES);
    let preflight = *req.method() == Method::OPTIONS
        && raw_origin.is_some()
        && req.headers().contains_key("access-control-request-method");
    let origin = raw_origin.filter(|o| state.cors.allows(o));

    // Bare OPTIONS requests fall through to routing (404 or 405).
    if preflight {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        if let Some(origin_value) = origin {
            allow_origin(&mut resp, &origin_value);
            resp.headers_mut().insert(
                "access-control-allow-methods",
                HeaderValue::from_static("GET,OPTIONS"),
            );
            let requested = req
                .headers()
                .get("access-control-request-headers")
                .cloned()
                .unwrap_or_else(|| HeaderValue::from_static("*"));
            resp.headers_mut()
                .insert("access-control-allow-headers", requested);
        }
        return resp;
    }

    let mut resp = next.run(req).await;
    if let Some(origin_value) = origin {
        allow_origin(&mut resp, &origin_value);
    }
    resp
}
