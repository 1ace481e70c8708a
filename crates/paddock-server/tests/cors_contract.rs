// SPDX-License-Identifier: Apache-2.0

mod support;

use paddock_core::MemoryEnv;
use paddock_server::ApiConfig;
use serde_json::Value;
use std::sync::Arc;
use support::{header, send_raw, spawn_app};

#[tokio::test]
async fn allowed_origins_receive_cors_headers() {
    let addr = spawn_app(ApiConfig::default(), Arc::new(MemoryEnv::new())).await;
    for origin in [
        "http://localhost:3000",
        "http://localhost:5173",
        "https://f1-frontend-abc123.vercel.app",
    ] {
        let (status, head, _) =
            send_raw(addr, "GET", "/api/classification", &[("Origin", origin)]).await;
        assert_eq!(status, 200);
        assert_eq!(header(&head, "access-control-allow-origin"), Some(origin));
        assert_eq!(
            header(&head, "access-control-allow-credentials"),
            Some("true")
        );
        assert_eq!(header(&head, "vary"), Some("Origin"));
    }
}

#[tokio::test]
async fn foreign_origins_get_no_cors_headers() {
    let addr = spawn_app(ApiConfig::default(), Arc::new(MemoryEnv::new())).await;
    let (status, head, _) = send_raw(
        addr,
        "GET",
        "/api/classification",
        &[("Origin", "https://evil.example")],
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(header(&head, "access-control-allow-origin"), None);
}

#[tokio::test]
async fn preflight_echoes_requested_headers() {
    let addr = spawn_app(ApiConfig::default(), Arc::new(MemoryEnv::new())).await;
    let (status, head, _) = send_raw(
        addr,
        "OPTIONS",
        "/api/classification",
        &[
            ("Origin", "http://localhost:5173"),
            ("Access-Control-Request-Method", "GET"),
            ("Access-Control-Request-Headers", "content-type"),
        ],
    )
    .await;
    assert_eq!(status, 204);
    assert_eq!(
        header(&head, "access-control-allow-origin"),
        Some("http://localhost:5173")
    );
    assert_eq!(
        header(&head, "access-control-allow-methods"),
        Some("GET,OPTIONS")
    );
    assert_eq!(
        header(&head, "access-control-allow-headers"),
        Some("content-type")
    );
}

#[tokio::test]
async fn configured_origin_list_replaces_defaults() {
    let api = ApiConfig {
        cors_allowed_origins: vec!["https://standings.example".to_string()],
        cors_allowed_origin_regex: None,
        ..ApiConfig::default()
    };
    let addr = spawn_app(api, Arc::new(MemoryEnv::new())).await;

    let (_, head, _) = send_raw(
        addr,
        "GET",
        "/",
        &[("Origin", "https://standings.example")],
    )
    .await;
    assert_eq!(
        header(&head, "access-control-allow-origin"),
        Some("https://standings.example")
    );

    let (_, head, _) = send_raw(
        addr,
        "GET",
        "/",
        &[("Origin", "https://app.vercel.app")],
    )
    .await;
    assert_eq!(header(&head, "access-control-allow-origin"), None);
}

#[tokio::test]
async fn unanchored_origin_regex_matches_whole_origin_only() {
    let api = ApiConfig {
        cors_allowed_origins: Vec::new(),
        cors_allowed_origin_regex: Some(r"https://.*\.vercel\.app".to_string()),
        ..ApiConfig::default()
    };
    let addr = spawn_app(api, Arc::new(MemoryEnv::new())).await;

    let (status, head, _) = send_raw(
        addr,
        "GET",
        "/api/classification",
        &[("Origin", "https://x.vercel.app.evil.example")],
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(header(&head, "access-control-allow-origin"), None);
    assert_eq!(header(&head, "access-control-allow-credentials"), None);

    let (_, head, _) = send_raw(
        addr,
        "GET",
        "/api/classification",
        &[("Origin", "https://x.vercel.app")],
    )
    .await;
    assert_eq!(
        header(&head, "access-control-allow-origin"),
        Some("https://x.vercel.app")
    );
}

#[tokio::test]
async fn bare_options_requests_are_routed_not_preflighted() {
    let addr = spawn_app(ApiConfig::default(), Arc::new(MemoryEnv::new())).await;

    let (status, _, body) = send_raw(addr, "OPTIONS", "/no/such/route", &[]).await;
    assert_eq!(status, 404);
    let json: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(json["error"]["code"], "NotFound");

    let (status, _, body) = send_raw(addr, "OPTIONS", "/api/classification", &[]).await;
    assert_eq!(status, 405);
    let json: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(json["error"]["code"], "MethodNotAllowed");

    let (status, head, _) = send_raw(
        addr,
        "OPTIONS",
        "/api/classification",
        &[("Origin", "http://localhost:3000")],
    )
    .await;
    assert_eq!(status, 405);
    assert_eq!(header(&head, "access-control-allow-methods"), None);
}
