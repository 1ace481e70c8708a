// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

const METRIC_SUBSYSTEM: &str = "paddock";
const METRIC_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label used for paths that matched no route, keeping label cardinality bounded.
pub(crate) const ROUTE_UNMATCHED: &str = "unmatched";

#[derive(Debug, Default)]
pub(crate) struct RequestMetrics {
    counts: Mutex<BTreeMap<(String, u16), u64>>,
    latency_ns_total: Mutex<BTreeMap<String, u128>>,
    crowned: AtomicU64,
    uncrowned: AtomicU64,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        {
            let mut counts = self.counts.lock().await;
            *counts
                .entry((route.to_string(), status.as_u16()))
                .or_insert(0) += 1;
        }
        let mut latency_total = self.latency_ns_total.lock().await;
        *latency_total.entry(route.to_string()).or_insert(0) += latency.as_nanos();
    }

    pub(crate) fn observe_classification(&self, crowned: bool) {
        let counter = if crowned {
            &self.crowned
        } else {
            &self.uncrowned
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) async fn render_prometheus(&self) -> String {
        let mut body = String::new();
        let counts = self.counts.lock().await;
        for ((route, status), count) in counts.iter() {
            let _ = writeln!(
                body,
                "paddock_http_requests_total{{subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\",route=\"{route}\",status=\"{status}\"}} {count}"
            );
        }
        drop(counts);
        let latency_total = self.latency_ns_total.lock().await;
        for (route, total_ns) in latency_total.iter() {
            let seconds = *total_ns as f64 / 1_000_000_000.0;
            let _ = writeln!(
                body,
                "paddock_http_request_duration_seconds_sum{{subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\",route=\"{route}\"}} {seconds:.6}"
            );
        }
        drop(latency_total);
        for (switch, counter) in [("on", &self.crowned), ("off", &self.uncrowned)] {
            let _ = writeln!(
                body,
                "paddock_classification_served_total{{subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\",switch=\"{switch}\"}} {}",
                counter.load(Ordering::Relaxed)
            );
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_counts_per_route_and_status() {
        let metrics = RequestMetrics::default();
        metrics
            .observe_request("/api/classification", StatusCode::OK, Duration::from_millis(2))
            .await;
        metrics
            .observe_request("/api/classification", StatusCode::OK, Duration::from_millis(1))
            .await;
        metrics
            .observe_request(ROUTE_UNMATCHED, StatusCode::NOT_FOUND, Duration::ZERO)
            .await;
        metrics.observe_classification(true);

        let body = metrics.render_prometheus().await;
        assert!(body.contains("route=\"/api/classification\",status=\"200\"} 2"));
        assert!(body.contains("route=\"unmatched\",status=\"404\"} 1"));
        assert!(body.contains("switch=\"on\"} 1"));
        assert!(body.contains("switch=\"off\"} 0"));
    }
}
