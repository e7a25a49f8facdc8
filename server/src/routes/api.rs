use std::fmt::Write as _;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::{AppState, ObservabilitySnapshot};

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let observability = state.observability.snapshot();
    Json(serde_json::json!({
        "status": "ok",
        "score_storage_available": state.db.is_some(),
        "observability": {
            "score_submissions_accepted_total": observability.score_submissions_accepted_total,
            "score_submissions_rejected_total": observability.score_submissions_rejected_total,
            "score_wins_total": observability.score_wins_total,
            "persisted_scores_total": observability.persisted_scores_total,
            "persist_failures_total": observability.persist_failures_total,
        }
    }))
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_prometheus_metrics(state.db.is_some(), state.observability.snapshot());

    (
        [
            (header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
}

fn write_metric(body: &mut String, name: &str, kind: &str, help: &str, value: u64) {
    let _ = writeln!(body, "# HELP {name} {help}");
    let _ = writeln!(body, "# TYPE {name} {kind}");
    let _ = writeln!(body, "{name} {value}");
}

fn render_prometheus_metrics(
    score_storage_available: bool,
    observability: ObservabilitySnapshot,
) -> String {
    let mut body = String::new();
    write_metric(
        &mut body,
        "tradle_score_storage_available",
        "gauge",
        "Whether score storage is available (1 or 0).",
        u64::from(score_storage_available),
    );
    write_metric(
        &mut body,
        "tradle_score_submissions_accepted_total",
        "counter",
        "Total score submissions accepted.",
        observability.score_submissions_accepted_total,
    );
    write_metric(
        &mut body,
        "tradle_score_submissions_rejected_total",
        "counter",
        "Total score submissions rejected as malformed or inconsistent.",
        observability.score_submissions_rejected_total,
    );
    write_metric(
        &mut body,
        "tradle_score_wins_total",
        "counter",
        "Total accepted submissions reporting a win.",
        observability.score_wins_total,
    );
    write_metric(
        &mut body,
        "tradle_persisted_scores_total",
        "counter",
        "Total submissions written to score storage.",
        observability.persisted_scores_total,
    );
    write_metric(
        &mut body,
        "tradle_persist_failures_total",
        "counter",
        "Total failures while writing submissions to score storage.",
        observability.persist_failures_total,
    );
    body
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;

    async fn spawn_test_server(state: AppState) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let app = crate::app::build_app(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });
        (addr, handle)
    }

    #[test]
    fn metrics_output_contains_prometheus_help_type_and_values() {
        let observability = ObservabilitySnapshot {
            score_submissions_accepted_total: 12,
            score_submissions_rejected_total: 3,
            score_wins_total: 7,
            persisted_scores_total: 11,
            persist_failures_total: 1,
        };

        let metrics = render_prometheus_metrics(true, observability);

        assert!(metrics.contains("# HELP tradle_score_storage_available"));
        assert!(metrics.contains("# TYPE tradle_score_storage_available gauge"));
        assert!(metrics.contains("tradle_score_storage_available 1"));
        assert!(metrics.contains("# TYPE tradle_score_submissions_accepted_total counter"));
        assert!(metrics.contains("tradle_score_submissions_accepted_total 12"));
        assert!(metrics.contains("tradle_score_submissions_rejected_total 3"));
        assert!(metrics.contains("tradle_score_wins_total 7"));
        assert!(metrics.contains("tradle_persisted_scores_total 11"));
        assert!(metrics.contains("tradle_persist_failures_total 1"));
    }

    #[tokio::test]
    async fn health_and_metrics_expose_expected_contract() {
        let state = AppState::new(None);
        state.observability.record_accepted(true);
        let (addr, server_handle) = spawn_test_server(state).await;
        let base_url = format!("http://{addr}");
        let client = reqwest::Client::new();

        let health = client
            .get(format!("{base_url}/api/health"))
            .send()
            .await
            .expect("health request")
            .error_for_status()
            .expect("health status")
            .json::<serde_json::Value>()
            .await
            .expect("parse health");

        assert_eq!(health.get("status").and_then(|v| v.as_str()), Some("ok"));
        assert_eq!(
            health
                .get("score_storage_available")
                .and_then(|v| v.as_bool()),
            Some(false)
        );
        assert_eq!(
            health
                .pointer("/observability/score_wins_total")
                .and_then(|v| v.as_u64()),
            Some(1)
        );

        let response = client
            .get(format!("{base_url}/api/metrics"))
            .send()
            .await
            .expect("metrics request")
            .error_for_status()
            .expect("metrics status");
        assert_eq!(
            response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some(PROMETHEUS_CONTENT_TYPE)
        );
        let metrics = response.text().await.expect("metrics body");
        assert!(metrics.contains("tradle_score_storage_available 0"));
        assert!(metrics.contains("tradle_score_submissions_accepted_total 1"));

        server_handle.abort();
        let _ = server_handle.await;
    }
}
