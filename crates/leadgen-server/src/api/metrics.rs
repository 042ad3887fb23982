use axum::{extract::State, http::header, response::IntoResponse};
use leadgen_core::TelemetrySnapshot;

use super::AppState;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Renders the process-wide counters in Prometheus text exposition format.
pub(super) fn render_metrics(snapshot: &TelemetrySnapshot) -> String {
    [
        "# HELP model_inference_latency_ms Average latency for XGBoost Champion".to_string(),
        "# TYPE model_inference_latency_ms gauge".to_string(),
        format!(
            "model_inference_latency_ms {:?}",
            snapshot.inference_latency_ms
        ),
        "# HELP model_features_processed_total Total features processed by pipeline".to_string(),
        "# TYPE model_features_processed_total counter".to_string(),
        format!(
            "model_features_processed_total {}",
            snapshot.features_processed
        ),
        "# HELP model_invocations_total Total algorithmic generations requested".to_string(),
        "# TYPE model_invocations_total counter".to_string(),
        format!("model_invocations_total {}", snapshot.total_invocations),
    ]
    .join("\n")
}

pub(super) async fn mlops_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.telemetry.lock().await.clone();
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        render_metrics(&snapshot),
    )
}
