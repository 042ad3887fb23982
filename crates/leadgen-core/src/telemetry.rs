//! Presentation-only model telemetry.
//!
//! Version labels and drift status are fixed strings; latency is wall-clock
//! time of the most recent generation.

use serde::Serialize;

pub const MODEL_VERSION: &str = "v2.5.1-xgboost-champion";
pub const CHALLENGER_VERSION: &str = "v3.0.0-lgbm-shadow";
pub const STABLE_DRIFT_STATUS: &str = "Stable (0.02 KL Divergence)";
pub const INITIAL_DRIFT_STATUS: &str = "Calculating...";
/// Simulated feature count attributed to each generated lead.
pub const FEATURES_PER_LEAD: u64 = 14;

/// Telemetry produced by one generation batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchTelemetry {
    pub model_version: String,
    pub challenger_version: String,
    pub inference_latency_ms: f64,
    pub drift_status: String,
    pub features_processed: u64,
}

impl BatchTelemetry {
    /// Builds batch telemetry for `count` leads generated in `elapsed_ms`.
    ///
    /// Latency is rounded to two decimal places.
    #[must_use]
    pub fn for_batch(count: u32, elapsed_ms: f64) -> Self {
        Self {
            model_version: MODEL_VERSION.to_string(),
            challenger_version: CHALLENGER_VERSION.to_string(),
            inference_latency_ms: (elapsed_ms * 100.0).round() / 100.0,
            drift_status: STABLE_DRIFT_STATUS.to_string(),
            features_processed: u64::from(count) * FEATURES_PER_LEAD,
        }
    }
}

/// Process-wide counters surfaced on the dashboard and metrics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    pub model_version: String,
    pub challenger_version: String,
    pub inference_latency_ms: f64,
    pub drift_status: String,
    pub features_processed: u64,
    pub total_invocations: u64,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            model_version: MODEL_VERSION.to_string(),
            challenger_version: CHALLENGER_VERSION.to_string(),
            inference_latency_ms: 0.0,
            drift_status: INITIAL_DRIFT_STATUS.to_string(),
            features_processed: 0,
            total_invocations: 0,
        }
    }
}

impl TelemetrySnapshot {
    /// Folds one batch into the running counters.
    ///
    /// Latency and drift are overwritten; the two totals accumulate.
    pub fn record(&mut self, batch: &BatchTelemetry) {
        self.inference_latency_ms = batch.inference_latency_ms;
        self.drift_status.clone_from(&batch.drift_status);
        self.features_processed = self
            .features_processed
            .saturating_add(batch.features_processed);
        self.total_invocations = self.total_invocations.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_telemetry_counts_fourteen_features_per_lead() {
        let batch = BatchTelemetry::for_batch(3, 1.0);
        assert_eq!(batch.features_processed, 42);
        assert_eq!(batch.drift_status, STABLE_DRIFT_STATUS);
    }

    #[test]
    fn batch_telemetry_rounds_latency_to_two_decimals() {
        let batch = BatchTelemetry::for_batch(1, 12.345_678);
        assert!((batch.inference_latency_ms - 12.35).abs() < f64::EPSILON);
    }

    #[test]
    fn default_snapshot_starts_at_zero() {
        let snapshot = TelemetrySnapshot::default();
        assert_eq!(snapshot.total_invocations, 0);
        assert_eq!(snapshot.features_processed, 0);
        assert_eq!(snapshot.drift_status, INITIAL_DRIFT_STATUS);
    }

    #[test]
    fn record_overwrites_latency_and_accumulates_totals() {
        let mut snapshot = TelemetrySnapshot::default();
        snapshot.record(&BatchTelemetry::for_batch(3, 10.0));
        snapshot.record(&BatchTelemetry::for_batch(5, 4.5));

        assert_eq!(snapshot.total_invocations, 2);
        assert_eq!(snapshot.features_processed, 112);
        assert!((snapshot.inference_latency_ms - 4.5).abs() < f64::EPSILON);
        assert_eq!(snapshot.drift_status, STABLE_DRIFT_STATUS);
    }
}
