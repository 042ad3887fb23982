mod dashboard;
mod download;
mod generate;
mod metrics;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use handlebars::Handlebars;
use leadgen_core::{AppConfig, Catalog, TelemetrySnapshot};
use leadgen_generator::{discover_latest, ArtifactRecord};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

const DASHBOARD_TEMPLATE: &str = include_str!("../../templates/dashboard.hbs");

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    /// Process-wide counters; every generation folds its batch telemetry in here.
    pub telemetry: Arc<Mutex<TelemetrySnapshot>>,
    /// Latest workbook, seeded once from disk and replaced by each generation.
    pub latest: Arc<RwLock<Option<ArtifactRecord>>>,
    pub templates: Arc<Handlebars<'static>>,
}

impl AppState {
    /// Builds the shared state and seeds the latest-artifact record from
    /// `config.output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded dashboard template fails to compile.
    pub fn new(config: Arc<AppConfig>, catalog: Catalog) -> anyhow::Result<Self> {
        let mut templates = Handlebars::new();
        templates.register_template_string("dashboard", DASHBOARD_TEMPLATE)?;

        let latest = match discover_latest(&config.output_dir) {
            Ok(found) => {
                if let Some(record) = &found {
                    tracing::info!(file = %record.file_name, "found existing lead workbook");
                }
                found
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not scan output directory for lead workbooks");
                None
            }
        };

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            telemetry: Arc::new(Mutex::new(TelemetrySnapshot::default())),
            latest: Arc::new(RwLock::new(latest)),
            templates: Arc::new(templates),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn generation_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/generate", post(generate::generate_leads))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard_page))
        .route("/api/dashboard", get(dashboard::dashboard_json))
        .route("/api/download", get(download::download_latest))
        .route("/api/mlops/metrics", get(metrics::mlops_metrics))
        .route("/api/health", get(health))
        .merge(generation_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData { status: "ok" },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub fn rate_limit_from_config(config: &AppConfig) -> RateLimitState {
    RateLimitState::per_minute(config.rate_limit_per_minute)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
