use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension, Json,
};
use leadgen_core::TelemetrySnapshot;
use leadgen_generator::read_leads_table;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub(super) struct DashboardStats {
    pub total_leads: usize,
    pub industries: usize,
    pub cities: usize,
    pub latest_file: String,
}

#[derive(Debug, Serialize)]
pub(super) struct DashboardData {
    pub stats: DashboardStats,
    pub headers: Vec<String>,
    pub leads: Vec<Vec<String>>,
    pub telemetry: TelemetrySnapshot,
}

/// Loads aggregate stats and a preview of the latest workbook.
///
/// Read failures degrade to zero stats and no rows.
async fn load_dashboard(state: &AppState) -> DashboardData {
    let latest = state.latest.read().await.clone();
    let telemetry = state.telemetry.lock().await.clone();

    let mut stats = DashboardStats {
        latest_file: latest
            .as_ref()
            .map_or_else(|| "None".to_string(), |r| r.file_name.clone()),
        ..DashboardStats::default()
    };
    let mut headers = Vec::new();
    let mut leads = Vec::new();

    if let Some(record) = latest {
        let path = record.path.clone();
        let table = tokio::task::spawn_blocking(move || read_leads_table(&path)).await;

        match table {
            Ok(Ok(table)) => {
                stats.total_leads = table.len();
                stats.industries = table.distinct_count("Industry");
                stats.cities = table.distinct_count("Location");
                leads = table.preview(state.config.preview_rows).to_vec();
                headers = table.headers;
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    file = %record.file_name,
                    error = %e,
                    "failed to read lead workbook"
                );
            }
            Err(e) => {
                tracing::warn!(file = %record.file_name, error = %e, "workbook read task failed");
            }
        }
    }

    DashboardData {
        stats,
        headers,
        leads,
        telemetry,
    }
}

pub(super) async fn dashboard_page(State(state): State<AppState>) -> Response {
    let data = load_dashboard(&state).await;

    match state.templates.render("dashboard", &data) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "dashboard template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "dashboard unavailable").into_response()
        }
    }
}

pub(super) async fn dashboard_json(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<DashboardData>> {
    let data = load_dashboard(&state).await;
    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
