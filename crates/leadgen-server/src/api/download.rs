use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::AppState;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const NOTHING_GENERATED: &str = "No leads generated yet";

pub(super) async fn download_latest(State(state): State<AppState>) -> Response {
    let Some(record) = state.latest.read().await.clone() else {
        return (StatusCode::NOT_FOUND, NOTHING_GENERATED).into_response();
    };

    match tokio::fs::read(&record.path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, XLSX_MIME.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", record.file_name),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(file = %record.file_name, error = %e, "latest lead workbook unreadable");
            (StatusCode::NOT_FOUND, NOTHING_GENERATED).into_response()
        }
    }
}
