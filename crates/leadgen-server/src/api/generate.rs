use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leadgen_core::{parse_count, BatchTelemetry};
use leadgen_generator::{generate_batch, ArtifactRecord, GenerationRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppState;

/// Raw generation parameters. Every field is free text (or a number for
/// `count`); anything unusable falls back to defaults rather than failing.
#[derive(Debug, Default, Deserialize)]
pub(super) struct GenerateBody {
    pub count: Option<Value>,
    pub industries: Option<Value>,
    pub locations: Option<Value>,
    pub sizes: Option<Value>,
    pub titles: Option<Value>,
}

#[derive(Debug, Serialize)]
pub(super) struct GenerateResponse {
    status: &'static str,
    message: String,
    file: String,
    count: usize,
    telemetry: BatchTelemetry,
}

#[derive(Debug, Serialize)]
pub(super) struct GenerateError {
    #[serde(skip)]
    code: StatusCode,
    status: &'static str,
    message: String,
}

impl GenerateError {
    fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            status: "error",
            message: message.into(),
        }
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}

fn text_field(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

fn parse_body(body: &Bytes) -> Result<GenerateBody, GenerateError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateBody::default());
    }
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        GenerateError::new(StatusCode::BAD_REQUEST, format!("invalid JSON body: {e}"))
    })?;
    if value.is_null() {
        return Ok(GenerateBody::default());
    }
    serde_json::from_value(value).map_err(|e| {
        GenerateError::new(StatusCode::BAD_REQUEST, format!("invalid request body: {e}"))
    })
}

fn build_request(
    state: &AppState,
    body: &GenerateBody,
) -> Result<GenerationRequest, GenerateError> {
    let requested = parse_count(body.count.as_ref());
    let count = requested.min(state.config.max_batch_size);
    if count < requested {
        tracing::warn!(
            requested,
            max_batch_size = state.config.max_batch_size,
            "requested count clamped to maximum batch size"
        );
    }

    let catalog = &state.catalog;
    GenerationRequest::new(
        count,
        catalog.resolve_industries(text_field(body.industries.as_ref())),
        catalog.resolve_locations(text_field(body.locations.as_ref())),
        catalog.resolve_sizes(text_field(body.sizes.as_ref())),
        catalog.resolve_titles(text_field(body.titles.as_ref())),
    )
    .map_err(|e| GenerateError::new(StatusCode::BAD_REQUEST, e.to_string()))
}

/// Replaces `slot` with `candidate` unless `slot` already holds a newer batch.
///
/// Overlapping generations can finish out of order; the record always tracks
/// the batch created last.
pub(super) fn promote_latest(slot: &mut Option<ArtifactRecord>, candidate: ArtifactRecord) {
    let newer = match slot {
        Some(current) => candidate.created_at >= current.created_at,
        None => true,
    };
    if newer {
        *slot = Some(candidate);
    }
}

pub(super) async fn generate_leads(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, GenerateError> {
    let body = parse_body(&body)?;
    let request = build_request(&state, &body)?;

    tracing::info!(
        count = request.count(),
        industries = request.industries().len(),
        locations = request.locations().len(),
        sizes = request.sizes().len(),
        "generating lead batch"
    );

    let output_dir = state.config.output_dir.clone();
    let outcome = tokio::task::spawn_blocking(move || generate_batch(&request, &output_dir))
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "lead generation task failed");
            GenerateError::new(StatusCode::INTERNAL_SERVER_ERROR, "lead generation failed")
        })?
        .map_err(|e| {
            tracing::error!(error = ?e, "lead generation failed");
            GenerateError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    state.telemetry.lock().await.record(&outcome.telemetry);
    promote_latest(&mut *state.latest.write().await, outcome.artifact.clone());

    let count = outcome.leads.len();
    Ok(Json(GenerateResponse {
        status: "success",
        message: format!("Successfully generated {count} leads strictly matching your filters."),
        file: outcome.artifact.file_name,
        count,
        telemetry: outcome.telemetry,
    }))
}
