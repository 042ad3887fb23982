//! `generate` command: one batch from the terminal, normalized exactly like
//! the HTTP generation route.

use std::path::Path;

use anyhow::Context;
use leadgen_core::{parse_count, AppConfig, Catalog};
use leadgen_generator::{generate_batch, BatchOutcome, GenerationRequest};

#[derive(Debug, Default)]
pub(crate) struct GenerateArgs {
    pub count: Option<String>,
    pub industries: Option<String>,
    pub locations: Option<String>,
    pub sizes: Option<String>,
    pub titles: Option<String>,
}

/// Turns raw flag values into a validated request.
///
/// Counts above `max_batch_size` are clamped to it.
///
/// # Errors
///
/// Returns an error if the resolved request is invalid.
pub(crate) fn build_request(
    args: &GenerateArgs,
    catalog: &Catalog,
    max_batch_size: u32,
) -> anyhow::Result<GenerationRequest> {
    let requested = parse_count(
        args.count
            .as_ref()
            .map(|c| serde_json::Value::String(c.clone()))
            .as_ref(),
    );
    let count = requested.min(max_batch_size);
    if count < requested {
        tracing::warn!(requested, max_batch_size, "count clamped to maximum batch size");
    }

    let request = GenerationRequest::new(
        count,
        catalog.resolve_industries(args.industries.as_deref()),
        catalog.resolve_locations(args.locations.as_deref()),
        catalog.resolve_sizes(args.sizes.as_deref()),
        catalog.resolve_titles(args.titles.as_deref()),
    )?;
    Ok(request)
}

/// Generates a batch into `output_dir` and prints a summary.
///
/// # Errors
///
/// Returns an error if the request is invalid or the workbook cannot be written.
pub(crate) fn run_generate(
    config: &AppConfig,
    catalog: &Catalog,
    args: &GenerateArgs,
    output_dir: &Path,
) -> anyhow::Result<BatchOutcome> {
    let request = build_request(args, catalog, config.max_batch_size)?;
    let outcome = generate_batch(&request, output_dir)
        .with_context(|| format!("failed to generate leads into {}", output_dir.display()))?;

    let telemetry = &outcome.telemetry;
    println!(
        "Successfully generated {} leads strictly matching your filters.",
        outcome.leads.len()
    );
    println!("File:               {}", outcome.artifact.path.display());
    println!("Champion model:     {}", telemetry.model_version);
    println!("Challenger model:   {}", telemetry.challenger_version);
    println!("Inference latency:  {} ms", telemetry.inference_latency_ms);
    println!("Drift status:       {}", telemetry.drift_status);
    println!("Features processed: {}", telemetry.features_processed);

    Ok(outcome)
}
