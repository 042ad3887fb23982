//! `inspect` command: summary stats and a preview of a lead workbook.

use std::path::{Path, PathBuf};

use leadgen_generator::{discover_latest, read_leads_table, LeadTable};

const PREVIEW_COLUMNS: [&str; 5] = [
    "Full Name",
    "Job Title",
    "Company Name",
    "Industry",
    "Location",
];
const CELL_WIDTH: usize = 28;

fn truncate(value: &str) -> String {
    if value.chars().count() > CELL_WIDTH - 2 {
        format!("{}...", value.chars().take(CELL_WIDTH - 5).collect::<String>())
    } else {
        value.to_string()
    }
}

/// Renders the preview table; columns missing from `table` are skipped.
pub(crate) fn render_preview(table: &LeadTable, limit: usize) -> Vec<String> {
    let columns: Vec<(&str, usize)> = PREVIEW_COLUMNS
        .iter()
        .filter_map(|name| table.column_index(name).map(|idx| (*name, idx)))
        .collect();

    let mut lines = Vec::with_capacity(limit + 1);
    lines.push(
        columns
            .iter()
            .map(|(name, _)| format!("{:<CELL_WIDTH$}", name.to_uppercase()))
            .collect::<String>()
            .trim_end()
            .to_string(),
    );
    for row in table.preview(limit) {
        let line: String = columns
            .iter()
            .map(|(_, idx)| {
                let cell = row.get(*idx).map_or("", String::as_str);
                format!("{:<CELL_WIDTH$}", truncate(cell))
            })
            .collect();
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// Resolves the workbook to inspect: an explicit path, or the latest one in
/// `output_dir`.
///
/// # Errors
///
/// Returns an error if no workbook is given and none can be discovered.
pub(crate) fn resolve_workbook(
    file: Option<&Path>,
    output_dir: &Path,
) -> anyhow::Result<PathBuf> {
    if let Some(file) = file {
        return Ok(file.to_path_buf());
    }
    discover_latest(output_dir)?
        .map(|record| record.path)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no lead workbooks found in {}; run `generate` first",
                output_dir.display()
            )
        })
}

/// Prints row totals, distinct industries and locations, and a preview.
///
/// # Errors
///
/// Returns an error if the workbook cannot be located or read.
pub(crate) fn run_inspect(
    file: Option<&Path>,
    output_dir: &Path,
    preview_rows: usize,
) -> anyhow::Result<()> {
    let path = resolve_workbook(file, output_dir)?;
    let table = read_leads_table(&path)?;
    tracing::debug!(file = %path.display(), rows = table.len(), "loaded lead workbook");

    println!("Workbook:   {}", path.display());
    println!("Total rows: {}", table.len());
    println!("Industries: {}", table.distinct_count("Industry"));
    println!("Cities:     {}", table.distinct_count("Location"));

    if table.is_empty() {
        println!("no rows to preview");
        return Ok(());
    }
    println!();
    for line in render_preview(&table, preview_rows) {
        println!("{line}");
    }

    Ok(())
}
