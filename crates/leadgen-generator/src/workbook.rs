//! `.xlsx` persistence for lead batches.
//!
//! Writing goes through `rust_xlsxwriter`; reading goes through `calamine`
//! and yields a plain string table so legacy workbooks with different
//! columns still load.

use std::collections::HashSet;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use leadgen_core::{CellValue, Lead, LEAD_COLUMNS};
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;

use crate::error::GeneratorError;

/// Writes `leads` to `path` with one bold header row followed by one row per lead.
///
/// # Errors
///
/// Returns [`GeneratorError::XlsxWrite`] if a cell cannot be written or the
/// file cannot be saved.
pub fn write_leads_workbook(path: &Path, leads: &[Lead]) -> Result<(), GeneratorError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, name) in (0u16..).zip(LEAD_COLUMNS) {
        sheet.write_string_with_format(0, col, name, &header_format)?;
    }

    for (row, lead) in (1u32..).zip(leads) {
        for (col, cell) in (0u16..).zip(lead.cells()) {
            match cell {
                CellValue::Number(n) => sheet.write_number(row, col, f64::from(n))?,
                CellValue::Text(text) => sheet.write_string(row, col, text)?,
            };
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// A lead workbook loaded as strings: one header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LeadTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns at most the first `limit` rows.
    #[must_use]
    pub fn preview(&self, limit: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(limit)]
    }

    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Number of distinct non-empty values in `column`; zero if the column is absent.
    #[must_use]
    pub fn distinct_count(&self, column: &str) -> usize {
        let Some(idx) = self.column_index(column) else {
            return 0;
        };
        self.rows
            .iter()
            .filter_map(|row| row.get(idx))
            .filter(|v| !v.is_empty())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Loads the first worksheet of `path` as a [`LeadTable`].
///
/// # Errors
///
/// Returns [`GeneratorError::XlsxRead`] if the file is not a readable
/// workbook, or [`GeneratorError::EmptyWorkbook`] if it has no worksheets.
pub fn read_leads_table(path: &Path) -> Result<LeadTable, GeneratorError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| GeneratorError::EmptyWorkbook {
            path: path.display().to_string(),
        })??;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());
    let headers = rows.next().unwrap_or_default();

    Ok(LeadTable {
        headers,
        rows: rows.collect(),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
