//! Category catalog and request-parameter normalization.
//!
//! Callers send industries, locations and company-size bands as free-text
//! comma-separated strings. A missing field takes the plain request default
//! (`"Digital Marketing, SaaS, Real Estate"` and friends); a field that is
//! present but splits to nothing takes the qualified catalog set instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Batch size used when the requested count is absent or not a positive integer.
pub const DEFAULT_COUNT: u32 = 50;

pub const DEFAULT_DECISION_MAKER_TITLES: &[&str] = &[
    "Founder",
    "Co-Founder",
    "CEO",
    "Managing Director",
    "Owner",
    "Director",
    "Head of Operations",
    "Operations Manager",
    "Sales Director",
    "Growth Director",
    "Business Development Director",
    "Chief Operating Officer",
    "Revenue Director",
    "Managing Partner",
];

/// Values assumed for a field the caller left out entirely.
pub const REQUEST_DEFAULT_INDUSTRIES: &str = "Digital Marketing, SaaS, Real Estate";
pub const REQUEST_DEFAULT_LOCATIONS: &str = "Mumbai, Bangalore, Delhi";
pub const REQUEST_DEFAULT_SIZES: &str = "5-50, 50-200";

const DEFAULT_INDUSTRIES: &[&str] = &[
    "Digital Marketing Agency",
    "SaaS Startup",
    "Real Estate Brokerage",
];

const DEFAULT_LOCATIONS: &[&str] = &["Mumbai, Maharashtra", "Bangalore, Karnataka", "Delhi NCR"];

const DEFAULT_SIZES: &[&str] = &["5-50 employees", "50-200 employees"];

/// Fallback category sets used when a caller sends a blank field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub industries: Vec<String>,
    pub locations: Vec<String>,
    pub sizes: Vec<String>,
    pub titles: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            industries: owned(DEFAULT_INDUSTRIES),
            locations: owned(DEFAULT_LOCATIONS),
            sizes: owned(DEFAULT_SIZES),
            titles: owned(DEFAULT_DECISION_MAKER_TITLES),
        }
    }

    /// Resolves a raw `industries` parameter.
    #[must_use]
    pub fn resolve_industries(&self, raw: Option<&str>) -> Vec<String> {
        normalize_list(Some(raw.unwrap_or(REQUEST_DEFAULT_INDUSTRIES)), &self.industries)
    }

    #[must_use]
    pub fn resolve_locations(&self, raw: Option<&str>) -> Vec<String> {
        normalize_list(Some(raw.unwrap_or(REQUEST_DEFAULT_LOCATIONS)), &self.locations)
    }

    #[must_use]
    pub fn resolve_sizes(&self, raw: Option<&str>) -> Vec<String> {
        normalize_list(Some(raw.unwrap_or(REQUEST_DEFAULT_SIZES)), &self.sizes)
    }

    /// Titles have no separate request default; absent and blank both use
    /// the catalog titles.
    #[must_use]
    pub fn resolve_titles(&self, raw: Option<&str>) -> Vec<String> {
        normalize_list(raw, &self.titles)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// On-disk catalog override. Every key is optional; missing keys keep the
/// built-in values.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    pub industries: Option<Vec<String>>,
    pub locations: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub titles: Option<Vec<String>>,
}

/// Load a catalog override from a YAML file, layered over [`Catalog::builtin`].
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or contains a
/// list with no non-blank entries.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    apply_catalog_file(Catalog::builtin(), file)
}

fn apply_catalog_file(mut catalog: Catalog, file: CatalogFile) -> Result<Catalog, ConfigError> {
    let fields = [
        ("industries", file.industries, &mut catalog.industries),
        ("locations", file.locations, &mut catalog.locations),
        ("sizes", file.sizes, &mut catalog.sizes),
        ("titles", file.titles, &mut catalog.titles),
    ];

    for (name, values, slot) in fields {
        let Some(values) = values else { continue };
        let cleaned: Vec<String> = values
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        if cleaned.is_empty() {
            return Err(ConfigError::Validation(format!(
                "catalog list '{name}' must contain at least one non-blank entry"
            )));
        }
        *slot = cleaned;
    }

    Ok(catalog)
}

/// Split a comma-separated string, trimming tokens and dropping empty ones.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Normalize a free-text list parameter, falling back when nothing is left.
///
/// An absent field and a field that splits to nothing both yield `fallback`.
#[must_use]
pub fn normalize_list(raw: Option<&str>, fallback: &[String]) -> Vec<String> {
    let values = raw.map(split_list).unwrap_or_default();
    if values.is_empty() {
        fallback.to_vec()
    } else {
        values
    }
}

/// Coerce a loosely-typed count parameter into a positive batch size.
///
/// Accepts a JSON number or a string made only of ASCII digits. Everything
/// else, including zero, becomes [`DEFAULT_COUNT`].
#[must_use]
pub fn parse_count(raw: Option<&serde_json::Value>) -> u32 {
    let parsed = match raw {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(serde_json::Value::String(s))
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) =>
        {
            s.parse::<u32>().ok()
        }
        _ => None,
    };
    parsed.filter(|&n| n > 0).unwrap_or(DEFAULT_COUNT)
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
