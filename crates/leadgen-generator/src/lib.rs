//! Synthetic lead generation for the leadgen dashboard.
//!
//! Draws lead records from fixed vocabularies and caller-supplied category
//! lists, scores them with a small additive rule, and persists each batch as
//! a single `.xlsx` workbook.

pub mod artifact;
pub mod company;
pub mod error;
pub mod generator;
pub mod scoring;
pub mod workbook;

mod vocab;

pub use artifact::{artifact_file_name, discover_latest, ArtifactRecord};
pub use company::{sanitize_url_string, synthesize_company_name};
pub use error::GeneratorError;
pub use generator::{generate_batch, generate_leads, BatchOutcome, GenerationRequest};
pub use scoring::{challenger_score, champion_score};
pub use workbook::{read_leads_table, write_leads_workbook, LeadTable};
