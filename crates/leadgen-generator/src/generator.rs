use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use chrono::{Local, Utc};
use leadgen_core::{BatchTelemetry, Lead};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::artifact::{artifact_file_name, ArtifactRecord};
use crate::company::{draw, sanitize_url_string, synthesize_company_name};
use crate::error::GeneratorError;
use crate::scoring::{challenger_score, champion_score};
use crate::vocab::{
    CRM_OPTIONS, DOMAIN_SUFFIXES, FIRST_NAMES, HIRING_OPTIONS, INTENT_TAGS, LAST_NAMES,
};
use crate::workbook::write_leads_workbook;

/// Retries allowed when a synthesized company name is already taken in the batch.
const MAX_DEDUP_ATTEMPTS: u32 = 10;

/// A validated generation request: a positive count and non-empty category lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    count: u32,
    industries: Vec<String>,
    locations: Vec<String>,
    sizes: Vec<String>,
    titles: Vec<String>,
}

impl GenerationRequest {
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidRequest`] if `count` is zero or any
    /// category list is empty.
    pub fn new(
        count: u32,
        industries: Vec<String>,
        locations: Vec<String>,
        sizes: Vec<String>,
        titles: Vec<String>,
    ) -> Result<Self, GeneratorError> {
        if count == 0 {
            return Err(GeneratorError::InvalidRequest(
                "count must be greater than zero".to_string(),
            ));
        }
        for (name, values) in [
            ("industries", &industries),
            ("locations", &locations),
            ("sizes", &sizes),
            ("titles", &titles),
        ] {
            if values.is_empty() {
                return Err(GeneratorError::InvalidRequest(format!(
                    "{name} must not be empty"
                )));
            }
        }

        Ok(Self {
            count,
            industries,
            locations,
            sizes,
            titles,
        })
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn industries(&self) -> &[String] {
        &self.industries
    }

    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    #[must_use]
    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

/// Result of one persisted generation batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub leads: Vec<Lead>,
    pub artifact: ArtifactRecord,
    pub telemetry: BatchTelemetry,
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, values: &'a [String]) -> &'a str {
    values.choose(rng).map_or("", String::as_str)
}

/// Generates exactly `request.count()` leads.
///
/// Company names are deduplicated best-effort within the batch: a colliding
/// name is re-synthesized with a numeric suffix up to ten times, after which
/// the collision is kept.
pub fn generate_leads<R: Rng + ?Sized>(rng: &mut R, request: &GenerationRequest) -> Vec<Lead> {
    let capacity = usize::try_from(request.count).unwrap_or_default();
    let mut leads = Vec::with_capacity(capacity);
    let mut used_companies: HashSet<String> = HashSet::with_capacity(capacity);

    while leads.len() < capacity {
        let first_name = draw(rng, FIRST_NAMES);
        let last_name = draw(rng, LAST_NAMES);

        let industry = pick(rng, &request.industries);
        let location = pick(rng, &request.locations);
        let size = pick(rng, &request.sizes);
        let title = pick(rng, &request.titles);

        let mut company_name = synthesize_company_name(rng, industry);
        let mut attempts = 0;
        while used_companies.contains(&company_name) && attempts < MAX_DEDUP_ATTEMPTS {
            company_name = format!(
                "{} {}",
                synthesize_company_name(rng, industry),
                rng.random_range(1..=999_u32)
            );
            attempts += 1;
        }
        used_companies.insert(company_name.clone());

        let company_slug = sanitize_url_string(&company_name);
        let domain = format!("{company_slug}{}", draw(rng, DOMAIN_SUFFIXES));
        let personal_linkedin = format!(
            "https://www.linkedin.com/in/{}-{}-{}a",
            sanitize_url_string(first_name),
            sanitize_url_string(last_name),
            rng.random_range(1000..=9999_u32)
        );

        let crm = draw(rng, CRM_OPTIONS);
        let hiring = draw(rng, HIRING_OPTIONS);
        let growth = format!("+{}% YoY", rng.random_range(5..=35_u32));
        let intent = draw(rng, INTENT_TAGS);

        let base_score = rng.random_range(40..=75);
        let champion = champion_score(base_score, hiring, crm, title);
        let challenger = challenger_score(champion, rng.random_range(0.85..=1.15_f64));

        leads.push(Lead {
            champion_score: champion,
            challenger_score: challenger,
            intent_tag: intent.to_string(),
            full_name: format!("{first_name} {last_name}"),
            job_title: title.to_string(),
            company_website: format!("https://www.{domain}"),
            linkedin_profile_url: personal_linkedin,
            company_linkedin_url: format!("https://www.linkedin.com/company/{company_slug}"),
            industry: industry.to_string(),
            company_size: size.to_string(),
            location: location.to_string(),
            business_email: format!("{}@{domain}", first_name.to_lowercase()),
            crm_detected: crm.to_string(),
            hiring_status: hiring.to_string(),
            company_growth: growth,
            company_name,
        });
    }

    leads
}

/// Generates a batch with the thread RNG and writes it to `output_dir`.
///
/// Latency covers both generation and the workbook write.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] if `output_dir` cannot be created, or
/// [`GeneratorError::XlsxWrite`] if the workbook cannot be written.
pub fn generate_batch(
    request: &GenerationRequest,
    output_dir: &Path,
) -> Result<BatchOutcome, GeneratorError> {
    let started = Instant::now();
    let leads = generate_leads(&mut rand::rng(), request);

    std::fs::create_dir_all(output_dir).map_err(|e| GeneratorError::Io {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let generated_at = Local::now();
    let file_name = artifact_file_name(request.count, generated_at.naive_local());
    let path = output_dir.join(&file_name);
    write_leads_workbook(&path, &leads)?;

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    let telemetry = BatchTelemetry::for_batch(request.count, elapsed_ms);

    tracing::info!(
        file = %file_name,
        count = leads.len(),
        latency_ms = telemetry.inference_latency_ms,
        "lead batch written"
    );

    Ok(BatchOutcome {
        leads,
        artifact: ArtifactRecord {
            path,
            file_name,
            created_at: generated_at.with_timezone(&Utc),
        },
        telemetry,
    })
}
