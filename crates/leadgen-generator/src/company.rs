//! Company-name synthesis and URL-safe sanitization.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::vocab::{
    CLINIC_PREFIXES, CLINIC_SUFFIXES, COMPANY_PREFIXES, COMPANY_SUFFIXES, MEDIA_SUFFIXES,
    PROPERTY_PREFIXES,
};

/// Draws one entry from a fixed, non-empty pool.
pub(crate) fn draw<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Synthesizes a company name from an industry label.
///
/// Rules are tested in order against the raw industry string (case-sensitive
/// substring match) and the first match wins:
///
/// | Industry contains | Shape |
/// |---|---|
/// | `Agency` or `Marketing` | `<prefix> Media <Group\|Agency\|Network>` |
/// | `Clinic`, `Medical` or `Dental` | `<City\|Prime\|Care\|Wellness> <first word> <Care\|Center\|Clinic>` |
/// | `Services` | `<prefix> <first word> <suffix>` |
/// | `Startup` | `<prefix>Tech.io` |
/// | `Real Estate` or `Property` | `<Premium\|Global\|Urban\|Core> Properties` |
/// | anything else | `<prefix> <suffix>` |
pub fn synthesize_company_name<R: Rng + ?Sized>(rng: &mut R, industry: &str) -> String {
    let contains_any = |needles: &[&str]| needles.iter().any(|n| industry.contains(n));
    let first_word = industry.split(' ').next().unwrap_or(industry);

    if contains_any(&["Agency", "Marketing"]) {
        format!(
            "{} Media {}",
            draw(rng, COMPANY_PREFIXES),
            draw(rng, MEDIA_SUFFIXES)
        )
    } else if contains_any(&["Clinic", "Medical", "Dental"]) {
        format!(
            "{} {first_word} {}",
            draw(rng, CLINIC_PREFIXES),
            draw(rng, CLINIC_SUFFIXES)
        )
    } else if industry.contains("Services") {
        format!(
            "{} {first_word} {}",
            draw(rng, COMPANY_PREFIXES),
            draw(rng, COMPANY_SUFFIXES)
        )
    } else if industry.contains("Startup") {
        format!("{}Tech.io", draw(rng, COMPANY_PREFIXES))
    } else if contains_any(&["Real Estate", "Property"]) {
        format!("{} Properties", draw(rng, PROPERTY_PREFIXES))
    } else {
        format!(
            "{} {}",
            draw(rng, COMPANY_PREFIXES),
            draw(rng, COMPANY_SUFFIXES)
        )
    }
}

/// Lower-cases `s`, turns spaces into hyphens, strips commas and periods and
/// spells `&` as `and`.
///
/// Idempotent: sanitizing an already-sanitized string returns it unchanged.
#[must_use]
pub fn sanitize_url_string(s: &str) -> String {
    s.to_lowercase()
        .replace(' ', "-")
        .replace([',', '.'], "")
        .replace('&', "and")
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn ends_with_any(name: &str, options: &[&str]) -> bool {
        options.iter().any(|o| name.ends_with(o))
    }

    #[test]
    fn marketing_industries_become_media_companies() {
        let mut rng = rng();
        for _ in 0..20 {
            let name = synthesize_company_name(&mut rng, "Digital Marketing Agency");
            assert!(name.contains(" Media "), "unexpected name {name}");
            assert!(ends_with_any(&name, MEDIA_SUFFIXES));
        }
    }

    #[test]
    fn marketing_rule_takes_precedence_over_services() {
        let mut rng = rng();
        let name = synthesize_company_name(&mut rng, "Marketing Services");
        assert!(name.contains(" Media "), "unexpected name {name}");
    }

    #[test]
    fn clinic_industries_use_first_word() {
        let mut rng = rng();
        for _ in 0..20 {
            let name = synthesize_company_name(&mut rng, "Dental Clinic");
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 3, "unexpected name {name}");
            assert!(CLINIC_PREFIXES.contains(&parts[0]));
            assert_eq!(parts[1], "Dental");
            assert!(CLINIC_SUFFIXES.contains(&parts[2]));
        }
    }

    #[test]
    fn services_industries_embed_first_word() {
        let mut rng = rng();
        let name = synthesize_company_name(&mut rng, "IT Services");
        let parts: Vec<&str> = name.split(' ').collect();
        assert_eq!(parts.len(), 3, "unexpected name {name}");
        assert!(COMPANY_PREFIXES.contains(&parts[0]));
        assert_eq!(parts[1], "IT");
        assert!(COMPANY_SUFFIXES.contains(&parts[2]));
    }

    #[test]
    fn startup_industries_become_tech_io() {
        let mut rng = rng();
        let name = synthesize_company_name(&mut rng, "SaaS Startup");
        assert!(name.ends_with("Tech.io"), "unexpected name {name}");
        assert!(!name.contains(' '));
    }

    #[test]
    fn real_estate_industries_become_properties() {
        let mut rng = rng();
        for industry in ["Real Estate Brokerage", "Property Management"] {
            let name = synthesize_company_name(&mut rng, industry);
            assert!(name.ends_with(" Properties"), "unexpected name {name}");
        }
    }

    #[test]
    fn unknown_industries_use_prefix_and_suffix() {
        let mut rng = rng();
        let name = synthesize_company_name(&mut rng, "Logistics");
        let parts: Vec<&str> = name.split(' ').collect();
        assert_eq!(parts.len(), 2, "unexpected name {name}");
        assert!(COMPANY_PREFIXES.contains(&parts[0]));
        assert!(COMPANY_SUFFIXES.contains(&parts[1]));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut rng = rng();
        let name = synthesize_company_name(&mut rng, "saas startup");
        assert!(!name.ends_with("Tech.io"), "unexpected name {name}");
    }

    #[test]
    fn sanitize_replaces_and_strips_characters() {
        assert_eq!(sanitize_url_string("Apex Media Group"), "apex-media-group");
        assert_eq!(sanitize_url_string("AlphaTech.io"), "alphatechio");
        assert_eq!(sanitize_url_string("Smith, Jones & Co."), "smith-jones-and-co");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for input in ["Prime Dental Clinic 42", "NovaTech.io", "A & B, Ltd."] {
            let once = sanitize_url_string(input);
            assert_eq!(sanitize_url_string(&once), once);
        }
    }
}
