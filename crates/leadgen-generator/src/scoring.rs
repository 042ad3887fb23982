//! Toy champion/challenger lead scoring.

use crate::vocab::NO_CRM;

/// Highest score either model may report.
pub const MAX_SCORE: u8 = 99;

const HIRING_BONUS: u32 = 15;
const CRM_BONUS: u32 = 10;
const DECISION_MAKER_BONUS: u32 = 8;

/// Applies the additive firmographic bonuses to `base` and caps at [`MAX_SCORE`].
///
/// - +15 when the hiring status mentions `Actively` or `Growing`
/// - +10 when any CRM was detected
/// - +8 when the title mentions `Founder` or `CEO`
#[must_use]
pub fn champion_score(base: u32, hiring_status: &str, crm: &str, title: &str) -> u8 {
    let mut score = base;
    if hiring_status.contains("Actively") || hiring_status.contains("Growing") {
        score += HIRING_BONUS;
    }
    if crm != NO_CRM {
        score += CRM_BONUS;
    }
    if title.contains("Founder") || title.contains("CEO") {
        score += DECISION_MAKER_BONUS;
    }
    u8::try_from(score.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}

/// Perturbs the champion score by `factor`, rounding and clamping to `[0, 99]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn challenger_score(champion: u8, factor: f64) -> u8 {
    let perturbed = (f64::from(champion) * factor).round();
    perturbed.clamp(0.0, f64::from(MAX_SCORE)) as u8
}
