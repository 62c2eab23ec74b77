use crate::core::scoring::calculate_compatibility_score;
use crate::models::{HealthRequirements, Lifestyle, Pet, ScoringWeights, UserPreferences};

// Composite blend coefficients
const BASE_WEIGHT: f64 = 0.5;
const LIFESTYLE_WEIGHT: f64 = 0.3;
const HEALTH_WEIGHT: f64 = 0.2;

// Health penalties
const UNVACCINATED_PENALTY: f64 = 30.0;
const MEDICAL_HISTORY_PENALTY: f64 = 20.0;
const SPECIAL_NEEDS_PENALTY: f64 = 25.0;

/// Lifestyle fit under the multiplicative model
///
/// Starts at 100 and multiplies by up to three independent factors in (0, 1]:
/// household activity against pet energy, living space against pet size, and
/// owner experience against training level. A lifestyle key with no table
/// entry leaves its factor unapplied, so the result only ever decreases from
/// 100. This model is deliberately separate from the weighted-average score;
/// only the composite blend combines the two.
pub fn lifestyle_compatibility(pet: &Pet, lifestyle: &Lifestyle) -> u8 {
    let mut score = 100.0;

    if let Some(factor) = lookup(&lifestyle.activity, |key| activity_factor(key, pet.energy.trim())) {
        score *= factor;
    }
    if let Some(factor) = lookup(&lifestyle.space, |key| space_factor(key, pet.size.trim())) {
        score *= factor;
    }
    if let Some(factor) = lookup(&lifestyle.experience, |key| {
        experience_factor(key, pet.training_level.trim())
    }) {
        score *= factor;
    }

    score.round() as u8
}

/// Health fit: 100 minus a fixed penalty per unmet requirement, floored at 0
pub fn health_compatibility(pet: &Pet, requirements: &HealthRequirements) -> u8 {
    let mut score = 100.0;

    if requirements.vaccinated && !pet.vaccinated {
        score -= UNVACCINATED_PENALTY;
    }
    if requirements.no_medical_history && !pet.medical_history.is_empty() {
        score -= MEDICAL_HISTORY_PENALTY;
    }
    if requirements.no_special_needs && pet.special_needs {
        score -= SPECIAL_NEEDS_PENALTY;
    }

    score.max(0.0).round() as u8
}

/// Fixed linear blend of the three scoring models
pub fn composite_compatibility(
    pet: &Pet,
    preferences: &UserPreferences,
    lifestyle: &Lifestyle,
    requirements: &HealthRequirements,
    weights: &ScoringWeights,
) -> u8 {
    let base = calculate_compatibility_score(pet, preferences, weights) as f64;
    let lifestyle_score = lifestyle_compatibility(pet, lifestyle) as f64;
    let health_score = health_compatibility(pet, requirements) as f64;

    (BASE_WEIGHT * base + LIFESTYLE_WEIGHT * lifestyle_score + HEALTH_WEIGHT * health_score).round()
        as u8
}

#[inline]
fn lookup<F>(key: &Option<String>, table: F) -> Option<f64>
where
    F: Fn(&str) -> Option<f64>,
{
    key.as_deref()
        .map(|k| k.trim().to_lowercase())
        .and_then(|k| table(&k))
}

fn activity_factor(activity: &str, energy: &str) -> Option<f64> {
    let factor = match (activity, energy) {
        ("active", "High") => 1.0,
        ("active", "Moderate") => 0.9,
        ("active", "Low") => 0.6,
        ("moderate", "High") => 0.8,
        ("moderate", "Moderate") => 1.0,
        ("moderate", "Low") => 0.8,
        ("relaxed", "High") => 0.5,
        ("relaxed", "Moderate") => 0.8,
        ("relaxed", "Low") => 1.0,
        _ => return None,
    };
    Some(factor)
}

fn space_factor(space: &str, size: &str) -> Option<f64> {
    let factor = match (space, size) {
        ("apartment", "Small") => 1.0,
        ("apartment", "Medium") => 0.8,
        ("apartment", "Large") => 0.5,
        ("house", "Small") => 1.0,
        ("house", "Medium") => 1.0,
        ("house", "Large") => 0.9,
        ("large-yard", "Small") => 0.9,
        ("large-yard", "Medium") => 1.0,
        ("large-yard", "Large") => 1.0,
        _ => return None,
    };
    Some(factor)
}

fn experience_factor(experience: &str, training: &str) -> Option<f64> {
    let factor = match (experience, training) {
        ("first-time", "Easy") => 1.0,
        ("first-time", "Moderate") => 0.7,
        ("first-time", "Difficult") => 0.4,
        ("some-experience", "Easy") => 1.0,
        ("some-experience", "Moderate") => 0.9,
        ("some-experience", "Difficult") => 0.7,
        ("experienced", "Easy") => 1.0,
        ("experienced", "Moderate") => 1.0,
        ("experienced", "Difficult") => 1.0,
        _ => return None,
    };
    Some(factor)
}
