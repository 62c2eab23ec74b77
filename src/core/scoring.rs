use crate::core::breeds::breed_score;
use crate::models::{AgeRange, Pet, ScoringWeights, UserPreferences};

/// One evaluation pass over the nine scored attributes
///
/// Every field is a percentage in [0, 100]. The aggregator and the insight
/// generator both work from this struct so a candidate is only evaluated once.
#[derive(Debug, Clone, Copy)]
pub struct AttributeScores {
    pub species: f64,
    pub breed: f64,
    pub age: f64,
    pub size: f64,
    pub energy: f64,
    pub training: f64,
    pub family_friendly: f64,
    pub good_with_kids: f64,
    pub good_with_pets: f64,
}

/// Calculate a compatibility score (0-100) for a pet based on adopter preferences
///
/// Scoring formula: the weighted average of nine attribute sub-scores,
/// normalized by the sum of the weights and rounded to the nearest integer.
/// A preference that is absent, empty, or "Any" satisfies its attribute
/// fully; unknown lookup keys degrade to neutral defaults instead of erroring.
pub fn calculate_compatibility_score(
    pet: &Pet,
    preferences: &UserPreferences,
    weights: &ScoringWeights,
) -> u8 {
    let scores = score_attributes(pet, preferences);
    weighted_score(&scores, weights)
}

/// Compute all nine attribute sub-scores for one candidate
pub fn score_attributes(pet: &Pet, preferences: &UserPreferences) -> AttributeScores {
    AttributeScores {
        species: species_score(&pet.species, preferences.species.as_deref()),
        breed: preference_breed_score(&pet.breed, preferences.breed.as_deref()),
        age: age_score(pet.clamped_age(), preferences.age_range),
        size: size_score(&pet.size, preferences.size.as_deref()),
        energy: energy_score(&pet.energy, preferences.energy.as_deref()),
        training: training_score(&pet.training_level, preferences.training.as_deref()),
        family_friendly: required_flag_score(preferences.family_friendly, pet.family_friendly, 20.0),
        good_with_kids: required_flag_score(preferences.good_with_kids, pet.good_with_kids, 25.0),
        good_with_pets: required_flag_score(preferences.good_with_pets, pet.good_with_pets, 30.0),
    }
}

/// Collapse sub-scores into the final integer score
///
/// Sub-scores are clamped to [0, 100] before weighting and the aggregate is
/// clamped again before rounding, so a misconfigured weight table cannot push
/// the result out of range.
pub fn weighted_score(scores: &AttributeScores, weights: &ScoringWeights) -> u8 {
    let total_weight = weights.sum();
    if total_weight <= 0.0 {
        return 0;
    }

    let weighted = clamp_sub(scores.species) * weights.species
        + clamp_sub(scores.breed) * weights.breed
        + clamp_sub(scores.age) * weights.age
        + clamp_sub(scores.size) * weights.size
        + clamp_sub(scores.energy) * weights.energy
        + clamp_sub(scores.training) * weights.training
        + clamp_sub(scores.family_friendly) * weights.family_friendly
        + clamp_sub(scores.good_with_kids) * weights.good_with_kids
        + clamp_sub(scores.good_with_pets) * weights.good_with_pets;

    (weighted / total_weight).clamp(0.0, 100.0).round() as u8
}

#[inline]
fn clamp_sub(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// True when a string preference expresses no constraint
#[inline]
pub(crate) fn unconstrained(pref: Option<&str>) -> bool {
    match pref.map(str::trim) {
        None | Some("") => true,
        Some(value) => value.eq_ignore_ascii_case("any"),
    }
}

#[inline]
fn species_score(pet_species: &str, pref: Option<&str>) -> f64 {
    if unconstrained(pref) {
        return 100.0;
    }
    if pet_species.trim() == pref.unwrap_or_default().trim() {
        100.0
    } else {
        30.0
    }
}

#[inline]
fn preference_breed_score(pet_breed: &str, pref: Option<&str>) -> f64 {
    if unconstrained(pref) {
        return 100.0;
    }
    breed_score(pet_breed.trim(), pref.unwrap_or_default().trim())
}

/// Age sub-score: 100 inside the window, minus 10 per year of distance
/// from the nearer bound outside it, floored at 0
#[inline]
fn age_score(age: f64, range: Option<AgeRange>) -> f64 {
    let Some(range) = range else {
        return 100.0;
    };
    let (min, max) = range.normalized();

    if age >= min && age <= max {
        return 100.0;
    }

    let distance = (age - min).abs().min((age - max).abs());
    (100.0 - distance * 10.0).max(0.0)
}

#[inline]
fn size_score(pet_size: &str, pref: Option<&str>) -> f64 {
    if unconstrained(pref) {
        return 100.0;
    }
    if pet_size.trim() == pref.unwrap_or_default().trim() {
        100.0
    } else {
        60.0
    }
}

/// Energy pairing table; pet energy is the outer key
#[inline]
fn energy_score(pet_energy: &str, pref: Option<&str>) -> f64 {
    if unconstrained(pref) {
        return 100.0;
    }
    match (pet_energy.trim(), pref.unwrap_or_default().trim()) {
        ("Low", "Low") | ("Moderate", "Moderate") | ("High", "High") => 100.0,
        ("Low", "Moderate") | ("Moderate", "Low") => 70.0,
        ("Moderate", "High") | ("High", "Moderate") => 80.0,
        ("Low", "High") | ("High", "Low") => 30.0,
        _ => 50.0,
    }
}

/// Training-level pairing table; pet training level is the outer key
#[inline]
fn training_score(pet_training: &str, pref: Option<&str>) -> f64 {
    if unconstrained(pref) {
        return 100.0;
    }
    match (pet_training.trim(), pref.unwrap_or_default().trim()) {
        ("Easy", "Easy") | ("Moderate", "Moderate") | ("Difficult", "Difficult") => 100.0,
        ("Easy", "Moderate") | ("Moderate", "Easy") => 85.0,
        ("Moderate", "Difficult") | ("Difficult", "Moderate") => 70.0,
        ("Easy", "Difficult") | ("Difficult", "Easy") => 40.0,
        _ => 50.0,
    }
}

/// Boolean trait sub-score: a trait that is not required, or is required and
/// present, scores 100; a required trait the pet lacks scores the penalty value
#[inline]
fn required_flag_score(required: bool, actual: bool, miss: f64) -> f64 {
    if !required || actual {
        100.0
    } else {
        miss
    }
}
