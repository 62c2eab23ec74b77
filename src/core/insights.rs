use crate::core::scoring::{score_attributes, unconstrained, weighted_score, AttributeScores};
use crate::models::{MatchInsights, Pet, ScoringWeights, UserPreferences};

/// Fixed reinforcement lines attached to every match scoring 85 or above
pub const STRONG_MATCH_NOTES: [&str; 2] = [
    "This pet is an outstanding fit for your household.",
    "Matches this strong are rare; consider scheduling a meet-and-greet soon.",
];

/// Score at or above which the reinforcement lines are attached
const STRONG_MATCH_THRESHOLD: u8 = 85;

/// Score below which mismatch call-outs are generated
const CALLOUT_THRESHOLD: u8 = 80;

/// Human-readable reasons for the attributes that matched
///
/// Re-evaluates the sub-scores and emits one sentence per attribute whose
/// score meets its threshold, in attribute evaluation order.
pub fn match_reasons(pet: &Pet, preferences: &UserPreferences) -> Vec<String> {
    let scores = score_attributes(pet, preferences);
    reasons_from_scores(pet, &scores)
}

/// Full per-candidate explanation: score, qualitative insight, reasons
/// and recommendations
pub fn match_insights(
    pet: &Pet,
    preferences: &UserPreferences,
    weights: &ScoringWeights,
) -> MatchInsights {
    let scores = score_attributes(pet, preferences);
    let compatibility_score = weighted_score(&scores, weights);

    MatchInsights {
        compatibility_score,
        insight: insight_for_score(compatibility_score),
        match_reasons: reasons_from_scores(pet, &scores),
        recommendations: recommendations_for(pet, preferences, compatibility_score),
    }
}

pub(crate) fn reasons_from_scores(pet: &Pet, scores: &AttributeScores) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.species == 100.0 {
        reasons.push(format!("Perfect {} match for your home", pet.species.to_lowercase()));
    }

    if scores.breed == 100.0 {
        reasons.push(format!("{} is exactly the breed you are looking for", pet.breed));
    } else if scores.breed >= 80.0 {
        reasons.push(format!("{} belongs to a breed group compatible with your preference", pet.breed));
    }

    if scores.age == 100.0 {
        reasons.push(format!("At {} years old, {} fits your preferred age range", pet.age, pet.name));
    }

    if scores.energy >= 80.0 {
        reasons.push(format!("{} energy level suits your lifestyle", pet.energy));
    }

    if scores.family_friendly == 100.0 {
        reasons.push("Great fit for family life".to_string());
    }

    if scores.good_with_kids == 100.0 {
        reasons.push("Known to be gentle with children".to_string());
    }

    if scores.good_with_pets == 100.0 {
        reasons.push("Gets along well with other pets".to_string());
    }

    reasons
}

/// Qualitative bucket for an aggregate score
pub fn insight_for_score(score: u8) -> String {
    let insight = match score {
        90..=u8::MAX => "Exceptional match! This pet aligns with nearly everything you are looking for.",
        80..=89 => "Excellent compatibility. A few small differences, nothing that should hold you back.",
        70..=79 => "Good match with solid compatibility across most of your preferences.",
        60..=69 => "Decent compatibility. Worth a closer look before deciding.",
        _ => "Limited compatibility. This pet may need more flexibility than you planned for.",
    };
    insight.to_string()
}

/// Mismatch call-outs for weak matches, reinforcement lines for strong ones
///
/// Call-outs fire only below the call-out threshold and only for energy and
/// training when a stated preference differs from the pet. The two
/// reinforcement lines are always appended at or above the strong-match
/// threshold.
pub(crate) fn recommendations_for(
    pet: &Pet,
    preferences: &UserPreferences,
    score: u8,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if score < CALLOUT_THRESHOLD {
        if let Some(preferred) = stated(&preferences.energy) {
            if pet.energy.trim() != preferred {
                recommendations.push(format!(
                    "{} has {} energy while you asked for {}; plan for the difference in daily routine",
                    pet.name,
                    pet.energy.to_lowercase(),
                    preferred.to_lowercase(),
                ));
            }
        }

        if let Some(preferred) = stated(&preferences.training) {
            if pet.training_level.trim() != preferred {
                recommendations.push(format!(
                    "{} is rated {} to train against your {} preference; budget extra training time",
                    pet.name,
                    pet.training_level.to_lowercase(),
                    preferred.to_lowercase(),
                ));
            }
        }
    }

    if score >= STRONG_MATCH_THRESHOLD {
        recommendations.extend(STRONG_MATCH_NOTES.iter().map(|note| note.to_string()));
    }

    recommendations
}

#[inline]
fn stated(pref: &Option<String>) -> Option<&str> {
    let value = pref.as_deref();
    if unconstrained(value) {
        None
    } else {
        value.map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeRange;

    fn create_test_pet() -> Pet {
        Pet {
            pet_id: "pet_1".to_string(),
            name: "Luna".to_string(),
            species: "Dog".to_string(),
            breed: "Labrador Retriever".to_string(),
            age: 2.0,
            size: "Medium".to_string(),
            energy: "Moderate".to_string(),
            training_level: "Easy".to_string(),
            family_friendly: true,
            good_with_kids: true,
            good_with_pets: true,
            vaccinated: true,
            medical_history: vec![],
            special_needs: false,
            image_file_ids: vec![],
            description: None,
        }
    }

    fn create_test_preferences() -> UserPreferences {
        UserPreferences {
            species: Some("Dog".to_string()),
            breed: Some("Labrador Retriever".to_string()),
            age_range: Some(AgeRange { min: 1.0, max: 3.0 }),
            size: Some("Medium".to_string()),
            energy: Some("Moderate".to_string()),
            training: Some("Easy".to_string()),
            family_friendly: true,
            good_with_kids: true,
            good_with_pets: true,
            lifestyle: None,
        }
    }

    #[test]
    fn test_perfect_match_reasons_cover_all_thresholds() {
        let reasons = match_reasons(&create_test_pet(), &create_test_preferences());

        assert_eq!(reasons.len(), 7);
        assert!(reasons[0].contains("Perfect dog match"));
        assert!(reasons[1].contains("exactly the breed"));
        assert!(reasons[2].contains("age range"));
        assert!(reasons[3].contains("energy level"));
    }

    #[test]
    fn test_group_match_gets_compatible_breed_reason() {
        let mut pet = create_test_pet();
        pet.breed = "Pointer".to_string();
        let preferences = create_test_preferences();

        let reasons = match_reasons(&pet, &preferences);
        assert!(reasons.iter().any(|r| r.contains("breed group compatible")));
        assert!(!reasons.iter().any(|r| r.contains("exactly the breed")));
    }

    #[test]
    fn test_no_reasons_below_thresholds() {
        let mut pet = create_test_pet();
        pet.species = "Cat".to_string();
        pet.breed = "Siamese".to_string();
        pet.age = 10.0;
        pet.energy = "High".to_string();
        pet.family_friendly = false;
        pet.good_with_kids = false;
        pet.good_with_pets = false;
        let mut preferences = create_test_preferences();
        preferences.energy = Some("Low".to_string());

        let reasons = match_reasons(&pet, &preferences);
        assert!(reasons.is_empty(), "unexpected reasons: {:?}", reasons);
    }

    #[test]
    fn test_insight_buckets() {
        assert!(insight_for_score(95).starts_with("Exceptional"));
        assert!(insight_for_score(90).starts_with("Exceptional"));
        assert!(insight_for_score(85).starts_with("Excellent"));
        assert!(insight_for_score(75).starts_with("Good"));
        assert!(insight_for_score(60).starts_with("Decent"));
        assert!(insight_for_score(40).starts_with("Limited"));
    }

    #[test]
    fn test_strong_match_gets_reinforcement_notes() {
        let insights = match_insights(
            &create_test_pet(),
            &create_test_preferences(),
            &ScoringWeights::default(),
        );

        assert_eq!(insights.compatibility_score, 100);
        assert_eq!(insights.recommendations.len(), 2);
        assert_eq!(insights.recommendations[0], STRONG_MATCH_NOTES[0]);
        assert_eq!(insights.recommendations[1], STRONG_MATCH_NOTES[1]);
    }

    #[test]
    fn test_weak_match_gets_mismatch_callouts_not_notes() {
        let mut pet = create_test_pet();
        pet.species = "Cat".to_string();
        pet.breed = "Siamese".to_string();
        pet.energy = "High".to_string();
        pet.training_level = "Difficult".to_string();
        pet.family_friendly = false;
        pet.good_with_kids = false;
        let mut preferences = create_test_preferences();
        preferences.energy = Some("Low".to_string());

        let insights = match_insights(&pet, &preferences, &ScoringWeights::default());

        assert!(insights.compatibility_score < 80);
        assert_eq!(insights.recommendations.len(), 2);
        assert!(insights.recommendations[0].contains("energy"));
        assert!(insights.recommendations[1].contains("train"));
        assert!(!insights.recommendations.contains(&STRONG_MATCH_NOTES[0].to_string()));
    }

    #[test]
    fn test_middling_match_gets_no_recommendations() {
        // Species mismatch alone lands at 83: above call-outs, below notes
        let pet = create_test_pet();
        let mut preferences = create_test_preferences();
        preferences.species = Some("Cat".to_string());

        let insights = match_insights(&pet, &preferences, &ScoringWeights::default());

        assert_eq!(insights.compatibility_score, 83);
        assert!(insights.recommendations.is_empty());
    }

    #[test]
    fn test_callouts_require_stated_preference() {
        let mut pet = create_test_pet();
        pet.species = "Cat".to_string();
        pet.breed = "Siamese".to_string();
        pet.energy = "High".to_string();
        pet.family_friendly = false;
        pet.good_with_kids = false;
        pet.good_with_pets = false;
        let mut preferences = create_test_preferences();
        preferences.energy = Some("Any".to_string());
        preferences.training = None;

        let insights = match_insights(&pet, &preferences, &ScoringWeights::default());

        assert!(insights.compatibility_score < 80);
        assert!(insights.recommendations.is_empty());
    }
}
