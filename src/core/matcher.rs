use crate::core::insights::match_insights;
use crate::models::{MatchInsights, Pet, PetMatch, ScoringWeights, UserPreferences};

/// Result of ranking a candidate pool
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<PetMatch>,
    pub total_candidates: usize,
}

/// Batch scoring orchestrator
///
/// Holds the attribute weights and maps the scorer plus the insight
/// generator over whole candidate pools. Stateless beyond the weights; every
/// ranking is an independent pure computation over its inputs.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate and explain the result
    pub fn score_pet(&self, pet: &Pet, preferences: &UserPreferences) -> MatchInsights {
        match_insights(pet, preferences, &self.weights)
    }

    /// Score every candidate in the pool and rank by descending compatibility
    ///
    /// Returns the whole pool; callers that page or cap results truncate the
    /// ranked list themselves. Ties keep an arbitrary order.
    pub fn rank_pets(&self, preferences: &UserPreferences, candidates: Vec<Pet>) -> RankResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<PetMatch> = candidates
            .into_iter()
            .map(|pet| {
                let insights = match_insights(&pet, preferences, &self.weights);

                PetMatch {
                    pet_id: pet.pet_id,
                    name: pet.name,
                    species: pet.species,
                    breed: pet.breed,
                    age: pet.age,
                    compatibility_score: insights.compatibility_score,
                    insight: insights.insight,
                    match_reasons: insights.match_reasons,
                    recommendations: insights.recommendations,
                    image_file_ids: pet.image_file_ids,
                    description: pet.description,
                }
            })
            .collect();

        matches.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

        RankResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
