use serde::{Deserialize, Serialize};

use crate::models::domain::PetMatch;

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankPetsResponse {
    pub matches: Vec<PetMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// Response for the single-pet score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePetResponse {
    #[serde(rename = "petId")]
    pub pet_id: String,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    pub insight: String,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// Response for the composite score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeScoreResponse {
    #[serde(rename = "petId")]
    pub pet_id: String,
    #[serde(rename = "baseScore")]
    pub base_score: u8,
    #[serde(rename = "lifestyleScore")]
    pub lifestyle_score: u8,
    #[serde(rename = "healthScore")]
    pub health_score: u8,
    #[serde(rename = "compositeScore")]
    pub composite_score: u8,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
