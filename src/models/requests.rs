use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{HealthRequirements, Lifestyle, Pet, UserPreferences};

/// Request to rank a pool of candidate pets for one adopter
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankPetsRequest {
    pub preferences: UserPreferences,
    #[validate(length(min = 1, max = 500))]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a single candidate pet
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScorePetRequest {
    pub pet: Pet,
    pub preferences: UserPreferences,
}

/// Request for the composite blend of base, lifestyle and health scores
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompositeScoreRequest {
    pub pet: Pet,
    pub preferences: UserPreferences,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,
    #[serde(rename = "healthRequirements", default)]
    pub health_requirements: Option<HealthRequirements>,
}
