// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, HealthRequirements, Lifestyle, MatchInsights, Pet, PetMatch, ScoringWeights,
    UserPreferences,
};
pub use requests::{CompositeScoreRequest, RankPetsRequest, ScorePetRequest};
pub use responses::{
    CompositeScoreResponse, ErrorResponse, HealthResponse, RankPetsResponse, ScorePetResponse,
};
