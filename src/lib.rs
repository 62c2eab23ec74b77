//! PawMart Algo - compatibility matching service for the PawMart adoption platform
//!
//! This library provides the compatibility scoring engine used by the PawMart
//! adoption product: per-attribute sub-scorers with a weighted aggregate,
//! human-readable match insights, and batch ranking of candidate pools.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{
    breeds::{breed_group, breed_score},
    calculate_compatibility_score, composite_compatibility, health_compatibility,
    lifestyle_compatibility, match_insights, match_reasons, Matcher,
};
pub use models::{
    AgeRange, HealthRequirements, Lifestyle, MatchInsights, Pet, PetMatch, RankPetsRequest,
    RankPetsResponse, ScoringWeights, UserPreferences,
};
