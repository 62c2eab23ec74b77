// Core algorithm exports
pub mod breeds;
pub mod insights;
pub mod lifestyle;
pub mod matcher;
pub mod scoring;

pub use breeds::{breed_group, breed_score, pairwise_score};
pub use insights::{insight_for_score, match_insights, match_reasons};
pub use lifestyle::{composite_compatibility, health_compatibility, lifestyle_compatibility};
pub use matcher::{Matcher, RankResult};
pub use scoring::{calculate_compatibility_score, score_attributes, weighted_score};
