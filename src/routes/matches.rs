use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{composite_compatibility, health_compatibility, lifestyle_compatibility, Matcher};
use crate::models::{
    CompositeScoreRequest, CompositeScoreResponse, ErrorResponse, HealthResponse, RankPetsRequest,
    RankPetsResponse, ScorePetRequest, ScorePetResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_pets))
        .route("/matches/score", web::post().to(score_pet))
        .route("/matches/composite", web::post().to(composite_score));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank a candidate pool endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "preferences": { ... },
///   "pets": [ ... ],
///   "limit": 20
/// }
/// ```
async fn rank_pets(state: web::Data<AppState>, req: web::Json<RankPetsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let limit = req.limit.map(|l| l.min(state.max_limit) as usize);

    tracing::info!("Ranking {} candidate pets", req.pets.len());

    let result = state.matcher.rank_pets(&req.preferences, req.pets);

    let mut matches = result.matches;
    if let Some(limit) = limit {
        matches.truncate(limit);
    }

    tracing::debug!(
        "Returning {} of {} ranked candidates",
        matches.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(RankPetsResponse {
        matches,
        total_candidates: result.total_candidates,
        request_id: uuid::Uuid::new_v4().to_string(),
    })
}

/// Score a single candidate endpoint
///
/// POST /api/v1/matches/score
async fn score_pet(state: web::Data<AppState>, req: web::Json<ScorePetRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let insights = state.matcher.score_pet(&req.pet, &req.preferences);

    tracing::debug!(
        "Scored pet {} at {}",
        req.pet.pet_id,
        insights.compatibility_score
    );

    HttpResponse::Ok().json(ScorePetResponse {
        pet_id: req.pet.pet_id.clone(),
        compatibility_score: insights.compatibility_score,
        insight: insights.insight,
        match_reasons: insights.match_reasons,
        recommendations: insights.recommendations,
        request_id: uuid::Uuid::new_v4().to_string(),
    })
}

/// Composite score endpoint blending base, lifestyle and health fit
///
/// POST /api/v1/matches/composite
async fn composite_score(
    state: web::Data<AppState>,
    req: web::Json<CompositeScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let lifestyle = req.lifestyle.unwrap_or_default();
    let requirements = req.health_requirements.unwrap_or_default();
    let weights = state.matcher.weights();

    let insights = state.matcher.score_pet(&req.pet, &req.preferences);
    let lifestyle_score = lifestyle_compatibility(&req.pet, &lifestyle);
    let health_score = health_compatibility(&req.pet, &requirements);
    let composite = composite_compatibility(
        &req.pet,
        &req.preferences,
        &lifestyle,
        &requirements,
        weights,
    );

    HttpResponse::Ok().json(CompositeScoreResponse {
        pet_id: req.pet.pet_id,
        base_score: insights.compatibility_score,
        lifestyle_score,
        health_score,
        composite_score: composite,
    })
}
