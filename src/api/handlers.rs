use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{ProductRequirement, ScoredMaterial},
    services::recommend_materials,
};

use super::AppState;

/// Liveness message served on `/`
pub const LIVENESS_MESSAGE: &str = "EcoPackAI AI Recommendation Backend Running!";

/// Liveness check
pub async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

/// Recommends the most suitable packaging materials for a product
///
/// A missing or malformed field is rejected before any material is scored.
pub async fn predict(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ProductRequirement>, JsonRejection>,
) -> AppResult<Json<Vec<ScoredMaterial>>> {
    let Json(product) = payload.inspect_err(|rejection| {
        tracing::warn!(
            request_id = %request_id,
            error = %rejection.body_text(),
            "Rejected recommendation request"
        );
    })?;

    tracing::info!(
        request_id = %request_id,
        materials = state.context.catalog.len(),
        "Scoring material catalog"
    );

    let recommendations = recommend_materials(&state.context, &product).inspect_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Recommendation failed");
    })?;

    tracing::info!(
        request_id = %request_id,
        returned = recommendations.len(),
        top = recommendations.first().map(|r| r.material.as_str()),
        "Recommendation completed"
    );

    Ok(Json(recommendations))
}
