use std::{cmp::Ordering, sync::Arc};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Material, ProductRequirement, ScoredMaterial},
    services::{
        catalog::load_catalog,
        predictor::{LinearRegressor, Predictor},
        scaler::{Scaler, StandardScaler},
        scoring::{round_to, suitability},
    },
};

/// Maximum number of materials returned per request
pub const TOP_K: usize = 3;

/// Everything needed to score the catalog, built once at startup and never mutated
pub struct RecommendationContext {
    pub catalog: Vec<Material>,
    pub scaler: Arc<dyn Scaler>,
    pub cost_model: Arc<dyn Predictor>,
    pub co2_model: Arc<dyn Predictor>,
}

impl RecommendationContext {
    pub fn new(
        catalog: Vec<Material>,
        scaler: Arc<dyn Scaler>,
        cost_model: Arc<dyn Predictor>,
        co2_model: Arc<dyn Predictor>,
    ) -> Self {
        Self {
            catalog,
            scaler,
            cost_model,
            co2_model,
        }
    }

    /// Loads the catalog, scaler and both models from the configured paths
    ///
    /// Any missing or invalid artifact is an error; the server must not start
    /// without a complete context.
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let scaler = StandardScaler::load(&config.scaler_path())?;
        let cost_model = LinearRegressor::load(&config.cost_model_path())?;
        let co2_model = LinearRegressor::load(&config.co2_model_path())?;
        let catalog = load_catalog(&config.catalog_path())?;

        tracing::info!(
            models_dir = %config.models_dir.display(),
            cost_target = cost_model.target(),
            co2_target = co2_model.target(),
            materials = catalog.len(),
            "Recommendation context loaded"
        );

        Ok(Self::new(
            catalog,
            Arc::new(scaler),
            Arc::new(cost_model),
            Arc::new(co2_model),
        ))
    }
}

/// Scores every catalog material for the product and returns the best [`TOP_K`]
///
/// Results are sorted by suitability descending. The sort is stable, so
/// materials with equal scores keep their catalog order. Any prediction
/// failure aborts the whole request.
pub fn recommend_materials(
    context: &RecommendationContext,
    product: &ProductRequirement,
) -> AppResult<Vec<ScoredMaterial>> {
    let mut scored = context
        .catalog
        .iter()
        .map(|material| score_material(context, product, material))
        .collect::<AppResult<Vec<_>>>()?;

    scored.sort_by(|a, b| {
        b.suitability_score
            .partial_cmp(&a.suitability_score)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(TOP_K);

    Ok(scored)
}

fn score_material(
    context: &RecommendationContext,
    product: &ProductRequirement,
    material: &Material,
) -> AppResult<ScoredMaterial> {
    let features = product.features_for(material);
    if !features.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "non-finite feature values for material '{}'",
            material.name
        )));
    }

    let scaled = context.scaler.transform(&features);

    let cost = context.cost_model.predict(&scaled)?;
    let co2 = context.co2_model.predict(&scaled)?;

    if !cost.is_finite() || !co2.is_finite() {
        return Err(AppError::Prediction(format!(
            "non-finite prediction for material '{}'",
            material.name
        )));
    }

    Ok(ScoredMaterial {
        material: material.name.clone(),
        predicted_cost: round_to(cost, 2),
        predicted_co2: round_to(co2, 2),
        suitability_score: round_to(suitability(cost, co2, material.biodegradability), 3),
    })
}
