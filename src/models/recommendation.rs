use serde::{Deserialize, Serialize};

/// A catalog material with its model predictions and suitability score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredMaterial {
    pub material: String,
    pub predicted_cost: f64,
    pub predicted_co2: f64,
    pub suitability_score: f64,
}
