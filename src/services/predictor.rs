use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{features::check_feature_contract, FeatureVector, FEATURE_COUNT},
};

use super::artifacts::read_json;

/// Regression model mapping a scaled feature vector to a single prediction
///
/// Backends are loaded once at startup and shared across requests, so
/// implementations must not rely on interior mutability for inference.
#[cfg_attr(test, mockall::automock)]
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> AppResult<f64>;
}

/// Serialized form of a linear regression model
#[derive(Debug, Deserialize)]
struct LinearArtifact {
    schema_version: u32,
    #[serde(default)]
    target: Option<String>,
    features: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Linear surrogate exported from a trained regressor
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressor {
    target: String,
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LinearRegressor {
    pub fn new(
        target: impl Into<String>,
        coefficients: [f64; FEATURE_COUNT],
        intercept: f64,
    ) -> anyhow::Result<Self> {
        if coefficients.iter().any(|c| !c.is_finite()) || !intercept.is_finite() {
            anyhow::bail!("model parameters must be finite");
        }
        Ok(Self {
            target: target.into(),
            coefficients,
            intercept,
        })
    }

    /// Loads a model, failing if it was fitted on a different feature layout
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let artifact: LinearArtifact = read_json(path)?;
        Self::from_artifact(artifact, path)
            .with_context(|| format!("Invalid model {}", path.display()))
    }

    fn from_artifact(artifact: LinearArtifact, path: &Path) -> anyhow::Result<Self> {
        check_feature_contract(artifact.schema_version, &artifact.features)
            .map_err(anyhow::Error::msg)?;

        let coefficients: [f64; FEATURE_COUNT] =
            artifact.coefficients.try_into().map_err(|v: Vec<f64>| {
                anyhow::anyhow!("expected {} coefficients, got {}", FEATURE_COUNT, v.len())
            })?;

        let target = artifact.target.unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "prediction".to_string())
        });

        Self::new(target, coefficients, artifact.intercept)
    }

    /// Name of the predicted quantity, used in logs and errors
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Predictor for LinearRegressor {
    fn predict(&self, features: &FeatureVector) -> AppResult<f64> {
        let prediction = features
            .values()
            .iter()
            .zip(self.coefficients)
            .fold(self.intercept, |acc, (x, w)| acc + x * w);

        if !prediction.is_finite() {
            return Err(AppError::Prediction(format!(
                "{} model produced a non-finite value",
                self.target
            )));
        }

        Ok(prediction)
    }
}
