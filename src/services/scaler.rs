use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::models::{features::check_feature_contract, FeatureVector, FEATURE_COUNT};

use super::artifacts::read_json;

/// Fitted standardization applied to every feature vector before inference
#[cfg_attr(test, mockall::automock)]
pub trait Scaler: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> FeatureVector;
}

/// Serialized form of a fitted standard scaler
#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    schema_version: u32,
    features: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// Per-feature `(x - mean) / scale` transform
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Creates a scaler from fitted parameters
    ///
    /// Every scale entry must be finite and non-zero, and every mean finite.
    pub fn new(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> anyhow::Result<Self> {
        if let Some(idx) = mean.iter().position(|m| !m.is_finite()) {
            anyhow::bail!("mean for feature {} is not finite", idx);
        }
        if let Some(idx) = scale.iter().position(|s| !s.is_finite() || *s == 0.0) {
            anyhow::bail!("scale for feature {} must be finite and non-zero", idx);
        }
        Ok(Self { mean, scale })
    }

    /// Loads a fitted scaler, failing if it was fitted on a different feature layout
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let artifact: ScalerArtifact = read_json(path)?;
        Self::from_artifact(artifact).with_context(|| format!("Invalid scaler {}", path.display()))
    }

    fn from_artifact(artifact: ScalerArtifact) -> anyhow::Result<Self> {
        check_feature_contract(artifact.schema_version, &artifact.features)
            .map_err(anyhow::Error::msg)?;

        let mean: [f64; FEATURE_COUNT] = artifact.mean.try_into().map_err(|v: Vec<f64>| {
            anyhow::anyhow!("expected {} mean values, got {}", FEATURE_COUNT, v.len())
        })?;
        let scale: [f64; FEATURE_COUNT] = artifact.scale.try_into().map_err(|v: Vec<f64>| {
            anyhow::anyhow!("expected {} scale values, got {}", FEATURE_COUNT, v.len())
        })?;

        Self::new(mean, scale)
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut scaled = *features.values();
        for ((value, mean), scale) in scaled.iter_mut().zip(self.mean).zip(self.scale) {
            *value = (*value - mean) / scale;
        }
        FeatureVector(scaled)
    }
}
