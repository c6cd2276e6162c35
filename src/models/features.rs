//! Product requirements and the canonical feature vector fed to the models.
//!
//! The position of every feature is part of the contract with the serialized
//! scaler and regression artifacts. Artifacts declare the feature names they
//! were fitted on and are rejected at load time when those differ from
//! [`FEATURE_NAMES`].

use serde::{Deserialize, Serialize};

use super::Material;

/// Version of the feature layout below. Bump whenever the order or the set of
/// features changes, and re-export every artifact.
pub const FEATURE_SCHEMA_VERSION: u32 = 1;

/// Number of features in a [`FeatureVector`]
pub const FEATURE_COUNT: usize = 7;

/// Canonical feature order: four product requirements, then three material attributes
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "weight_capacity_score",
    "product_strength_req",
    "barrier_score",
    "reuse_potential_score",
    "material_strength",
    "biodegradability",
    "recyclability_percent",
];

/// Physical requirements of the product to be packaged, supplied per request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProductRequirement {
    pub weight_capacity_score: f64,
    /// Older clients send this field as `strength_score`
    #[serde(alias = "strength_score")]
    pub product_strength_req: f64,
    pub barrier_score: f64,
    pub reuse_potential_score: f64,
}

impl ProductRequirement {
    pub fn new(
        weight_capacity_score: f64,
        product_strength_req: f64,
        barrier_score: f64,
        reuse_potential_score: f64,
    ) -> Self {
        Self {
            weight_capacity_score,
            product_strength_req,
            barrier_score,
            reuse_potential_score,
        }
    }

    /// Builds the model input for this product paired with one catalog material
    pub fn features_for(&self, material: &Material) -> FeatureVector {
        FeatureVector([
            self.weight_capacity_score,
            self.product_strength_req,
            self.barrier_score,
            self.reuse_potential_score,
            material.material_strength,
            material.biodegradability,
            material.recyclability_percent,
        ])
    }
}

/// Fixed-order model input, see [`FEATURE_NAMES`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Returns the value of a feature by its canonical name
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|feature| *feature == name)
            .map(|idx| self.0[idx])
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

/// Checks that an artifact was fitted against the current feature layout
pub fn check_feature_contract(schema_version: u32, features: &[String]) -> Result<(), String> {
    if schema_version != FEATURE_SCHEMA_VERSION {
        return Err(format!(
            "feature schema version {} does not match expected version {}",
            schema_version, FEATURE_SCHEMA_VERSION
        ));
    }

    if features.len() != FEATURE_COUNT
        || features.iter().zip(FEATURE_NAMES).any(|(got, want)| got != want)
    {
        return Err(format!(
            "feature order {:?} does not match expected order {:?}",
            features, FEATURE_NAMES
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_names() -> Vec<String> {
        FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_features_follow_canonical_order() {
        let product = ProductRequirement::new(1.0, 2.0, 3.0, 4.0);
        let material = Material::new("Glass Jar", 5.0, 6.0, 7.0);

        let features = product.features_for(&material);
        assert_eq!(features.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(features.get("barrier_score"), Some(3.0));
        assert_eq!(features.get("recyclability_percent"), Some(7.0));
        assert_eq!(features.get("unknown"), None);
    }

    #[test]
    fn test_product_requirement_accepts_legacy_strength_field() {
        let json = r#"{
            "weight_capacity_score": 5,
            "strength_score": 6,
            "barrier_score": 7,
            "reuse_potential_score": 8
        }"#;

        let product: ProductRequirement = serde_json::from_str(json).unwrap();
        assert_eq!(product, ProductRequirement::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn test_product_requirement_rejects_missing_field() {
        let json = r#"{
            "weight_capacity_score": 5,
            "product_strength_req": 6,
            "reuse_potential_score": 8
        }"#;

        let err = serde_json::from_str::<ProductRequirement>(json).unwrap_err();
        assert!(err.to_string().contains("barrier_score"));
    }

    #[test]
    fn test_feature_contract_accepts_canonical_layout() {
        assert!(check_feature_contract(FEATURE_SCHEMA_VERSION, &canonical_names()).is_ok());
    }

    #[test]
    fn test_feature_contract_rejects_swapped_columns() {
        let mut names = canonical_names();
        names.swap(4, 5);
        let err = check_feature_contract(FEATURE_SCHEMA_VERSION, &names).unwrap_err();
        assert!(err.contains("feature order"));
    }

    #[test]
    fn test_feature_contract_rejects_other_schema_version() {
        let err = check_feature_contract(FEATURE_SCHEMA_VERSION + 1, &canonical_names()).unwrap_err();
        assert!(err.contains("schema version"));
    }
}
