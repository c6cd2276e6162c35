use serde::{Deserialize, Serialize};

/// A candidate packaging material from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Material {
    /// Display name (e.g., "Bioplastic A")
    #[serde(alias = "material_name")]
    pub name: String,
    /// Mechanical strength score of the material
    #[serde(alias = "strength_score")]
    pub material_strength: f64,
    /// Biodegradability on a 0-10 scale
    #[serde(alias = "biodegradability_score")]
    pub biodegradability: f64,
    /// Share of the material that can be recycled, in percent
    pub recyclability_percent: f64,
}

impl Material {
    /// Creates a new catalog entry
    pub fn new(
        name: impl Into<String>,
        material_strength: f64,
        biodegradability: f64,
        recyclability_percent: f64,
    ) -> Self {
        Self {
            name: name.into(),
            material_strength,
            biodegradability,
            recyclability_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_deserializes_canonical_fields() {
        let json = r#"{
            "name": "Kraft Paper",
            "material_strength": 4.5,
            "biodegradability": 9.0,
            "recyclability_percent": 85.0
        }"#;

        let material: Material = serde_json::from_str(json).unwrap();
        assert_eq!(material, Material::new("Kraft Paper", 4.5, 9.0, 85.0));
    }

    #[test]
    fn test_material_deserializes_dataset_column_names() {
        let json = r#"{
            "material_name": "Molded Pulp",
            "strength_score": 5,
            "biodegradability_score": 9.5,
            "recyclability_percent": 90
        }"#;

        let material: Material = serde_json::from_str(json).unwrap();
        assert_eq!(material.name, "Molded Pulp");
        assert_eq!(material.material_strength, 5.0);
        assert_eq!(material.biodegradability, 9.5);
        assert_eq!(material.recyclability_percent, 90.0);
    }
}
