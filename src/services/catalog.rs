use std::path::Path;

use crate::models::Material;

use super::artifacts::read_json;

/// Loads the material catalog, a JSON array of [`Material`] records
///
/// Catalog order is preserved; it breaks ties when ranking.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Material>> {
    let materials: Vec<Material> = read_json(path)?;

    for material in &materials {
        let attributes = [
            material.material_strength,
            material.biodegradability,
            material.recyclability_percent,
        ];
        if attributes.iter().any(|v| !v.is_finite()) {
            anyhow::bail!(
                "Material '{}' in {} has non-finite attributes",
                material.name,
                path.display()
            );
        }
    }

    if materials.is_empty() {
        tracing::warn!(path = %path.display(), "Material catalog is empty");
    }

    Ok(materials)
}
