pub mod features;
pub mod material;
pub mod recommendation;

pub use features::{
    FeatureVector, ProductRequirement, FEATURE_COUNT, FEATURE_NAMES, FEATURE_SCHEMA_VERSION,
};
pub use material::Material;
pub use recommendation::ScoredMaterial;
