pub mod artifacts;
pub mod catalog;
pub mod predictor;
pub mod recommendations;
pub mod scaler;
pub mod scoring;

pub use predictor::{LinearRegressor, Predictor};
pub use recommendations::{recommend_materials, RecommendationContext, TOP_K};
pub use scaler::{Scaler, StandardScaler};
