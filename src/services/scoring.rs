//! Suitability scoring
//!
//! Lower predicted cost and CO2 and higher biodegradability make a material
//! more suitable. Normalized values are not clamped: a
//! prediction outside its bounds yields a suitability outside `[0, 1]`.

/// Guards against division by zero in [`normalize`]
pub const NORMALIZE_EPSILON: f64 = 1e-5;

/// Expected range of predicted cost
pub const COST_BOUNDS: (f64, f64) = (0.0, 100.0);
/// Expected range of predicted CO2 impact
pub const CO2_BOUNDS: (f64, f64) = (0.0, 100.0);
/// Range of the catalog biodegradability attribute
pub const BIODEGRADABILITY_BOUNDS: (f64, f64) = (0.0, 10.0);

pub const COST_WEIGHT: f64 = 0.4;
pub const CO2_WEIGHT: f64 = 0.4;
pub const BIODEGRADABILITY_WEIGHT: f64 = 0.2;

/// Min-max normalization
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min + NORMALIZE_EPSILON)
}

/// Combines predictions and biodegradability into a single suitability score
pub fn suitability(predicted_cost: f64, predicted_co2: f64, biodegradability: f64) -> f64 {
    let cost_norm = normalize(predicted_cost, COST_BOUNDS.0, COST_BOUNDS.1);
    let co2_norm = normalize(predicted_co2, CO2_BOUNDS.0, CO2_BOUNDS.1);
    let bio_norm = normalize(
        biodegradability,
        BIODEGRADABILITY_BOUNDS.0,
        BIODEGRADABILITY_BOUNDS.1,
    );

    COST_WEIGHT * (1.0 - cost_norm)
        + CO2_WEIGHT * (1.0 - co2_norm)
        + BIODEGRADABILITY_WEIGHT * bio_norm
}

/// Rounds to the given number of decimal places, ties to even
///
/// Values too large to scale are returned unchanged, and negative zero is
/// returned as positive zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum = COST_WEIGHT + CO2_WEIGHT + BIODEGRADABILITY_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_is_monotonic() {
        let values = [-50.0, 0.0, 0.5, 10.0, 49.9, 50.0, 99.0, 100.0, 250.0];
        for pair in values.windows(2) {
            assert!(normalize(pair[0], 0.0, 100.0) < normalize(pair[1], 0.0, 100.0));
        }
    }

    #[test]
    fn test_normalize_with_equal_bounds_does_not_divide_by_zero() {
        let value = normalize(3.0, 2.0, 2.0);
        assert!(value.is_finite());
        assert!((value - 1.0 / NORMALIZE_EPSILON).abs() < 1e-3);
    }

    #[test]
    fn test_suitability_reference_example() {
        // cost 20, co2 10, biodegradability 8
        let score = suitability(20.0, 10.0, 8.0);
        assert!((score - 0.84).abs() < 1e-4, "score was {}", score);
    }

    #[test]
    fn test_suitability_is_not_clamped() {
        assert!(suitability(250.0, 250.0, 0.0) < 0.0);
        assert!(suitability(-100.0, -100.0, 10.0) > 1.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.3456, 2), 12.35);
        assert_eq!(round_to(0.83999, 3), 0.84);
        assert_eq!(round_to(-1.0049, 2), -1.0);
    }

    #[test]
    fn test_round_to_ties_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
    }

    #[test]
    fn test_round_to_keeps_values_too_large_to_scale() {
        assert_eq!(round_to(1e307, 2), 1e307);
        assert_eq!(round_to(-f64::MAX, 3), -f64::MAX);
    }

    #[test]
    fn test_round_to_never_returns_negative_zero() {
        let rounded = round_to(-0.00004, 3);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }
}
