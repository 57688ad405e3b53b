// Unnormalized Gaussian kernel value exp(-x^2 / (2 sigma^2)).
// sigma must be non-zero. Spreads are validated once in SmoothingParams::new,
// so this stays a plain expression for the inner loops.
pub fn gaussian_weight(x: f64, sigma: f64) -> f64 {
    let scaled = x / sigma;
    (-0.5 * scaled * scaled).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_at_zero_offset_is_one() {
        assert_eq!(gaussian_weight(0.0, 10.0), 1.0);
        assert_eq!(gaussian_weight(0.0, 1200.0), 1.0);
    }

    #[test]
    fn test_weight_at_one_sigma() {
        let expected = (-0.5_f64).exp();
        assert!((gaussian_weight(10.0, 10.0) - expected).abs() < 1e-15);
        assert!((gaussian_weight(-10.0, 10.0) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_weight_decreases_with_distance() {
        let sigma = 3.0;
        let mut previous = gaussian_weight(0.0, sigma);
        for step in 1..20 {
            let current = gaussian_weight(step as f64, sigma);
            assert!(current < previous, "Weight should shrink at offset {}", step);
            assert!(current > 0.0);
            previous = current;
        }
    }
}
