pub fn compute_mean_and_std(values: &[f64]) -> [f64; 2] {
    if values.is_empty() {
        return [f64::NAN, f64::NAN];
    }
    let mean: f64 = values.iter().sum::<f64>() / values.len() as f64;
    if values.len() < 2 {
        return [mean, 0.0];
    }
    let variance: f64 = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    let std_dev = variance.sqrt();
    [mean, std_dev]
}

// Largest absolute step between consecutive samples
pub fn max_abs_step(values: &[f64]) -> f64 {
    values
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std() {
        let [mean, std] = compute_mean_and_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert!((mean - 5.0).abs() < 1e-12);
        assert!((std - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mean_and_std_short_inputs() {
        let [mean, std] = compute_mean_and_std(&[3.0]);
        assert_eq!(mean, 3.0);
        assert_eq!(std, 0.0);

        let [mean, std] = compute_mean_and_std(&[]);
        assert!(mean.is_nan() && std.is_nan());
    }

    #[test]
    fn test_max_abs_step() {
        assert_eq!(max_abs_step(&[1.0, 4.0, 2.0, 2.5]), 3.0);
        assert_eq!(max_abs_step(&[1.0]), 0.0);
    }
}
