use super::gaussian::gaussian_weight;
use super::params::SmoothingParams;

/// Edge-preserving smoothing of `input` into `output`.
///
/// Every output sample is a weighted mean of its neighbours within
/// `params.spatial_half_window()` samples. The weight of a neighbour is the product of
/// a spatial Gaussian over the index offset (spread `sigma_d`) and a range Gaussian over
/// the value difference to the centre sample (spread `sigma_r`), so samples across a
/// sharp transition contribute little.
///
/// Neighbours outside the sequence are skipped and the normalisation absorbs the smaller
/// window. The centre sample always has weight 1, so the weight sum never vanishes.
///
/// `output` must hold at least `input.len()` samples; extra samples are left untouched.
pub fn bilateral_filter(input: &[f64], output: &mut [f64], params: &SmoothingParams) {
    let length = input.len();
    let half_window = params.spatial_half_window();

    // Spatial weights only depend on |j|, compute them once per call.
    // A window wider than the sequence never needs more than length - 1 offsets.
    let reach = half_window.min(length.saturating_sub(1));
    let spatial_weights: Vec<f64> = (0..=reach)
        .map(|offset| gaussian_weight(offset as f64, params.sigma_d))
        .collect();

    for (i, filtered) in output[..length].iter_mut().enumerate() {
        let centre = input[i];
        let start = i.saturating_sub(reach);
        let end = (i + reach).min(length - 1);

        let mut sum_weights = 0.0;
        let mut sum_weighted_values = 0.0;

        for (index, &value) in input.iter().enumerate().take(end + 1).skip(start) {
            let spatial_weight = spatial_weights[index.abs_diff(i)];
            let range_weight = gaussian_weight(value - centre, params.sigma_r);
            let weight = spatial_weight * range_weight;

            sum_weights += weight;
            sum_weighted_values += weight * value;
        }

        *filtered = sum_weighted_values / sum_weights;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_bilateral(input: &[f64], params: &SmoothingParams) -> Vec<f64> {
        let half_window = params.spatial_half_window() as i64;
        let length = input.len() as i64;

        (0..length)
            .map(|i| {
                let mut sum_weights = 0.0;
                let mut sum_weighted_values = 0.0;
                for j in -half_window..=half_window {
                    let index = i + j;
                    if index >= 0 && index < length {
                        let value = input[index as usize];
                        let weight = gaussian_weight(j as f64, params.sigma_d)
                            * gaussian_weight(value - input[i as usize], params.sigma_r);
                        sum_weights += weight;
                        sum_weighted_values += weight * value;
                    }
                }
                sum_weighted_values / sum_weights
            })
            .collect()
    }

    #[test]
    fn test_matches_direct_window_sum() {
        let input = vec![
            1100.0, 966.0, 476.0, 1132.0, 1270.0, 853.0, 464.0, 993.0, 1276.0, 1223.0, 891.0,
        ];
        let params = SmoothingParams::new(2.0, 300.0, 2).unwrap();

        let mut output = vec![0.0; input.len()];
        bilateral_filter(&input, &mut output, &params);

        let expected = naive_bilateral(&input, &params);
        for (i, (got, want)) in output.iter().zip(expected.iter()).enumerate() {
            assert!((got - want).abs() < 1e-9, "Mismatch at {}: {} vs {}", i, got, want);
        }
    }

    #[test]
    fn test_single_sample_is_unchanged() {
        let input = [42.5];
        let mut output = [0.0];
        bilateral_filter(&input, &mut output, &SmoothingParams::default());

        assert_eq!(output[0], 42.5);
    }

    #[test]
    fn test_empty_input_is_noop() {
        let input: [f64; 0] = [];
        let mut output = [7.0; 3];
        bilateral_filter(&input, &mut output, &SmoothingParams::default());

        assert_eq!(output, [7.0; 3]);
    }

    #[test]
    fn test_boundaries_stay_finite() {
        let input: Vec<f64> = (0..40).map(|i| if i < 20 { 0.0 } else { 500.0 }).collect();
        let mut output = vec![f64::NAN; input.len()];
        bilateral_filter(&input, &mut output, &SmoothingParams::default());

        assert!(output.iter().all(|v| v.is_finite()));
        assert!(output[0].is_finite() && output[input.len() - 1].is_finite());
    }

    #[test]
    fn test_sharp_step_is_preserved_with_narrow_range_spread() {
        let input: Vec<f64> = (0..30).map(|i| if i < 15 { 0.0 } else { 1000.0 }).collect();
        let params = SmoothingParams::new(3.0, 50.0, 2).unwrap();

        let mut output = vec![0.0; input.len()];
        bilateral_filter(&input, &mut output, &params);

        // Range weight across the step is exp(-200), so both plateaus survive
        assert!(output[14].abs() < 1e-6);
        assert!((output[15] - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_longer_output_tail_untouched() {
        let input = [1.0, 2.0, 3.0];
        let mut output = [-1.0; 5];
        bilateral_filter(&input, &mut output, &SmoothingParams::default());

        assert_eq!(output[3], -1.0);
        assert_eq!(output[4], -1.0);
    }
}
