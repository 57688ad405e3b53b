use crate::smoothing::smooth;
use crate::smoothing::params::SmoothingParams;
use crate::smoothing::tools::{compute_mean_and_std, max_abs_step};

/// Number of samples smoothed together by default.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Smooths `data` in consecutive, independent batches of `batch_size` samples and
/// concatenates the results. The last batch holds whatever is left over. A batch size
/// of 0 smooths the whole trace as a single batch.
pub fn smooth_in_batches(data: &[f64], batch_size: usize, params: &SmoothingParams) -> Vec<f64> {
    let mut smoothed = Vec::with_capacity(data.len());
    for_each_smoothed_batch(data, batch_size, params, |batch| smoothed.extend_from_slice(batch));
    smoothed
}

/// Runs the smoother batch by batch and hands each filtered batch to `sink`.
///
/// One output buffer, never longer than `data`, is reused for every batch.
pub fn for_each_smoothed_batch<F>(data: &[f64], batch_size: usize, params: &SmoothingParams, mut sink: F)
where
    F: FnMut(&[f64]),
{
    if data.is_empty() {
        return;
    }

    let batch_size = if batch_size == 0 { data.len() } else { batch_size };
    let mut buffer = vec![0.0; batch_size.min(data.len())];

    for (batch_index, batch) in data.chunks(batch_size).enumerate() {
        let output = &mut buffer[..batch.len()];
        smooth(batch, output, params);

        if log::log_enabled!(log::Level::Debug) {
            let [mean_before, std_before] = compute_mean_and_std(batch);
            let [mean_after, std_after] = compute_mean_and_std(output);
            log::debug!(
                "Batch {} ({} samples): mean {:.3} -> {:.3}, std {:.3} -> {:.3}, max step {:.3} -> {:.3}",
                batch_index,
                batch.len(),
                mean_before,
                mean_after,
                std_before,
                std_after,
                max_abs_step(batch),
                max_abs_step(output)
            );
        }

        sink(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoothing::smooth_to_vec;

    fn ramp(length: usize) -> Vec<f64> {
        (0..length).map(|i| (i as f64 * 0.7).sin() * 300.0 + 1000.0).collect()
    }

    #[test]
    fn test_batches_are_independent() {
        let data = ramp(120);
        let params = SmoothingParams::default();

        let result = smooth_in_batches(&data, 50, &params);

        assert_eq!(result.len(), data.len());
        assert_eq!(result[..50], smooth_to_vec(&data[..50], &params)[..]);
        assert_eq!(result[50..100], smooth_to_vec(&data[50..100], &params)[..]);
        assert_eq!(result[100..], smooth_to_vec(&data[100..], &params)[..]);
    }

    #[test]
    fn test_batch_sizes_seen_by_sink() {
        let data = ramp(107);
        let mut sizes = Vec::new();
        for_each_smoothed_batch(&data, 50, &SmoothingParams::default(), |batch| sizes.push(batch.len()));

        assert_eq!(sizes, vec![50, 50, 7]);
    }

    #[test]
    fn test_zero_batch_size_is_single_batch() {
        let data = ramp(80);
        let params = SmoothingParams::default();

        assert_eq!(smooth_in_batches(&data, 0, &params), smooth_to_vec(&data, &params));
    }

    #[test]
    fn test_oversized_batch_is_single_batch() {
        let data = ramp(30);
        let params = SmoothingParams::default();

        assert_eq!(smooth_in_batches(&data, usize::MAX, &params), smooth_to_vec(&data, &params));
    }

    #[test]
    fn test_short_and_empty_traces() {
        let params = SmoothingParams::default();

        assert_eq!(smooth_in_batches(&[3.0], DEFAULT_BATCH_SIZE, &params), vec![3.0]);
        assert!(smooth_in_batches(&[], DEFAULT_BATCH_SIZE, &params).is_empty());
    }
}
