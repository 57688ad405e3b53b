/********** Trace smoothing **********
* Two stage filter for short 1D measurement traces:
*   1. a bilateral filter (spatial x range Gaussian weights) that smooths the noise
*      while keeping sharp level changes,
*   2. a sliding median filter that flattens whatever spikes survive stage 1.
*
* Traces are expected to be a few tens to a few thousand samples long. Around 50
* samples or more gives stable statistics, shorter traces still work.
**********/

pub mod gaussian;
pub mod bilateral;
pub mod median;
pub mod outlier;
pub mod params;
pub mod tools;

pub use bilateral::bilateral_filter;
pub use gaussian::gaussian_weight;
pub use median::median;
pub use outlier::outlier_filter;
pub use params::{SmoothingError, SmoothingParams};

/// Smooths `input` into `output[..input.len()]`.
///
/// The bilateral stage writes straight into `output`, which then serves as the working
/// sequence for the outlier stage. `input` is left untouched and samples of `output`
/// past `input.len()` are not written.
///
/// # Panics
/// Panics if `output` is shorter than `input`.
pub fn smooth(input: &[f64], output: &mut [f64], params: &SmoothingParams) {
    let length = input.len();
    assert!(
        output.len() >= length,
        "output buffer holds {} samples, input has {}",
        output.len(),
        length
    );

    let smoothed = &mut output[..length];
    bilateral_filter(input, smoothed, params);
    outlier_filter(smoothed, params.outlier_half_window);
}

pub fn smooth_to_vec(input: &[f64], params: &SmoothingParams) -> Vec<f64> {
    let mut output = vec![0.0; input.len()];
    smooth(input, &mut output, params);
    output
}
