use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

// Spike height as a multiple of the noise standard deviation
pub const SPIKE_NOISE_MULTIPLE: f64 = 20.0;

/// Piecewise constant trace: `samples_per_level` samples at each of `levels`, with
/// zero-mean Gaussian noise of `noise_std` and `spikes` single-sample outliers of
/// `SPIKE_NOISE_MULTIPLE * noise_std` added at random positions.
pub fn noisy_steps(
    levels: &[f64],
    samples_per_level: usize,
    noise_std: f64,
    spikes: usize,
) -> Result<Vec<f64>, NormalError> {
    let mut rng = rand::thread_rng();
    noisy_steps_with_rng(&mut rng, levels, samples_per_level, noise_std, spikes)
}

pub fn noisy_steps_with_rng<R: Rng>(
    rng: &mut R,
    levels: &[f64],
    samples_per_level: usize,
    noise_std: f64,
    spikes: usize,
) -> Result<Vec<f64>, NormalError> {
    let noise = Normal::new(0.0, noise_std)?;

    let mut values = Vec::with_capacity(levels.len() * samples_per_level);
    for &level in levels {
        for _ in 0..samples_per_level {
            values.push(level + noise.sample(rng));
        }
    }

    if !values.is_empty() {
        let spike_height = SPIKE_NOISE_MULTIPLE * noise_std;
        for _ in 0..spikes {
            let position = rng.gen_range(0..values.len());
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            values[position] += sign * spike_height;
        }
    }

    Ok(values)
}
