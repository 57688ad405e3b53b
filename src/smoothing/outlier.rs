use super::median::median;

/// Replaces every sample by the median of the window `[i - half_window, i + half_window]`,
/// clipped to the sequence bounds.
///
/// Windows are gathered from a snapshot taken before the first write, so the result does
/// not depend on the order in which indices are visited. Half-widths reaching past both
/// ends of the sequence simply make every window the whole sequence.
pub fn outlier_filter(data: &mut [f64], half_window: usize) {
    let length = data.len();
    if length == 0 {
        return;
    }

    let snapshot = data.to_vec();
    let window_size = half_window.saturating_mul(2).saturating_add(1).min(length);
    let mut window: Vec<f64> = Vec::with_capacity(window_size);

    for (i, value) in data.iter_mut().enumerate() {
        let start = i.saturating_sub(half_window);
        let end = i.saturating_add(half_window).min(length - 1);

        window.clear();
        window.extend_from_slice(&snapshot[start..=end]);

        *value = median(&mut window);
    }
}
