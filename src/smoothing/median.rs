/// Median of a small scratch buffer.
///
/// The buffer is sorted in place with an insertion sort, which beats anything fancier for
/// the handful of samples a median window holds. Even counts return the mean of the two
/// central values. An empty buffer has no median and yields NaN.
pub fn median(buffer: &mut [f64]) -> f64 {
    let count = buffer.len();
    if count == 0 {
        return f64::NAN;
    }

    insertion_sort(buffer);

    if count % 2 == 0 {
        (buffer[count / 2 - 1] + buffer[count / 2]) / 2.0
    } else {
        buffer[count / 2]
    }
}

fn insertion_sort(values: &mut [f64]) {
    for i in 1..values.len() {
        let current = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > current {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = current;
    }
}
