/// Stride between kept hourly samples
pub const HOUR_STRIDE: usize = 3;

/// Keep every third sample starting at the first, then append the final
/// sample. For a 24-hour day this yields 9 points (hours 0, 3, ..., 21, 23).
///
/// The final sample is appended even when it already sits on a stride
/// position, so the last point of the chart is always the day's last hour.
pub fn sample_hourly<T: Clone>(values: &[T]) -> Vec<T> {
    let Some(last) = values.last() else {
        return Vec::new();
    };

    let mut sampled: Vec<T> = values.iter().step_by(HOUR_STRIDE).cloned().collect();
    sampled.push(last.clone());
    sampled
}
