//! Reductions over the sample sequences collected during a profiling run.

/// Smallest and largest element, or `None` for an empty slice.
pub fn min_and_max<T: PartialOrd + Copy>(values: &[T]) -> Option<(T, T)> {
    let first = *values.first()?;
    let mut min = first;
    let mut max = first;
    for &value in values {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Some((min, max))
}

/// Arithmetic mean rounded to the nearest whole unit (halves round away from zero).
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some((sum / values.len() as f64).round())
}

/// Sorts `values` in place, then picks the element at `len / 2` when that index
/// is odd, or averages it with its predecessor when the index is even.
///
/// This is not the textbook median: `[1, 2, 3, 4, 5]` yields 2.5 and
/// `[1, 2, 3, 4]` yields 2.5, while `[1, 2, 3]` yields 2. An index of zero
/// (a single value) returns that value.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let index = values.len() / 2;
    if index % 2 == 0 && index > 0 {
        return Some((values[index - 1] + values[index]) / 2.0);
    }
    Some(values[index])
}
