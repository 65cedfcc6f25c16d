use crate::servings::validator::validate_serving_size_default;

/// Serving counts people commonly cook for.
const COMMON_SERVINGS: [f64; 5] = [1.0, 2.0, 4.0, 6.0, 8.0];
const MAX_SUGGESTIONS: usize = 4;
const SAME_VALUE_EPSILON: f64 = 1e-9;

/// Up to four alternative serving counts, closest to `original` first.
///
/// Candidates are half, double, and the common counts; anything equal to
/// `original` or outside the default serving bounds is dropped.
pub fn get_serving_suggestions(original: f64) -> Vec<f64> {
    if !original.is_finite() || original <= 0.0 {
        return Vec::new();
    }

    let mut candidates: Vec<f64> = Vec::with_capacity(COMMON_SERVINGS.len() + 2);
    let pool = [original / 2.0, original * 2.0]
        .into_iter()
        .chain(COMMON_SERVINGS);

    for candidate in pool {
        let is_original = (candidate - original).abs() < SAME_VALUE_EPSILON;
        let is_duplicate = candidates
            .iter()
            .any(|existing| (existing - candidate).abs() < SAME_VALUE_EPSILON);
        if is_original || is_duplicate || !validate_serving_size_default(candidate).is_valid {
            continue;
        }
        candidates.push(candidate);
    }

    candidates.sort_by(|a, b| {
        (a - original)
            .abs()
            .total_cmp(&(b - original).abs())
            .then(a.total_cmp(b))
    });
    candidates.truncate(MAX_SUGGESTIONS);
    candidates
}
