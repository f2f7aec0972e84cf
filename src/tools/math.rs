/// Rounds half away from zero to the given number of decimals
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Share of `part` in `total` as a percentage with two decimals. A zero
/// total yields 0 rather than NaN.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_to(100.0 * part / total, 2)
}
