//! Small numeric helpers shared by the geographic types.

/// Wraps `value` into the `[min, max)` range given by `range`.
///
/// If `include_max` is set, `value == max` is returned as is, making the range `[min, max]`.
pub fn wrap_num(value: f64, range: [f64; 2], include_max: bool) -> f64 {
    let [min, max] = range;
    if value == max && include_max {
        return value;
    }

    let d = max - min;
    ((value - min) % d + d) % d + min
}

/// Rounds `value` to `digits` decimal places for display purposes.
pub fn format_num(value: f64, digits: u32) -> f64 {
    let pow = 10f64.powi(digits as i32);
    let rounded = (value * pow + 0.5).floor() / pow;
    if rounded == 0.0 {
        // avoid printing "-0"
        0.0
    } else {
        rounded
    }
}
