/// Round a value to the given number of decimal places.
///
/// Ties round half away from zero (`f64::round` semantics), so 0.00005
/// becomes 0.0001. Output stability of the score list depends on this
/// rule staying fixed.
///
/// # Arguments
/// * `value` - value to round
/// * `decimals` - number of decimal places to keep
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
