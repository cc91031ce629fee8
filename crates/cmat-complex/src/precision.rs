//! Precision policy shared by every cmat type.
//!
//! Floating point results are rounded on construction so that values which
//! are algebraically equal also compare equal:
//!
//! - components are stored with [`STORAGE_DIGITS`] significant digits;
//! - a component within [`SNAP_EPSILON`] of an integer snaps to that integer;
//! - equality compares [`COMPARISON_DIGITS`] significant digits by default.

/// Significant digits kept for every stored component.
pub const STORAGE_DIGITS: usize = 12;

/// Significant digits used by the default equality test.
pub const COMPARISON_DIGITS: usize = 9;

/// Distance to the nearest integer under which a component snaps to it.
pub const SNAP_EPSILON: f64 = 1e-9;

/// Rounds `value` to `digits` significant digits.
///
/// Zero and non-finite values are returned unchanged.
#[must_use]
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let digits = digits.max(1);
    // Scientific formatting rounds to nearest, ties to even on the decimal digit.
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Rounds `value` to `digits` significant digits, then snaps it to the nearest
/// integer when closer than `epsilon`.
///
/// Negative zero is normalized to positive zero.
#[must_use]
pub fn round_with_snap(value: f64, digits: usize, epsilon: f64) -> f64 {
    let rounded = round_significant(value, digits);
    if !rounded.is_finite() {
        return rounded;
    }
    let nearest = rounded.round();
    let result = if (rounded - nearest).abs() < epsilon {
        nearest
    } else {
        rounded
    };
    if result == 0.0 {
        0.0
    } else {
        result
    }
}

/// Rounds `value` with the storage policy.
#[must_use]
pub fn round_storage(value: f64) -> f64 {
    round_with_snap(value, STORAGE_DIGITS, SNAP_EPSILON)
}

/// Rounds `value` to `decimals` places after the decimal point.
#[must_use]
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let result = (value * scale).round() / scale;
    if result == 0.0 {
        0.0
    } else {
        result
    }
}
