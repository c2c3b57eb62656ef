/// Default tolerance used when comparing products computed along different routes
/// (direct multiplication vs. `exp` of a log-sum).
pub const PRODUCT_TOLERANCE: f64 = 1e-9;

/// Returns true if `rate` can enter log space: finite and strictly positive.
pub fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

/// Maps a multiplicative rate onto an additive weight, `ln(rate)`.
///
/// Rates below 1.0 become negative weights, so a product of rates is maximised
/// exactly when the sum of their logs is maximised.
pub fn to_log_space(rate: f64) -> f64 {
    rate.ln()
}

/// Inverse of [`to_log_space`]. `NEG_INFINITY` (no route) maps to `0.0`.
pub fn from_log_space(log_sum: f64) -> f64 {
    log_sum.exp()
}

/// Relative comparison for products, falling back to an absolute check near zero.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}
