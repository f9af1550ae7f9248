use formulix_macros::formulix_fn;

/// Negative input yields NaN rather than an error.
#[formulix_fn]
pub fn sqrt(value: f64) -> f64 {
    value.sqrt()
}

/// `nthroot(radicand, degree)` is `radicand^(1/degree)`.
#[formulix_fn]
pub fn nthroot(radicand: f64, degree: f64) -> f64 {
    radicand.powf(1.0 / degree)
}
