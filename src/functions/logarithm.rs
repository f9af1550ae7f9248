use formulix_macros::formulix_fn;

/// `log(value, base)` by change of base.
#[formulix_fn]
pub fn log(value: f64, base: f64) -> f64 {
    value.ln() / base.ln()
}
