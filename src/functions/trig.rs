use formulix_macros::formulix_fn;

/// Sine of an angle in radians.
#[formulix_fn]
pub fn sin(angle: f64) -> f64 {
    angle.sin()
}

#[formulix_fn]
pub fn cos(angle: f64) -> f64 {
    angle.cos()
}

#[formulix_fn]
pub fn tan(angle: f64) -> f64 {
    angle.tan()
}
