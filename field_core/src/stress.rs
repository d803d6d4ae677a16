//! # Stress Components
//!
//! The three closed-form stress expressions of the roof solution, evaluated
//! from a grid point's coordinates and its polar decomposition (ro, fi).
//! Each factor (the ro^1.5 power, the trig terms, the square root) passes
//! through the rounding policy before the terms are combined, matching the
//! granularity used in the polar decomposition itself.
//!
//! Degenerate geometry (ro = 0) is not guarded: the formulas produce NaN by
//! natural 0/0 propagation and callers see it in the output record.

use crate::rounding::RoundingPolicy;

/// Vertical stress:
/// `-z*sin(1.5*fi)/ro^1.5 - (x*cos(0.5*fi) + z*sin(0.5*fi))/sqrt(ro)`.
pub fn sigma_z(x: f64, z: f64, ro: f64, fi: f64, rounding: &RoundingPolicy) -> f64 {
    let power = rounding.apply(ro.powf(1.5));
    let sin_3h = rounding.apply((1.5 * fi).sin());
    let cos_h = rounding.apply((0.5 * fi).cos());
    let sin_h = rounding.apply((0.5 * fi).sin());
    let root = rounding.apply(ro.sqrt());
    -z * sin_3h / power - (x * cos_h + z * sin_h) / root
}

/// Horizontal stress:
/// `z*sin(1.5*fi)/ro^1.5 - (x*cos(0.5*fi) + z*sin(0.5*fi))/sqrt(ro)`.
pub fn sigma_x(x: f64, z: f64, ro: f64, fi: f64, rounding: &RoundingPolicy) -> f64 {
    let power = rounding.apply(ro.powf(1.5));
    let sin_3h = rounding.apply((1.5 * fi).sin());
    let cos_h = rounding.apply((0.5 * fi).cos());
    let sin_h = rounding.apply((0.5 * fi).sin());
    let root = rounding.apply(ro.sqrt());
    z * sin_3h / power - (x * cos_h + z * sin_h) / root
}

/// Shear stress: `-z*cos(1.5*fi)/ro^1.5`.
pub fn tau_xz(z: f64, ro: f64, fi: f64, rounding: &RoundingPolicy) -> f64 {
    let power = rounding.apply(ro.powf(1.5));
    let cos_3h = rounding.apply((1.5 * fi).cos());
    -z * cos_3h / power
}
