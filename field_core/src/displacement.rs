//! # Displacement Components
//!
//! The two closed-form displacement expressions of the roof solution. Unlike
//! the stresses these stay finite at a vanishing modulus, since sqrt(ro)
//! multiplies rather than divides.

use crate::rounding::RoundingPolicy;

/// Horizontal displacement: `x - sqrt(ro)*cos(fi/2)`.
pub fn horizontal(x: f64, ro: f64, fi: f64, rounding: &RoundingPolicy) -> f64 {
    let root = rounding.apply(ro.sqrt());
    let cos_h = rounding.apply((fi / 2.0).cos());
    x - root * cos_h
}

/// Vertical displacement: `z - sqrt(ro)*sin(fi/2)`.
pub fn vertical(z: f64, ro: f64, fi: f64, rounding: &RoundingPolicy) -> f64 {
    let root = rounding.apply(ro.sqrt());
    let sin_h = rounding.apply((fi / 2.0).sin());
    z - root * sin_h
}
