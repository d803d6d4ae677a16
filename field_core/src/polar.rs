//! # Polar Decomposition
//!
//! The closed-form solution is written in a rotated complex-plane
//! parametrization: each grid point (x, z) maps to a complex expression whose
//! modulus `ro` and argument `fi` feed every field formula.
//!
//! `ro` is evaluated directly. `fi` is *not* inverted analytically: the
//! relation `sin(fi) = 2xz/ro` is solved by an exhaustive scan over 157
//! discrete candidates at 0.01 rad spacing, keeping the candidate with the
//! smallest residual. The scan resolution and its tie-break (equal residuals
//! move the pick to the larger angle) are part of the output contract and
//! must not be refined.

use once_cell::sync::Lazy;

use crate::rounding::RoundingPolicy;

/// Number of discrete angle candidates scanned during recovery
pub const ANGLE_CANDIDATES: usize = 157;

/// Spacing between adjacent angle candidates (radians)
pub const ANGLE_STEP: f64 = 0.01;

/// Candidate angles paired with their sines, built once on first use.
static CANDIDATE_SINES: Lazy<[(f64, f64); ANGLE_CANDIDATES]> = Lazy::new(|| {
    let mut table = [(0.0, 0.0); ANGLE_CANDIDATES];
    for (v, entry) in table.iter_mut().enumerate() {
        let fit = ANGLE_STEP * v as f64;
        *entry = (fit, fit.sin());
    }
    table
});

/// Modulus of the complex expression at (x, z):
/// `ro = sqrt((z^2 - x^2 - 1)^2 + 4x^2z^2)`.
///
/// Always non-negative for finite inputs. The squared axial term and the
/// final square root each pass through the rounding policy.
pub fn modulus(x: f64, z: f64, rounding: &RoundingPolicy) -> f64 {
    let axial = rounding.apply((z * z - x * x - 1.0).powi(2));
    rounding.apply((axial + 4.0 * x * x * z * z).sqrt())
}

/// Recover the argument `fi` from `sin(fi) = 2xz/ro` by exhaustive scan.
///
/// Returns one of the 157 candidates {0.00, 0.01, ..., 1.56}. The update
/// comparison is `<=`, so among candidates with equal residual the largest
/// angle wins.
///
/// When `ro` is 0 the target is 0/0 = NaN (ro only vanishes where xz = 0);
/// NaN residuals never beat the sentinel and the scan returns candidate 0.0.
pub fn angle(x: f64, z: f64, ro: f64, rounding: &RoundingPolicy) -> f64 {
    let target = rounding.apply(2.0 * x * z / ro);
    let mut best_fit = 0.0;
    let mut best_residual = f64::MAX;
    for &(fit, sin_fit) in CANDIDATE_SINES.iter() {
        let residual = (target - rounding.apply(sin_fit)).abs();
        if residual <= best_residual {
            best_residual = residual;
            best_fit = fit;
        }
    }
    best_fit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn off() -> RoundingPolicy {
        RoundingPolicy::disabled()
    }

    /// True when `fi` sits on the 0.01 candidate grid within [0, 1.56].
    fn on_candidate_grid(fi: f64) -> bool {
        let steps = (fi / ANGLE_STEP).round();
        (0.0..ANGLE_CANDIDATES as f64).contains(&steps)
            && (fi - steps * ANGLE_STEP).abs() < 1e-12
    }

    #[test]
    fn test_modulus_non_negative() {
        for &x in &[-3.0, -1.0, -0.5, 0.0, 0.5, 1.0, 3.0] {
            for &z in &[-2.0, 0.0, 0.25, 1.0, 4.0] {
                assert!(modulus(x, z, &off()) >= 0.0, "ro < 0 at ({}, {})", x, z);
            }
        }
    }

    #[test]
    fn test_modulus_at_origin() {
        // (0 - 0 - 1)^2 = 1, cross term 0
        assert_eq!(modulus(0.0, 0.0, &off()), 1.0);
    }

    #[test]
    fn test_modulus_degenerate_zero() {
        // z^2 - x^2 = 1 with xz = 0: the modulus vanishes
        assert_eq!(modulus(0.0, 1.0, &off()), 0.0);
    }

    #[test]
    fn test_modulus_known_value() {
        // (1 - 1 - 1)^2 + 4 = 5
        let ro = modulus(1.0, 1.0, &off());
        assert!((ro - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_angle_on_grid() {
        for &x in &[0.0, 0.3, 1.0, 2.5] {
            for &z in &[0.0, 0.7, 1.0, 3.0] {
                let ro = modulus(x, z, &off());
                let fi = angle(x, z, ro, &off());
                assert!(on_candidate_grid(fi), "fi = {} off grid at ({}, {})", fi, x, z);
            }
        }
    }

    #[test]
    fn test_angle_at_origin() {
        // Target is 0/1 = 0; sin is strictly increasing over the candidates,
        // so the fit is unique
        assert_eq!(angle(0.0, 0.0, 1.0, &off()), 0.0);
    }

    #[test]
    fn test_angle_best_fit() {
        // ro = sqrt(5), target = 2/sqrt(5) = 0.894427; asin gives 1.1071,
        // and 1.11 beats both neighbors on the candidate grid
        let ro = modulus(1.0, 1.0, &off());
        let fi = angle(1.0, 1.0, ro, &off());
        assert!((fi - 1.11).abs() < 1e-12);
    }

    #[test]
    fn test_angle_saturates_at_largest_candidate() {
        // x = 1, z = sqrt(2): axial term vanishes, so 2xz/ro = 1 exactly and
        // the closest candidate sine is sin(1.56)
        let z = 2.0_f64.sqrt();
        let ro = modulus(1.0, z, &off());
        let fi = angle(1.0, z, ro, &off());
        assert!((fi - 1.56).abs() < 1e-12);
    }

    #[test]
    fn test_angle_degenerate_modulus() {
        // ro = 0 makes the target NaN; the scan never updates and falls
        // through to the first candidate
        let ro = modulus(0.0, 1.0, &off());
        assert_eq!(ro, 0.0);
        assert_eq!(angle(0.0, 1.0, ro, &off()), 0.0);
    }

    #[test]
    fn test_tie_break_prefers_larger_angle() {
        // At one decimal digit the target 0.4/3.0 rounds to 0.1, and every
        // candidate from 0.06 to 0.15 has a rounded sine of 0.1 as well. All
        // ten residuals are exactly zero; the scan must keep the last one.
        let coarse = RoundingPolicy::half_up(1);
        let ro = modulus(0.1, 2.0, &coarse);
        let fi = angle(0.1, 2.0, ro, &coarse);
        assert!((fi - 0.15).abs() < 1e-12);
    }
}
