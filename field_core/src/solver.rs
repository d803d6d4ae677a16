//! # Field Solver
//!
//! Ties the pieces together: for each grid point the solver computes the
//! polar decomposition (ro, fi) and evaluates the five field formulas,
//! producing one [`FieldRecord`] per point. The rounding policy is bound at
//! construction and shared read-only by every evaluation, so solvers with
//! different precision settings can coexist and points may be evaluated from
//! multiple threads.
//!
//! ## Example
//!
//! ```rust
//! use field_core::rounding::RoundingPolicy;
//! use field_core::solver::FieldSolver;
//!
//! let solver = FieldSolver::new(RoundingPolicy::disabled()).unwrap();
//! let records = solver.solve(&[0.0, 1.0], &[0.0, 1.0]);
//! assert_eq!(records.len(), 4);
//! assert_eq!((records[1].x, records[1].z), (1.0, 0.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::displacement;
use crate::errors::FieldResult;
use crate::polar;
use crate::rounding::RoundingPolicy;
use crate::stress;

/// One output row of the tabulated solution.
///
/// Stress components follow the sign convention of the closed-form solution
/// (compression negative). Values at degenerate geometry (ro = 0) carry the
/// propagated IEEE-754 non-finite results; nothing is masked.
///
/// ## JSON Example
///
/// ```json
/// {
///   "x": 1.0,
///   "z": 0.0,
///   "sigma_z": -0.707107,
///   "sigma_x": -0.707107,
///   "tau_xz": 0.0,
///   "u": -0.414214,
///   "w": 0.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Horizontal coordinate relative to the excavation face
    pub x: f64,

    /// Vertical coordinate relative to the excavation face
    pub z: f64,

    /// Vertical stress
    pub sigma_z: f64,

    /// Horizontal stress
    pub sigma_x: f64,

    /// Shear stress
    pub tau_xz: f64,

    /// Horizontal displacement
    pub u: f64,

    /// Vertical displacement
    pub w: f64,
}

/// Stateless evaluator for the roof stress-displacement field.
#[derive(Debug, Clone)]
pub struct FieldSolver {
    rounding: RoundingPolicy,
}

impl FieldSolver {
    /// Create a solver with the given rounding policy.
    ///
    /// # Returns
    ///
    /// * `Ok(FieldSolver)` - policy accepted
    /// * `Err(FieldError::InvalidInput)` - enabled policy with precision
    ///   outside the accepted 4-17 digit range
    pub fn new(rounding: RoundingPolicy) -> FieldResult<Self> {
        rounding.validate()?;
        Ok(FieldSolver { rounding })
    }

    /// The rounding policy this solver was built with.
    pub fn rounding(&self) -> &RoundingPolicy {
        &self.rounding
    }

    /// Evaluate the five field quantities at a single grid point.
    pub fn evaluate(&self, x: f64, z: f64) -> FieldRecord {
        let ro = polar::modulus(x, z, &self.rounding);
        let fi = polar::angle(x, z, ro, &self.rounding);
        FieldRecord {
            x,
            z,
            sigma_z: stress::sigma_z(x, z, ro, fi, &self.rounding),
            sigma_x: stress::sigma_x(x, z, ro, fi, &self.rounding),
            tau_xz: stress::tau_xz(z, ro, fi, &self.rounding),
            u: displacement::horizontal(x, ro, fi, &self.rounding),
            w: displacement::vertical(z, ro, fi, &self.rounding),
        }
    }

    /// Tabulate the field over the cross product of the coordinate arrays.
    ///
    /// Records come out in row-major order: z outer, x inner, both in input
    /// order. Empty inputs yield an empty tabulation.
    pub fn solve(&self, x: &[f64], z: &[f64]) -> Vec<FieldRecord> {
        let mut records = Vec::with_capacity(x.len() * z.len());
        for &zj in z {
            for &xi in x {
                records.push(self.evaluate(xi, zj));
            }
        }
        records
    }
}
