//! # field_core - Mine-Roof Stress-Displacement Field Engine
//!
//! `field_core` tabulates a closed-form elasticity solution for the roof
//! strata around an excavation face. For every point of an (x, z) coordinate
//! grid it produces the vertical, horizontal, and shear stress together with
//! both displacement components, via a polar decomposition of the solution's
//! complex-plane parametrization.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All configuration and output types implement
//!   Serialize/Deserialize
//! - **Propagate, never trap**: Degenerate geometry flows through as
//!   IEEE-754 non-finite values instead of raising errors
//! - **Reproducible**: The angle-recovery scan and the optional
//!   fixed-precision rounding policy are pinned bit-for-bit, so tabulations
//!   are comparable across machines and runs
//!
//! ## Quick Start
//!
//! ```rust
//! use field_core::rounding::RoundingPolicy;
//! use field_core::solver::FieldSolver;
//!
//! let solver = FieldSolver::new(RoundingPolicy::disabled()).unwrap();
//! for record in solver.solve(&[0.0, 1.0], &[0.5, 1.5]) {
//!     println!("({}, {}): sigma_z = {:.3}", record.x, record.z, record.sigma_z);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`solver`] - Per-point evaluation and the grid driver
//! - [`polar`] - Modulus and discretized angle recovery
//! - [`stress`] - The three closed-form stress formulas
//! - [`displacement`] - The two closed-form displacement formulas
//! - [`rounding`] - Optional fixed-precision rounding policy
//! - [`config`] - JSON run-configuration files
//! - [`errors`] - Structured error types

pub mod config;
pub mod displacement;
pub mod errors;
pub mod polar;
pub mod rounding;
pub mod solver;
pub mod stress;

// Re-export commonly used types at crate root for convenience
pub use config::{load_config, save_config, GridConfig, RunConfig};
pub use errors::{FieldError, FieldResult};
pub use rounding::{RoundingDirection, RoundingPolicy};
pub use solver::{FieldRecord, FieldSolver};
