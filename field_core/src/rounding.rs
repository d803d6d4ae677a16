//! # Fixed-Precision Rounding Policy
//!
//! Optional decimal rounding applied at fixed points inside the field
//! arithmetic to emulate limited-precision computation. Disabled by default;
//! when enabled, every documented intermediate value is clamped to a fixed
//! number of decimal digits with a configurable midpoint rule.
//!
//! Rounding is performed on exact decimal values (via [`rust_decimal`]), not
//! by binary-float manipulation, so midpoints like 0.0005 land where the
//! configured direction says they must.
//!
//! ## Example
//!
//! ```rust
//! use field_core::rounding::RoundingPolicy;
//!
//! let policy = RoundingPolicy::half_up(4);
//! assert_eq!(policy.apply(0.00005), 0.0001);
//!
//! let off = RoundingPolicy::disabled();
//! assert_eq!(off.apply(0.123456789), 0.123456789);
//! ```

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, FieldResult};

/// Default decimal precision when rounding is enabled
pub const DEFAULT_PRECISION: u32 = 6;

/// Smallest accepted decimal precision
pub const MIN_PRECISION: u32 = 4;

/// Largest accepted decimal precision
pub const MAX_PRECISION: u32 = 17;

/// Midpoint rule used when a value sits exactly between two representable
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingDirection {
    /// Midpoints round away from zero (0.0005 -> 0.001 at 3 digits)
    HalfUp,
    /// Midpoints round toward zero (0.0005 -> 0.000 at 3 digits)
    HalfDown,
}

impl Default for RoundingDirection {
    fn default() -> Self {
        RoundingDirection::HalfUp
    }
}

/// Fixed-precision rounding configuration.
///
/// Bound to a [`FieldSolver`](crate::solver::FieldSolver) at construction and
/// immutable afterwards, so solvers with different precision settings can
/// coexist, including across threads.
///
/// ## JSON Example
///
/// ```json
/// {
///   "enabled": true,
///   "precision": 6,
///   "direction": "HalfUp"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundingPolicy {
    /// Whether intermediate rounding is applied at all
    pub enabled: bool,

    /// Decimal digits kept after the point (valid range 4-17)
    pub precision: u32,

    /// Midpoint tie-break rule
    pub direction: RoundingDirection,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        RoundingPolicy {
            enabled: false,
            precision: DEFAULT_PRECISION,
            direction: RoundingDirection::HalfUp,
        }
    }
}

impl RoundingPolicy {
    /// Policy that leaves every value untouched.
    pub fn disabled() -> Self {
        RoundingPolicy::default()
    }

    /// Enabled policy rounding midpoints away from zero.
    pub fn half_up(precision: u32) -> Self {
        RoundingPolicy {
            enabled: true,
            precision,
            direction: RoundingDirection::HalfUp,
        }
    }

    /// Enabled policy rounding midpoints toward zero.
    pub fn half_down(precision: u32) -> Self {
        RoundingPolicy {
            enabled: true,
            precision,
            direction: RoundingDirection::HalfDown,
        }
    }

    /// Validate the configured precision.
    ///
    /// Only meaningful for enabled policies; a disabled policy never reads
    /// its precision and always validates.
    pub fn validate(&self) -> FieldResult<()> {
        if self.enabled && !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(FieldError::invalid_input(
                "precision",
                self.precision.to_string(),
                format!(
                    "Precision must be between {} and {} decimal digits",
                    MIN_PRECISION, MAX_PRECISION
                ),
            ));
        }
        Ok(())
    }

    /// Apply the policy to a single value.
    ///
    /// Disabled: identity. Enabled: non-finite inputs are first clamped
    /// (+inf to the largest finite f64, NaN and -inf to the smallest positive
    /// normal), then the value is rounded to `precision` decimal digits with
    /// the configured midpoint rule. Magnitudes beyond the decimal type's
    /// range pass through unchanged.
    pub fn apply(&self, value: f64) -> f64 {
        if !self.enabled {
            return value;
        }

        let clamped = if value == f64::INFINITY {
            f64::MAX
        } else if !value.is_finite() {
            f64::MIN_POSITIVE
        } else {
            value
        };

        let strategy = match self.direction {
            RoundingDirection::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingDirection::HalfDown => RoundingStrategy::MidpointTowardZero,
        };

        match Decimal::from_f64(clamped) {
            Some(decimal) => decimal
                .round_dp_with_strategy(self.precision, strategy)
                .to_f64()
                .unwrap_or(clamped),
            None => clamped,
        }
    }
}
