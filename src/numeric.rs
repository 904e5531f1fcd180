//! Basic numerical concepts used throughout the library
//!
//! Values cross the public API as ordinary floating-point numbers, but all the
//! relativistic arithmetic happens on arbitrary-precision decimals. Computing
//! `sqrt(E_tot² - E_rest²)` in double precision loses most significant digits
//! when the kinetic energy is small compared to the rest energy.
//!
//! Inside the precise layer, an undefined value (NaN at the boundary) is
//! represented as `None`, so that a single bad element propagates as a value
//! instead of aborting the computation.

#![allow(missing_docs)]

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive, Zero};

// Floating-point precision of the public interface is configured here
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f32")]
pub use std::f32 as reals;
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(not(feature = "f32"))]
pub use std::f64 as reals;

/// Decimal type used for intermediate computations
pub type Precise = BigDecimal;

/// Number of significant digits kept when widening a boundary value
///
/// Floating-point inputs are exactly representable in decimal, but their exact
/// expansion can be needlessly long. This keeps products small while staying
/// far above the ~17 digits a double actually carries.
///
pub const WIDENING_DIGITS: u64 = 50;

/// Convert a boundary value into a precise decimal (None for NaN and infinities)
pub fn widen(x: Float) -> Option<Precise> {
    Precise::from_f64(f64::from(x)).map(|p| p.with_prec(WIDENING_DIGITS))
}

/// Convert a precise decimal back to the boundary type, None becoming NaN
#[allow(clippy::unnecessary_cast)]
pub fn narrow(p: Option<&Precise>) -> Float {
    p.and_then(|p| p.to_f64()).map_or(reals::NAN, |x| x as Float)
}

/// Build an exact decimal from an integer significand and a power of ten
pub fn decimal(significand: i64, exponent: i64) -> Precise {
    Precise::new(significand.into(), -exponent)
}

/// Mathematical functions which are total on the precise layer
pub mod functions {
    use super::{Precise, Zero};

    /// Square root, undefined for negative arguments
    pub fn sqrt(x: &Precise) -> Option<Precise> {
        x.sqrt()
    }

    /// Division, undefined for a zero divisor
    pub fn div(num: &Precise, denom: &Precise) -> Option<Precise> {
        if denom.is_zero() {
            None
        } else {
            Some(num / denom)
        }
    }

    /// Square of a precise value
    pub fn sqr(x: &Precise) -> Precise {
        x.square()
    }
}

#[cfg(test)]
mod tests {
    use super::{functions::*, *};

    #[test]
    fn widen_rejects_non_finite() {
        assert!(widen(reals::NAN).is_none());
        assert!(widen(reals::INFINITY).is_none());
        assert!(widen(-reals::INFINITY).is_none());
        assert!(widen(0.0).is_some());
    }

    fn assert_close(actual: Float, expected: Float) {
        let tolerance = 1e-6 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "{} differs from {}",
            actual,
            expected
        );
    }

    #[test]
    fn narrow_maps_undefined_to_nan() {
        assert!(narrow(None).is_nan());
        assert_close(narrow(Some(&decimal(25, -1))), 2.5);
        assert_close(narrow(widen(-3.75).as_ref()), -3.75);
    }

    #[test]
    fn decimal_applies_power_of_ten() {
        assert_close(narrow(Some(&decimal(299_792_458, 0))), 299_792_458.0);
        assert_close(narrow(Some(&decimal(1, 9))), 1e9);
        let e = narrow(Some(&(&decimal(160_217_663, -27) * &decimal(1, 19))));
        assert_close(e, 1.602_176_63);
    }

    #[test]
    fn guarded_operations() {
        assert!(sqrt(&decimal(-4, 0)).is_none());
        assert_close(narrow(sqrt(&decimal(16, 0)).as_ref()), 4.0);
        assert_close(narrow(sqrt(&Precise::zero()).as_ref()), 0.0);
        assert!(div(&decimal(1, 0), &Precise::zero()).is_none());
        assert_close(narrow(div(&decimal(3, 0), &decimal(4, 0)).as_ref()), 0.75);
        assert_close(narrow(Some(&sqr(&decimal(-3, 0)))), 9.0);
    }

    #[test]
    fn precision_survives_cancellation() {
        // (1 + 1e-30)² - 1 is lost entirely in double precision
        let x = &decimal(1, 0) + &decimal(1, -30);
        let diff = &sqr(&x) - &decimal(1, 0);
        assert_close(narrow(Some(&(&diff / &decimal(2, -30)))), 1.0);
    }
}
