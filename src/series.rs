//! Ordered sequences of values, and the adapter which turns whatever the
//! caller passes in (scalars, arrays, slices, vectors...) into one
//!
//! Every public conversion calls [`series`] on each of its sequence inputs
//! before doing anything else, so a bare scalar behaves exactly like a
//! single-element sequence.

use crate::{numeric::Float, Result};

use eyre::WrapErr;

use std::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// Ordered, index-preserving sequence of values
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series(Vec<Float>);
//
impl Series {
    /// Build a series from a vector of values
    pub fn new(values: Vec<Float>) -> Self {
        Self(values)
    }

    /// Extract the underlying values
    pub fn into_vec(self) -> Vec<Float> {
        self.0
    }

    /// Round every value to a given number of decimal places
    pub fn rounded(&self, decimals: i32) -> Self {
        let scale = (10.0 as Float).powi(decimals);
        self.iter().map(|x| (x * scale).round() / scale).collect()
    }
}
//
impl Deref for Series {
    type Target = [Float];

    fn deref(&self) -> &[Float] {
        &self.0
    }
}
//
impl FromIterator<Float> for Series {
    fn from_iter<I: IntoIterator<Item = Float>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
//
impl IntoIterator for Series {
    type Item = Float;
    type IntoIter = std::vec::IntoIter<Float>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
//
impl<'a> IntoIterator for &'a Series {
    type Item = &'a Float;
    type IntoIter = std::slice::Iter<'a, Float>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
//
impl From<Series> for Vec<Float> {
    fn from(series: Series) -> Self {
        series.0
    }
}
//
impl Display for Series {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "[")?;
        for (idx, x) in self.iter().enumerate() {
            if idx > 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{}", x)?;
        }
        write!(fmt, "]")
    }
}
//
impl FromStr for Series {
    type Err = eyre::Report;

    /// Parse values separated by commas and/or whitespace
    ///
    /// Any token which is not a number makes the whole parse fail, so that
    /// malformed input never reaches the numerical code.
    ///
    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(idx, token)| {
                token
                    .parse::<Float>()
                    .wrap_err_with(|| format!("Could not parse value #{} ({:?})", idx, token))
            })
            .collect()
    }
}

/// Numbers which can be used as elements of a [`Series`]
pub trait Scalar: Copy {
    /// Convert to the floating-point type used at the library boundary
    fn to_float(self) -> Float;
}

/// Anything which can be turned into a [`Series`]
pub trait IntoSeries {
    /// Perform the conversion
    fn into_series(self) -> Series;
}

// Scalars become single-element series
macro_rules! impl_scalars {
    ($($scalar:ty),*) => {
        $(
            impl Scalar for $scalar {
                #[allow(clippy::unnecessary_cast)]
                fn to_float(self) -> Float {
                    self as Float
                }
            }

            impl IntoSeries for $scalar {
                fn into_series(self) -> Series {
                    Series(vec![self.to_float()])
                }
            }
        )*
    };
}
impl_scalars!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoSeries for Series {
    fn into_series(self) -> Series {
        self
    }
}

impl IntoSeries for &Series {
    fn into_series(self) -> Series {
        self.clone()
    }
}

impl<T: Scalar> IntoSeries for Vec<T> {
    fn into_series(self) -> Series {
        self.as_slice().into_series()
    }
}

impl<T: Scalar> IntoSeries for &Vec<T> {
    fn into_series(self) -> Series {
        self.as_slice().into_series()
    }
}

impl<T: Scalar> IntoSeries for &[T] {
    fn into_series(self) -> Series {
        self.iter().map(|x| x.to_float()).collect()
    }
}

impl<T: Scalar, const N: usize> IntoSeries for [T; N] {
    fn into_series(self) -> Series {
        self.as_slice().into_series()
    }
}

impl<T: Scalar, const N: usize> IntoSeries for &[T; N] {
    fn into_series(self) -> Series {
        self.as_slice().into_series()
    }
}

/// Normalize a scalar or sequence input into a [`Series`]
pub fn series(input: impl IntoSeries) -> Series {
    input.into_series()
}
