//! Scalar traits used throughout the crate.

use core::fmt::Debug;

use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// This is blanket-implemented for anything that satisfies the bounds,
/// which covers `f32`, `f64`, and the primitive integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for scalars the decomposition and solver layer operates on.
///
/// Extends [`Scalar`] with floating-point operations (`sqrt`, `abs`,
/// ordered comparisons) and carries the per-type numeric policy: the
/// default pivot/cutoff threshold and conversions used to build
/// rotation constants.
pub trait FloatScalar: Scalar + Float {
    /// Default threshold below which a pivot or singular value is
    /// treated as zero.
    fn zero_threshold() -> Self;

    /// Lossy conversion from an `f64` constant.
    fn from_f64(x: f64) -> Self;

    /// Lossy conversion from a dimension count.
    fn from_usize(n: usize) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty => $thresh:expr),* $(,)?) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                fn zero_threshold() -> $t {
                    $thresh
                }

                #[inline]
                fn from_f64(x: f64) -> $t {
                    x as $t
                }

                #[inline]
                fn from_usize(n: usize) -> $t {
                    n as $t
                }
            }
        )*
    };
}

impl_float_scalar!(f32 => 1e-6, f64 => 1e-15);
