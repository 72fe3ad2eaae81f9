//! Promotion of numeric keys and values to a floating representation.
//!
//! Every division, slope, and logarithm in the interpolation strategies is
//! computed after promotion, so integer nodes never truncate mid-computation.
//! The type parameter `F` is the minimum precision: integers promote to `F`,
//! and floating types promote to the wider of themselves and `F`.
//!
//! | Self             | F = f32 | F = f64 |
//! |------------------|---------|---------|
//! | integer          | f32     | f64     |
//! | f32              | f32     | f64     |
//! | f64              | f64     | f64     |

use num_traits::{Float, NumCast};

/// Conversion to a floating type no narrower than `F`.
pub trait Promote<F: Float> {
    /// The promoted floating type
    type Output: Float;

    fn promote(&self) -> Self::Output;
}

macro_rules! promote_integer {
    ($($t:ty),*) => {
        $(
            impl<F: Float> Promote<F> for $t {
                type Output = F;

                #[inline]
                fn promote(&self) -> F {
                    // Integer to float casts are always representable,
                    // at worst by an infinity
                    <F as NumCast>::from(*self).unwrap_or_else(F::nan)
                }
            }
        )*
    };
}

promote_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! promote_float {
    ($($t:ty => $f:ty => $out:ty),*) => {
        $(
            impl Promote<$f> for $t {
                type Output = $out;

                #[inline]
                fn promote(&self) -> $out {
                    <$out as From<$t>>::from(*self)
                }
            }
        )*
    };
}

promote_float!(
    f32 => f32 => f32,
    f32 => f64 => f64,
    f64 => f32 => f64,
    f64 => f64 => f64
);
