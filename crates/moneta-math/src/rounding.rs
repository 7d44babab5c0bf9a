//! Rounding of amounts to a fixed number of decimal places.
//!
//! The arithmetic is deliberately literal: the amount is multiplied by
//! `10^places`, rounded to an integer under the chosen policy, and divided
//! back.  Negative amounts are not special-cased and non-finite inputs
//! propagate through unchanged.

use moneta_core::DecimalPlaces;
use num_traits::Float;

/// How the scaled amount is brought to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingPolicy {
    /// Ceiling of the scaled value: a fraction of a unit is never dropped.
    #[default]
    Ceiling,
    /// Nearest integer, ties resolved towards positive infinity.
    Nearest,
}

impl RoundingPolicy {
    /// `Nearest` when `use_nearest_rounding` is set, otherwise `Ceiling`.
    pub fn from_nearest(use_nearest_rounding: bool) -> Self {
        if use_nearest_rounding {
            RoundingPolicy::Nearest
        } else {
            RoundingPolicy::Ceiling
        }
    }

    fn apply<T: Float>(self, scaled: T) -> T {
        match self {
            RoundingPolicy::Ceiling => scaled.ceil(),
            RoundingPolicy::Nearest => round_half_up(scaled),
        }
    }
}

/// Round `amount` to `decimal_places` decimal places under `policy`.
///
/// ```
/// use moneta_math::{round, RoundingPolicy};
///
/// assert_eq!(round(1.123, 2, RoundingPolicy::Ceiling), 1.13);
/// assert_eq!(round(1.123, 2, RoundingPolicy::Nearest), 1.12);
/// assert_eq!(round(1.126, 0, RoundingPolicy::Ceiling), 2.0);
/// ```
pub fn round<T>(amount: T, decimal_places: DecimalPlaces, policy: RoundingPolicy) -> T
where
    T: Float + From<u8>,
{
    let factor = <T as From<u8>>::from(10).powi(decimal_places as i32);
    policy.apply(amount * factor) / factor
}

// `Float::round` breaks ties away from zero; ties here go up (-2.5 -> -2).
fn round_half_up<T: Float>(x: T) -> T {
    let floor = x.floor();
    let half = T::one() / (T::one() + T::one());
    if x - floor >= half {
        floor + T::one()
    } else {
        floor
    }
}
