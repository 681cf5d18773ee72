// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use super::{digits::Digit, signed::Sign, BigInt};
use crate::error::{Error, Result};

/// the native integers a [`BigInt`] can be built from and converted back to
pub trait Primitive: Copy + Eq + Ord {
    /// sign and magnitude
    fn split_sign(self) -> (Sign, u128);
    /// `None` if the value doesn't fit
    fn from_sign_magnitude(sign: Sign, magnitude: u128) -> Option<Self>;
}

macro_rules! implPrim {
    ($pos_type: tt, $neg_type: tt) => {
        impl Primitive for $pos_type {
            fn split_sign(self) -> (Sign, u128) {
                (Sign::Positive, self as u128)
            }
            fn from_sign_magnitude(sign: Sign, magnitude: u128) -> Option<Self> {
                match sign {
                    Sign::Positive => Self::try_from(magnitude).ok(),
                    Sign::Negative => None,
                }
            }
        }
        impl Primitive for $neg_type {
            fn split_sign(self) -> (Sign, u128) {
                let sign = if self.is_negative() {
                    Sign::Negative
                } else {
                    Sign::Positive
                };
                (sign, self.unsigned_abs() as u128)
            }
            fn from_sign_magnitude(sign: Sign, magnitude: u128) -> Option<Self> {
                match sign {
                    Sign::Positive => Self::try_from(magnitude).ok(),
                    // MIN has no positive counterpart
                    Sign::Negative if magnitude == Self::MIN.unsigned_abs() as u128 => Some(Self::MIN),
                    Sign::Negative => Self::try_from(magnitude).ok().map(|it: Self| -it),
                }
            }
        }

        impl<D: Digit> From<$pos_type> for BigInt<D> {
            fn from(value: $pos_type) -> Self {
                Self::from_primitive(value)
            }
        }
        impl<D: Digit> From<$neg_type> for BigInt<D> {
            fn from(value: $neg_type) -> Self {
                Self::from_primitive(value)
            }
        }
        impl<D: Digit> TryFrom<&BigInt<D>> for $pos_type {
            type Error = Error;

            fn try_from(value: &BigInt<D>) -> Result<Self> {
                value.to_primitive()
            }
        }
        impl<D: Digit> TryFrom<&BigInt<D>> for $neg_type {
            type Error = Error;

            fn try_from(value: &BigInt<D>) -> Result<Self> {
                value.to_primitive()
            }
        }
    };
}

implPrim!(u8, i8);
implPrim!(u16, i16);
implPrim!(u32, i32);
implPrim!(u64, i64);
implPrim!(u128, i128);
implPrim!(usize, isize);

impl<D: Digit> BigInt<D> {
    pub(crate) fn from_primitive(value: impl Primitive) -> Self {
        crate::error::or_panic(Self::try_from_primitive(value))
    }
    /// the magnitude, if it fits into 128 bits
    pub(crate) fn magnitude_u128(&self) -> Option<u128> {
        if self.count_bits() > 128 {
            return None;
        }
        Some(self.digits.iter().rev().fold(0u128, |acc, digit| {
            acc.checked_shl(D::BASIS_POW as u32).unwrap_or(0) | digit.to_u128()
        }))
    }
    pub(crate) fn to_primitive<P: Primitive>(&self) -> Result<P> {
        self.magnitude_u128()
            .and_then(|magnitude| P::from_sign_magnitude(self.sign(), magnitude))
            .ok_or(Error::Range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_magnitude() {
        assert_eq!((-5i8).split_sign(), (Sign::Negative, 5));
        assert_eq!(i8::MIN.split_sign(), (Sign::Negative, 128));
        assert_eq!(200u8.split_sign(), (Sign::Positive, 200));
    }

    #[test]
    fn back_from_sign_magnitude() {
        assert_eq!(i8::from_sign_magnitude(Sign::Negative, 128), Some(i8::MIN));
        assert_eq!(i8::from_sign_magnitude(Sign::Negative, 129), None);
        assert_eq!(i8::from_sign_magnitude(Sign::Positive, 128), None);
        assert_eq!(u8::from_sign_magnitude(Sign::Negative, 1), None);
        assert_eq!(
            u128::from_sign_magnitude(Sign::Positive, u128::MAX),
            Some(u128::MAX)
        );
    }

    #[test]
    fn extremes_round_trip() {
        for value in [i128::MIN, i128::MAX, -1, 0, 1] {
            let num = BigInt::<u8>::from(value);
            assert_eq!(i128::try_from(&num), Ok(value), "{num:?}");
        }
        let num = BigInt::<u32>::from(u128::MAX);
        assert_eq!(u128::try_from(&num), Ok(u128::MAX));
        assert_eq!(i128::try_from(&num), Err(Error::Range));
        assert_eq!(u64::try_from(&num), Err(Error::Range));
    }

    #[test]
    fn too_big_for_u128() {
        let num = BigInt::<u64>::from(u128::MAX) + BigInt::from(1u8);
        assert_eq!(num.magnitude_u128(), None);
        assert_eq!(u128::try_from(&num), Err(Error::Range));
    }
}
