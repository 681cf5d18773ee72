// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use super::{
    digit_holder::DigitHolder,
    digits::Digit,
    math_algos::{self, add, div, shift, sub},
    math_shortcuts::{self, try_all, MathShortcut},
    primitive::Primitive,
    DefaultDigit,
};
use crate::error::{or_panic, Error, Result};

use itertools::Itertools;
use rand::RngCore;
use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, RangeInclusive, Rem, RemAssign, Shl,
        ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Sign {
    Negative = -1,
    Positive = 1,
}
impl Default for Sign {
    fn default() -> Self {
        Self::Positive
    }
}
impl Sign {
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
    #[must_use]
    pub const fn const_mul(self, rhs: Self) -> Self {
        if self as i8 == rhs as i8 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.const_mul(rhs)
    }
}
impl MulAssign for Sign {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// An arbitrary precision signed integer in sign-magnitude form.
///
/// The magnitude is stored as little endian digits of type `D`, without leading zero digits.
/// Zero has no digits and is always [`Sign::Positive`].
///
/// Every value owns its digits, cloning copies them.
#[derive(Clone, Default, Hash)]
pub struct BigInt<D = DefaultDigit> {
    pub(super) sign: Sign,
    /// holds the digits in LE order
    pub(super) digits: DigitHolder<D>,
}

impl<D: Digit> Debug for BigInt<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Number {{ {} 0x[",
            match (self.is_zero(), self.sign) {
                (true, _) => "",
                (false, Sign::Negative) => "-",
                (false, Sign::Positive) => "+",
            }
        )?;
        for (pos, elem) in self.digits.iter().rev().with_position() {
            write!(f, "{elem:0size$x}", size = D::BYTES * 2)?;
            if matches!(
                pos,
                itertools::Position::First | itertools::Position::Middle
            ) {
                f.write_str(", ")?;
            }
        }
        write!(f, "] }}")
    }
}

impl<D: Digit> PartialEq for BigInt<D> {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && *self.digits == *other.digits
    }
}
impl<D: Digit> Eq for BigInt<D> {}
impl<D: Digit> PartialOrd for BigInt<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<D: Digit> Ord for BigInt<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sign.cmp(&other.sign).then_with(|| {
            let ord = self.cmp_abs(other);
            if self.is_negative() {
                ord.reverse()
            } else {
                ord
            }
        })
    }
}

macro_rules! implScalarCmp {
    ($prim:ty, $cmp_func:ident) => {
        impl<D: Digit> PartialEq<$prim> for BigInt<D> {
            fn eq(&self, other: &$prim) -> bool {
                self.$cmp_func(*other).is_eq()
            }
        }
        impl<D: Digit> PartialOrd<$prim> for BigInt<D> {
            fn partial_cmp(&self, other: &$prim) -> Option<Ordering> {
                Some(self.$cmp_func(*other))
            }
        }
    };
}
implScalarCmp!(i64, compare_value);
implScalarCmp!(u64, compare_uvalue);

// construction and storage
impl<D: Digit> BigInt<D> {
    pub const ZERO: Self = Self {
        sign: Sign::Positive,
        digits: DigitHolder::new(),
    };

    pub const fn new() -> Self {
        Self::ZERO
    }
    /// zero, but with room for `capacity` digits
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            sign: Sign::Positive,
            digits: DigitHolder::with_capacity(capacity)?,
        })
    }
    pub(crate) fn from_parts(sign: Sign, digits: DigitHolder<D>) -> Self {
        debug_assert!(digits.is_normalized(), "{digits:?} has leading zeros");
        let mut num = Self { sign, digits };
        num.fix_zero_sign();
        num
    }
    pub fn from_digit(value: D) -> Result<Self> {
        let mut num = Self::ZERO;
        num.digits.push_carry(value)?;
        Ok(num)
    }
    pub fn try_from_primitive(value: impl Primitive) -> Result<Self> {
        let mut num = Self::ZERO;
        let (sign, magnitude) = value.split_sign();
        num.assign_u128(sign, magnitude)?;
        Ok(num)
    }
    /// a deep copy, that reports a failed allocation
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            sign: self.sign,
            digits: self.digits.try_clone()?,
        })
    }
    /// copies `source` into `self`, reusing the allocation of `self`
    pub fn try_clone_from(&mut self, source: &Self) -> Result<()> {
        self.digits.try_clone_from(&source.digits)?;
        self.sign = source.sign;
        Ok(())
    }

    /// generate a new random number with at least `bytes.start()` and at most `bytes.end()` bytes of information
    /// # Example
    /// `0x00_0100` <= `|BigInt::new_random(2..=3, _)|` <= `0xff_ffff`,
    pub fn new_random(bytes: RangeInclusive<usize>, mut rng: impl RngCore) -> Self {
        let sign = if rng.next_u32() % 2 == 0 {
            Sign::Positive
        } else {
            Sign::Negative
        };
        let bytes = bytes.start()
            + crate::util::rng::next_bound(*bytes.end() - *bytes.start(), &mut rng, None);
        let big_endian = crate::util::rng::random_magnitude(bytes, rng);
        let mut num = or_panic(Self::from_unsigned(&big_endian));
        num.set_sign(sign);
        num
    }

    pub fn set_zero(&mut self) {
        self.digits.clear();
        self.sign = Sign::Positive;
    }
    pub fn set_value(&mut self, value: i64) -> Result<()> {
        let (sign, magnitude) = value.split_sign();
        self.assign_u128(sign, magnitude)
    }
    pub(crate) fn assign_u128(&mut self, sign: Sign, mut magnitude: u128) -> Result<()> {
        self.digits
            .ensure_capacity((u128::BITS as usize).div_ceil(D::BASIS_POW))?;
        self.digits.clear();
        while magnitude != 0 {
            self.digits.push(D::truncate_u128(magnitude))?;
            magnitude = magnitude.checked_shr(D::BASIS_POW as u32).unwrap_or(0);
        }
        self.set_sign(sign);
        Ok(())
    }

    /// number of used digits
    pub fn used(&self) -> usize {
        self.digits.len()
    }
    /// number of allocated digits
    pub fn capacity(&self) -> usize {
        self.digits.capacity()
    }
    pub fn ensure_capacity(&mut self, capacity: usize) -> Result<()> {
        self.digits.ensure_capacity(capacity)
    }
    pub fn shrink_to_fit(&mut self) {
        self.digits.shrink_to_fit();
    }
    /// the little endian digits of the magnitude
    pub fn digits(&self) -> &[D] {
        &self.digits
    }

    fn fix_zero_sign(&mut self) {
        if self.digits.is_empty() {
            self.sign = Sign::Positive;
        }
    }
}

// sign and predicates
impl<D: Digit> BigInt<D> {
    pub const fn sign(&self) -> Sign {
        self.sign
    }
    /// zero ignores the sign
    pub fn set_sign(&mut self, sign: Sign) {
        self.sign = sign;
        self.fix_zero_sign();
    }
    pub fn negate(&mut self) {
        self.set_sign(-self.sign);
    }
    pub fn abs_assign(&mut self) {
        self.sign = Sign::Positive;
    }
    pub fn try_neg(&self) -> Result<Self> {
        let mut out = self.try_clone()?;
        out.negate();
        Ok(out)
    }
    pub fn try_abs(&self) -> Result<Self> {
        let mut out = self.try_clone()?;
        out.abs_assign();
        Ok(out)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
    pub fn is_one(&self) -> bool {
        !self.is_negative() && self.is_abs_one()
    }
    pub(crate) fn is_abs_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0].eq_u8(1)
    }
    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }
    pub fn is_even(&self) -> bool {
        self.digits.first().map_or(true, |it| it.is_even())
    }
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }
    /// true for 1, 2, 4, ...
    pub fn is_power_of_two(&self) -> bool {
        self.power_of_two_exponent().is_some()
    }
    /// `Some(k)` if `self` == 2^k
    pub fn power_of_two_exponent(&self) -> Option<usize> {
        if self.is_negative() {
            return None;
        }
        math_algos::power_of_two_exponent(&self.digits)
    }
    /// number of bits of the magnitude, 0 for zero
    pub fn count_bits(&self) -> usize {
        math_algos::bit_len(&self.digits)
    }
}

// comparison
impl<D: Digit> BigInt<D> {
    /// compares the magnitudes
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        math_algos::cmp_abs(&self.digits, &other.digits)
    }
    /// the ordering of `self` relative to zero
    pub fn cmp_zero(&self) -> Ordering {
        match (self.is_zero(), self.sign) {
            (true, _) => Ordering::Equal,
            (false, Sign::Negative) => Ordering::Less,
            (false, Sign::Positive) => Ordering::Greater,
        }
    }
    fn cmp_sign_magnitude(&self, sign: Sign, magnitude: u128) -> Ordering {
        let other_sign = if magnitude == 0 { Sign::Positive } else { sign };
        self.sign.cmp(&other_sign).then_with(|| {
            // more than 128 bits is always bigger
            let ord = self
                .magnitude_u128()
                .map_or(Ordering::Greater, |it| it.cmp(&magnitude));
            if self.is_negative() {
                ord.reverse()
            } else {
                ord
            }
        })
    }
    pub fn compare_value(&self, value: i64) -> Ordering {
        let (sign, magnitude) = value.split_sign();
        self.cmp_sign_magnitude(sign, magnitude)
    }
    pub fn compare_uvalue(&self, value: u64) -> Ordering {
        self.cmp_sign_magnitude(Sign::Positive, value as u128)
    }

    pub fn to_i64(&self) -> Result<i64> {
        self.to_primitive()
    }
    pub fn to_u64(&self) -> Result<u64> {
        self.to_primitive()
    }
}

// add, sub, mul
impl<D: Digit> BigInt<D> {
    /// `self` += `rhs_sign` * `rhs`, leaves `self` unchanged on error
    fn add_signed(&mut self, rhs: &[D], rhs_sign: Sign) -> Result<()> {
        if rhs.is_empty() || self.sign == rhs_sign {
            add::assign_same_sign(&mut self.digits, rhs)?;
        } else if math_algos::cmp_abs(&self.digits, rhs).is_ge() {
            sub::assign_smaller(&mut self.digits, rhs);
        } else {
            sub::assign_reversed(&mut self.digits, rhs)?;
            self.sign = rhs_sign;
        }
        self.fix_zero_sign();
        Ok(())
    }

    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<()> {
        self.add_signed(&rhs.digits, rhs.sign)
    }
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<()> {
        self.add_signed(&rhs.digits, -rhs.sign)
    }
    pub fn try_mul_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.try_mul(rhs)?;
        Ok(())
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        try_all!(self, rhs, math_shortcuts::add::Zero,);
        let mut out = Self::with_capacity(self.used().max(rhs.used()) + 1)?;
        out.try_clone_from(self)?;
        out.try_add_assign(rhs)?;
        Ok(out)
    }
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        try_all!(self, rhs, math_shortcuts::sub::Zero,);
        let mut out = Self::with_capacity(self.used().max(rhs.used()) + 1)?;
        out.try_clone_from(self)?;
        out.try_sub_assign(rhs)?;
        Ok(out)
    }
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        try_all!(
            self,
            rhs,
            math_shortcuts::mul::ByZero,
            math_shortcuts::mul::ByOne,
            math_shortcuts::mul::ByPowerOfTwo,
        );
        let mut digits = DigitHolder::zeroed(self.used() + rhs.used())?;
        math_algos::mul::naive(&self.digits, &rhs.digits, &mut digits);
        digits.normalize();
        Ok(Self::from_parts(self.sign * rhs.sign, digits))
    }
    /// `self` * `self`
    pub fn try_square(&self) -> Result<Self> {
        self.try_mul(self)
    }

    pub fn add_value(&mut self, value: i64) -> Result<()> {
        let rhs = Self::try_from_primitive(value)?;
        self.try_add_assign(&rhs)
    }
    pub fn sub_value(&mut self, value: i64) -> Result<()> {
        let rhs = Self::try_from_primitive(value)?;
        self.try_sub_assign(&rhs)
    }
    pub fn mul_value(&mut self, value: i64) -> Result<()> {
        let (sign, magnitude) = value.split_sign();
        if magnitude <= D::MAX.to_u128() {
            // single digit, no temporary needed
            math_algos::mul::assign_mul_digit(
                &mut self.digits,
                D::truncate_u128(magnitude),
                D::ZERO,
            )?;
            self.sign *= sign;
            self.fix_zero_sign();
            return Ok(());
        }
        let rhs = Self::try_from_primitive(value)?;
        self.try_mul_assign(&rhs)
    }
    pub fn try_add_value(&self, value: i64) -> Result<Self> {
        let mut out = self.try_clone()?;
        out.add_value(value)?;
        Ok(out)
    }
    pub fn try_sub_value(&self, value: i64) -> Result<Self> {
        let mut out = self.try_clone()?;
        out.sub_value(value)?;
        Ok(out)
    }
    pub fn try_mul_value(&self, value: i64) -> Result<Self> {
        let mut out = self.try_clone()?;
        out.mul_value(value)?;
        Ok(out)
    }
}

// shifts and division
impl<D: Digit> BigInt<D> {
    /// `self` * 2^`k`
    pub fn mul_pow2(&self, k: usize) -> Result<Self> {
        let mut out = Self::with_capacity(self.used() + k / D::BASIS_POW + 1)?;
        out.try_clone_from(self)?;
        out.shl_assign_checked(k)?;
        Ok(out)
    }
    /// (`self` / 2^`k`, `self` % 2^`k`) truncating, the remainder has the sign of `self`
    pub fn div_pow2(&self, k: usize) -> Result<(Self, Self)> {
        let mut q = self.try_clone()?;
        let mut r = self.try_clone()?;
        shift::shr_assign(&mut q.digits, k);
        q.fix_zero_sign();
        shift::keep_low_bits(&mut r.digits, k);
        r.fix_zero_sign();
        Ok((q, r))
    }
    pub fn shl_assign_checked(&mut self, k: usize) -> Result<()> {
        shift::shl_assign(&mut self.digits, k)
    }
    /// truncates toward zero
    pub fn shr_assign_checked(&mut self, k: usize) {
        shift::shr_assign(&mut self.digits, k);
        self.fix_zero_sign();
    }

    /// truncating division, `self` = q * `rhs` + r where r has the sign of `self`
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }
        let (q, r) = Self::div_rem_unchecked(self, rhs)?;

        debug_assert!(
            r.cmp_abs(rhs).is_lt(),
            "|r| < |d| failed for \nr: {r:?}, d: {rhs:?}"
        );
        debug_assert!(
            r.is_zero() || r.sign == self.sign,
            "r has the wrong sign for \nn: {self:?}, r: {r:?}"
        );
        #[cfg(debug_assertions)]
        {
            let mut check = q.try_mul(rhs)?;
            check.try_add_assign(&r)?;
            debug_assert_eq!(
                *self, check,
                "n = dq + r failed for \nn: {self:?}, d: {rhs:?}\nq: {q:?}, r: {r:?}"
            );
        }
        Ok((q, r))
    }
    fn div_rem_unchecked(lhs: &Self, rhs: &Self) -> Result<(Self, Self)> {
        try_all!(
            lhs,
            rhs,
            left math_shortcuts::div::Smaller,
            left math_shortcuts::div::Same,
            right math_shortcuts::div::ByPowerOfTwo,
        );

        let q_sign = lhs.sign * rhs.sign;
        if let [rhs_digit] = *rhs.digits {
            let mut q = lhs.try_clone()?;
            let r = div::by_digit_assign(&mut q.digits, rhs_digit);
            q.set_sign(q_sign);
            let mut r = Self::from_digit(r)?;
            r.set_sign(lhs.sign);
            return Ok((q, r));
        }
        let (q, r) = div::normalized_schoolbook(&lhs.digits, &rhs.digits)?;
        Ok((Self::from_parts(q_sign, q), Self::from_parts(lhs.sign, r)))
    }
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(q, _)| q)
    }
    /// the truncating remainder, with the sign of `self`
    pub fn try_rem(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(_, r)| r)
    }
    pub fn try_div_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.try_div(rhs)?;
        Ok(())
    }
    pub fn try_rem_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.try_rem(rhs)?;
        Ok(())
    }

    /// the euclidean remainder, always in `0..|m|`
    pub fn modulo(&self, m: &Self) -> Result<Self> {
        let (_, mut r) = self.div_rem(m)?;
        if r.is_negative() {
            r.add_signed(&m.digits, Sign::Positive)?;
        }
        Ok(r)
    }
    /// truncating division by a native value
    pub fn div_rem_value(&self, value: i64) -> Result<(Self, i64)> {
        if value == 0 {
            return Err(Error::DivideByZero);
        }
        let (sign, magnitude) = value.split_sign();
        if magnitude <= D::MAX.to_u128() {
            // single digit divisor, |r| < |value| always fits
            let mut q = self.try_clone()?;
            let r = div::by_digit_assign(&mut q.digits, D::truncate_u128(magnitude)).to_u128()
                as i64;
            q.set_sign(self.sign * sign);
            return Ok((q, if self.is_negative() { -r } else { r }));
        }
        let (q, r) = self.div_rem(&Self::try_from_primitive(value)?)?;
        Ok((q, r.to_i64()?))
    }
    pub fn is_divisible_by(&self, value: i64) -> Result<bool> {
        self.div_rem_value(value).map(|(_, r)| r == 0)
    }
}

macro_rules! implBigMath {
    ($($assign_trait:tt)::*, $assign_func:ident, $($trait:tt)::*, $func:ident, $try_assign:ident) => {
        impl<D: Digit> $($trait)::*<BigInt<D>> for BigInt<D> {
            type Output = BigInt<D>;
            fn $func(mut self, rhs: BigInt<D>) -> Self::Output {
                or_panic(self.$try_assign(&rhs));
                self
            }
        }
        impl<D: Digit> $($trait)::*<&BigInt<D>> for BigInt<D> {
            type Output = BigInt<D>;
            fn $func(mut self, rhs: &BigInt<D>) -> Self::Output {
                or_panic(self.$try_assign(rhs));
                self
            }
        }
        impl<D: Digit> $($trait)::*<BigInt<D>> for &BigInt<D> {
            type Output = BigInt<D>;
            fn $func(self, rhs: BigInt<D>) -> Self::Output {
                let mut out = or_panic(self.try_clone());
                or_panic(out.$try_assign(&rhs));
                out
            }
        }
        impl<D: Digit> $($trait)::*<&BigInt<D>> for &BigInt<D> {
            type Output = BigInt<D>;
            fn $func(self, rhs: &BigInt<D>) -> Self::Output {
                let mut out = or_panic(self.try_clone());
                or_panic(out.$try_assign(rhs));
                out
            }
        }
        impl<D: Digit> $($assign_trait)::*<BigInt<D>> for BigInt<D> {
            fn $assign_func(&mut self, rhs: BigInt<D>) {
                or_panic(self.$try_assign(&rhs));
            }
        }
        impl<D: Digit> $($assign_trait)::*<&BigInt<D>> for BigInt<D> {
            fn $assign_func(&mut self, rhs: &BigInt<D>) {
                or_panic(self.$try_assign(rhs));
            }
        }
    };
    (value $($assign_trait:tt)::*, $assign_func:ident, $($trait:tt)::*, $func:ident, $try_assign:ident) => {
        impl<D: Digit> $($trait)::*<i64> for BigInt<D> {
            type Output = BigInt<D>;
            fn $func(mut self, rhs: i64) -> Self::Output {
                or_panic(self.$try_assign(rhs));
                self
            }
        }
        impl<D: Digit> $($trait)::*<i64> for &BigInt<D> {
            type Output = BigInt<D>;
            fn $func(self, rhs: i64) -> Self::Output {
                let mut out = or_panic(self.try_clone());
                or_panic(out.$try_assign(rhs));
                out
            }
        }
        impl<D: Digit> $($assign_trait)::*<i64> for BigInt<D> {
            fn $assign_func(&mut self, rhs: i64) {
                or_panic(self.$try_assign(rhs));
            }
        }
    };
}

implBigMath!(AddAssign, add_assign, Add, add, try_add_assign);
implBigMath!(SubAssign, sub_assign, Sub, sub, try_sub_assign);
implBigMath!(MulAssign, mul_assign, Mul, mul, try_mul_assign);
implBigMath!(DivAssign, div_assign, Div, div, try_div_assign);
implBigMath!(RemAssign, rem_assign, Rem, rem, try_rem_assign);
implBigMath!(value AddAssign, add_assign, Add, add, add_value);
implBigMath!(value SubAssign, sub_assign, Sub, sub, sub_value);
implBigMath!(value MulAssign, mul_assign, Mul, mul, mul_value);

// no `std::ops::Not`, cause implied zeros to the left would need to be flipped
impl<D: Digit> Neg for BigInt<D> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}
impl<D: Digit> Neg for &BigInt<D> {
    type Output = BigInt<D>;

    fn neg(self) -> Self::Output {
        or_panic(self.try_neg())
    }
}

impl<D: Digit> ShlAssign<usize> for BigInt<D> {
    fn shl_assign(&mut self, rhs: usize) {
        or_panic(self.shl_assign_checked(rhs));
    }
}
impl<D: Digit> ShrAssign<usize> for BigInt<D> {
    fn shr_assign(&mut self, rhs: usize) {
        self.shr_assign_checked(rhs);
    }
}
impl<D: Digit> Shl<usize> for BigInt<D> {
    type Output = Self;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self <<= rhs;
        self
    }
}
impl<D: Digit> Shl<usize> for &BigInt<D> {
    type Output = BigInt<D>;

    fn shl(self, rhs: usize) -> Self::Output {
        or_panic(self.mul_pow2(rhs))
    }
}
impl<D: Digit> Shr<usize> for BigInt<D> {
    type Output = Self;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self >>= rhs;
        self
    }
}
impl<D: Digit> Shr<usize> for &BigInt<D> {
    type Output = BigInt<D>;

    fn shr(self, rhs: usize) -> Self::Output {
        or_panic(self.div_pow2(rhs)).0
    }
}
