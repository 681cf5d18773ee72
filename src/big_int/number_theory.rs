// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use super::{digits::Digit, math_algos::gcd::Gcd, reduction::ReductionConstant, BigInt};
use crate::error::{Error, Result};

use std::cmp::Ordering;

/// an exponent for [`BigInt::pow`] and friends, either native or big
#[derive(Debug, Clone, Copy, derive_more::From)]
enum Exponent<'e, D: Digit> {
    Small(i64),
    Big(&'e BigInt<D>),
}
impl<'e, D: Digit> Exponent<'e, D> {
    fn is_negative(self) -> bool {
        match self {
            Self::Small(e) => e < 0,
            Self::Big(e) => e.is_negative(),
        }
    }
    /// bits of `|e|`
    fn bit_len(self) -> usize {
        match self {
            Self::Small(e) => (u64::BITS - e.unsigned_abs().leading_zeros()) as usize,
            Self::Big(e) => e.count_bits(),
        }
    }
    /// bit `i` of `|e|`
    fn bit(self, i: usize) -> bool {
        match self {
            Self::Small(e) => e.unsigned_abs() >> i & 1 == 1,
            Self::Big(e) => e.bit(i),
        }
    }
    /// the bits of `|e|`, most significant first
    fn bits_msb_first(self) -> impl Iterator<Item = bool> + 'e {
        (0..self.bit_len()).rev().map(move |i| self.bit(i))
    }
}

// powers
impl<D: Digit> BigInt<D> {
    /// bit `i` of the magnitude
    pub fn bit(&self, i: usize) -> bool {
        self.digits
            .get(i / D::BASIS_POW)
            .is_some_and(|digit| !(*digit >> (i % D::BASIS_POW) as u32).is_even())
    }

    fn pow_exponent(&self, exponent: Exponent<'_, D>) -> Result<Self> {
        if exponent.is_negative() {
            return Err(Error::Range);
        }
        let mut result = Self::from_digit(D::ONE)?;
        for bit in exponent.bits_msb_first() {
            result = result.try_square()?;
            if bit {
                result.try_mul_assign(self)?;
            }
        }
        Ok(result)
    }
    /// `self`^`exponent`, fails with [`Error::Range`] for a negative exponent
    pub fn pow(&self, exponent: &Self) -> Result<Self> {
        self.pow_exponent(exponent.into())
    }
    pub fn pow_small(&self, exponent: i64) -> Result<Self> {
        self.pow_exponent(exponent.into())
    }
    pub fn pow_value(base: i64, exponent: i64) -> Result<Self> {
        Self::try_from_primitive(base)?.pow_small(exponent)
    }

    fn pow_mod_exponent(
        &self,
        exponent: Exponent<'_, D>,
        reduction: &ReductionConstant<D>,
    ) -> Result<Self> {
        let base = if exponent.is_negative() {
            self.mod_inverse(reduction.modulus())?
        } else {
            self.modulo(reduction.modulus())?
        };
        // reduce, so a modulus of one gives zero
        let mut result = reduction.reduce(&Self::from_digit(D::ONE)?)?;
        for bit in exponent.bits_msb_first() {
            result = reduction.reduce(&result.try_square()?)?;
            if bit {
                result = reduction.mul_mod(&result, &base)?;
            }
        }
        Ok(result)
    }
    /// `self`^`exponent` mod `modulus`, always in `0..|modulus|`
    ///
    /// a negative exponent uses the modular inverse of `self` and fails with [`Error::Undefined`]
    /// if there is none, as does a zero modulus
    pub fn pow_mod(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        self.pow_mod_exponent(exponent.into(), &ReductionConstant::new(modulus)?)
    }
    /// like [`Self::pow_mod`], reusing a precomputed [`ReductionConstant`]
    pub fn pow_mod_with(&self, exponent: &Self, reduction: &ReductionConstant<D>) -> Result<Self> {
        self.pow_mod_exponent(exponent.into(), reduction)
    }
    pub fn pow_mod_small_exponent(&self, exponent: i64, modulus: &Self) -> Result<Self> {
        self.pow_mod_exponent(exponent.into(), &ReductionConstant::new(modulus)?)
    }
    pub fn pow_mod_small_base(base: i64, exponent: &Self, modulus: &Self) -> Result<Self> {
        Self::try_from_primitive(base)?.pow_mod(exponent, modulus)
    }
}

// gcd and friends
impl<D: Digit> BigInt<D> {
    /// the greatest common divisor, never negative
    pub fn gcd(&self, other: &Self) -> Result<Self> {
        Gcd::new(self, other).map(Gcd::gcd)
    }
    /// (g, x, y) with `self`*x + `other`*y = g = gcd(`self`, `other`)
    pub fn extended_gcd(&self, other: &Self) -> Result<(Self, Self, Self)> {
        let (gcd, bezout) = Gcd::new(self, other)?.bezout_coefficients();
        Ok((gcd, bezout.x, bezout.y))
    }
    /// the least common multiple, never negative and zero if either side is zero
    pub fn lcm(&self, other: &Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::ZERO);
        }
        let gcd = self.gcd(other)?;
        let mut lcm = self.try_div(&gcd)?.try_mul(other)?;
        lcm.abs_assign();
        Ok(lcm)
    }
    /// x with `self`*x = 1 mod `modulus`, in `0..modulus`
    ///
    /// fails with [`Error::Range`] for a non positive modulus and with [`Error::Undefined`] if
    /// `self` and `modulus` aren't coprime
    pub fn mod_inverse(&self, modulus: &Self) -> Result<Self> {
        if modulus.cmp_zero() != Ordering::Greater {
            return Err(Error::Range);
        }
        let (gcd, x, _) = self.extended_gcd(modulus)?;
        if !gcd.is_one() {
            return Err(Error::Undefined);
        }
        x.modulo(modulus)
    }

    /// the `n`th root, truncated toward zero
    ///
    /// fails with [`Error::Range`] for `n == 0` and for even roots of negative values
    pub fn integer_root(&self, n: u32) -> Result<Self> {
        if n == 0 || (self.is_negative() && n % 2 == 0) {
            return Err(Error::Range);
        }
        if n == 1 || self.is_zero() || self.is_abs_one() {
            return self.try_clone();
        }
        let value = self.try_abs()?;
        let n_big = Self::from(n);

        // newton iteration from above, 2^ceil(bits/n) >= root
        let mut root =
            Self::from_digit(D::ONE)?.mul_pow2(value.count_bits().div_ceil(n as usize))?;
        loop {
            // ((n-1)*x + value / x^(n-1)) / n
            let mut next = root.try_mul_value(i64::from(n) - 1)?;
            next.try_add_assign(&value.try_div(&root.pow_small(i64::from(n) - 1)?)?)?;
            next.try_div_assign(&n_big)?;
            if next.cmp(&root).is_ge() {
                break;
            }
            root = next;
        }
        root.set_sign(self.sign());
        Ok(root)
    }
}
