// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use super::{digits::Digit, BigInt, DefaultDigit};
use crate::error::{Error, Result};

/// A precomputed Barrett constant for repeated reduction by the same modulus.
///
/// With `k` digits in `|m|` and `B` the digit base, `mu = floor(B^2k / |m|)`.
/// Values below `B^2k` are then reduced with two multiplications and at most two subtractions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionConstant<D: Digit = DefaultDigit> {
    modulus: BigInt<D>,
    mu: BigInt<D>,
    k: usize,
}

impl<D: Digit> ReductionConstant<D> {
    /// fails with [`Error::Undefined`] for a zero modulus, a negative one is used as `|m|`
    pub fn new(modulus: &BigInt<D>) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::Undefined);
        }
        let modulus = modulus.try_abs()?;
        let k = modulus.used();
        let mu = BigInt::from_digit(D::ONE)?
            .mul_pow2(2 * k * D::BASIS_POW)?
            .try_div(&modulus)?;
        Ok(Self { modulus, mu, k })
    }

    /// the (positive) modulus
    pub const fn modulus(&self) -> &BigInt<D> {
        &self.modulus
    }

    /// `x` mod `m`, always in `0..m`
    pub fn reduce(&self, x: &BigInt<D>) -> Result<BigInt<D>> {
        if x.is_negative() || x.used() > 2 * self.k {
            return x.modulo(&self.modulus);
        }
        if x.cmp_abs(&self.modulus).is_lt() {
            return x.try_clone();
        }
        let (q1, _) = x.div_pow2((self.k - 1) * D::BASIS_POW)?;
        let (q3, _) = q1
            .try_mul(&self.mu)?
            .div_pow2((self.k + 1) * D::BASIS_POW)?;
        let mut r = x.try_sub(&q3.try_mul(&self.modulus)?)?;
        while r.cmp_abs(&self.modulus).is_ge() {
            r.try_sub_assign(&self.modulus)?;
        }
        debug_assert!(!r.is_negative(), "q3 overestimated for {x:?}");
        Ok(r)
    }
    /// `lhs` * `rhs` mod `m`
    pub fn mul_mod(&self, lhs: &BigInt<D>, rhs: &BigInt<D>) -> Result<BigInt<D>> {
        self.reduce(&lhs.try_mul(rhs)?)
    }
}
