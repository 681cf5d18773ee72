// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
#![allow(clippy::wildcard_imports)]
use super::{
    digit_holder::DigitHolder,
    digits::{Digit, Wide},
    BigInt,
};
use crate::error::Result;
use itertools::Itertools;
use std::cmp::Ordering;

/// compares two normalized magnitudes
pub fn cmp_abs<D: Digit>(lhs: &[D], rhs: &[D]) -> Ordering {
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

/// number of significant bits of a normalized magnitude
pub fn bit_len<D: Digit>(digits: &[D]) -> usize {
    digits.last().map_or(0, |last| {
        (digits.len() - 1) * D::BASIS_POW + last.bit_len()
    })
}

/// `Some(k)` if the magnitude is exactly 2^k
pub fn power_of_two_exponent<D: Digit>(digits: &[D]) -> Option<usize> {
    let (last, rest) = digits.split_last()?;
    (last.is_power_of_two() && rest.iter().all(|it| it.eq_u8(0)))
        .then(|| bit_len(digits) - 1)
}

pub mod add {
    use super::*;

    /// calculates `lhs` += `rhs` on the magnitudes
    ///
    /// allocates before touching `lhs`, so on error `lhs` is unchanged
    pub fn assign_same_sign<D: Digit>(lhs: &mut DigitHolder<D>, rhs: &[D]) -> Result<()> {
        lhs.ensure_capacity(lhs.len().max(rhs.len()) + 1)?;
        if lhs.len() < rhs.len() {
            lhs.set_size(rhs.len());
        }

        let mut carry = false;
        for elem in lhs.iter_mut().zip_longest(rhs.iter()) {
            use itertools::EitherOrBoth as E;
            let (lhs_digit, rhs_digit) = match elem {
                E::Right(_rhs) => unreachable!("lhs was extended"),
                E::Left(_digit) if !carry => {
                    break;
                }
                E::Left(digit) => (digit, D::ZERO),
                E::Both(digit, rhs) => (digit, *rhs),
            };
            (*lhs_digit, carry) = lhs_digit.carring_add(rhs_digit, carry);
        }
        lhs.push_carry(D::from(carry))
    }
}

pub mod sub {
    use super::*;

    /// calculates `lhs` -= `rhs` on the magnitudes
    /// lhs needs to be the bigger number
    pub fn assign_smaller<D: Digit>(lhs: &mut DigitHolder<D>, rhs: &[D]) {
        assert!(cmp_abs(lhs, rhs).is_ge(), "lhs is smaller than rhs");

        let mut carry = false;
        for elem in lhs.iter_mut().zip_longest(rhs.iter()) {
            use itertools::EitherOrBoth as E;
            let (lhs_digit, rhs_digit) = match elem {
                E::Right(_rhs) => unreachable!("lhs is always bigger"),
                E::Left(_digit) if !carry => {
                    break;
                }
                E::Left(digit) => (digit, D::ZERO),
                E::Both(digit, rhs) => (digit, *rhs),
            };

            (*lhs_digit, carry) = lhs_digit.carring_sub(rhs_digit, carry);
        }
        debug_assert!(!carry, "subtraction underflowed");

        lhs.normalize();
    }

    /// calculates `lhs` = `rhs` - `lhs` on the magnitudes
    /// rhs needs to be the bigger number
    pub fn assign_reversed<D: Digit>(lhs: &mut DigitHolder<D>, rhs: &[D]) -> Result<()> {
        assert!(cmp_abs(lhs, rhs).is_le(), "rhs is smaller than lhs");
        lhs.grow_to(rhs.len())?;

        let mut carry = false;
        for (lhs_digit, rhs_digit) in lhs.iter_mut().zip(rhs) {
            (*lhs_digit, carry) = rhs_digit.carring_sub(*lhs_digit, carry);
        }
        debug_assert!(!carry, "subtraction underflowed");

        lhs.normalize();
        Ok(())
    }
}

pub mod mul {
    use super::*;

    /// `out` = `lhs` * `rhs`
    ///
    /// `out` needs to be zeroed and hold `lhs.len() + rhs.len()` digits
    pub fn naive<D: Digit>(lhs: &[D], rhs: &[D], out: &mut [D]) {
        // try to minimize outer loops
        if lhs.len() < rhs.len() {
            return naive(rhs, lhs, out);
        }
        assert_eq!(out.len(), lhs.len() + rhs.len(), "out has the wrong size");
        for (i, rhs_digit) in rhs.iter().enumerate() {
            if rhs_digit.eq_u8(0) {
                continue;
            }
            let carry = add_mul_digit_at_offset(out, lhs, *rhs_digit, i);
            out[i + lhs.len()] = carry;
        }
    }

    /// `out[i..]` += `lhs` * `rhs` and returns the final carry
    fn add_mul_digit_at_offset<D: Digit>(out: &mut [D], lhs: &[D], rhs: D, i: usize) -> D {
        let mut carry = D::ZERO;
        for (out_digit, lhs_digit) in out.iter_mut().skip(i).zip(lhs) {
            // (B-1)^2 + 2(B-1) still fits
            (*out_digit, carry) = (lhs_digit.widening_mul(rhs, carry)
                + D::Wide::widen(*out_digit))
            .split_le();
        }
        carry
    }

    /// `lhs` = `lhs` * `rhs` + `carry`
    pub fn assign_mul_digit<D: Digit>(
        lhs: &mut DigitHolder<D>,
        rhs: D,
        mut carry: D,
    ) -> Result<()> {
        lhs.ensure_capacity(lhs.len() + 1)?;
        for digit in lhs.iter_mut() {
            (*digit, carry) = digit.widening_mul(rhs, carry).split_le();
        }
        lhs.push_carry(carry)?;
        lhs.normalize();
        Ok(())
    }
}

pub mod shift {
    use super::*;

    /// `lhs` <<= `bits`
    pub fn shl_assign<D: Digit>(lhs: &mut DigitHolder<D>, bits: usize) -> Result<()> {
        if lhs.is_empty() {
            return Ok(());
        }
        let full = bits / D::BASIS_POW;
        let partial = (bits % D::BASIS_POW) as u32;
        lhs.ensure_capacity(lhs.len() + full + 1)?;

        if partial > 0 {
            let last = lhs.len() - 1;
            let carry = lhs[last].funnel_shl(partial, D::ZERO);
            for i in (1..=last).rev() {
                lhs[i] = lhs[i - 1].funnel_shl(partial, lhs[i]);
            }
            lhs[0] = D::ZERO.funnel_shl(partial, lhs[0]);
            lhs.push_carry(carry)?;
        }
        lhs.insert_low_zeros(full)
    }

    /// `lhs` >>= `bits`
    pub fn shr_assign<D: Digit>(lhs: &mut DigitHolder<D>, bits: usize) {
        let full = bits / D::BASIS_POW;
        let partial = (bits % D::BASIS_POW) as u32;
        lhs.remove_low(full);

        if partial > 0 && !lhs.is_empty() {
            let last = lhs.len() - 1;
            for i in 0..last {
                lhs[i] = lhs[i].funnel_shr(partial, lhs[i + 1]);
            }
            lhs[last] = lhs[last].funnel_shr(partial, D::ZERO);
        }
        lhs.normalize();
    }

    /// keeps only the lowest `bits` bits
    pub fn keep_low_bits<D: Digit>(lhs: &mut DigitHolder<D>, bits: usize) {
        let full = bits / D::BASIS_POW;
        let partial = bits % D::BASIS_POW;
        if lhs.len() > full {
            if partial == 0 {
                lhs.truncate(full);
            } else {
                lhs.truncate(full + 1);
                lhs[full] = lhs[full] & (D::MAX >> (D::BASIS_POW - partial) as u32);
            }
        }
        lhs.normalize();
    }
}

pub mod div {
    use super::*;

    /// `lhs` /= `rhs` and returns the remainder
    pub fn by_digit_assign<D: Digit>(lhs: &mut DigitHolder<D>, rhs: D) -> D {
        assert!(!rhs.eq_u8(0), "can't divide by zero");
        let rhs = D::Wide::widen(rhs);
        let mut remainder = D::ZERO;
        for digit in lhs.iter_mut().rev() {
            let current = D::Wide::new(*digit, remainder);
            *digit = (current / rhs).split_le().0;
            remainder = (current % rhs).split_le().0;
        }
        lhs.normalize();
        remainder
    }

    /// computes (lhs/rhs, lhs%rhs) on the magnitudes with Knuth's algorithm D
    ///
    /// expects `rhs` to have at least two digits and `lhs` to be at least as long
    pub fn normalized_schoolbook<D: Digit>(
        lhs: &[D],
        rhs: &[D],
    ) -> Result<(DigitHolder<D>, DigitHolder<D>)> {
        let n = rhs.len();
        assert!(n >= 2, "use by_digit_assign for single digit divisors");
        assert!(lhs.len() >= n, "lhs is shorter than rhs");
        let m = lhs.len() - n;

        // base^n/2 <= v < base^n
        let shift = rhs[n - 1].leading_zeros() as usize;
        let mut v = DigitHolder::from_slice(rhs)?;
        shift::shl_assign(&mut v, shift)?;
        debug_assert_eq!(v.len(), n, "normalizing changed the length");

        let mut u = DigitHolder::with_capacity(lhs.len() + 1)?;
        u.try_clone_from(lhs)?;
        shift::shl_assign(&mut u, shift)?;
        u.grow_to(lhs.len() + 1)?;

        let mut q = DigitHolder::zeroed(m + 1)?;

        let one = D::Wide::widen(D::ONE);
        let base = D::Wide::new(D::ZERO, D::ONE);
        let v_top = D::Wide::widen(v[n - 1]);
        let v_next = D::Wide::widen(v[n - 2]);

        for j in (0..=m).rev() {
            let numerator = D::Wide::new(u[j + n - 1], u[j + n]);
            let mut q_hat = numerator / v_top;
            if q_hat >= base {
                q_hat = base - one;
            }
            let mut r_hat = numerator - q_hat * v_top;
            while r_hat < base && q_hat * v_next > D::Wide::new(u[j + n - 2], r_hat.split_le().0)
            {
                q_hat = q_hat - one;
                r_hat = r_hat + v_top;
            }
            let mut q_digit = q_hat.split_le().0;

            // u[j..=j+n] -= q_digit * v
            let mut mul_carry = D::ZERO;
            let mut borrow = false;
            for i in 0..n {
                let (low, high) = v[i].widening_mul(q_digit, mul_carry).split_le();
                mul_carry = high;
                (u[i + j], borrow) = u[i + j].carring_sub(low, borrow);
            }
            let (top, underflow) = u[j + n].carring_sub(mul_carry, borrow);
            u[j + n] = top;

            if underflow {
                // q_hat was one too big, add v back
                q_digit = q_digit.overflowing_sub(D::ONE).0;
                let mut carry = false;
                for i in 0..n {
                    (u[i + j], carry) = u[i + j].carring_add(v[i], carry);
                }
                u[j + n] = u[j + n].carring_add(D::ZERO, carry).0;
            }
            q[j] = q_digit;
        }

        q.normalize();
        u.truncate(n);
        shift::shr_assign(&mut u, shift);
        Ok((q, u))
    }
}

pub mod gcd {
    use super::*;

    struct GCDHelper<D: Digit> {
        r: BigInt<D>,
        s: BigInt<D>,
    }
    /// runs the extended euclidean algorithm on |a| and |b|
    ///
    /// returns the last two rows, `old.r` is the gcd and `old.s` the coefficient of |a|
    fn euclid<D: Digit>(a: &BigInt<D>, b: &BigInt<D>) -> Result<(GCDHelper<D>, GCDHelper<D>)> {
        let mut old = GCDHelper {
            r: a.try_abs()?,
            s: BigInt::from(1u8),
        };
        let mut new = GCDHelper {
            r: b.try_abs()?,
            s: BigInt::ZERO,
        };

        while !new.r.is_zero() {
            let (quotient, remainder) = old.r.div_rem(&new.r)?;

            let next = GCDHelper {
                r: remainder,
                s: old.s.try_sub(&quotient.try_mul(&new.s)?)?,
            };

            old = std::mem::replace(&mut new, next);
        }
        Ok((old, new))
    }

    /// the gcd of `a` and `b` together with the coefficients of Bezout's identity
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Gcd<D: Digit> {
        #[allow(clippy::struct_field_names)]
        gcd: BigInt<D>,
        bezout: BezoutCoefficients<D>,
    }
    impl<D: Digit> Gcd<D> {
        pub fn new(a: &BigInt<D>, b: &BigInt<D>) -> Result<Self> {
            let (old, _) = euclid(a, b)?;
            let gcd = old.r;
            // a*x + b*y = gcd  =>  y = (gcd - a*x) / b
            let mut x = if a.is_zero() { BigInt::ZERO } else { old.s };
            x.set_sign(x.sign() * a.sign());
            let y = if b.is_zero() {
                BigInt::ZERO
            } else {
                gcd.try_sub(&a.try_mul(&x)?)?.try_div(b)?
            };
            Ok(Self {
                gcd,
                bezout: BezoutCoefficients { x, y },
            })
        }

        pub fn gcd(self) -> BigInt<D> {
            self.gcd
        }
        pub fn bezout_coefficients(self) -> (BigInt<D>, BezoutCoefficients<D>) {
            (self.gcd, self.bezout)
        }
    }

    /// ax + by = gcd(a,b)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BezoutCoefficients<D: Digit> {
        pub x: BigInt<D>,
        pub y: BigInt<D>,
    }
}
