// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use std::{
    fmt::{Debug, LowerHex, UpperHex},
    hash::Hash,
    ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub},
};

/// A 'Digit' for a Bigint
/// is assumed to be exactly stored as a number of bytes (its basis is 2^8n for some Interger n)
pub trait Digit:
    Copy
    + Default
    + Debug
    + Hash
    + Eq
    + Ord
    + LowerHex
    + UpperHex
    + From<u8>
    + From<bool>
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Send
    + Sync
    + 'static
{
    const BYTES: usize;
    const BASIS_POW: usize = (Self::BYTES * 8);
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    type Wide: Wide<Self>;

    fn leading_zeros(self) -> u32;
    fn trailing_zeros(self) -> u32;
    fn count_ones(self) -> u32;
    fn is_power_of_two(self) -> bool;
    fn is_even(self) -> bool;

    fn to_u128(self) -> u128;
    /// keeps only the lowest `BASIS_POW` bits of `value`
    fn truncate_u128(value: u128) -> Self;
    /// byte `i` in little endian order
    fn le_byte(self, i: usize) -> u8;
    /// builds a digit from at most `BYTES` little endian bytes
    fn from_le_chunk(chunk: &[u8]) -> Self;

    /// number of significant bits, 0 for zero
    fn bit_len(self) -> usize {
        Self::BASIS_POW - self.leading_zeros() as usize
    }
    fn eq_u8(self, other: u8) -> bool {
        self.to_u128() == other as u128
    }

    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    fn carring_add(self, rhs: Self, in_carry: bool) -> (Self, bool) {
        let (res, carry_1) = self.overflowing_add(rhs);
        let (res, carry_2) = res.overflowing_add(Self::from(in_carry));
        (res, carry_1 | carry_2)
    }
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);
    fn carring_sub(self, rhs: Self, in_carry: bool) -> (Self, bool) {
        let (res, carry_1) = self.overflowing_sub(rhs);
        let (res, carry_2) = res.overflowing_sub(Self::from(in_carry));
        (res, carry_1 | carry_2)
    }
    /// ((0, `self`) * (0, `rhs`)) + (0, `carry_in`) = (`carry_out`, `result`)
    fn widening_mul(self, rhs: Self, carry: Self) -> Self::Wide {
        Self::Wide::widen(self) * Self::Wide::widen(rhs) + Self::Wide::widen(carry)
    }
    /// ((`upper`, `self`) << `rhs`).upper, `rhs` < `BASIS_POW`
    fn funnel_shl(self, rhs: u32, upper: Self) -> Self {
        (Self::Wide::new(self, upper) << rhs).split_le().1
    }
    /// ((`upper`, `self`) >> `rhs`).lower, `rhs` < `BASIS_POW`
    fn funnel_shr(self, rhs: u32, upper: Self) -> Self {
        (Self::Wide::new(self, upper) >> rhs).split_le().0
    }
}

/// a native integer twice as wide as `Half`
pub trait Wide<Half>:
    Copy
    + Ord
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    fn new(lower: Half, upper: Half) -> Self;
    fn widen(value: Half) -> Self;
    fn split_le(self) -> (Half, Half);
}

macro_rules! implDigit {
    ($digit:ident, $wide: ident) => {
        impl Digit for $digit {
            const BYTES: usize = Self::BITS as usize / 8;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = Self::MAX;
            type Wide = $wide;

            fn leading_zeros(self) -> u32 {
                self.leading_zeros()
            }
            fn trailing_zeros(self) -> u32 {
                self.trailing_zeros()
            }
            fn count_ones(self) -> u32 {
                self.count_ones()
            }
            fn is_power_of_two(self) -> bool {
                self.is_power_of_two()
            }
            fn is_even(self) -> bool {
                self % 2 == 0
            }

            fn to_u128(self) -> u128 {
                self as u128
            }
            fn truncate_u128(value: u128) -> Self {
                value as Self
            }
            fn le_byte(self, i: usize) -> u8 {
                self.to_le_bytes()[i]
            }
            fn from_le_chunk(chunk: &[u8]) -> Self {
                debug_assert!(chunk.len() <= Self::BYTES, "chunk of {} bytes", chunk.len());
                let mut buf = [0; Self::BYTES];
                for (place, byte) in buf.iter_mut().zip(chunk) {
                    *place = *byte;
                }
                Self::from_le_bytes(buf)
            }

            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                self.overflowing_add(rhs)
            }
            fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                self.overflowing_sub(rhs)
            }
        }

        impl Wide<$digit> for $wide {
            fn widen(value: $digit) -> Self {
                value as Self
            }
            fn new(lower: $digit, upper: $digit) -> Self {
                (Self::widen(upper) << $digit::BITS) | Self::widen(lower)
            }
            fn split_le(self) -> ($digit, $digit) {
                (self as $digit, (self >> $digit::BITS) as $digit)
            }
        }
    };
}
implDigit!(u8, u16);
implDigit!(u16, u32);
implDigit!(u32, u64);
implDigit!(u64, u128);
