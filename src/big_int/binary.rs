// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use super::{digit_holder::DigitHolder, digits::Digit, signed::Sign, BigInt};
use crate::error::{Error, Result};

/// flips `le_bytes` to the two's complement of its value, in place
fn negate_le(le_bytes: &mut [u8]) {
    let mut carry = true;
    for byte in le_bytes {
        (*byte, carry) = (!*byte).overflowing_add(u8::from(carry));
    }
}

impl<D: Digit> BigInt<D> {
    /// byte `i` of the magnitude in little endian order, zero past the end
    fn le_magnitude_byte(&self, i: usize) -> u8 {
        self.digits
            .get(i / D::BYTES)
            .map_or(0, |digit| digit.le_byte(i % D::BYTES))
    }
    fn from_le_magnitude(sign: Sign, le_bytes: &[u8]) -> Result<Self> {
        let mut digits = DigitHolder::with_capacity(le_bytes.len().div_ceil(D::BYTES))?;
        for chunk in le_bytes.chunks(D::BYTES) {
            digits.push(D::from_le_chunk(chunk))?;
        }
        digits.normalize();
        Ok(Self::from_parts(sign, digits))
    }

    /// bytes of the signed encoding, there is always room for the sign bit
    pub fn binary_len(&self) -> usize {
        self.count_bits() / 8 + 1
    }
    /// big endian two's complement in exactly [`Self::binary_len`] bytes
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.try_reserve_exact(self.binary_len())?;
        out.extend((0..self.binary_len()).map(|i| self.le_magnitude_byte(i)));
        if self.is_negative() {
            negate_le(&mut out);
        }
        out.reverse();
        Ok(out)
    }
    /// writes [`Self::to_binary`] to the front of `buf` and returns the number of bytes written
    pub fn write_binary(&self, buf: &mut [u8]) -> Result<usize> {
        let len = self.binary_len();
        let out = buf.get_mut(..len).ok_or(Error::Truncation)?;
        out.copy_from_slice(&self.to_binary()?);
        Ok(len)
    }
    /// reads big endian two's complement, the top bit of the first byte is the sign
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        let first = bytes.first().ok_or(Error::BadInput)?;
        let mut le_bytes = Vec::new();
        le_bytes.try_reserve_exact(bytes.len())?;
        le_bytes.extend(bytes.iter().rev());
        if first & 0x80 == 0 {
            return Self::from_le_magnitude(Sign::Positive, &le_bytes);
        }
        negate_le(&mut le_bytes);
        Self::from_le_magnitude(Sign::Negative, &le_bytes)
    }

    /// bytes of the magnitude, at least one
    pub fn unsigned_len(&self) -> usize {
        self.count_bits().div_ceil(8).max(1)
    }
    /// the big endian magnitude, the sign is dropped
    pub fn to_unsigned(&self) -> Result<Vec<u8>> {
        let len = self.unsigned_len();
        let mut out = Vec::new();
        out.try_reserve_exact(len)?;
        out.extend((0..len).rev().map(|i| self.le_magnitude_byte(i)));
        Ok(out)
    }
    pub fn write_unsigned(&self, buf: &mut [u8]) -> Result<usize> {
        let len = self.unsigned_len();
        let out = buf.get_mut(..len).ok_or(Error::Truncation)?;
        for (i, place) in out.iter_mut().rev().enumerate() {
            *place = self.le_magnitude_byte(i);
        }
        Ok(len)
    }
    /// reads a big endian magnitude, an empty slice is zero
    pub fn from_unsigned(bytes: &[u8]) -> Result<Self> {
        let mut le_bytes = Vec::new();
        le_bytes.try_reserve_exact(bytes.len())?;
        le_bytes.extend(bytes.iter().rev());
        Self::from_le_magnitude(Sign::Positive, &le_bytes)
    }

    /// the signed binary encoding in base64
    #[cfg(feature = "base64")]
    pub fn as_base64(&self, engine: &impl base64::Engine) -> Result<String> {
        Ok(engine.encode(self.to_binary()?))
    }
    #[cfg(feature = "base64")]
    pub fn from_base64(data: impl AsRef<[u8]>, engine: &impl base64::Engine) -> Result<Self> {
        let bytes = engine.decode(data).map_err(|_| Error::BadInput)?;
        Self::from_binary(&bytes)
    }
}
