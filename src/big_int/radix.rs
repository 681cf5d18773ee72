// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use super::{
    digit_holder::DigitHolder,
    digits::Digit,
    math_algos::{div, mul},
    signed::Sign,
    BigInt,
};
use crate::error::{Error, Result};

use std::str::FromStr;

const CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// the base of a textual representation, in `2..=36`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u8);

impl Radix {
    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEX: Self = Self(16);
    pub const MIN: Self = Self(2);
    pub const MAX: Self = Self(36);

    pub const fn new(radix: u8) -> Option<Self> {
        if Self::MIN.0 <= radix && radix <= Self::MAX.0 {
            Some(Self(radix))
        } else {
            None
        }
    }
    pub const fn get(self) -> u8 {
        self.0
    }
    /// bits per character, if the radix is a power of two
    const fn bits_per_char(self) -> Option<u32> {
        if self.0.is_power_of_two() {
            Some(self.0.trailing_zeros())
        } else {
            None
        }
    }
    /// the most characters whose value always fits into one `D`, together with radix^that
    fn chars_per_digit<D: Digit>(self) -> (usize, u128) {
        let max = D::MAX.to_u128();
        let radix = self.0 as u128;
        let mut count = 1;
        let mut power = radix;
        while let Some(next) = power.checked_mul(radix).filter(|it| *it <= max) {
            power = next;
            count += 1;
        }
        (count, power)
    }
    fn char_value(self, c: u8) -> Option<u8> {
        (c as char)
            .to_digit(self.0 as u32)
            .map(|it| it as u8)
    }
}
impl TryFrom<u32> for Radix {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(Error::Range)
    }
}
impl TryFrom<u8> for Radix {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value).ok_or(Error::Range)
    }
}

impl<D: Digit> BigInt<D> {
    /// the characters of the magnitude, most significant first, "0" for zero
    fn magnitude_chars(&self, radix: Radix) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        if self.is_zero() {
            out.try_reserve_exact(1)?;
            out.push(b'0');
            return Ok(out);
        }

        if let Some(bits) = radix.bits_per_char() {
            let bits = bits as usize;
            let len = self.count_bits().div_ceil(bits);
            out.try_reserve_exact(len)?;
            let mask = (1u128 << bits) - 1;
            for i in (0..len).rev() {
                let offset = i * bits;
                let index = offset / D::BASIS_POW;
                let upper = self.digits.get(index + 1).copied().unwrap_or(D::ZERO);
                let chunk = self.digits[index]
                    .funnel_shr((offset % D::BASIS_POW) as u32, upper)
                    .to_u128()
                    & mask;
                out.push(CHARS[chunk as usize]);
            }
            return Ok(out);
        }

        // peel off chunks of `per_digit` characters, least significant first
        let (per_digit, chunk_radix) = radix.chars_per_digit::<D>();
        let chunk_radix = D::truncate_u128(chunk_radix);
        let mut rest = self.digits.try_clone()?;
        out.try_reserve(self.count_bits() / radix.0.ilog2() as usize + per_digit)?;
        while !rest.is_empty() {
            let mut chunk = div::by_digit_assign(&mut rest, chunk_radix).to_u128();
            for _ in 0..per_digit {
                out.push(CHARS[(chunk % radix.0 as u128) as usize]);
                chunk /= radix.0 as u128;
            }
        }
        let used = out
            .iter()
            .rposition(|it| *it != b'0')
            .map_or(1, |it| it + 1);
        out.truncate(used);
        out.reverse();
        Ok(out)
    }

    /// the text in `radix`, lowercase with a leading '-' for negative values
    pub fn to_text(&self, radix: Radix) -> Result<String> {
        let chars = self.magnitude_chars(radix)?;
        let mut out = String::new();
        out.try_reserve_exact(chars.len() + 1)?;
        if self.is_negative() {
            out.push('-');
        }
        out.extend(chars.iter().map(|it| *it as char));
        Ok(out)
    }
    /// the buffer size [`Self::write_text`] needs, including sign and NUL terminator
    pub fn string_length(&self, radix: Radix) -> Result<usize> {
        let chars = match radix.bits_per_char() {
            Some(bits) => self.count_bits().div_ceil(bits as usize).max(1),
            None => self.magnitude_chars(radix)?.len(),
        };
        Ok(chars + usize::from(self.is_negative()) + 1)
    }
    /// writes the NUL terminated text into `buf` and returns its length without the NUL
    ///
    /// `buf` is untouched on [`Error::Truncation`]
    pub fn write_text(&self, radix: Radix, buf: &mut [u8]) -> Result<usize> {
        let text = self.to_text(radix)?;
        let Some(out) = buf.get_mut(..=text.len()) else {
            return Err(Error::Truncation);
        };
        let (nul, out) = out.split_last_mut().ok_or(Error::Truncation)?;
        out.copy_from_slice(text.as_bytes());
        *nul = 0;
        Ok(text.len())
    }

    /// reads a number from the start of `source`
    ///
    /// skips leading whitespace, accepts one optional sign and then stops at the first character that
    /// isn't a digit in `radix`. Returns the value and the number of bytes read.
    pub fn read_prefix(source: &str, radix: Radix) -> Result<(Self, usize)> {
        let bytes = source.as_bytes();
        let mut pos = bytes
            .iter()
            .position(|it| !it.is_ascii_whitespace())
            .unwrap_or(bytes.len());
        let sign = match bytes.get(pos) {
            Some(b'-') => {
                pos += 1;
                Sign::Negative
            }
            Some(b'+') => {
                pos += 1;
                Sign::Positive
            }
            _ => Sign::Positive,
        };
        let len = bytes[pos..]
            .iter()
            .position(|it| radix.char_value(*it).is_none())
            .unwrap_or(bytes.len() - pos);
        if len == 0 {
            return Err(Error::BadInput);
        }
        let digits = &bytes[pos..pos + len];

        let (per_digit, _) = radix.chars_per_digit::<D>();
        let mut holder = DigitHolder::with_capacity(
            (len * (radix.0.ilog2() as usize + 1)).div_ceil(D::BASIS_POW) + 1,
        )?;
        for chunk in digits.chunks(per_digit) {
            let mut value = 0u128;
            let mut scale = 1u128;
            for c in chunk {
                value = value * radix.0 as u128 + radix.char_value(*c).map_or(0, u128::from);
                scale *= radix.0 as u128;
            }
            mul::assign_mul_digit(
                &mut holder,
                D::truncate_u128(scale),
                D::truncate_u128(value),
            )?;
        }
        Ok((Self::from_parts(sign, holder), pos + len))
    }
    /// parses all of `source` with [`Self::read_prefix`], trailing characters are [`Error::BadInput`]
    pub fn from_text(source: &str, radix: Radix) -> Result<Self> {
        let (num, used) = Self::read_prefix(source, radix)?;
        if used != source.len() {
            return Err(Error::BadInput);
        }
        Ok(num)
    }

    fn fmt_radix(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        radix: Radix,
        prefix: &str,
        upper: bool,
    ) -> std::fmt::Result {
        let mut chars = self.magnitude_chars(radix).map_err(|_| std::fmt::Error)?;
        if upper {
            chars.make_ascii_uppercase();
        }
        let text = std::str::from_utf8(&chars).map_err(|_| std::fmt::Error)?;
        f.pad_integral(!self.is_negative(), prefix, text)
    }
    /// decimal with `_` between groups of three digits
    fn fmt_grouped(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars = self
            .magnitude_chars(Radix::DECIMAL)
            .map_err(|_| std::fmt::Error)?;
        let mut grouped = String::new();
        grouped
            .try_reserve_exact(chars.len() + chars.len() / 3)
            .map_err(|_| std::fmt::Error)?;
        for (i, c) in chars.iter().enumerate() {
            if i != 0 && (chars.len() - i) % 3 == 0 {
                grouped.push('_');
            }
            grouped.push(*c as char);
        }
        f.pad_integral(!self.is_negative(), "", &grouped)
    }
}

// From helper
fn strip_radix(s: &str) -> (Option<Radix>, &str) {
    match s.as_bytes() {
        [b'0', b'x' | b'X', ..] => (Some(Radix::HEX), &s[2..]),
        [b'0', b'b' | b'B', ..] => (Some(Radix::BINARY), &s[2..]),
        [b'0', b'o' | b'O', ..] => (Some(Radix::OCTAL), &s[2..]),
        [b'0', b'd' | b'D', ..] => (Some(Radix::DECIMAL), &s[2..]),
        _ => (None, s),
    }
}

impl<D: Digit> FromStr for BigInt<D> {
    type Err = Error;

    /// decimal, or with a `0x`, `0o`, `0b` or `0d` prefix after the sign
    fn from_str(s: &str) -> Result<Self> {
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &s[1..]),
            Some(b'+') => (Sign::Positive, &s[1..]),
            _ => (Sign::Positive, s),
        };
        let (radix, rest) = strip_radix(rest);
        let radix = radix.unwrap_or(Radix::DECIMAL);

        // no second sign or whitespace after the prefix
        if !rest
            .bytes()
            .next()
            .is_some_and(|it| radix.char_value(it).is_some())
        {
            return Err(Error::BadInput);
        }
        let mut num = Self::from_text(rest, radix)?;
        num.set_sign(sign);
        Ok(num)
    }
}

impl<D: Digit> std::fmt::Display for BigInt<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            self.fmt_grouped(f)
        } else {
            self.fmt_radix(f, Radix::DECIMAL, "", false)
        }
    }
}
impl<D: Digit> std::fmt::LowerHex for BigInt<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_radix(f, Radix::HEX, "0x", false)
    }
}
impl<D: Digit> std::fmt::UpperHex for BigInt<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_radix(f, Radix::HEX, "0x", true)
    }
}
impl<D: Digit> std::fmt::Octal for BigInt<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_radix(f, Radix::OCTAL, "0o", false)
    }
}
impl<D: Digit> std::fmt::Binary for BigInt<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_radix(f, Radix::BINARY, "0b", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Int = BigInt<u8>;

    #[test]
    fn radix_bounds() {
        assert_eq!(Radix::try_from(1u32), Err(Error::Range));
        assert_eq!(Radix::try_from(37u32), Err(Error::Range));
        assert_eq!(Radix::try_from(300u32), Err(Error::Range));
        assert_eq!(Radix::try_from(36u32).map(Radix::get), Ok(36));
        assert_eq!(Radix::DECIMAL.chars_per_digit::<u8>(), (2, 100));
        assert_eq!(Radix::DECIMAL.chars_per_digit::<u32>(), (9, 1_000_000_000));
        assert_eq!(Radix::HEX.chars_per_digit::<u16>(), (3, 0x1000));
    }

    #[test]
    fn to_text() {
        let num = Int::from(-0x1234_5678_9abc_def0i64);
        assert_eq!(num.to_text(Radix::HEX).unwrap(), "-123456789abcdef0");
        assert_eq!(
            num.to_text(Radix::DECIMAL).unwrap(),
            (-0x1234_5678_9abc_def0i64).to_string()
        );
        assert_eq!(Int::ZERO.to_text(Radix::BINARY).unwrap(), "0");
        assert_eq!(Int::from(35).to_text(Radix::MAX).unwrap(), "z");
        assert_eq!(Int::from(36).to_text(Radix::MAX).unwrap(), "10");
        assert_eq!(Int::from(100).to_text(Radix::DECIMAL).unwrap(), "100");
        assert_eq!(
            Int::from(0o1234_5670u32).to_text(Radix::OCTAL).unwrap(),
            "12345670"
        );
    }

    #[test]
    fn string_length() {
        for value in [0i64, 1, -1, 9, 10, -100, 0xff, -0x100, i64::MAX, i64::MIN] {
            let num = Int::from(value);
            for radix in [2u32, 3, 8, 10, 16, 36] {
                let radix = Radix::try_from(radix).unwrap();
                assert_eq!(
                    num.string_length(radix).unwrap(),
                    num.to_text(radix).unwrap().len() + 1,
                    "{value} in {radix:?}"
                );
            }
        }
    }

    #[test]
    fn write_text() {
        let num = Int::from(-255);
        let mut buf = [0xaa; 5];
        assert_eq!(num.write_text(Radix::HEX, &mut buf[..3]), Err(Error::Truncation));
        assert_eq!(buf, [0xaa; 5]);
        assert_eq!(num.write_text(Radix::HEX, &mut buf), Ok(3));
        assert_eq!(&buf, b"-ff\0\xaa");
    }

    #[test]
    fn read_prefix() {
        assert_eq!(
            Int::read_prefix("  -1cA rest", Radix::HEX),
            Ok((Int::from(-0x1ca), 6))
        );
        assert_eq!(Int::read_prefix("123 ", Radix::DECIMAL), Ok((Int::from(123), 3)));
        assert_eq!(Int::read_prefix("+", Radix::DECIMAL), Err(Error::BadInput));
        assert_eq!(Int::read_prefix("  ", Radix::DECIMAL), Err(Error::BadInput));
        assert_eq!(Int::read_prefix("-0", Radix::DECIMAL), Ok((Int::ZERO, 2)));
        assert_eq!(Int::read_prefix("19", Radix::OCTAL), Ok((Int::from(1), 1)));
    }

    #[test]
    fn from_text() {
        assert_eq!(
            Int::from_text("-123456789012345678901234567890", Radix::DECIMAL),
            Ok(-Int::from(123_456_789_012_345_678_901_234_567_890u128))
        );
        assert_eq!(Int::from_text("ZZ", Radix::MAX), Ok(Int::from(36 * 36 - 1)));
        assert_eq!(Int::from_text("12a", Radix::DECIMAL), Err(Error::BadInput));
        assert_eq!(Int::from_text("", Radix::DECIMAL), Err(Error::BadInput));
        assert_eq!(Int::from_text("1 2", Radix::DECIMAL), Err(Error::BadInput));
        assert_eq!(
            Int::from_text("00000000000000000001", Radix::BINARY),
            Ok(Int::from(1))
        );
    }

    #[test]
    fn from_str() {
        assert_eq!("-0x1F".parse::<Int>(), Ok(Int::from(-0x1f)));
        assert_eq!("+0b101".parse::<Int>(), Ok(Int::from(5)));
        assert_eq!("0o17".parse::<Int>(), Ok(Int::from(0o17)));
        assert_eq!("0d0099".parse::<Int>(), Ok(Int::from(99)));
        assert_eq!("0".parse::<Int>(), Ok(Int::ZERO));
        assert_eq!("012".parse::<Int>(), Ok(Int::from(12)));
        assert_eq!("0x".parse::<Int>(), Err(Error::BadInput));
        assert_eq!("- 1".parse::<Int>(), Err(Error::BadInput));
        assert_eq!("--1".parse::<Int>(), Err(Error::BadInput));
        assert_eq!(" 1".parse::<Int>(), Err(Error::BadInput));
    }

    #[test]
    fn formatting() {
        let num = Int::from(-0xbeef);
        assert_eq!(format!("{num}"), "-48879");
        assert_eq!(format!("{num:x}"), "-beef");
        assert_eq!(format!("{num:#X}"), "-0xBEEF");
        assert_eq!(format!("{num:>8}"), "  -48879");
        assert_eq!(format!("{num:08}"), "-0048879");
        assert_eq!(format!("{:o}", Int::from(8)), "10");
        assert_eq!(format!("{:#b}", Int::from(5)), "0b101");
        assert_eq!(format!("{}", Int::ZERO), "0");
    }

    #[test]
    fn grouped() {
        assert_eq!(format!("{:#}", Int::from(-1_234_567)), "-1_234_567");
        assert_eq!(format!("{:#}", Int::from(123)), "123");
        assert_eq!(format!("{:#}", Int::from(123_456)), "123_456");
    }
}
