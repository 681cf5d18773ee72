// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::{error::Error, util::rng::seeded_rng};

mod scenarios {
    use super::*;

    #[test]
    fn negate_decimal_text() {
        let mut num =
            BigInt::<u64>::from_text("123456789012345678901234567890", Radix::DECIMAL).unwrap();
        num.negate();
        assert_eq!(
            num.to_text(Radix::DECIMAL).unwrap(),
            "-123456789012345678901234567890"
        );
    }

    #[test]
    fn truncating_and_euclidean_remainder() {
        let n = BigInt::<u64>::from_text("-7", Radix::DECIMAL).unwrap();
        let d = BigInt::<u64>::from_text("2", Radix::DECIMAL).unwrap();
        let (q, r) = n.div_rem(&d).unwrap();
        assert_eq!(q, -3i64);
        assert_eq!(r, -1i64);
        assert_eq!(n.modulo(&d).unwrap(), 1i64);
    }

    #[test]
    fn pow_mod() {
        let parse = |s| BigInt::<u32>::from_text(s, Radix::DECIMAL).unwrap();
        assert_eq!(
            parse("2").pow_mod(&parse("10"), &parse("1000")).unwrap(),
            24i64
        );
    }

    #[test]
    fn mod_inverse() {
        let parse = |s| BigInt::<u16>::from_text(s, Radix::DECIMAL).unwrap();
        assert_eq!(parse("3").mod_inverse(&parse("11")).unwrap(), 4i64);
        assert_eq!(
            parse("2").mod_inverse(&parse("4")),
            Err(Error::Undefined)
        );
    }
}

mod error_codes {
    use super::*;

    #[test]
    fn failures_map_to_codes() {
        let two = BigInt::<u64>::from(2);
        for (result, code) in [
            (two.try_div(&BigInt::ZERO).err(), -7),
            (two.pow_small(-1).err(), -3),
            (two.mod_inverse(&BigInt::from(4)).err(), -4),
            (BigInt::<u64>::from_text("x", Radix::DECIMAL).err(), -6),
            (two.write_text(Radix::DECIMAL, &mut [0; 1]).err(), -5),
        ] {
            let err = result.expect("should fail");
            assert_eq!(err.code(), code, "{err}");
            assert_eq!(crate::error_string(code), err.to_string());
        }
    }
}

mod properties {
    use super::*;

    const ROUNDS: usize = 300;

    fn random_pair<D: digits::Digit>(rng: &mut rand::rngs::StdRng) -> (BigInt<D>, BigInt<D>) {
        (
            BigInt::new_random(0..=40, &mut *rng),
            BigInt::new_random(0..=40, &mut *rng),
        )
    }

    #[test]
    fn add_sub_inverse() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (a, b) = random_pair::<u8>(&mut rng);
            assert_eq!(&(&a + &b) - &b, a, "(a+b)-b with seed {seed:?}");
            assert_eq!(&(&a - &b) + &b, a, "(a-b)+b with seed {seed:?}");
        }
    }

    #[test]
    fn commutative() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (a, b) = random_pair::<u32>(&mut rng);
            assert_eq!(&a + &b, &b + &a, "{a:?} + {b:?} with seed {seed:?}");
            assert_eq!(&a * &b, &b * &a, "{a:?} * {b:?} with seed {seed:?}");
        }
    }

    #[test]
    fn in_place_matches_allocating() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (a, b) = random_pair::<u16>(&mut rng);
            let mut c = a.try_clone().unwrap();
            c.try_mul_assign(&b).unwrap();
            assert_eq!(Ok(c), a.try_mul(&b), "{a:?} * {b:?} with seed {seed:?}");
            let mut c = a.try_clone().unwrap();
            c.try_sub_assign(&b).unwrap();
            assert_eq!(Ok(c), a.try_sub(&b), "{a:?} - {b:?} with seed {seed:?}");
        }
    }

    #[test]
    fn division() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (a, b) = random_pair::<u8>(&mut rng);
            if b.is_zero() {
                assert_eq!(a.div_rem(&b), Err(Error::DivideByZero));
                continue;
            }
            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(&q * &b + &r, a, "q*b+r with seed {seed:?}");
            assert!(r.cmp_abs(&b).is_lt(), "|r| < |b| with seed {seed:?}");
            assert!(
                r.is_zero() || r.sign() == a.sign(),
                "sign of r with seed {seed:?}"
            );

            let m = a.modulo(&b).unwrap();
            assert!(
                !m.is_negative() && m.cmp_abs(&b).is_lt(),
                "{m:?} out of range with seed {seed:?}"
            );
            assert!(
                (&a - &m).try_rem(&b).unwrap().is_zero(),
                "a - (a mod b) isn't divisible with seed {seed:?}"
            );
        }
    }

    #[test]
    fn division_by_digit_width() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let a = BigInt::<u64>::new_random(0..=64, &mut rng);
            let b = BigInt::<u64>::new_random(1..=9, &mut rng);
            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(&q * &b + &r, a, "q*b+r with seed {seed:?}");
            assert!(r.cmp_abs(&b).is_lt(), "|r| < |b| with seed {seed:?}");
        }
    }

    #[test]
    fn division_by_value() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let a = BigInt::<u16>::new_random(0..=24, &mut rng);
            let value = rand::Rng::gen::<i64>(&mut rng) >> (rand::Rng::gen::<u32>(&mut rng) % 64);
            if value == 0 {
                continue;
            }
            let (q, r) = a.div_rem(&BigInt::from(value)).unwrap();
            assert_eq!(
                a.div_rem_value(value),
                Ok((q, r.to_i64().unwrap())),
                "{a:?} / {value} with seed {seed:?}"
            );
        }
    }

    #[test]
    fn text_round_trip() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let a = BigInt::<u32>::new_random(0..=30, &mut rng);
            let radix = Radix::try_from(2 + crate::util::rng::next_bound(34, &mut rng, None) as u32)
                .unwrap();
            let text = a.to_text(radix).unwrap();
            assert_eq!(
                a.string_length(radix).unwrap(),
                text.len() + 1,
                "length of {text} with seed {seed:?}"
            );
            let back = BigInt::<u32>::from_text(&text, radix).unwrap();
            assert_eq!(back, a, "{text} in {radix:?} with seed {seed:?}");
            assert_eq!(
                BigInt::<u8>::from_text(&text.to_uppercase(), radix)
                    .unwrap()
                    .to_text(radix)
                    .unwrap(),
                text,
                "digit width changed {text} with seed {seed:?}"
            );
        }
    }

    #[test]
    fn display_matches_native() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let value = rand::Rng::gen::<i128>(&mut rng);
            let num = BigInt::<u16>::from(value);
            assert_eq!(num.to_string(), value.to_string(), "with seed {seed:?}");
            let hex = if value < 0 {
                format!("-{:x}", value.unsigned_abs())
            } else {
                format!("{value:x}")
            };
            assert_eq!(format!("{num:x}"), hex, "with seed {seed:?}");
            assert_eq!(value.to_string().parse::<BigInt<u16>>(), Ok(num), "with seed {seed:?}");
        }
    }

    #[test]
    fn binary_round_trip() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let a = BigInt::<u64>::new_random(0..=40, &mut rng);
            let bytes = a.to_binary().unwrap();
            assert_eq!(bytes.len(), a.binary_len());
            assert_eq!(
                BigInt::<u64>::from_binary(&bytes),
                Ok(a.try_clone().unwrap()),
                "{bytes:x?} with seed {seed:?}"
            );
            // the digit type doesn't change the encoding
            assert_eq!(
                BigInt::<u8>::from_binary(&bytes).and_then(|it| it.to_binary()),
                Ok(bytes),
                "with seed {seed:?}"
            );
            let unsigned = a.to_unsigned().unwrap();
            assert_eq!(
                BigInt::<u64>::from_unsigned(&unsigned),
                a.try_abs(),
                "with seed {seed:?}"
            );
        }
    }

    #[test]
    fn native_binary_matches() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let value = rand::Rng::gen::<i64>(&mut rng) >> (rand::Rng::gen::<u32>(&mut rng) % 64);
            let num = BigInt::<u32>::from(value);
            let bytes = num.to_binary().unwrap();
            let padded: Vec<u8> = std::iter::repeat(if value < 0 { 0xff } else { 0 })
                .take(16 - bytes.len())
                .chain(bytes.iter().copied())
                .collect();
            assert_eq!(
                i128::from_be_bytes(padded.try_into().unwrap()),
                i128::from(value),
                "{bytes:x?} with seed {seed:?}"
            );
        }
    }

    #[test]
    fn gcd_divides() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (a, b) = random_pair::<u8>(&mut rng);
            if a.is_zero() || b.is_zero() {
                continue;
            }
            let g = a.gcd(&b).unwrap();
            assert!(g.is_positive(), "gcd {g:?} with seed {seed:?}");
            assert!(a.try_rem(&g).unwrap().is_zero(), "with seed {seed:?}");
            assert!(b.try_rem(&g).unwrap().is_zero(), "with seed {seed:?}");

            let (g2, x, y) = a.extended_gcd(&b).unwrap();
            assert_eq!(g2, g, "with seed {seed:?}");
            assert_eq!(&a * &x + &b * &y, g, "bezout with seed {seed:?}");

            let lcm = a.lcm(&b).unwrap();
            assert_eq!(&lcm * &g, (&a * &b).try_abs().unwrap(), "with seed {seed:?}");
        }
    }

    #[test]
    fn mod_inverse() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (a, m) = random_pair::<u32>(&mut rng);
            let m = m.try_abs().unwrap();
            if m.is_zero() {
                continue;
            }
            match a.mod_inverse(&m) {
                Ok(inv) => {
                    assert!(!inv.is_negative() && inv < m, "with seed {seed:?}");
                    assert_eq!(
                        (&a * &inv).modulo(&m),
                        BigInt::from(1).modulo(&m),
                        "with seed {seed:?}"
                    );
                }
                Err(err) => {
                    assert_eq!(err, Error::Undefined, "with seed {seed:?}");
                    assert!(!a.gcd(&m).unwrap().is_one(), "with seed {seed:?}");
                }
            }
        }
    }

    #[test]
    fn shifts_match_pow2() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let a = BigInt::<u16>::new_random(0..=20, &mut rng);
            let k = crate::util::rng::next_bound(100, &mut rng, None);
            let pow = BigInt::from(1) << k;
            assert_eq!(&a << k, &a * &pow, "{a:?} << {k} with seed {seed:?}");
            assert_eq!(
                a.div_pow2(k),
                a.div_rem(&pow),
                "{a:?} / 2^{k} with seed {seed:?}"
            );
        }
    }

    #[test]
    fn native_comparison() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (a, b) = (rand::Rng::gen::<i64>(&mut rng), rand::Rng::gen::<i64>(&mut rng));
            let big = BigInt::<u8>::from(a);
            assert_eq!(big.compare_value(b), a.cmp(&b), "with seed {seed:?}");
            assert_eq!(big.cmp(&BigInt::from(b)), a.cmp(&b), "with seed {seed:?}");
            assert_eq!(big.to_i64(), Ok(a), "with seed {seed:?}");
        }
    }
}
