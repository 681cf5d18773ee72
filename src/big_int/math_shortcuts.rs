// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
#![allow(clippy::wildcard_imports)]
use super::{digits::Digit, math_algos, BigInt};
use crate::error::Result;

macro_rules! try_all {
    ($lhs:ident, $rhs:ident $(, )?) => {};
    ($lhs:ident, $rhs:ident, left $($rule:tt)::*, $($tail:tt)*) => {
        if <$($rule)::* as MathShortcut<$crate::big_int::math_shortcuts::Left>>::can_shortcut($lhs, $rhs) {
            return <$($rule)::* as MathShortcut<$crate::big_int::math_shortcuts::Left>>::do_shortcut($lhs, $rhs);
        }
        $crate::big_int::math_shortcuts::try_all!($lhs, $rhs, $($tail)*);
    };
    ($lhs:ident, $rhs:ident, right $($rule:tt)::*, $($tail:tt)*) => {
        if <$($rule)::* as MathShortcut<$crate::big_int::math_shortcuts::Right>>::can_shortcut($lhs, $rhs) {
            return <$($rule)::* as MathShortcut<$crate::big_int::math_shortcuts::Right>>::do_shortcut($lhs, $rhs);
        }
        $crate::big_int::math_shortcuts::try_all!($lhs, $rhs, $($tail)*);
    };
    ($lhs:ident, $rhs:ident, $($rule:tt)::*, $($tail:tt)*) => {
        if <$($rule)::* as MathShortcut<$crate::big_int::math_shortcuts::Left>>::can_shortcut($lhs, $rhs) {
            return <$($rule)::* as MathShortcut<$crate::big_int::math_shortcuts::Left>>::do_shortcut($lhs, $rhs);
        }
        if <$($rule)::* as MathShortcut<$crate::big_int::math_shortcuts::Right>>::can_shortcut($lhs, $rhs) {
            return <$($rule)::* as MathShortcut<$crate::big_int::math_shortcuts::Right>>::do_shortcut($lhs, $rhs);
        }
        $crate::big_int::math_shortcuts::try_all!($lhs, $rhs, $($tail)*);
    };
}
pub(crate) use try_all;

pub trait Side {}
pub struct Left;
impl Side for Left {}
pub struct Right;
impl Side for Right {}

pub trait MathShortcut<S: Side> {
    type RES<D: Digit>;

    /// can the operation be made significantly easier by using special info about one side.
    /// For example 0 - x = -x
    fn can_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool;
    /// apply the shortcut with the special side
    fn do_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> Self::RES<D>;
}
/// refers its methods directly to *_rhs and with flipped parametes for *_lhs
pub trait MathShortcutFlip {
    /// can the operation be made significantly easier by using special info about the rhs.
    /// For example 0 + x = x = x + 0
    fn can_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool;
    /// apply the shortcut
    fn do_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> Result<BigInt<D>>;
}
impl<Flip: MathShortcutFlip> MathShortcut<Right> for Flip {
    type RES<D: Digit> = Result<BigInt<D>>;

    fn can_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
        <Self as MathShortcutFlip>::can_shortcut(lhs, rhs)
    }
    fn do_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> Result<BigInt<D>> {
        <Self as MathShortcutFlip>::do_shortcut(lhs, rhs)
    }
}
impl<Flip: MathShortcutFlip> MathShortcut<Left> for Flip {
    type RES<D: Digit> = Result<BigInt<D>>;

    fn can_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
        <Self as MathShortcutFlip>::can_shortcut(rhs, lhs)
    }
    fn do_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> Result<BigInt<D>> {
        <Self as MathShortcutFlip>::do_shortcut(rhs, lhs)
    }
}

pub mod add {
    use super::*;
    pub struct Zero;
    impl MathShortcutFlip for Zero {
        fn can_shortcut<D: Digit>(_lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
            rhs.is_zero()
        }

        fn do_shortcut<D: Digit>(lhs: &BigInt<D>, _rhs: &BigInt<D>) -> Result<BigInt<D>> {
            lhs.try_clone()
        }
    }
}

pub mod sub {
    use super::*;
    pub struct Zero;
    impl MathShortcut<Left> for Zero {
        type RES<D: Digit> = Result<BigInt<D>>;

        fn can_shortcut<D: Digit>(lhs: &BigInt<D>, _rhs: &BigInt<D>) -> bool {
            lhs.is_zero()
        }

        fn do_shortcut<D: Digit>(_lhs: &BigInt<D>, rhs: &BigInt<D>) -> Result<BigInt<D>> {
            rhs.try_neg()
        }
    }
    impl MathShortcut<Right> for Zero {
        type RES<D: Digit> = Result<BigInt<D>>;

        fn can_shortcut<D: Digit>(_lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
            rhs.is_zero()
        }

        fn do_shortcut<D: Digit>(lhs: &BigInt<D>, _rhs: &BigInt<D>) -> Result<BigInt<D>> {
            lhs.try_clone()
        }
    }
}

pub mod mul {
    use super::*;
    pub struct ByZero;
    impl MathShortcutFlip for ByZero {
        fn can_shortcut<D: Digit>(_lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
            rhs.is_zero()
        }

        fn do_shortcut<D: Digit>(_lhs: &BigInt<D>, _rhs: &BigInt<D>) -> Result<BigInt<D>> {
            Ok(BigInt::ZERO)
        }
    }
    pub struct ByOne;
    impl MathShortcutFlip for ByOne {
        fn can_shortcut<D: Digit>(_lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
            rhs.is_abs_one()
        }

        fn do_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> Result<BigInt<D>> {
            let mut out = lhs.try_clone()?;
            out.set_sign(lhs.sign() * rhs.sign());
            Ok(out)
        }
    }
    pub struct ByPowerOfTwo;
    impl MathShortcutFlip for ByPowerOfTwo {
        fn can_shortcut<D: Digit>(_lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
            math_algos::power_of_two_exponent(&rhs.digits).is_some()
        }

        fn do_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> Result<BigInt<D>> {
            let pow = math_algos::power_of_two_exponent(&rhs.digits)
                .unwrap_or_else(|| unreachable!("checked in can_shortcut"));
            let mut out = lhs.mul_pow2(pow)?;
            out.set_sign(lhs.sign() * rhs.sign());
            Ok(out)
        }
    }
}
pub mod div {
    use super::*;
    type DivRes<D> = Result<(BigInt<D>, BigInt<D>)>;

    pub struct Smaller;
    impl MathShortcut<Left> for Smaller {
        type RES<D: Digit> = DivRes<D>;

        fn can_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
            lhs.cmp_abs(rhs).is_lt()
        }

        fn do_shortcut<D: Digit>(lhs: &BigInt<D>, _rhs: &BigInt<D>) -> DivRes<D> {
            Ok((BigInt::ZERO, lhs.try_clone()?))
        }
    }
    pub struct Same;
    impl MathShortcut<Left> for Same {
        type RES<D: Digit> = DivRes<D>;

        fn can_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
            lhs.cmp_abs(rhs).is_eq()
        }

        fn do_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> DivRes<D> {
            let mut q = BigInt::from(1u8);
            q.set_sign(lhs.sign() * rhs.sign());
            Ok((q, BigInt::ZERO))
        }
    }
    pub struct ByPowerOfTwo;
    impl MathShortcut<Right> for ByPowerOfTwo {
        type RES<D: Digit> = DivRes<D>;

        fn can_shortcut<D: Digit>(_lhs: &BigInt<D>, rhs: &BigInt<D>) -> bool {
            math_algos::power_of_two_exponent(&rhs.digits).is_some()
        }

        fn do_shortcut<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> DivRes<D> {
            let pow = math_algos::power_of_two_exponent(&rhs.digits)
                .unwrap_or_else(|| unreachable!("checked in can_shortcut"));
            let (mut q, r) = lhs.div_pow2(pow)?;
            q.set_sign(lhs.sign() * rhs.sign());
            Ok((q, r))
        }
    }
}
