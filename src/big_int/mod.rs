// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
pub mod binary;
pub mod digit_holder;
pub mod digits;
pub mod math_algos;
mod math_shortcuts;
pub mod number_theory;
pub mod primitive;
pub mod radix;
pub mod reduction;
pub mod signed;

pub use math_algos::gcd::{BezoutCoefficients, Gcd};
pub use radix::Radix;
pub use reduction::ReductionConstant;
pub use signed::{BigInt, Sign};

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        /// the widest digit whose double width is still a native integer
        pub type DefaultDigit = u64;
    } else {
        pub type DefaultDigit = u32;
    }
}

#[cfg(test)]
mod tests;
