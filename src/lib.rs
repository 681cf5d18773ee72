// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
pub mod big_int;
pub mod error;

pub use big_int::{BezoutCoefficients, BigInt, Gcd, Radix, ReductionConstant, Sign};
pub use error::{error_string, Error, Result};

mod util {
    pub mod rng;
}
