// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use std::collections::TryReserveError;

/// The ways an operation on a [`crate::BigInt`] can fail.
///
/// A failed operation never leaves its receiver in a broken state: it either keeps its old value
/// or the documentation of the operation says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// the digit buffer could not be allocated
    #[display("out of memory")]
    OutOfMemory,
    /// the operation is not defined for the given magnitude or sign
    #[display("argument out of range")]
    Range,
    /// the mathematical result does not exist
    #[display("result undefined")]
    Undefined,
    #[display("division by zero")]
    DivideByZero,
    /// malformed textual or binary input
    #[display("invalid argument")]
    BadInput,
    /// a caller provided buffer is too small for the output
    #[display("output truncated")]
    Truncation,
}

pub type Result<T> = std::result::Result<T, Error>;

pub const OK: i32 = 0;
pub const TRUE: i32 = -1;

impl Error {
    pub const ALL: [Self; 6] = [
        Self::OutOfMemory,
        Self::Range,
        Self::Undefined,
        Self::Truncation,
        Self::BadInput,
        Self::DivideByZero,
    ];

    /// the numeric result code, compatible with the codes of the C library interface
    pub const fn code(self) -> i32 {
        match self {
            Self::OutOfMemory => -2,
            Self::Range => -3,
            Self::Undefined => -4,
            Self::Truncation => -5,
            Self::BadInput => -6,
            Self::DivideByZero => -7,
        }
    }
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|it| it.code() == code)
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::OutOfMemory => "out of memory",
            Self::Range => "argument out of range",
            Self::Undefined => "result undefined",
            Self::DivideByZero => "division by zero",
            Self::BadInput => "invalid argument",
            Self::Truncation => "output truncated",
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

/// human readable message for a numeric result code
pub fn error_string(code: i32) -> &'static str {
    match code {
        OK => "error code 0",
        TRUE => "boolean true",
        code => Error::from_code(code).map_or("unknown result code", Error::message),
    }
}

/// unwraps the result of an operator, which can't report errors
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
