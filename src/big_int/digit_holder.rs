// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use std::{
    fmt::Debug,
    ops::{Deref, DerefMut},
};

use crate::{big_int::digits::Digit, error::Result};

/// The little endian digit buffer of a number.
///
/// `len()` are the used digits, `capacity()` the allocated ones.
/// Every growth goes through `try_reserve`, so running out of memory is reported instead of aborting.
#[derive(Default, Hash)]
pub struct DigitHolder<D> {
    digits: Vec<D>,
}

impl<D: Debug> Debug for DigitHolder<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.digits, f)
    }
}
impl<D: Clone> Clone for DigitHolder<D> {
    fn clone(&self) -> Self {
        Self {
            digits: self.digits.clone(),
        }
    }
    fn clone_from(&mut self, source: &Self) {
        self.digits.clone_from(&source.digits);
    }
}

impl<D> Deref for DigitHolder<D> {
    type Target = [D];

    fn deref(&self) -> &Self::Target {
        &self.digits
    }
}
impl<D> DerefMut for DigitHolder<D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.digits
    }
}

impl<D: Digit> DigitHolder<D> {
    pub const fn new() -> Self {
        Self { digits: Vec::new() }
    }
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut holder = Self::new();
        holder.ensure_capacity(capacity)?;
        Ok(holder)
    }
    /// `len` zero digits
    pub fn zeroed(len: usize) -> Result<Self> {
        let mut holder = Self::with_capacity(len)?;
        holder.digits.resize(len, D::ZERO);
        Ok(holder)
    }
    pub fn from_slice(digits: &[D]) -> Result<Self> {
        let mut holder = Self::with_capacity(digits.len())?;
        holder.digits.extend_from_slice(digits);
        Ok(holder)
    }
    pub fn try_clone(&self) -> Result<Self> {
        Self::from_slice(&self.digits)
    }
    /// copies `source` into the existing allocation where possible
    pub fn try_clone_from(&mut self, source: &[D]) -> Result<()> {
        self.ensure_capacity(source.len())?;
        self.digits.clear();
        self.digits.extend_from_slice(source);
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.digits.capacity()
    }
    /// grows the allocation to hold at least `capacity` digits, never shrinks
    pub fn ensure_capacity(&mut self, capacity: usize) -> Result<()> {
        if let Some(additional) = capacity.checked_sub(self.digits.len()) {
            self.digits.try_reserve(additional)?;
        }
        Ok(())
    }
    /// sets the used length, new digits are zero
    ///
    /// the allocation needs to be big enough already
    pub fn set_size(&mut self, len: usize) {
        assert!(
            len <= self.capacity(),
            "tried to set size {len} with capacity {}",
            self.capacity()
        );
        self.digits.resize(len, D::ZERO);
    }
    /// like `set_size`, but allocates if needed
    pub fn grow_to(&mut self, len: usize) -> Result<()> {
        self.ensure_capacity(len)?;
        if len > self.digits.len() {
            self.set_size(len);
        }
        Ok(())
    }
    pub fn shrink_to_fit(&mut self) {
        self.digits.shrink_to_fit();
    }

    /// removes leading zero digits
    pub fn normalize(&mut self) {
        let used = self
            .digits
            .iter()
            .rposition(|it| !it.eq_u8(0))
            .map_or(0, |it| it + 1);
        self.digits.truncate(used);
    }
    pub fn is_normalized(&self) -> bool {
        self.digits.last().map_or(true, |it| !it.eq_u8(0))
    }

    pub fn push(&mut self, value: D) -> Result<()> {
        self.ensure_capacity(self.digits.len() + 1)?;
        self.digits.push(value);
        Ok(())
    }
    /// pushes `value` if it isn't zero
    pub fn push_carry(&mut self, value: D) -> Result<()> {
        if value.eq_u8(0) {
            return Ok(());
        }
        self.push(value)
    }
    pub fn truncate(&mut self, len: usize) {
        self.digits.truncate(len);
    }
    pub fn clear(&mut self) {
        self.digits.clear();
    }
    /// inserts `count` zero digits at the low end
    pub fn insert_low_zeros(&mut self, count: usize) -> Result<()> {
        if count == 0 || self.digits.is_empty() {
            return Ok(());
        }
        self.ensure_capacity(self.digits.len() + count)?;
        self.digits
            .splice(0..0, std::iter::repeat(D::ZERO).take(count));
        Ok(())
    }
    /// removes the lowest `count` digits
    pub fn remove_low(&mut self, count: usize) {
        let count = count.min(self.digits.len());
        self.digits.drain(..count);
    }
}
