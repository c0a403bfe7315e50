//! The two public fuzzer variants over the shared odometer.

use num::BigUint;

use crate::catalog::Prototype;
use crate::error::Result;

use super::odometer::Odometer;

/// Combination iterator over a prototype's payloads with a native 64-bit
/// counter.
///
/// Produces every ordered `length`-combination (with repetition) of the
/// bound prototype's payload fragments, in fixed-radix odometer order:
/// re-running a freshly constructed fuzzer reproduces the identical
/// sequence. Construction fails when the combination space `S^length`
/// does not fit 64 bits; use [`BigIntFuzzer`] in that case.
#[derive(Debug, Clone)]
pub struct Fuzzer<'a> {
    prototype: &'a Prototype,
    odometer: Odometer<'a, u64>,
}

impl<'a> Fuzzer<'a> {
    pub(crate) fn new(prototype: &'a Prototype, length: usize) -> Result<Self> {
        let odometer = Odometer::new(prototype, length)?;
        Ok(Self { prototype, odometer })
    }

    /// Id of the bound prototype.
    pub fn id(&self) -> &str {
        self.prototype.id()
    }

    /// Name of the bound prototype.
    pub fn name(&self) -> &str {
        self.prototype.name()
    }

    /// Requested output length in fragments.
    pub fn length(&self) -> usize {
        self.odometer.length()
    }

    /// Total number of combinations this fuzzer will produce.
    pub fn total(&self) -> u64 {
        *self.odometer.total()
    }
}

impl Iterator for Fuzzer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.odometer.advance()
    }
}

/// Combination iterator with an arbitrary-precision counter.
///
/// Identical contract and output order to [`Fuzzer`], without the 64-bit
/// ceiling on the combination space.
#[derive(Debug, Clone)]
pub struct BigIntFuzzer<'a> {
    prototype: &'a Prototype,
    odometer: Odometer<'a, BigUint>,
}

impl<'a> BigIntFuzzer<'a> {
    pub(crate) fn new(prototype: &'a Prototype, length: usize) -> Result<Self> {
        let odometer = Odometer::new(prototype, length)?;
        Ok(Self { prototype, odometer })
    }

    /// Id of the bound prototype.
    pub fn id(&self) -> &str {
        self.prototype.id()
    }

    /// Name of the bound prototype.
    pub fn name(&self) -> &str {
        self.prototype.name()
    }

    /// Requested output length in fragments.
    pub fn length(&self) -> usize {
        self.odometer.length()
    }

    /// Total number of combinations this fuzzer will produce.
    pub fn total(&self) -> BigUint {
        self.odometer.total().clone()
    }
}

impl Iterator for BigIntFuzzer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.odometer.advance()
    }
}
