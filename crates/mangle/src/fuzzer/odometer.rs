//! Fixed-radix odometer counting, generic over the counter width.
//!
//! A counter value in `[0, S^L)` decomposes into `L` digits in base `S`;
//! each digit selects one payload fragment. The output string is the
//! base-`S` representation of the counter with the most significant digit
//! first, so the rightmost output position cycles fastest, exactly like
//! counting in base `S` with `L` digits. The same decomposition is used by
//! the native-width and the arbitrary-precision fuzzer, so the two
//! variants agree output-for-output wherever both are constructible.

use num::{BigUint, Integer, ToPrimitive, Zero};

use crate::catalog::Prototype;
use crate::error::{MangleError, Result};

/// Integer abstraction for the odometer counter: 64-bit or
/// arbitrary-precision.
pub(crate) trait OdometerCount: Clone + PartialEq + Sized {
    fn zero() -> Self;

    /// `radix^length`, or `None` when the value does not fit this width.
    fn checked_total(radix: usize, length: usize) -> Option<Self>;

    /// Divide by the radix, returning the quotient and the remainder
    /// digit. The remainder is always below the radix and fits a `usize`.
    fn div_rem_radix(&self, radix: usize) -> (Self, usize);

    fn increment(&mut self);
}

impl OdometerCount for u64 {
    fn zero() -> Self {
        0
    }

    fn checked_total(radix: usize, length: usize) -> Option<Self> {
        let exp = u32::try_from(length).ok()?;
        u64::try_from(radix).ok()?.checked_pow(exp)
    }

    fn div_rem_radix(&self, radix: usize) -> (Self, usize) {
        let radix = radix as u64;
        (self / radix, (self % radix) as usize)
    }

    fn increment(&mut self) {
        *self += 1;
    }
}

impl OdometerCount for BigUint {
    fn zero() -> Self {
        Zero::zero()
    }

    fn checked_total(radix: usize, length: usize) -> Option<Self> {
        let exp = u32::try_from(length).ok()?;
        Some(BigUint::from(radix).pow(exp))
    }

    fn div_rem_radix(&self, radix: usize) -> (Self, usize) {
        let (quotient, remainder) = self.div_rem(&BigUint::from(radix));
        // The remainder is below the radix, so the conversion cannot fail.
        (quotient, remainder.to_usize().unwrap_or(0))
    }

    fn increment(&mut self) {
        *self += 1u32;
    }
}

/// Lazily produces every ordered `length`-combination (with repetition) of
/// the bound prototype's payload fragments.
#[derive(Debug, Clone)]
pub(crate) struct Odometer<'a, C: OdometerCount> {
    payloads: &'a [String],
    length: usize,
    counter: C,
    total: C,
    exhausted: bool,
}

impl<'a, C: OdometerCount> Odometer<'a, C> {
    pub fn new(prototype: &'a Prototype, length: usize) -> Result<Self> {
        let payloads = prototype.payloads();
        if payloads.is_empty() {
            return Err(MangleError::NoPayloads {
                id: prototype.id().to_string(),
            });
        }
        if length < 1 {
            return Err(MangleError::InvalidLength { length });
        }
        let total = C::checked_total(payloads.len(), length).ok_or(
            MangleError::SpaceTooLarge {
                payloads: payloads.len(),
                length,
            },
        )?;

        Ok(Self {
            payloads,
            length,
            counter: C::zero(),
            total,
            exhausted: false,
        })
    }

    /// Total number of combinations, `S^length`.
    pub fn total(&self) -> &C {
        &self.total
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Produce the output for the current counter value and advance.
    /// Exhaustion is terminal: once the counter reaches the total, every
    /// further call returns `None`.
    pub fn advance(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        if self.counter == self.total {
            self.exhausted = true;
            return None;
        }

        let radix = self.payloads.len();
        let mut indices = vec![0usize; self.length];
        let mut value = self.counter.clone();
        for slot in indices.iter_mut().rev() {
            let (quotient, digit) = value.div_rem_radix(radix);
            *slot = digit;
            value = quotient;
        }

        let mut output = String::new();
        for &index in &indices {
            output.push_str(&self.payloads[index]);
        }

        self.counter.increment();
        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Kind;

    fn prototype(payloads: &[&str]) -> Prototype {
        let mut proto = Prototype::new(Kind::Recursive, "001-TST-ABC", "Test");
        for p in payloads {
            proto.add_payload(*p);
        }
        proto
    }

    #[test]
    fn test_u64_checked_total() {
        assert_eq!(u64::checked_total(2, 3), Some(8));
        assert_eq!(u64::checked_total(16, 15), Some(16u64.pow(15)));
        // 16^16 is 2^64, one past the counter range.
        assert_eq!(u64::checked_total(16, 16), None);
        assert_eq!(u64::checked_total(2, 64), None);
        assert_eq!(u64::checked_total(2, 63), Some(1 << 63));
        assert_eq!(u64::checked_total(1, 500), Some(1));
    }

    #[test]
    fn test_biguint_total_beyond_native_range() {
        let total = BigUint::checked_total(16, 20).expect("biguint never overflows");
        assert_eq!(total, BigUint::from(16u32).pow(20));
    }

    #[test]
    fn test_rightmost_position_cycles_fastest() {
        let proto = prototype(&["a", "b"]);
        let mut odo: Odometer<'_, u64> = Odometer::new(&proto, 2).unwrap();

        let outputs: Vec<String> = std::iter::from_fn(|| odo.advance()).collect();
        assert_eq!(outputs, ["aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn test_three_digit_odometer_order() {
        let proto = prototype(&["0", "1"]);
        let mut odo: Odometer<'_, u64> = Odometer::new(&proto, 3).unwrap();

        let outputs: Vec<String> = std::iter::from_fn(|| odo.advance()).collect();
        assert_eq!(
            outputs,
            ["000", "001", "010", "011", "100", "101", "110", "111"]
        );
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let proto = prototype(&["x"]);
        let mut odo: Odometer<'_, u64> = Odometer::new(&proto, 1).unwrap();

        assert_eq!(odo.advance().as_deref(), Some("x"));
        assert_eq!(odo.advance(), None);
        assert_eq!(odo.advance(), None);
    }

    #[test]
    fn test_construction_rejects_zero_length() {
        let proto = prototype(&["a"]);
        let err = Odometer::<u64>::new(&proto, 0).unwrap_err();
        assert!(matches!(err, MangleError::InvalidLength { length: 0 }));
    }

    #[test]
    fn test_construction_rejects_empty_prototype() {
        let proto = prototype(&[]);
        let err = Odometer::<u64>::new(&proto, 3).unwrap_err();
        assert!(matches!(err, MangleError::NoPayloads { .. }));
    }

    #[test]
    fn test_native_width_overflow_is_an_error() {
        let payloads: Vec<String> = (0..16).map(|i| format!("{i:x}")).collect();
        let refs: Vec<&str> = payloads.iter().map(String::as_str).collect();
        let proto = prototype(&refs);

        let err = Odometer::<u64>::new(&proto, 17).unwrap_err();
        assert!(matches!(
            err,
            MangleError::SpaceTooLarge { payloads: 16, length: 17 }
        ));

        // The arbitrary-precision variant accepts the same space.
        assert!(Odometer::<BigUint>::new(&proto, 17).is_ok());
    }
}
