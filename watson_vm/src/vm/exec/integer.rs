//! Integer operations for the VM.
//!
//! All arithmetic is two's-complement modulo 2^64: overflow wraps and never
//! traps.

// SAFETY: the i64 -> u64 casts below reinterpret the bit pattern on purpose.
#![allow(clippy::cast_sign_loss)]

use super::super::stack_ops::StackOps;
use super::super::Vm;
use crate::error::VmError;
use crate::op::Op;
use crate::value::{Kind, Value};

/// `value << shift` for `shift >= 0`, arithmetic `value >> -shift` otherwise.
///
/// Shifting left by 64 or more clears every bit; shifting right by 64 or
/// more leaves only the sign fill (`0` or `-1`).
pub(in crate::vm) fn shift(value: i64, shift: i64) -> i64 {
    if shift >= 0 {
        if shift >= 64 {
            0
        } else {
            value << shift
        }
    } else {
        let amount = shift.unsigned_abs();
        if amount >= 64 {
            value >> 63
        } else {
            value >> amount
        }
    }
}

impl Vm {
    /// Replace the top Int with `f(v)`.
    pub(in crate::vm) fn int_unary(
        &mut self,
        op: Op,
        f: impl FnOnce(i64) -> i64,
    ) -> Result<(), VmError> {
        let v = self.stack.top_int_mut(op)?;
        *v = f(*v);
        Ok(())
    }

    /// Pop `b`, then replace `a` with `f(a, b)`.
    pub(in crate::vm) fn int_binary(
        &mut self,
        op: Op,
        f: impl FnOnce(i64, i64) -> i64,
    ) -> Result<(), VmError> {
        self.stack
            .check_operands(op, &[Some(Kind::Int), Some(Kind::Int)])?;
        let b = self.stack.pop_int(op)?;
        let a = self.stack.top_int_mut(op)?;
        *a = f(*a, b);
        Ok(())
    }

    /// Replace the top Int with a value built from its raw 64-bit pattern.
    pub(in crate::vm) fn int_reinterpret(
        &mut self,
        op: Op,
        f: impl FnOnce(u64) -> Value,
    ) -> Result<(), VmError> {
        let bits = *self.stack.top_int_mut(op)? as u64;
        if let Some(top) = self.stack.last_mut() {
            *top = f(bits);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_in_range() {
        assert_eq!(shift(0xabcd0, 4), 0xabcd00);
        assert_eq!(shift(0xabcd0, -4), 0xabcd);
        assert_eq!(shift(5, 0), 5);
    }

    #[test]
    fn test_shift_is_arithmetic_right() {
        assert_eq!(shift(-16, -2), -4);
        assert_eq!(shift(i64::MIN, -63), -1);
    }

    #[test]
    fn test_shift_out_of_range() {
        assert_eq!(shift(1, 64), 0);
        assert_eq!(shift(-1, 1000), 0);
        assert_eq!(shift(12345, -64), 0);
        assert_eq!(shift(-12345, -64), -1);
        assert_eq!(shift(-12345, i64::MIN), -1);
    }

    #[test]
    fn test_shift_left_wraps_into_sign_bit() {
        assert_eq!(shift(1, 63), i64::MIN);
        assert_eq!(shift(3, 63), i64::MIN);
    }
}
