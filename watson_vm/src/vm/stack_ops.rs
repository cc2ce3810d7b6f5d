//! Stack operations trait for the VM.
//!
//! Ops validate every operand before touching the stack: `check_operands`
//! peeks at the top `n` slots, and the `pop_*` methods run only after it
//! succeeds. A failed op leaves the stack as it was.

use crate::error::VmError;
use crate::op::Op;
use crate::value::{Kind, Object, Value};

/// Operand requirement for one stack slot.
pub(crate) type Operand = Option<Kind>;

/// Any kind accepted.
pub(crate) const ANY: Operand = None;

/// Typed stack access used by the op implementations.
///
/// Implemented for `Vec<Value>`; operands are listed bottom to top, the same
/// order they were pushed in.
pub(crate) trait StackOps {
    /// Check that the top `operands.len()` slots exist and have the listed
    /// kinds. Arity is checked first, then kinds from bottom to top.
    fn check_operands(&self, op: Op, operands: &[Operand]) -> Result<(), VmError>;

    /// Pop any value.
    fn pop_value(&mut self, op: Op) -> Result<Value, VmError>;

    /// Pop an Int.
    fn pop_int(&mut self, op: Op) -> Result<i64, VmError>;

    /// Pop a String's bytes.
    fn pop_bytes(&mut self, op: Op) -> Result<Vec<u8>, VmError>;

    /// Borrow the top Int in place.
    fn top_int_mut(&mut self, op: Op) -> Result<&mut i64, VmError>;

    /// Borrow the top Float in place.
    fn top_float_mut(&mut self, op: Op) -> Result<&mut f64, VmError>;

    /// Borrow the top Bool in place.
    fn top_bool_mut(&mut self, op: Op) -> Result<&mut bool, VmError>;

    /// Borrow the top String in place.
    fn top_bytes_mut(&mut self, op: Op) -> Result<&mut Vec<u8>, VmError>;

    /// Borrow the top Object in place.
    fn top_object_mut(&mut self, op: Op) -> Result<&mut Object, VmError>;

    /// Borrow the top Array in place.
    fn top_array_mut(&mut self, op: Op) -> Result<&mut Vec<Value>, VmError>;
}

fn empty(op: Op, needed: usize, found: usize) -> VmError {
    VmError::StackEmpty {
        op: Some(op),
        needed,
        found,
    }
}

fn mismatch(op: Op, expected: Kind, found: &Value) -> VmError {
    VmError::TypeMismatch {
        op,
        expected,
        found: found.kind(),
    }
}

impl StackOps for Vec<Value> {
    fn check_operands(&self, op: Op, operands: &[Operand]) -> Result<(), VmError> {
        let needed = operands.len();
        if self.len() < needed {
            return Err(empty(op, needed, self.len()));
        }
        let base = self.len() - needed;
        for (slot, expected) in self[base..].iter().zip(operands) {
            if let Some(kind) = expected {
                if slot.kind() != *kind {
                    return Err(mismatch(op, *kind, slot));
                }
            }
        }
        Ok(())
    }

    #[inline]
    fn pop_value(&mut self, op: Op) -> Result<Value, VmError> {
        self.pop().ok_or_else(|| empty(op, 1, 0))
    }

    #[inline]
    fn pop_int(&mut self, op: Op) -> Result<i64, VmError> {
        self.check_operands(op, &[Some(Kind::Int)])?;
        match self.pop_value(op)? {
            Value::Int(v) => Ok(v),
            other => Err(mismatch(op, Kind::Int, &other)),
        }
    }

    #[inline]
    fn pop_bytes(&mut self, op: Op) -> Result<Vec<u8>, VmError> {
        self.check_operands(op, &[Some(Kind::String)])?;
        match self.pop_value(op)? {
            Value::String(s) => Ok(s),
            other => Err(mismatch(op, Kind::String, &other)),
        }
    }

    #[inline]
    fn top_int_mut(&mut self, op: Op) -> Result<&mut i64, VmError> {
        match self.last_mut() {
            Some(Value::Int(v)) => Ok(v),
            Some(other) => Err(mismatch(op, Kind::Int, other)),
            None => Err(empty(op, 1, 0)),
        }
    }

    #[inline]
    fn top_float_mut(&mut self, op: Op) -> Result<&mut f64, VmError> {
        match self.last_mut() {
            Some(Value::Float(v)) => Ok(v),
            Some(other) => Err(mismatch(op, Kind::Float, other)),
            None => Err(empty(op, 1, 0)),
        }
    }

    #[inline]
    fn top_bool_mut(&mut self, op: Op) -> Result<&mut bool, VmError> {
        match self.last_mut() {
            Some(Value::Bool(v)) => Ok(v),
            Some(other) => Err(mismatch(op, Kind::Bool, other)),
            None => Err(empty(op, 1, 0)),
        }
    }

    #[inline]
    fn top_bytes_mut(&mut self, op: Op) -> Result<&mut Vec<u8>, VmError> {
        match self.last_mut() {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(mismatch(op, Kind::String, other)),
            None => Err(empty(op, 1, 0)),
        }
    }

    #[inline]
    fn top_object_mut(&mut self, op: Op) -> Result<&mut Object, VmError> {
        match self.last_mut() {
            Some(Value::Object(o)) => Ok(o),
            Some(other) => Err(mismatch(op, Kind::Object, other)),
            None => Err(empty(op, 1, 0)),
        }
    }

    #[inline]
    fn top_array_mut(&mut self, op: Op) -> Result<&mut Vec<Value>, VmError> {
        match self.last_mut() {
            Some(Value::Array(a)) => Ok(a),
            Some(other) => Err(mismatch(op, Kind::Array, other)),
            None => Err(empty(op, 1, 0)),
        }
    }
}
