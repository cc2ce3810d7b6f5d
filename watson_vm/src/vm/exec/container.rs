//! Object and Array operations for the VM.
//!
//! The inserted value is moved off the stack into the container and is not
//! shared with anything else.

use super::super::stack_ops::{StackOps, ANY};
use super::super::Vm;
use crate::error::VmError;
use crate::op::Op;
use crate::value::Kind;

impl Vm {
    /// Oadd: pop value, pop key, insert into the Object below them.
    /// An existing entry under the same key is replaced.
    pub(in crate::vm) fn object_insert(&mut self, op: Op) -> Result<(), VmError> {
        self.stack
            .check_operands(op, &[Some(Kind::Object), Some(Kind::String), ANY])?;
        let value = self.stack.pop_value(op)?;
        let key = self.stack.pop_bytes(op)?;
        self.stack.top_object_mut(op)?.insert(key, value);
        Ok(())
    }

    /// Aadd: pop value, append it to the Array below it.
    pub(in crate::vm) fn array_append(&mut self, op: Op) -> Result<(), VmError> {
        self.stack.check_operands(op, &[Some(Kind::Array), ANY])?;
        let value = self.stack.pop_value(op)?;
        self.stack.top_array_mut(op)?.push(value);
        Ok(())
    }
}
