//! String operations for the VM.

// SAFETY: `c as u8` keeps the low 8 bits of the char code on purpose.
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]

use super::super::stack_ops::StackOps;
use super::super::Vm;
use crate::error::VmError;
use crate::op::Op;
use crate::value::Kind;

impl Vm {
    /// Sadd: pop a char code, append its low byte to the String below it.
    pub(in crate::vm) fn string_push_byte(&mut self, op: Op) -> Result<(), VmError> {
        self.stack
            .check_operands(op, &[Some(Kind::String), Some(Kind::Int)])?;
        let c = self.stack.pop_int(op)?;
        self.stack.top_bytes_mut(op)?.push(c as u8);
        Ok(())
    }
}
