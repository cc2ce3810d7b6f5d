//! Bool operations for the VM.

use super::super::stack_ops::StackOps;
use super::super::Vm;
use crate::error::VmError;
use crate::op::Op;

impl Vm {
    pub(in crate::vm) fn bool_negate(&mut self, op: Op) -> Result<(), VmError> {
        let b = self.stack.top_bool_mut(op)?;
        *b = !*b;
        Ok(())
    }
}
