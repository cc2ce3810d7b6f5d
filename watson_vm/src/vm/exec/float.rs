//! Float operations for the VM.

use super::super::stack_ops::StackOps;
use super::super::Vm;
use crate::error::VmError;
use crate::op::Op;

impl Vm {
    /// Flip the sign bit of the top Float. NaN and infinities flip too.
    pub(in crate::vm) fn float_negate(&mut self, op: Op) -> Result<(), VmError> {
        let f = self.stack.top_float_mut(op)?;
        *f = -*f;
        Ok(())
    }
}
