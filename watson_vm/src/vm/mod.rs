//! The Watson stack machine.
//!
//! A `Vm` owns a stack of [`Value`]s and executes one [`Op`] at a time
//! against it. Op families live in `exec/`; this module holds the VM state,
//! the dispatch table and the public feed/top API.

mod exec;
pub(crate) mod stack_ops;

use tracing::{debug, trace};

use crate::config::VmConfig;
use crate::error::{VmError, VmResult};
use crate::op::Op;
use crate::sink::OpSink;
use crate::value::Value;

const EMPTY_STACK: VmError = VmError::StackEmpty {
    op: None,
    needed: 1,
    found: 0,
};

#[derive(Debug, Clone)]
pub struct Vm {
    stack: Vec<Value>,
    config: VmConfig,
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

impl Vm {
    pub fn new() -> Self {
        Self::with_config(VmConfig::default())
    }

    pub fn with_config(config: VmConfig) -> Self {
        Self {
            stack: Vec::with_capacity(config.reserved_capacity()),
            config,
        }
    }

    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    /// Index of the top slot; `-1` when the stack is empty.
    pub fn sp(&self) -> isize {
        self.stack.len() as isize - 1
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Read-only view of the stack, bottom first.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Execute one op.
    pub fn feed(&mut self, op: Op) -> VmResult<()> {
        let result = self.execute(op);
        match &result {
            Ok(()) => trace!(%op, sp = self.sp(), "fed op"),
            Err(err) => debug!(%op, %err, "op rejected"),
        }
        result
    }

    /// Execute ops left to right, stopping at the first error.
    ///
    /// Ops executed before the failing one stay applied.
    pub fn feed_multi<I>(&mut self, ops: I) -> VmResult<()>
    where
        I: IntoIterator<Item = Op>,
    {
        for (index, op) in ops.into_iter().enumerate() {
            if let Err(err) = self.feed(op) {
                debug!(index, %err, "feed_multi halted");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Execute ops delivered by a fallible source (typically a parser),
    /// aborting at the first source error or VM error.
    pub fn feed_source<I, E>(&mut self, ops: I) -> Result<(), E>
    where
        I: IntoIterator<Item = Result<Op, E>>,
        E: From<VmError>,
    {
        for op in ops {
            self.feed(op?)?;
        }
        Ok(())
    }

    /// The value at `sp`, without removing it.
    pub fn top(&self) -> VmResult<&Value> {
        self.stack.last().ok_or(EMPTY_STACK)
    }

    /// Consume the VM and return its top value.
    pub fn into_top(mut self) -> VmResult<Value> {
        self.stack.pop().ok_or(EMPTY_STACK)
    }

    /// Push a value directly, bypassing op execution.
    pub fn push(&mut self, value: Value) -> VmResult<()> {
        self.push_checked(None, value)
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> VmResult<Value> {
        self.stack.pop().ok_or(EMPTY_STACK)
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    fn push_checked(&mut self, op: Option<Op>, value: Value) -> VmResult<()> {
        if let Some(limit) = self.config.max_stack_depth {
            if self.stack.len() >= limit {
                return Err(VmError::StackOverflow { op, limit });
            }
        }
        self.stack.push(value);
        Ok(())
    }

    fn push_new(&mut self, op: Op, value: Value) -> VmResult<()> {
        self.push_checked(Some(op), value)
    }

    fn execute(&mut self, op: Op) -> VmResult<()> {
        match op {
            Op::Inew => self.push_new(op, Value::Int(0)),
            Op::Iinc => self.int_unary(op, |v| v.wrapping_add(1)),
            Op::Ishl => self.int_unary(op, |v| v.wrapping_shl(1)),
            Op::Iadd => self.int_binary(op, i64::wrapping_add),
            Op::Ineg => self.int_unary(op, i64::wrapping_neg),
            Op::Isht => self.int_binary(op, exec::shift),
            Op::Itou => self.int_reinterpret(op, Value::Uint),
            Op::Itof => self.int_reinterpret(op, |bits| Value::Float(f64::from_bits(bits))),
            Op::Fneg => self.float_negate(op),
            Op::Fnan => self.push_new(op, Value::Float(f64::NAN)),
            Op::Finf => self.push_new(op, Value::Float(f64::INFINITY)),
            Op::Snew => self.push_new(op, Value::String(Vec::new())),
            Op::Sadd => self.string_push_byte(op),
            Op::Onew => self.push_new(op, Value::Object(Default::default())),
            Op::Oadd => self.object_insert(op),
            Op::Anew => self.push_new(op, Value::Array(Vec::new())),
            Op::Aadd => self.array_append(op),
            Op::Bnew => self.push_new(op, Value::Bool(false)),
            Op::Bneg => self.bool_negate(op),
            Op::Nnew => self.push_new(op, Value::Nil),
        }
    }
}

/// A VM accepts ops directly, so a dumper can decode straight into it.
impl OpSink for Vm {
    type Error = VmError;

    fn write_op(&mut self, op: Op) -> Result<(), Self::Error> {
        self.feed(op)
    }
}
