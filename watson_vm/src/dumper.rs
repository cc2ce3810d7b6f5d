//! Dumper - compiles a [`Value`] into the op sequence that rebuilds it.
//!
//! Feeding the emitted ops into a fresh [`Vm`](crate::Vm) leaves a value equal
//! to the input on top of the stack. Ops go to the sink one at a time; the
//! first sink error aborts the dump and is returned unchanged. Whatever was
//! written before that point is not a valid program.

// SAFETY: Int payloads are dumped through their two's-complement bit pattern,
// so the i64 -> u64 cast is a deliberate reinterpretation.
#![allow(clippy::cast_sign_loss)]

use std::convert::Infallible;

use tracing::trace;

use crate::op::Op;
use crate::sink::OpSink;
use crate::value::{Object, Value};

#[derive(Debug)]
pub struct Dumper<S> {
    sink: S,
}

impl<S: OpSink> Dumper<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Write the ops that reconstruct `value`.
    pub fn dump(&mut self, value: &Value) -> Result<(), S::Error> {
        match value {
            Value::Int(n) => self.dump_int(*n as u64),
            Value::Uint(n) => self.dump_uint(*n),
            Value::Float(x) => self.dump_float(*x),
            Value::String(s) => self.dump_string(s),
            Value::Object(obj) => self.dump_object(obj),
            Value::Array(arr) => self.dump_array(arr),
            Value::Bool(b) => self.dump_bool(*b),
            Value::Nil => self.emit(Op::Nnew),
        }
    }

    fn emit(&mut self, op: Op) -> Result<(), S::Error> {
        trace!(%op, "emit");
        self.sink.write_op(op)
    }

    /// Writes out a number from the most-significant to the least-significant
    /// bit: `Inew`, then `Iinc` for the leading one, then one `Ishl` per
    /// remaining bit followed by `Iinc` where that bit is set.
    fn dump_int(&mut self, n: u64) -> Result<(), S::Error> {
        self.emit(Op::Inew)?;
        if n == 0 {
            return Ok(());
        }

        let msb = 63 - n.leading_zeros();
        // The leading bit is 1 by construction.
        self.emit(Op::Iinc)?;
        for i in (0..msb).rev() {
            self.emit(Op::Ishl)?;
            if n & (1 << i) != 0 {
                self.emit(Op::Iinc)?;
            }
        }
        Ok(())
    }

    fn dump_uint(&mut self, n: u64) -> Result<(), S::Error> {
        self.dump_int(n)?;
        self.emit(Op::Itou)
    }

    fn dump_float(&mut self, x: f64) -> Result<(), S::Error> {
        if x.is_nan() {
            self.emit(Op::Fnan)
        } else if x == f64::INFINITY {
            self.emit(Op::Finf)
        } else if x == f64::NEG_INFINITY {
            self.emit(Op::Finf)?;
            self.emit(Op::Fneg)
        } else {
            self.dump_int(x.to_bits())?;
            self.emit(Op::Itof)
        }
    }

    fn dump_string(&mut self, s: &[u8]) -> Result<(), S::Error> {
        self.emit(Op::Snew)?;
        for &c in s {
            self.dump_int(u64::from(c))?;
            self.emit(Op::Sadd)?;
        }
        Ok(())
    }

    fn dump_object(&mut self, obj: &Object) -> Result<(), S::Error> {
        self.emit(Op::Onew)?;
        for (k, v) in obj {
            self.dump_string(k)?;
            self.dump(v)?;
            self.emit(Op::Oadd)?;
        }
        Ok(())
    }

    fn dump_array(&mut self, arr: &[Value]) -> Result<(), S::Error> {
        self.emit(Op::Anew)?;
        for v in arr {
            self.dump(v)?;
            self.emit(Op::Aadd)?;
        }
        Ok(())
    }

    fn dump_bool(&mut self, b: bool) -> Result<(), S::Error> {
        self.emit(Op::Bnew)?;
        if b {
            self.emit(Op::Bneg)?;
        }
        Ok(())
    }
}

/// Dump `value` into `sink`.
pub fn dump<S: OpSink>(value: &Value, sink: S) -> Result<(), S::Error> {
    Dumper::new(sink).dump(value)
}

/// Dump `value` into a fresh op vector.
pub fn dump_to_vec(value: &Value) -> Vec<Op> {
    let mut ops = Vec::new();
    let result: Result<(), Infallible> = dump(value, &mut ops);
    match result {
        Ok(()) => ops,
        Err(never) => match never {},
    }
}
