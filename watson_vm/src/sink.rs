//! Op sink - where a [`Dumper`](crate::Dumper) writes its output.
//!
//! A sink accepts one op at a time, in order, and may refuse any write. The
//! textual writer that turns ops into characters lives outside this crate and
//! plugs in here.

use std::convert::Infallible;
use std::fmt;

use crate::op::Op;

pub trait OpSink {
    type Error;

    fn write_op(&mut self, op: Op) -> Result<(), Self::Error>;
}

impl OpSink for Vec<Op> {
    type Error = Infallible;

    fn write_op(&mut self, op: Op) -> Result<(), Self::Error> {
        self.push(op);
        Ok(())
    }
}

impl<S: OpSink + ?Sized> OpSink for &mut S {
    type Error = S::Error;

    fn write_op(&mut self, op: Op) -> Result<(), Self::Error> {
        (**self).write_op(op)
    }
}

/// Adapts a closure into an [`OpSink`].
///
/// ```
/// use watson_vm::{FnSink, Op, OpSink};
///
/// let mut count = 0;
/// let mut sink = FnSink::new(|_op: Op| -> Result<(), ()> {
///     count += 1;
///     Ok(())
/// });
/// sink.write_op(Op::Inew).unwrap();
/// drop(sink);
/// assert_eq!(count, 1);
/// ```
pub struct FnSink<F>(F);

impl<F> FnSink<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }

    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}

impl<F, E> OpSink for FnSink<F>
where
    F: FnMut(Op) -> Result<(), E>,
{
    type Error = E;

    fn write_op(&mut self, op: Op) -> Result<(), Self::Error> {
        (self.0)(op)
    }
}
