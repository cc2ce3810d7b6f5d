//! Op implementations, grouped by the kind they operate on.
//!
//! - `integer.rs`: Iinc, Ishl, Iadd, Ineg, Isht, Itou, Itof
//! - `float.rs`: Fneg
//! - `string.rs`: Sadd
//! - `container.rs`: Oadd, Aadd
//! - `scalar.rs`: Bneg
//!
//! Ops that only push a fresh value (Inew, Fnan, Snew, ...) are handled by
//! the dispatch table in `vm/mod.rs`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod container;
mod float;
mod integer;
mod scalar;
mod string;

pub(super) use integer::shift;
