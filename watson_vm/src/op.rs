//! Op - the closed Watson instruction set.
//!
//! Every op is zero-operand: what it does depends only on the stack it
//! runs against. The mnemonic (`Inew`, `Sadd`, ...) is the variant name and is
//! what `Display`, `FromStr` and serde use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownOp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    // integers
    Inew, // push Int(0)
    Iinc, // v + 1
    Ishl, // v << 1
    Iadd, // a + b
    Ineg, // -v
    Isht, // value << shift, or >> when shift < 0
    Itou, // Int bits -> Uint
    Itof, // Int bits -> Float
    // floats
    Fneg, // flip sign bit
    Fnan, // push NaN
    Finf, // push +Inf
    // strings
    Snew, // push ""
    Sadd, // append one byte
    // objects
    Onew, // push {}
    Oadd, // insert key/value
    // arrays
    Anew, // push []
    Aadd, // append element
    // bools
    Bnew, // push false
    Bneg, // !b
    // nil
    Nnew, // push nil
}

impl Op {
    /// Every op, in declaration order.
    pub const ALL: [Op; 20] = [
        Op::Inew,
        Op::Iinc,
        Op::Ishl,
        Op::Iadd,
        Op::Ineg,
        Op::Isht,
        Op::Itou,
        Op::Itof,
        Op::Fneg,
        Op::Fnan,
        Op::Finf,
        Op::Snew,
        Op::Sadd,
        Op::Onew,
        Op::Oadd,
        Op::Anew,
        Op::Aadd,
        Op::Bnew,
        Op::Bneg,
        Op::Nnew,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Op::Inew => "Inew",
            Op::Iinc => "Iinc",
            Op::Ishl => "Ishl",
            Op::Iadd => "Iadd",
            Op::Ineg => "Ineg",
            Op::Isht => "Isht",
            Op::Itou => "Itou",
            Op::Itof => "Itof",
            Op::Fneg => "Fneg",
            Op::Fnan => "Fnan",
            Op::Finf => "Finf",
            Op::Snew => "Snew",
            Op::Sadd => "Sadd",
            Op::Onew => "Onew",
            Op::Oadd => "Oadd",
            Op::Anew => "Anew",
            Op::Aadd => "Aadd",
            Op::Bnew => "Bnew",
            Op::Bneg => "Bneg",
            Op::Nnew => "Nnew",
        }
    }

    /// Number of stack operands the op consumes.
    pub fn arity(self) -> usize {
        match self {
            Op::Inew | Op::Fnan | Op::Finf | Op::Snew | Op::Onew | Op::Anew | Op::Bnew
            | Op::Nnew => 0,
            Op::Iinc | Op::Ishl | Op::Ineg | Op::Itou | Op::Itof | Op::Fneg | Op::Bneg => 1,
            Op::Iadd | Op::Isht | Op::Sadd | Op::Aadd => 2,
            Op::Oadd => 3,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Op {
    type Err = UnknownOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOp(s.to_string()))
    }
}
