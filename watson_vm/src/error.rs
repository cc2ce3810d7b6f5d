//! Error types for the Watson VM.

use thiserror::Error;

use crate::op::Op;
use crate::value::Kind;

/// Errors raised while executing an op.
///
/// A failed op leaves the stack exactly as it was, so the VM stays usable
/// after any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    /// Fewer values on the stack than the op consumes.
    /// `op` is `None` when the stack was read or popped outside of an op.
    #[error("{}: stack empty (needs {needed} operand(s), found {found})", op_label(.op))]
    StackEmpty {
        op: Option<Op>,
        needed: usize,
        found: usize,
    },

    /// All operands are present but one has the wrong kind.
    #[error("{op}: type mismatch (expected {expected}, got {found})")]
    TypeMismatch { op: Op, expected: Kind, found: Kind },

    /// Pushing would exceed the configured stack depth.
    /// `op` is `None` for values pushed directly by the host.
    #[error("{}: stack overflow (limit {limit})", op_label(.op))]
    StackOverflow { op: Option<Op>, limit: usize },
}

fn op_label(op: &Option<Op>) -> &'static str {
    op.map_or("stack", Op::name)
}

impl VmError {
    pub fn is_stack_empty(&self) -> bool {
        matches!(self, VmError::StackEmpty { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, VmError::TypeMismatch { .. })
    }

    /// The op that failed, if the error came from executing one.
    pub fn op(&self) -> Option<Op> {
        match self {
            VmError::StackEmpty { op, .. } | VmError::StackOverflow { op, .. } => *op,
            VmError::TypeMismatch { op, .. } => Some(*op),
        }
    }
}

/// Result type alias for VM operations
pub type VmResult<T> = Result<T, VmError>;

/// A mnemonic that names no op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown op mnemonic '{0}'")]
pub struct UnknownOp(pub String);

/// Invalid VM configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid VM config: {0}")]
    Parse(String),

    #[error("invalid VM config: max_stack_depth must be at least 1")]
    ZeroStackDepth,

    #[error("invalid VM config: initial_capacity {requested} exceeds {limit}")]
    CapacityTooLarge { requested: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VmError::StackEmpty {
            op: Some(Op::Iadd),
            needed: 2,
            found: 1,
        };
        assert_eq!(
            format!("{}", err),
            "Iadd: stack empty (needs 2 operand(s), found 1)"
        );

        let err = VmError::TypeMismatch {
            op: Op::Sadd,
            expected: Kind::Int,
            found: Kind::Nil,
        };
        assert_eq!(format!("{}", err), "Sadd: type mismatch (expected Int, got Nil)");

        let err = VmError::StackOverflow {
            op: Some(Op::Nnew),
            limit: 4,
        };
        assert_eq!(format!("{}", err), "Nnew: stack overflow (limit 4)");

        let err = VmError::StackEmpty {
            op: None,
            needed: 1,
            found: 0,
        };
        assert_eq!(
            format!("{}", err),
            "stack: stack empty (needs 1 operand(s), found 0)"
        );
    }

    #[test]
    fn test_error_predicates() {
        let empty = VmError::StackEmpty {
            op: Some(Op::Bneg),
            needed: 1,
            found: 0,
        };
        assert!(empty.is_stack_empty());
        assert!(!empty.is_type_mismatch());
        assert_eq!(empty.op(), Some(Op::Bneg));
    }
}
