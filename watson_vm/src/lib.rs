//! Watson VM
//!
//! A codec between structured values and programs of zero-operand
//! instructions:
//!
//! - [`Value`]: the tagged data model (Int, Uint, Float, String, Object, Array, Bool, Nil)
//! - [`Op`]: the closed instruction set
//! - [`Vm`]: the stack machine that decodes an op stream back into a value
//! - [`Dumper`]: the encoder that compiles a value into its op stream
//!
//! ```
//! use watson_vm::{dump_to_vec, Value, Vm};
//!
//! let value = Value::object([("year", Value::Int(2021))]);
//! let mut vm = Vm::new();
//! vm.feed_multi(dump_to_vec(&value)).unwrap();
//! assert_eq!(vm.top().unwrap(), &value);
//! ```

// Library code reports through `Result` and `tracing`, never the terminal.
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]

pub mod config;
pub mod dumper;
pub mod error;
pub mod op;
pub mod sink;
pub mod value;
pub mod vm;

pub use config::VmConfig;
pub use dumper::{dump, dump_to_vec, Dumper};
pub use error::{ConfigError, UnknownOp, VmError, VmResult};
pub use op::Op;
pub use sink::{FnSink, OpSink};
pub use value::{Kind, Object, Value};
pub use vm::Vm;
