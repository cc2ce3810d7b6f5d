//! Native adapter for Watson values.
//!
//! Converts between [`watson_vm::Value`] and ordinary Rust data through an
//! explicit conversion table:
//!
//! - [`ToValue`]: native -> `Value` (primitives, strings, byte buffers,
//!   `Option`, string-keyed maps)
//! - [`FromValue`]: `Value` -> native, failing with [`ConvertError`] instead
//!   of coercing
//! - [`json`]: a bridge to `serde_json::Value`
//!
//! Types outside the table opt in by implementing the traits themselves.
//!
//! ```
//! use std::collections::BTreeMap;
//! use watson_vm_native::{from_value, to_value};
//!
//! let mut scores = BTreeMap::new();
//! scores.insert("alice".to_string(), 3i64);
//! let value = to_value(&scores);
//! let back: BTreeMap<String, i64> = from_value(&value).unwrap();
//! assert_eq!(back, scores);
//! ```

pub mod error;
pub mod from_value;
pub mod json;
pub mod to_value;

pub use error::{ConvertError, ConvertResult};
pub use from_value::{from_value, FromValue};
pub use json::{json_to_value, value_to_json};
pub use to_value::{to_value, ToValue};
