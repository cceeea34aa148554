//! Askwell Core - validation rules for interactive prompts
//!
//! This crate holds everything about prompting that does not touch a
//! terminal or the process: which answers are acceptable, how an accepted
//! answer becomes a typed value, how a menu option is reduced to an answer
//! and which farewell message belongs to which module.

pub mod answer;
pub mod choice;
pub mod errors;
pub mod farewell;
pub mod numeric;
pub mod validation;

pub use answer::{Answer, ReturnType};
pub use choice::{Extract, DEFAULT_CHOICES};
pub use errors::{Error, Result};
pub use farewell::{FarewellTable, DEFAULT_ERROR_REPORT, DEFAULT_FAREWELL};
pub use validation::{ValidationKind, ValidationSpec, Validator};
