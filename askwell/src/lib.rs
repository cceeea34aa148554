//! Validated interactive prompts with a uniform cancel-and-exit protocol.
//!
//! ```no_run
//! use askwell::{Prompter, PromptRequest, RealProcess, RequesttyRenderer, ValidationSpec};
//!
//! # fn main() -> askwell::Result<()> {
//! let prompter = Prompter::new(&RequesttyRenderer, &RealProcess).with_module("grade_calculator");
//! let grade = prompter.ask_text(
//!     PromptRequest::new("Grade: ").spec(ValidationSpec::FloatInRange { min: 0.0, max: 10.0 }),
//! )?;
//! println!("{grade}");
//! # Ok(())
//! # }
//! ```

mod config;
mod data;
pub mod dialog;
mod error;
pub mod interceptor;
pub mod process;
mod prompter;
pub mod renderer;

pub use askwell_core::{
    Answer, Extract, FarewellTable, ReturnType, ValidationKind, ValidationSpec, Validator,
    DEFAULT_CHOICES, DEFAULT_ERROR_REPORT, DEFAULT_FAREWELL,
};
pub use config::{Config, NamedValidator, Settings, DEFAULT_FAREWELLS, DEFAULT_VALIDATORS};
pub use data::CmdExit;
pub use error::{Error, Result};
pub use process::{MockExit, MockProcess, Process, RealProcess, EXIT_ERROR, EXIT_OK};
pub use prompter::{
    ConfirmRequest, PromptRequest, Prompter, SelectRequest, DEFAULT_EXIT_PAUSE,
    DEFAULT_SELECT_MESSAGE,
};
pub use renderer::{MockRenderer, Renderer, Reply, RequesttyRenderer};
