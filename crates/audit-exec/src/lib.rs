//! External command execution seam for Package Audit
//!
//! Everything the tool runs outside its own process goes through the
//! [`CommandRunner`] trait: one blocking invocation, combined
//! stdout/stderr captured as text. Pipeline code depends on the trait,
//! so tests substitute [`mock::ScriptedRunner`] for the real thing.

pub mod error;
pub mod mock;
pub mod runner;

pub use error::{ExecError, Result};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
