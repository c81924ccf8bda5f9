//! Command implementations for audit-cli

pub mod check;
pub mod clean;
pub mod resolve;
pub mod upload;

pub use check::run_check;
pub use clean::run_clean;
pub use resolve::run_resolve;
pub use upload::run_upload;
