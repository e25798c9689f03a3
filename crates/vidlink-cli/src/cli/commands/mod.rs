//! CLI command handlers. Each command is in its own file.

mod batch;
mod check;
mod completions;
mod resolve;

pub use batch::run_batch;
pub use check::run_check;
pub use completions::run_completions;
pub use resolve::run_resolve;
