//! Configuration loading and resolution utilities.
//!
//! `load` merges config files, `DROPSHEET__*` environment variables and CLI
//! flags, then returns a validated [`ResolvedConfig`] for the demo screen.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
