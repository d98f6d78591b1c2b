//! Option input collection: files and interactive prompts.

pub mod file;
pub mod prompt;

pub use file::{load_options, LoadedRow};
pub use prompt::{DisplayChoice, Prompter};
