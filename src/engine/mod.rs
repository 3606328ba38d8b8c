//! Engine module: CLI, command handlers, progress and filesystem tools

pub mod arg_parser;
pub mod cli;
pub mod handlers;
pub mod progress;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::{Cli, Commands, SourceArgs, StageArgs};
pub use cli::{handle_run, setup_opts};
pub use handlers::{handle_stage, handle_validate};
pub use tools::{copy_file, copy_tree, is_directory, path_relative_to};
