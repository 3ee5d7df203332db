/// CLI layer: argument parsing and tabular output.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{OutputCtx, write_error};
