mod args;
mod context;
pub mod logging;
pub mod prompts;
pub mod quiet;

pub use args::CliFlags;
pub use context::Context;
