mod cli;
mod exits;
mod terminal;
mod tui;

use std::process;

use clap::Parser;

use cli::{CliFlags, Context, logging, prompts, quiet};

fn main() {
    exits::install_handlers();
    exits::harden();

    let flags = CliFlags::parse();
    quiet::set(flags.quiet);

    if let Err(e) = logging::init(flags.log.as_deref(), flags.verbose) {
        prompts::warn(&format!("{e:#}"));
    }

    if !quiet::is_interactive() {
        prompts::not_a_terminal();
        process::exit(1);
    }

    let context = Context::new(&flags);
    if let Err(e) = tui::run(&context.settings) {
        tracing::error!(error = %format!("{e:#}"), "session failed");
        prompts::error(&format!("{e:#}"));
        process::exit(1);
    }
}
