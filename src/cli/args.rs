use std::path::PathBuf;

use clap::Parser;

use entropass::Settings;

/// Move the mouse to collect randomness; the password locks in once the meter
/// is full.
#[derive(Debug, Default, Parser)]
#[command(name = "entropass", version, about)]
pub struct CliFlags {
    /// Password length (8-32)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Where Shift+D writes the password
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Ignore saved settings for this run
    #[arg(short, long)]
    pub default: bool,

    /// Save the effective settings as the new defaults
    #[arg(short, long)]
    pub save: bool,

    /// Append logs to FILE (filter with ENTROPASS_LOG)
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Log at info level instead of warn
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// Overlay explicit flags onto `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(length) = self.length {
            settings.length = length;
        }
        if self.no_upper {
            settings.uppercase = false;
        }
        if self.no_lower {
            settings.lowercase = false;
        }
        if self.no_digits {
            settings.digits = false;
        }
        if self.no_symbols {
            settings.symbols = false;
        }
        if let Some(ref path) = self.output {
            settings.export_file = path.clone();
        }
    }
}
