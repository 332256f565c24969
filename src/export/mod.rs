//! Getting the current password out: clipboard and plain-text file.

mod clipboard;
mod file;

pub use clipboard::{ClipboardSink, SystemClipboard, copy_password};
pub use file::write_password;
