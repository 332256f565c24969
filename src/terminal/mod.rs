//! Shared terminal utilities.
//!
//! Box drawing, the meter bar, and terminal session management.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
