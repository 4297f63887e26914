//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no probing, no server calls.

pub mod progress;
pub mod status;
pub mod tables;

pub use progress::PullProgressBar;
pub use status::{HardwareText, StatusText, format_status};
pub use tables::{format_size_gb, print_separator, truncate_string};
