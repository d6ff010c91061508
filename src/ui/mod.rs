//! UI utilities for terminal output
//!
//! Progress spinners shown on stderr while network work is in flight.

mod spinner;

pub use spinner::{create_spinner, finish_spinner, finish_spinner_with_message, update_spinner};
