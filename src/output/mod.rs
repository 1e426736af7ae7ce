//! Rendering of comparison reports for front ends.

pub mod json;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_report;
