// src/reporting/mod.rs
//! Terminal and JSON rendering.

pub mod console;
pub mod json;
mod shared;

pub use console::{print_banner, print_batch, print_notice, print_result, print_rules, print_tips};
pub use json::{print_json, to_json};
