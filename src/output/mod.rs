//! Output of resolved values.
//!
//! - [`json`] - JSON rendering for the VPN engine
//! - [`template`] - text helpers for the config templates

mod json;
mod template;

pub use json::values_to_json;
pub use template::{DefaultTemplateHelpers, TemplateHelpers};
