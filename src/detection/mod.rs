//! Detection implementation submodule.
//!
//! - `rules`: the ordered pattern table and single-candidate matching
//! - `client_hints`: `Sec-CH-UA` header parsing into brand claims

mod client_hints;
mod rules;

pub use client_hints::parse_client_hints;
pub use rules::{match_candidate, rules, Rule};
