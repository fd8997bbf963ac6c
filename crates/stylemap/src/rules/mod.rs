//! Selector rules and the parsed stylesheet.

mod rule;
mod stylesheet;

pub use rule::{Rule, RuleType};
pub use stylesheet::{StyleMap, Stylesheet};
