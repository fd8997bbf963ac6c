//! Stylesheet text to selector/property lookup tables.
//!
//! This crate parses a small subset of CSS into a [`Stylesheet`]: a map from
//! simple selectors (`div`, `.class`, `#id`) to the properties declared for
//! them, so styling information can be looked up without re-parsing text.
//!
//! - **Scanning**: `cssparser` splits the text into primitive tokens
//! - **Parsing**: a state machine keyed on the previous token's kind builds
//!   the rule map, merging repeated selectors
//! - **Interpretation**: raw values can be turned into typed [`style::Style`]s
//!
//! Selector combinators, selector lists, at-rules and `!important` are not
//! understood; values are kept as the literal text they were written with.
//!
//! # Example
//!
//! ```ignore
//! use stylemap::prelude::*;
//!
//! let sheet = unmarshal(b"p { color: red; } .note { width: 10px; }")?;
//! assert_eq!(sheet.property("p", "color"), Some("red"));
//!
//! let width = css_style("width", sheet.get(".note").unwrap())?;
//! ```

pub mod logging;
pub mod parser;
pub mod rules;
pub mod style;
pub mod token;

mod error;

pub use error::{Error, Result};
pub use parser::{ParseOptions, ParseReport};
pub use rules::{Rule, RuleType, StyleMap, Stylesheet};

/// Parse a complete stylesheet buffer.
///
/// Returns the first syntax error if the input is malformed. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn unmarshal(bytes: &[u8]) -> Result<Stylesheet> {
    unmarshal_with(bytes, &ParseOptions::default()).into_result()
}

/// Parse a stylesheet buffer, keeping the rules committed before any error.
pub fn unmarshal_with(bytes: &[u8], options: &ParseOptions) -> ParseReport {
    let css = String::from_utf8_lossy(bytes);
    parser::parse_str(&css, options)
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::parser::{ParseOptions, ParseReport, SyntaxError, SyntaxErrorKind};
    pub use crate::rules::{Rule, RuleType, StyleMap, Stylesheet};
    pub use crate::style::{Color, Length, Style, StyleTable, css_style};
    pub use crate::{Error, Result, unmarshal, unmarshal_with};
}
