//! Stylesheet parsing.
//!
//! [`parse_str`] scans text, builds a [`TokenQueue`] and runs the rule state
//! machine over it. Parsing stops at the first [`SyntaxError`]; the
//! [`ParseReport`] keeps every rule committed before it.

mod error;
mod machine;
mod options;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use machine::{ParseReport, Parser};
pub use options::ParseOptions;

use crate::token::{Scanner, TokenQueue};

/// Parse stylesheet text.
pub fn parse_str(css: &str, options: &ParseOptions) -> ParseReport {
    parse_tokens(TokenQueue::from_source(Scanner::new(css)), options)
}

/// Run the state machine over an already built token queue.
pub fn parse_tokens(queue: TokenQueue, options: &ParseOptions) -> ParseReport {
    Parser::new(options.clone()).run(queue)
}
