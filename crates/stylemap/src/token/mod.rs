//! Tokens consumed by the stylesheet parser.
//!
//! Text flows through three stages before the state machine sees it:
//!
//! 1. [`Scanner`] splits the input into [`RawToken`]s using `cssparser`.
//! 2. [`TokenKind::classify`] maps each token's literal text to a semantic kind.
//! 3. [`TokenQueue`] drops whitespace and keeps the classified tokens in order.

mod kind;
mod queue;
mod raw;
mod scanner;

pub use kind::TokenKind;
pub use queue::{ClassifiedToken, TokenQueue};
pub use raw::{PrimitiveKind, RawToken};
pub use scanner::Scanner;
