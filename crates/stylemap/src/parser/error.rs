//! Syntax errors raised by the rule state machine.

/// What went wrong at a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A value token followed a token no rule covers.
    #[error("invalid syntax")]
    InvalidSyntax,
    /// `{` without a selector right before it.
    #[error("block is missing rule identifier")]
    MissingRuleIdentifier,
    /// `;` without a complete `property: value` pair before it.
    #[error("expected style before semicolon")]
    ExpectedStyle,
    /// `}` with no open block.
    #[error("rule block ends without a beginning")]
    UnopenedBlock,
    /// Input ended inside a block (strict mode only).
    #[error("block is never closed")]
    UnclosedBlock,
}

/// A syntax error with the source line of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// Line number where the error occurred (1-indexed).
    pub line: u32,
}

impl SyntaxError {
    /// Create a syntax error at a line.
    pub fn new(kind: SyntaxErrorKind, line: u32) -> Self {
        Self { kind, line }
    }
}
