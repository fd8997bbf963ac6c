//! Semantic token classification.

use std::fmt;

/// Semantic kind of a token, as understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    BlockStart,
    /// `}`
    BlockEnd,
    /// Reserved; never produced by [`TokenKind::classify`].
    RuleName,
    /// Any other text: selector names, property names and values.
    Value,
    /// `.` or `#` preceding a selector name.
    SelectorMarker,
    /// `:` between a property name and its value.
    StyleSeparator,
    /// `;`
    StatementEnd,
}

impl TokenKind {
    /// Classify a token by its literal text. Unknown text is a [`TokenKind::Value`].
    pub fn classify(text: &str) -> Self {
        match text {
            "{" => Self::BlockStart,
            "}" => Self::BlockEnd,
            ":" => Self::StyleSeparator,
            ";" => Self::StatementEnd,
            "." | "#" => Self::SelectorMarker,
            _ => Self::Value,
        }
    }

    /// Upper-case name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlockStart => "BLOCK_START",
            Self::BlockEnd => "BLOCK_END",
            Self::RuleName => "RULE_NAME",
            Self::Value => "VALUE",
            Self::SelectorMarker => "SELECTOR",
            Self::StyleSeparator => "STYLE_SEPARATOR",
            Self::StatementEnd => "STATEMENT_END",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
