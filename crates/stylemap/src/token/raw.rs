//! Unclassified tokens produced by the scanner.

use cssparser::Token;

/// Lexical category reported by the scanner.
///
/// Only [`PrimitiveKind::Whitespace`] affects parsing (it is filtered out);
/// the rest is kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Run of whitespace.
    Whitespace,
    /// Identifier such as `div` or `color`.
    Ident,
    /// `#name` hash token.
    Hash,
    /// `@name` keyword.
    AtKeyword,
    /// Quoted string, quotes included.
    QuotedString,
    /// Unquoted `url(...)`.
    Url,
    /// Number, percentage or dimension.
    Number,
    /// Function call including its arguments, e.g. `rgb(1, 2, 3)`.
    Function,
    /// Parenthesised or square-bracketed group.
    Group,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// Any other single punctuation, match operator or stray closing bracket.
    Delim,
    /// Unterminated string or malformed url.
    Bad,
}

impl PrimitiveKind {
    /// Categorise a `cssparser` token.
    pub(crate) fn of(token: &Token<'_>) -> Self {
        match token {
            Token::WhiteSpace(_) => Self::Whitespace,
            Token::Ident(_) => Self::Ident,
            Token::Hash(_) | Token::IDHash(_) => Self::Hash,
            Token::AtKeyword(_) => Self::AtKeyword,
            Token::QuotedString(_) => Self::QuotedString,
            Token::UnquotedUrl(_) => Self::Url,
            Token::Number { .. } | Token::Percentage { .. } | Token::Dimension { .. } => {
                Self::Number
            }
            Token::Function(_) => Self::Function,
            Token::ParenthesisBlock | Token::SquareBracketBlock => Self::Group,
            Token::CurlyBracketBlock => Self::OpenBrace,
            Token::CloseCurlyBracket => Self::CloseBrace,
            Token::Colon => Self::Colon,
            Token::Semicolon => Self::Semicolon,
            Token::Comma => Self::Comma,
            Token::BadUrl(_) | Token::BadString(_) => Self::Bad,
            _ => Self::Delim,
        }
    }

    /// Whether the token opens a nested block whose contents the scanner
    /// must consume as part of the same token.
    pub(crate) fn is_group(self) -> bool {
        matches!(self, Self::Function | Self::Group)
    }
}

/// A token as produced by the scanner: category, literal text and line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// Lexical category.
    pub kind: PrimitiveKind,
    /// Literal source text.
    pub text: String,
    /// Source line (1-indexed).
    pub line: u32,
}

impl RawToken {
    /// Create a raw token.
    pub fn new(kind: PrimitiveKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Whether the token is insignificant whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind == PrimitiveKind::Whitespace
    }
}
