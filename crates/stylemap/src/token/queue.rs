//! Ordered queue of classified tokens.

use super::kind::TokenKind;
use super::raw::RawToken;

/// A raw token paired with its semantic kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    /// The scanned token.
    pub raw: RawToken,
    /// Kind derived from the token's text.
    pub kind: TokenKind,
}

impl ClassifiedToken {
    /// Classify a raw token.
    pub fn new(raw: RawToken) -> Self {
        let kind = TokenKind::classify(&raw.text);
        Self { raw, kind }
    }

    /// Literal text of the token.
    pub fn text(&self) -> &str {
        &self.raw.text
    }

    /// Source line of the token (1-indexed).
    pub fn line(&self) -> u32 {
        self.raw.line
    }
}

/// Significant tokens in source order, consumed front to back.
///
/// The tokens are materialised up front; consuming one only advances the
/// underlying cursor.
#[derive(Debug, Clone, Default)]
pub struct TokenQueue {
    tokens: std::vec::IntoIter<ClassifiedToken>,
}

impl TokenQueue {
    /// Drain a token source into a queue, discarding whitespace.
    ///
    /// The source ending is the normal end of input, not an error.
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = RawToken>,
    {
        let tokens: Vec<_> = source
            .into_iter()
            .filter(|token| !token.is_whitespace())
            .map(ClassifiedToken::new)
            .collect();

        Self {
            tokens: tokens.into_iter(),
        }
    }

    /// Remove and return the front token.
    pub fn pop_front(&mut self) -> Option<ClassifiedToken> {
        self.tokens.next()
    }

    /// Peek at the front token without consuming it.
    pub fn front(&self) -> Option<&ClassifiedToken> {
        self.tokens.as_slice().first()
    }

    /// Number of tokens not yet consumed.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for TokenQueue {
    type Item = ClassifiedToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
