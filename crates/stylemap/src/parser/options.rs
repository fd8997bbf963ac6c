//! Parser configuration.

/// Options controlling how strictly stylesheets are parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject input that ends while a block is still open.
    ///
    /// Off by default: an unterminated block is silently dropped.
    pub strict_blocks: bool,
}

impl ParseOptions {
    /// Lenient defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject unterminated blocks.
    pub fn strict() -> Self {
        Self::default().strict_blocks(true)
    }

    /// Set whether unterminated blocks are an error.
    pub fn strict_blocks(mut self, strict: bool) -> Self {
        self.strict_blocks = strict;
        self
    }
}
