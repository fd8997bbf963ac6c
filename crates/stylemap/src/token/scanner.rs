//! Primitive token scanning on top of `cssparser`.

use cssparser::{ParseError, Parser, ParserInput, SourcePosition};

use super::raw::{PrimitiveKind, RawToken};
use crate::logging::targets;

/// Splits stylesheet text into [`RawToken`]s.
///
/// `cssparser` hands out the contents of `{}`, `()` and `[]` blocks through
/// nested parsers, so the whole input is walked when the scanner is created
/// and the resulting tokens are yielded in source order. Curly blocks are
/// flattened into `{`, contents, `}`; a block still open at end of input gets
/// no `}`. Functions and bracket groups become a single token spanning the
/// whole group. Comments are dropped.
#[derive(Debug)]
pub struct Scanner {
    tokens: std::vec::IntoIter<RawToken>,
}

impl Scanner {
    /// Scan the given stylesheet text.
    pub fn new(css: &str) -> Self {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut tokens = Vec::new();
        scan_tokens(&mut parser, &mut tokens);

        tracing::trace!(target: targets::SCANNER, count = tokens.len(), "scanned input");
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for Scanner {
    type Item = RawToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

/// cssparser lines are 0-indexed.
fn current_line(parser: &Parser<'_, '_>) -> u32 {
    parser.current_source_location().line + 1
}

fn scan_tokens(parser: &mut Parser<'_, '_>, tokens: &mut Vec<RawToken>) {
    loop {
        let start = parser.position();
        let line = current_line(parser);
        let kind = match parser.next_including_whitespace() {
            Ok(token) => PrimitiveKind::of(token),
            Err(_) => break,
        };

        match kind {
            PrimitiveKind::OpenBrace => {
                tokens.push(RawToken::new(kind, "{", line));
                scan_block(parser, tokens, line);
            }
            kind if kind.is_group() => {
                let _ = parser.parse_nested_block(|group| {
                    while group.next_including_whitespace().is_ok() {}
                    Ok::<_, ParseError<'_, ()>>(())
                });
                tokens.push(RawToken::new(kind, parser.slice_from(start), line));
            }
            kind => tokens.push(RawToken::new(kind, parser.slice_from(start), line)),
        }
    }
}

/// Scan the contents of a `{}` block whose opening brace was just consumed.
fn scan_block(parser: &mut Parser<'_, '_>, tokens: &mut Vec<RawToken>, open_line: u32) {
    let mut close: Option<(SourcePosition, u32)> = None;
    let _ = parser.parse_nested_block(|block| {
        scan_tokens(block, tokens);
        close = Some((block.position(), current_line(block)));
        Ok::<_, ParseError<'_, ()>>(())
    });

    match close {
        Some((position, line)) if parser.slice(position..parser.position()) == "}" => {
            tokens.push(RawToken::new(PrimitiveKind::CloseBrace, "}", line));
        }
        _ => {
            tracing::trace!(
                target: targets::SCANNER,
                line = open_line,
                "block still open at end of input"
            );
        }
    }
}
