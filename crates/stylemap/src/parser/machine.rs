//! The rule/property state machine.
//!
//! Tokens are consumed front to back. What a [`TokenKind::Value`] means
//! depends on the kind of the token before it:
//!
//! | previous              | value token becomes            |
//! |-----------------------|--------------------------------|
//! | none, `}` or a value  | another selector of the block  |
//! | `.` / `#` marker      | marker + text as a selector    |
//! | `{` or `;`            | a property name                |
//! | `:`                   | the property's value           |
//!
//! `;` commits the pending `property: value` pair and `}` stores the block's
//! declarations under every selector collected for it.

use std::mem;

use super::error::{SyntaxError, SyntaxErrorKind};
use super::options::ParseOptions;
use crate::logging::targets;
use crate::rules::{Rule, StyleMap, Stylesheet};
use crate::token::{ClassifiedToken, TokenKind, TokenQueue};
use crate::Result;

/// Outcome of a parse: everything committed, plus the error that stopped it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Rules from every block closed before parsing stopped.
    pub stylesheet: Stylesheet,
    /// The first syntax error, if any.
    pub error: Option<SyntaxError>,
}

impl ParseReport {
    /// Whether the whole input parsed.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The stylesheet, or the error if parsing stopped early.
    pub fn into_result(self) -> Result<Stylesheet> {
        match self.error {
            Some(error) => Err(error.into()),
            None => Ok(self.stylesheet),
        }
    }
}

/// In-progress state for the block being parsed.
#[derive(Debug, Default)]
struct ParseState {
    /// Selectors collected for the current block.
    pending_rules: Vec<String>,
    current_property: String,
    current_value: String,
    /// `.` or `#` waiting for the name that follows it.
    selector_prefix: String,
    inside_block: bool,
    /// Line of the `{` that opened the current block.
    block_line: u32,
    /// Declarations committed in the current block.
    styles: StyleMap,
    /// Kind of the last consumed token; `None` before the first one.
    previous: Option<TokenKind>,
}

impl ParseState {
    fn close_block(&mut self) {
        self.pending_rules.clear();
        self.current_property.clear();
        self.current_value.clear();
        self.selector_prefix.clear();
        self.styles.clear();
        self.inside_block = false;
    }
}

/// Single-use parser turning a token queue into a [`Stylesheet`].
///
/// A parser is consumed by [`Parser::run`], so no state carries over between
/// parses.
///
/// Each selector of a block merges into its own copy of the block's
/// declarations: properties carried over from an earlier entry for one
/// selector never show up under the other selectors of the same block.
#[derive(Debug, Default)]
pub struct Parser {
    options: ParseOptions,
    state: ParseState,
    stylesheet: Stylesheet,
}

impl Parser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Consume every token in the queue, stopping at the first error.
    pub fn run(mut self, mut queue: TokenQueue) -> ParseReport {
        let span = tracing::debug_span!(target: targets::PARSER, "parse", tokens = queue.len());
        let _enter = span.enter();

        while let Some(token) = queue.pop_front() {
            if let Err(error) = self.step(token) {
                tracing::debug!(target: targets::PARSER, %error, "parse stopped");
                return self.report(Some(error));
            }
        }

        let error = self.finish();
        self.report(error)
    }

    fn report(self, error: Option<SyntaxError>) -> ParseReport {
        ParseReport {
            stylesheet: self.stylesheet,
            error,
        }
    }

    fn step(&mut self, token: ClassifiedToken) -> std::result::Result<(), SyntaxError> {
        let kind = token.kind;
        let line = token.line();
        tracing::trace!(
            target: targets::PARSER,
            line,
            %kind,
            text = token.text(),
            previous = ?self.state.previous,
            "token"
        );

        match kind {
            TokenKind::Value => self.value(token.raw.text, line)?,
            TokenKind::SelectorMarker => self.state.selector_prefix = token.raw.text,
            TokenKind::BlockStart => self.block_start(line)?,
            TokenKind::StatementEnd => self.statement_end(line)?,
            TokenKind::BlockEnd => self.block_end(line)?,
            TokenKind::StyleSeparator | TokenKind::RuleName => {}
        }

        self.state.previous = Some(kind);
        Ok(())
    }

    fn value(&mut self, text: String, line: u32) -> std::result::Result<(), SyntaxError> {
        let state = &mut self.state;
        match state.previous {
            None | Some(TokenKind::BlockEnd | TokenKind::Value) => state.pending_rules.push(text),
            Some(TokenKind::SelectorMarker) => {
                let mut selector = mem::take(&mut state.selector_prefix);
                selector.push_str(&text);
                state.pending_rules.push(selector);
            }
            Some(TokenKind::BlockStart | TokenKind::StatementEnd) => state.current_property = text,
            Some(TokenKind::StyleSeparator) => state.current_value = text,
            Some(TokenKind::RuleName) => {
                return Err(SyntaxError::new(SyntaxErrorKind::InvalidSyntax, line));
            }
        }
        Ok(())
    }

    fn block_start(&mut self, line: u32) -> std::result::Result<(), SyntaxError> {
        if self.state.previous != Some(TokenKind::Value) {
            return Err(SyntaxError::new(SyntaxErrorKind::MissingRuleIdentifier, line));
        }
        self.state.inside_block = true;
        self.state.block_line = line;
        Ok(())
    }

    fn statement_end(&mut self, line: u32) -> std::result::Result<(), SyntaxError> {
        let state = &mut self.state;
        if state.previous != Some(TokenKind::Value)
            || state.current_property.is_empty()
            || state.current_value.is_empty()
        {
            return Err(SyntaxError::new(SyntaxErrorKind::ExpectedStyle, line));
        }
        state
            .styles
            .insert(state.current_property.clone(), state.current_value.clone());
        Ok(())
    }

    fn block_end(&mut self, line: u32) -> std::result::Result<(), SyntaxError> {
        if !self.state.inside_block {
            return Err(SyntaxError::new(SyntaxErrorKind::UnopenedBlock, line));
        }

        for selector in &self.state.pending_rules {
            let carried = self
                .stylesheet
                .merge(Rule::new(selector.as_str()), self.state.styles.clone());
            tracing::debug!(
                target: targets::PARSER,
                line,
                rule = %selector,
                properties = self.state.styles.len(),
                carried,
                "committed block"
            );
        }

        self.state.close_block();
        Ok(())
    }

    /// End-of-input check for a block that was never closed.
    fn finish(&self) -> Option<SyntaxError> {
        if !self.state.inside_block {
            return None;
        }
        if self.options.strict_blocks {
            return Some(SyntaxError::new(
                SyntaxErrorKind::UnclosedBlock,
                self.state.block_line,
            ));
        }
        tracing::debug!(
            target: targets::PARSER,
            line = self.state.block_line,
            "input ended inside a block; block dropped"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use crate::token::{PrimitiveKind, RawToken};

    fn parse(css: &str) -> ParseReport {
        parse_str(css, &ParseOptions::default())
    }

    fn styles(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(p, v)| (p.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn single_block() {
        let report = parse("p { color: red; }");

        assert!(report.is_ok());
        assert_eq!(report.stylesheet.len(), 1);
        assert_eq!(report.stylesheet.get("p"), Some(&styles(&[("color", "red")])));
    }

    #[test]
    fn repeated_selector_merges() {
        let report = parse("a{x:1;} a{y:2;}");
        assert_eq!(
            report.stylesheet.get("a"),
            Some(&styles(&[("x", "1"), ("y", "2")]))
        );
    }

    #[test]
    fn later_block_wins_conflicts() {
        let report = parse("a{x:1;} a{x:2;}");
        assert_eq!(report.stylesheet.get("a"), Some(&styles(&[("x", "2")])));
    }

    #[test]
    fn consecutive_values_share_a_block() {
        let report = parse("a b { x:1; }");

        assert_eq!(report.stylesheet.len(), 2);
        assert_eq!(report.stylesheet.get("a"), Some(&styles(&[("x", "1")])));
        assert_eq!(report.stylesheet.get("b"), Some(&styles(&[("x", "1")])));
    }

    #[test]
    fn class_and_id_selectors() {
        let report = parse(".foo { x: 1; }\n#bar { y: 2; }");

        assert!(report.is_ok());
        assert_eq!(report.stylesheet.property(".foo", "x"), Some("1"));
        assert_eq!(report.stylesheet.property("#bar", "y"), Some("2"));
    }

    #[test]
    fn compound_selector_is_split() {
        let report = parse("a.foo { x: 1; }");

        assert!(report.stylesheet.contains("a"));
        assert!(report.stylesheet.contains(".foo"));
    }

    #[test]
    fn error_reports_token_line() {
        let report = parse("a {\n x 1;\n}");

        assert_eq!(
            report.error,
            Some(SyntaxError::new(SyntaxErrorKind::ExpectedStyle, 2))
        );
        assert!(report.stylesheet.is_empty());
    }

    #[test]
    fn close_without_open() {
        let report = parse("}");

        assert_eq!(
            report.error,
            Some(SyntaxError::new(SyntaxErrorKind::UnopenedBlock, 1))
        );
        assert!(report.stylesheet.is_empty());
    }

    #[test]
    fn block_without_selector() {
        let report = parse("{ x: 1; }");
        assert_eq!(
            report.error.map(|e| e.kind),
            Some(SyntaxErrorKind::MissingRuleIdentifier)
        );
    }

    #[test]
    fn semicolon_after_separator() {
        let report = parse("a { x: ; }");
        assert_eq!(
            report.error.map(|e| e.kind),
            Some(SyntaxErrorKind::ExpectedStyle)
        );
    }

    #[test]
    fn pending_value_carries_to_next_property() {
        let report = parse("a { x: 1; y; }");

        assert!(report.is_ok());
        assert_eq!(
            report.stylesheet.get("a"),
            Some(&styles(&[("x", "1"), ("y", "1")]))
        );
    }

    #[test]
    fn value_after_value_in_block_becomes_selector() {
        let report = parse("a { margin: 1px 2px; }");

        assert!(report.is_ok());
        assert_eq!(report.stylesheet.len(), 2);
        assert_eq!(report.stylesheet.get("a"), Some(&styles(&[("margin", "1px")])));
        assert_eq!(report.stylesheet.get("2px"), Some(&styles(&[("margin", "1px")])));
    }

    #[test]
    fn keeps_blocks_closed_before_the_error() {
        let report = parse("a { x: 1; }\nb {\n ; }");

        assert_eq!(
            report.error,
            Some(SyntaxError::new(SyntaxErrorKind::ExpectedStyle, 3))
        );
        assert_eq!(report.stylesheet.len(), 1);
        assert_eq!(report.stylesheet.property("a", "x"), Some("1"));
    }

    #[test]
    fn selectors_do_not_leak_into_next_block() {
        let report = parse("a { x: 1; } b { y: 2; }");

        assert_eq!(report.stylesheet.get("a"), Some(&styles(&[("x", "1")])));
        assert_eq!(report.stylesheet.get("b"), Some(&styles(&[("y", "2")])));
    }

    #[test]
    fn shared_block_merges_per_selector() {
        let report = parse("a { x: 1; } b { y: 2; } a b { z: 3; }");

        assert_eq!(
            report.stylesheet.get("a"),
            Some(&styles(&[("x", "1"), ("z", "3")]))
        );
        assert_eq!(
            report.stylesheet.get("b"),
            Some(&styles(&[("y", "2"), ("z", "3")]))
        );
    }

    #[test]
    fn carried_properties_stay_with_their_selector() {
        let report = parse("a { w: 0; } a b { z: 3; }");

        assert_eq!(
            report.stylesheet.get("a"),
            Some(&styles(&[("w", "0"), ("z", "3")]))
        );
        assert_eq!(report.stylesheet.get("b"), Some(&styles(&[("z", "3")])));
    }

    #[test]
    fn last_declaration_needs_a_semicolon() {
        let report = parse("a { x: 1 }");

        assert!(report.is_ok());
        assert_eq!(report.stylesheet.get("a"), Some(&StyleMap::new()));
    }

    #[test]
    fn function_values_are_kept_whole() {
        let report = parse("a { color: rgb(1, 2, 3); }");
        assert_eq!(report.stylesheet.property("a", "color"), Some("rgb(1, 2, 3)"));
    }

    // Known permissive edge case: an unterminated block is dropped silently.
    #[test]
    fn unterminated_block_is_lenient_by_default() {
        let report = parse("a { x: 1; } b { y: 2;");

        assert!(report.is_ok());
        assert_eq!(report.stylesheet.len(), 1);
        assert!(!report.stylesheet.contains("b"));
    }

    #[test]
    fn unterminated_block_in_strict_mode() {
        let report = parse_str("a { x: 1; }\nb {\n y: 2;", &ParseOptions::strict());

        assert_eq!(
            report.error,
            Some(SyntaxError::new(SyntaxErrorKind::UnclosedBlock, 2))
        );
        assert_eq!(report.stylesheet.len(), 1);
    }

    #[test]
    fn value_after_reserved_kind_is_invalid() {
        let mut tokens = vec![ClassifiedToken {
            raw: RawToken::new(PrimitiveKind::Ident, "name", 1),
            kind: TokenKind::RuleName,
        }];
        tokens.push(ClassifiedToken::new(RawToken::new(PrimitiveKind::Ident, "x", 4)));

        let mut parser = Parser::new(ParseOptions::default());
        let mut result = Ok(());
        for token in tokens {
            result = parser.step(token);
            if result.is_err() {
                break;
            }
        }

        assert_eq!(
            result,
            Err(SyntaxError::new(SyntaxErrorKind::InvalidSyntax, 4))
        );
    }

    #[test]
    fn into_result() {
        assert!(parse("a { x: 1; }").into_result().is_ok());

        let err = parse("a { x: 1; } }").into_result().unwrap_err();
        assert_eq!(err.to_string(), "line 1: rule block ends without a beginning");
    }
}
