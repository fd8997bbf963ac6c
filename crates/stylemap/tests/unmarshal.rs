//! End-to-end parsing through the public API.

use stylemap::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn styles(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(p, v)| (p.to_string(), v.to_string()))
        .collect()
}

#[test]
fn single_block_has_exactly_one_entry() {
    init_tracing();

    for (css, selector, property, value) in [
        ("div { color: red; }", "div", "color", "red"),
        (".note{width:10px;}", ".note", "width", "10px"),
        ("#main {\n  margin: 0;\n}\n", "#main", "margin", "0"),
    ] {
        let sheet = unmarshal(css.as_bytes()).unwrap();
        assert_eq!(sheet.len(), 1, "{css}");
        assert_eq!(sheet.get(selector), Some(&styles(&[(property, value)])), "{css}");
    }
}

#[test]
fn merging_is_deterministic() {
    init_tracing();
    let css = b"a{x:1;} a{y:2;}";

    let first = unmarshal(css).unwrap();
    let second = unmarshal(css).unwrap();
    let third = unmarshal(css).unwrap();

    assert_eq!(first.get("a"), Some(&styles(&[("x", "1"), ("y", "2")])));
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn later_block_wins() {
    let sheet = unmarshal(b"a{x:1;} a{x:2;}").unwrap();
    assert_eq!(sheet.get("a"), Some(&styles(&[("x", "2")])));
}

#[test]
fn two_selectors_one_block() {
    let sheet = unmarshal(b"a b { x:1; }").unwrap();

    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.get("a"), Some(&styles(&[("x", "1")])));
    assert_eq!(sheet.get("b"), Some(&styles(&[("x", "1")])));
}

#[test]
fn rule_types() {
    assert_eq!(Rule::new(".foo").rule_type().to_string(), "class");
    assert_eq!(Rule::new("#bar").rule_type().to_string(), "id");
    assert_eq!(Rule::new("div").rule_type().to_string(), "tag");

    let sheet = unmarshal(b"div { a: 1; } .foo { b: 2; } #bar { c: 3; }").unwrap();
    for (rule, _) in &sheet {
        let expected = match rule.as_str() {
            "div" => RuleType::Tag,
            ".foo" => RuleType::Class,
            "#bar" => RuleType::Id,
            other => panic!("unexpected rule {other}"),
        };
        assert_eq!(rule.rule_type(), expected);
    }
}

#[test]
fn syntax_error_line() {
    init_tracing();
    let err = unmarshal(b"a {\n x 1;\n}").unwrap_err();

    assert_eq!(err.line(), Some(2));
    assert!(matches!(
        err,
        Error::Syntax(SyntaxError {
            kind: SyntaxErrorKind::ExpectedStyle,
            ..
        })
    ));
}

#[test]
fn lone_close_brace() {
    let report = unmarshal_with(b"}", &ParseOptions::default());

    assert_eq!(
        report.error.map(|e| e.to_string()),
        Some("line 1: rule block ends without a beginning".to_string())
    );
    assert!(report.stylesheet.is_empty());
}

#[test]
fn partial_results_survive_errors() {
    let css = b"h1 { font-size: 2em; }\nh2 { font-size: 1.5em; }\n{ color: red; }";
    let report = unmarshal_with(css, &ParseOptions::default());

    assert_eq!(report.error.as_ref().map(|e| e.line), Some(3));
    assert_eq!(report.stylesheet.len(), 2);
    assert_eq!(report.stylesheet.property("h2", "font-size"), Some("1.5em"));
}

#[test]
fn parses_are_independent() {
    let a = unmarshal(b"p { color: red; }").unwrap();
    let b = unmarshal(b"q { color: blue; }").unwrap();

    assert!(!b.contains("p"));
    assert_eq!(a, unmarshal(b"p { color: red; }").unwrap());
}

#[test]
fn returned_stylesheet_is_owned() {
    let mut inner = {
        let text = String::from("p { color: red; }");
        unmarshal(text.as_bytes()).unwrap().into_inner()
    };
    inner.get_mut("p").unwrap().insert("margin".into(), "0".into());

    assert_eq!(unmarshal(b"p { color: red; }").unwrap().get("p").unwrap().len(), 1);
}

#[test]
fn strict_mode_rejects_unterminated_block() {
    let css = b"a { x: 1;";

    assert!(unmarshal(css).unwrap().is_empty());

    let err = Stylesheet::from_css_with("a { x: 1;", &ParseOptions::strict()).unwrap_err();
    assert_eq!(err.to_string(), "line 1: block is never closed");
}

#[test]
fn invalid_utf8_is_replaced() {
    let sheet = unmarshal(b"p { content: caf\xff; }").unwrap();
    assert_eq!(sheet.property("p", "content"), Some("caf\u{fffd}"));
}

#[test]
fn interpret_parsed_values() {
    let sheet = unmarshal(b".button { background-color: #336699; padding: 4px; float: left; }")
        .unwrap();
    let button = sheet.get(".button").unwrap();

    assert_eq!(
        css_style("background-color", button).unwrap().as_color(),
        Some(Color::rgb(0x33, 0x66, 0x99))
    );
    assert_eq!(
        css_style("padding", button).unwrap().as_length(),
        Some(Length::Px(4.0))
    );
    assert!(matches!(
        css_style("float", button),
        Err(Error::UnknownStyle { .. })
    ));
}
