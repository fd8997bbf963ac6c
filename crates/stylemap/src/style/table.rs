//! Property name to interpreter registry.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::interpret::{parse_color, parse_keyword, parse_length, parse_number};
use super::value::Style;
use crate::logging::targets;
use crate::rules::StyleMap;
use crate::{Error, Result};

/// Turns a property's raw value into a [`Style`].
pub type Interpreter = fn(property: &str, value: &str) -> Result<Style>;

/// Interpret one property of a [`StyleMap`] with the standard table.
///
/// Fails with [`Error::UnknownStyle`] when no interpreter handles the
/// property.
pub fn css_style(property: &str, styles: &StyleMap) -> Result<Style> {
    static STANDARD: OnceLock<StyleTable> = OnceLock::new();
    STANDARD
        .get_or_init(StyleTable::standard)
        .interpret(property, styles)
}

/// Registry of interpreters keyed by property name.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    interpreters: HashMap<String, Interpreter>,
}

impl StyleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with interpreters for common colour, length, number and keyword
    /// properties.
    pub fn standard() -> Self {
        let mut table = Self::new();

        for property in ["color", "background-color", "border-color", "outline-color"] {
            table.register(property, color);
        }
        for property in [
            "width",
            "height",
            "min-width",
            "min-height",
            "max-width",
            "max-height",
            "top",
            "right",
            "bottom",
            "left",
            "margin",
            "margin-top",
            "margin-right",
            "margin-bottom",
            "margin-left",
            "padding",
            "padding-top",
            "padding-right",
            "padding-bottom",
            "padding-left",
            "border-width",
            "border-radius",
            "font-size",
            "letter-spacing",
        ] {
            table.register(property, length);
        }
        for property in ["line-height", "z-index", "flex-grow", "flex-shrink"] {
            table.register(property, number);
        }
        for property in [
            "display",
            "position",
            "visibility",
            "overflow",
            "text-align",
            "text-decoration",
            "white-space",
            "font-style",
            "border-style",
            "cursor",
        ] {
            table.register(property, keyword);
        }
        table.register("opacity", opacity);
        table.register("font-weight", font_weight);

        table
    }

    /// Register an interpreter, returning the one it replaces.
    pub fn register(
        &mut self,
        property: impl Into<String>,
        interpreter: Interpreter,
    ) -> Option<Interpreter> {
        self.interpreters.insert(property.into(), interpreter)
    }

    /// Whether the property has an interpreter.
    pub fn contains(&self, property: &str) -> bool {
        self.interpreters.contains_key(property)
    }

    /// Interpret one property of a [`StyleMap`].
    pub fn interpret(&self, property: &str, styles: &StyleMap) -> Result<Style> {
        let Some(interpreter) = self.interpreters.get(property) else {
            tracing::debug!(target: targets::STYLE, property, "no interpreter for property");
            return Err(Error::unknown_style(property));
        };
        let value = styles
            .get(property)
            .ok_or_else(|| Error::invalid_value(property, "no value declared"))?;

        interpreter(property, value)
    }
}

fn color(property: &str, value: &str) -> Result<Style> {
    parse_color(value)
        .map(Style::Color)
        .ok_or_else(|| Error::invalid_value(property, format!("'{value}' is not a color")))
}

fn length(property: &str, value: &str) -> Result<Style> {
    parse_length(value)
        .map(Style::Length)
        .ok_or_else(|| Error::invalid_value(property, format!("'{value}' is not a length")))
}

fn number(property: &str, value: &str) -> Result<Style> {
    parse_number(value)
        .map(Style::Number)
        .ok_or_else(|| Error::invalid_value(property, format!("'{value}' is not a number")))
}

fn keyword(property: &str, value: &str) -> Result<Style> {
    parse_keyword(value)
        .map(Style::Keyword)
        .ok_or_else(|| Error::invalid_value(property, format!("'{value}' is not a keyword")))
}

fn opacity(property: &str, value: &str) -> Result<Style> {
    number(property, value).map(|style| match style {
        Style::Number(n) => Style::Number(n.clamp(0.0, 1.0)),
        other => other,
    })
}

fn font_weight(property: &str, value: &str) -> Result<Style> {
    number(property, value).or_else(|_| keyword(property, value))
}
