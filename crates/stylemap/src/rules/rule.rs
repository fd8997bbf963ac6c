//! Selector rule value type.

use std::borrow::Borrow;
use std::fmt;

/// Kind of simple selector a [`Rule`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleType {
    /// Element name, e.g. `div`.
    Tag,
    /// `.name`
    Class,
    /// `#name`
    Id,
}

impl RuleType {
    /// Lower-case name: `"tag"`, `"class"` or `"id"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Class => "class",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selector identifying a style block, e.g. `.foo`, `#bar` or `div`.
///
/// Rules key a [`Stylesheet`](super::Stylesheet) and can be looked up by
/// `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule(String);

impl Rule {
    /// Wrap a selector string.
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// Classify the selector by its leading character.
    pub fn rule_type(&self) -> RuleType {
        if self.0.starts_with('.') {
            RuleType::Class
        } else if self.0.starts_with('#') {
            RuleType::Id
        } else {
            RuleType::Tag
        }
    }

    /// The selector text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the selector text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for Rule {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Rule {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Rule {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

impl From<String> for Rule {
    fn from(selector: String) -> Self {
        Self(selector)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
