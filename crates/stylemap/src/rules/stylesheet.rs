//! Parsed stylesheet: selector rules mapped to their declarations.

use std::collections::HashMap;
use std::collections::hash_map;
use std::path::Path;

use crate::parser::{self, ParseOptions};
use crate::rules::{Rule, RuleType};
use crate::{Error, Result};

/// Property name to raw value for one selector.
pub type StyleMap = HashMap<String, String>;

/// Mapping from selector rules to their declared properties.
///
/// Every entry comes from a block closed by `}`; blocks left open never
/// appear. The value owns its data and shares nothing with the text it was
/// parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: HashMap<Rule, StyleMap>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stylesheet from text.
    pub fn from_css(css: &str) -> Result<Self> {
        Self::from_css_with(css, &ParseOptions::default())
    }

    /// Parse a stylesheet from text with explicit options.
    pub fn from_css_with(css: &str, options: &ParseOptions) -> Result<Self> {
        parser::parse_str(css, options).into_result()
    }

    /// Load a stylesheet from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with(path, &ParseOptions::default())
    }

    /// Load a stylesheet from a file with explicit options.
    pub fn from_file_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        crate::unmarshal_with(&content, options).into_result()
    }

    /// Declarations for a selector.
    pub fn get(&self, selector: &str) -> Option<&StyleMap> {
        self.rules.get(selector)
    }

    /// Raw value of one property for a selector.
    pub fn property(&self, selector: &str, property: &str) -> Option<&str> {
        self.get(selector)?.get(property).map(String::as_str)
    }

    /// Whether the selector has an entry.
    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    /// Store declarations for a rule, folding in any properties an earlier
    /// entry had that `styles` does not redeclare.
    ///
    /// Returns the number of properties carried over from the earlier entry.
    pub fn merge(&mut self, rule: Rule, mut styles: StyleMap) -> usize {
        let mut carried = 0;
        if let Some(previous) = self.rules.remove(&rule) {
            for (property, value) in previous {
                if let hash_map::Entry::Vacant(entry) = styles.entry(property) {
                    entry.insert(value);
                    carried += 1;
                }
            }
        }
        self.rules.insert(rule, styles);
        carried
    }

    /// Rules of one selector type.
    pub fn rules_of_type(&self, rule_type: RuleType) -> impl Iterator<Item = &Rule> {
        self.rules.keys().filter(move |rule| rule.rule_type() == rule_type)
    }

    /// Iterate over rules and their declarations.
    pub fn iter(&self) -> hash_map::Iter<'_, Rule, StyleMap> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the stylesheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Unwrap into the underlying map.
    pub fn into_inner(self) -> HashMap<Rule, StyleMap> {
        self.rules
    }
}

impl From<HashMap<Rule, StyleMap>> for Stylesheet {
    fn from(rules: HashMap<Rule, StyleMap>) -> Self {
        Self { rules }
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = (&'a Rule, &'a StyleMap);
    type IntoIter = hash_map::Iter<'a, Rule, StyleMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for Stylesheet {
    type Item = (Rule, StyleMap);
    type IntoIter = hash_map::IntoIter<Rule, StyleMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}
