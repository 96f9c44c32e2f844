//! CSS rule model shared between utility plugins and the stylesheet host.
//!
//! Plugins describe utilities as [`RuleSet`]s of [`StyleRule`]s; the host
//! expands them into a [`Stylesheet`] and serializes it to CSS text.
//! See: <https://www.w3.org/TR/css-syntax-3/#serialization>

use core::slice;

mod serialize;

pub use serialize::format_number;

/// A declaration value as written by a utility plugin.
#[derive(Clone, Debug, PartialEq)]
pub enum CssValue {
    /// Raw keyword or pre-formatted token text (`relative`, `100%`, `1px`).
    Keyword(String),
    /// A string token; serialized with surrounding quotes.
    Quoted(String),
    /// A number with an implicit unit.
    ///
    /// Zero serializes unitless. Other values get `px` unless the property
    /// is unitless (`z-index`, `opacity`, ...).
    Number(f64),
    /// A percentage; the number is printed followed by `%`.
    Percentage(f64),
}

impl CssValue {
    /// Keyword value from any string-like input.
    #[inline]
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::Keyword(text.into())
    }

    /// Quoted string value.
    #[inline]
    pub fn quoted(text: impl Into<String>) -> Self {
        Self::Quoted(text.into())
    }
}

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    /// Lowercased, hyphenated property name.
    pub name: String,
    /// Declared value.
    pub value: CssValue,
    /// Whether the declaration was marked as `!important`.
    pub important: bool,
}

impl Declaration {
    #[inline]
    pub fn new(name: impl Into<String>, value: CssValue) -> Self {
        Self {
            name: name.into(),
            value,
            important: false,
        }
    }
}

/// A single style rule with a raw prelude and its declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRule {
    /// Raw prelude text (the selector list).
    pub prelude: String,
    /// Declarations within the rule block, in source order.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Create an empty rule for `prelude`.
    #[inline]
    pub fn new(prelude: impl Into<String>) -> Self {
        Self {
            prelude: prelude.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration, returning the rule for chaining.
    #[inline]
    #[must_use]
    pub fn with(mut self, name: &str, value: CssValue) -> Self {
        self.declarations.push(Declaration::new(name, value));
        self
    }

    /// Look up the value of the first declaration named `name`.
    #[inline]
    pub fn value_of(&self, name: &str) -> Option<&CssValue> {
        self.declarations
            .iter()
            .find(|decl| decl.name == name)
            .map(|decl| &decl.value)
    }
}

/// An ordered group of style rules registered together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSet {
    /// Rules in emission order.
    pub rules: Vec<StyleRule>,
}

impl RuleSet {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, StyleRule> {
        self.rules.iter()
    }

    /// Find the rule whose prelude equals `prelude`.
    #[inline]
    pub fn rule(&self, prelude: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|rule| rule.prelude == prelude)
    }
}

impl From<Vec<StyleRule>> for RuleSet {
    #[inline]
    fn from(rules: Vec<StyleRule>) -> Self {
        Self { rules }
    }
}

impl<'set> IntoIterator for &'set RuleSet {
    type Item = &'set StyleRule;
    type IntoIter = slice::Iter<'set, StyleRule>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// A top-level block of a generated stylesheet.
#[derive(Clone, Debug, PartialEq)]
pub enum CssBlock {
    /// A plain style rule.
    Style(StyleRule),
    /// An `@media` block wrapping nested style rules.
    Media {
        /// Media query text, without the `@media` keyword.
        query: String,
        /// Nested rules in emission order.
        rules: Vec<StyleRule>,
    },
}

/// A generated stylesheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stylesheet {
    /// Top-level blocks in source order.
    pub blocks: Vec<CssBlock>,
}

impl Stylesheet {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate every style rule, including the ones nested in media blocks.
    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.blocks.iter().flat_map(|block| match block {
            CssBlock::Style(rule) => slice::from_ref(rule).iter(),
            CssBlock::Media { rules, .. } => rules.iter(),
        })
    }

    /// Serialize the stylesheet to CSS text.
    #[inline]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}
