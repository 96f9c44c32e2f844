//! Selectors Level 3: class-name rewriting for generated utilities.
//! See: <https://www.w3.org/TR/selectors-3/>
//!
//! Utility hosts need a small subset of selector handling:
//! - Escaping arbitrary names into valid CSS identifiers
//! - Splitting a selector into its class names and everything else
//! - Prefixing every class name (`sm:`, `hover:`) and appending pseudo-classes
//!
//! Matching and specificity are out of scope; the rewritten selector is
//! serialized back to text for the stylesheet.

mod escape;
mod parser;

use core::fmt::{self, Display, Formatter};

pub use escape::{CssIdent, class_selector, escape_identifier};
pub use parser::parse_selector;

/// One piece of a tokenized selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorPart {
    /// A class selector; holds the unescaped class name without the leading `.`.
    Class(String),
    /// Any other selector text, kept byte-for-byte (combinators, pseudo-classes,
    /// pseudo-elements, type/id/attribute selectors, whitespace).
    Verbatim(String),
}

/// A selector split into class names and verbatim text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<SelectorPart>,
}

impl Selector {
    /// Build a selector from already tokenized parts.
    #[inline]
    pub fn from_parts(parts: Vec<SelectorPart>) -> Self {
        Self { parts }
    }

    #[inline]
    pub fn parts(&self) -> &[SelectorPart] {
        &self.parts
    }

    /// Unescaped class names in source order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            SelectorPart::Class(name) => Some(name.as_str()),
            SelectorPart::Verbatim(_) => None,
        })
    }

    /// Prefix every class name with `prefix`.
    pub fn prefix_classes(&mut self, prefix: &str) {
        for part in &mut self.parts {
            if let SelectorPart::Class(name) = part {
                name.insert_str(0, prefix);
            }
        }
    }

    /// Prefix every class name with `prefix` and attach `pseudo_class`
    /// (including its leading `:`) directly after each prefixed class.
    ///
    /// `.a::before` with `hover:` / `:hover` becomes `.hover\:a:hover::before`.
    pub fn prefix_classes_with_pseudo(&mut self, prefix: &str, pseudo_class: &str) {
        let mut rewritten = Vec::with_capacity(self.parts.len() * 2);
        for part in self.parts.drain(..) {
            match part {
                SelectorPart::Class(mut name) => {
                    name.insert_str(0, prefix);
                    rewritten.push(SelectorPart::Class(name));
                    rewritten.push(SelectorPart::Verbatim(pseudo_class.to_owned()));
                }
                verbatim @ SelectorPart::Verbatim(_) => rewritten.push(verbatim),
            }
        }
        self.parts = rewritten;
    }

    /// Insert raw selector text (for example an ancestor and a combinator)
    /// in front of the selector.
    #[inline]
    pub fn prepend_verbatim(&mut self, text: &str) {
        self.parts.insert(0, SelectorPart::Verbatim(text.to_owned()));
    }

    /// Serialize back to selector text, escaping class names.
    #[inline]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Display for Selector {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                SelectorPart::Class(name) => write!(formatter, ".{}", CssIdent(name))?,
                SelectorPart::Verbatim(text) => formatter.write_str(text)?,
            }
        }
        Ok(())
    }
}
