//! CSS text serialization for generated rules.

use crate::{CssBlock, CssValue, Declaration, StyleRule, Stylesheet};
use core::fmt::{self, Display, Formatter, Write as _};
use cssparser::serialize_string;

/// Properties whose bare numbers never take an implicit `px`.
const UNITLESS_PROPERTIES: &[&str] = &[
    "flex",
    "flex-grow",
    "flex-shrink",
    "font-weight",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "widows",
    "z-index",
    "zoom",
];

/// Format a number with the shortest decimal text that round-trips.
///
/// Negative zero prints as `0`. Non-finite values print as `NaN`,
/// `Infinity` and `-Infinity`.
///
/// Exponent notation is never used, so very large or very small magnitudes
/// are written out in full (`1e22` prints as `10000000000000000000000`,
/// where a JavaScript host would print `1e+22`). Both forms are valid CSS.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

/// Write `value` as it appears after `property:`.
fn write_value(property: &str, value: &CssValue, dest: &mut Formatter<'_>) -> fmt::Result {
    match value {
        CssValue::Keyword(text) => dest.write_str(text),
        CssValue::Quoted(text) => serialize_string(text, dest),
        CssValue::Number(number) => {
            dest.write_str(&format_number(*number))?;
            if *number != 0.0 && !UNITLESS_PROPERTIES.contains(&property) {
                dest.write_str("px")?;
            }
            Ok(())
        }
        CssValue::Percentage(number) => {
            dest.write_str(&format_number(*number))?;
            dest.write_char('%')
        }
    }
}

/// Write the body of a rule, one declaration per line.
fn write_rule(rule: &StyleRule, indent: &str, dest: &mut Formatter<'_>) -> fmt::Result {
    writeln!(dest, "{indent}{} {{", rule.prelude)?;
    for decl in &rule.declarations {
        writeln!(dest, "{indent}  {decl};")?;
    }
    writeln!(dest, "{indent}}}")
}

impl Display for Declaration {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: ", self.name)?;
        write_value(&self.name, &self.value, formatter)?;
        if self.important {
            formatter.write_str(" !important")?;
        }
        Ok(())
    }
}

impl Display for StyleRule {
    #[inline]
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write_rule(self, "", formatter)
    }
}

impl Display for CssBlock {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(rule) => write_rule(rule, "", formatter),
            Self::Media { query, rules } => {
                writeln!(formatter, "@media {query} {{")?;
                for (index, rule) in rules.iter().enumerate() {
                    if index > 0 {
                        formatter.write_char('\n')?;
                    }
                    write_rule(rule, "  ", formatter)?;
                }
                writeln!(formatter, "}}")
            }
        }
    }
}

impl Display for Stylesheet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for (index, block) in self.blocks.iter().enumerate() {
            if index > 0 {
                formatter.write_char('\n')?;
            }
            write!(formatter, "{block}")?;
        }
        Ok(())
    }
}
