//! Ratio values and their `padding-bottom` percentages.

use css_syntax::CssValue;
use log::warn;
use serde::{Deserialize, Serialize};

/// A configured ratio: either a precomputed number or a width/height pair.
///
/// Deserializes from a JSON number (`1.7777`) or a two-element array
/// (`[16, 9]`). Anything else is rejected at the configuration boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatioValue {
    /// Width divided by height, already computed.
    Scalar(f64),
    /// Width and height.
    Fraction(f64, f64),
}

impl RatioValue {
    /// Collapse to a single width/height number.
    ///
    /// A zero height is not guarded: the division follows IEEE rules.
    #[inline]
    pub fn to_scalar(self) -> f64 {
        match self {
            Self::Scalar(ratio) => ratio,
            Self::Fraction(width, height) => width / height,
        }
    }
}

impl From<f64> for RatioValue {
    #[inline]
    fn from(ratio: f64) -> Self {
        Self::Scalar(ratio)
    }
}

impl From<(f64, f64)> for RatioValue {
    #[inline]
    fn from((width, height): (f64, f64)) -> Self {
        Self::Fraction(width, height)
    }
}

/// A named ratio resolved to a scalar.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRatio {
    /// Name from the theme table, unescaped.
    pub name: String,
    /// Width divided by height.
    pub ratio: f64,
}

impl ResolvedRatio {
    #[inline]
    pub fn new(name: impl Into<String>, value: RatioValue) -> Self {
        Self {
            name: name.into(),
            ratio: value.to_scalar(),
        }
    }

    /// Unescaped class name of the utility, `aspect-ratio-{name}`.
    #[inline]
    pub fn class_name(&self) -> String {
        format!("aspect-ratio-{}", self.name)
    }

    /// Value of the `padding-bottom` declaration.
    ///
    /// An exact zero ratio yields a unitless `0`; every other ratio yields
    /// `(1 / ratio) * 100` percent.
    pub fn padding_bottom(&self) -> CssValue {
        if self.ratio == 0.0 {
            return CssValue::keyword("0");
        }
        let percentage = 1.0 / self.ratio * 100.0;
        if !self.ratio.is_finite() || !percentage.is_finite() {
            warn!(
                "aspect ratio `{}` resolves to {} (padding-bottom {}%); check its width/height",
                self.name, self.ratio, percentage
            );
        }
        CssValue::Percentage(percentage)
    }
}
