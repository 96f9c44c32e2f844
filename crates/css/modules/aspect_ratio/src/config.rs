//! Plugin configuration: the ratio table and its variants.

use crate::RatioValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key under `theme` and `variants` that this plugin reads.
pub const PLUGIN_KEY: &str = "aspectRatio";

/// Variants enabled when the host configuration does not name any.
pub const DEFAULT_VARIANTS: &[&str] = &["responsive"];

/// Ratio name to value, in author order.
pub type RatioMap = IndexMap<String, RatioValue>;

/// Typed view of `theme.aspectRatio` and `variants.aspectRatio`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AspectRatioConfig {
    /// Named ratios; an empty table disables the plugin.
    pub theme_ratios: RatioMap,
    /// Variant names to generate, passed through to the host.
    pub variants: Vec<String>,
}

impl AspectRatioConfig {
    /// Configuration with the given ratios and the default variants.
    pub fn with_ratios<I, K, V>(ratios: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RatioValue>,
    {
        Self {
            theme_ratios: ratios
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Replace the variant list.
    #[must_use]
    pub fn variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for AspectRatioConfig {
    #[inline]
    fn default() -> Self {
        Self {
            theme_ratios: IndexMap::new(),
            variants: DEFAULT_VARIANTS.iter().map(|&name| name.to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_and_responsive() {
        let config = AspectRatioConfig::default();
        assert!(config.theme_ratios.is_empty());
        assert_eq!(config.variants, vec!["responsive".to_owned()]);
    }

    #[test]
    fn ratio_order_follows_the_document() -> Result<(), serde_json::Error> {
        let config: AspectRatioConfig = serde_json::from_str(
            r#"{ "themeRatios": { "16/9": [16, 9], "1/1": 1, "4/3": [4, 3] } }"#,
        )?;
        let names: Vec<&str> = config.theme_ratios.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["16/9", "1/1", "4/3"]);
        assert_eq!(config.variants, vec!["responsive".to_owned()]);
        Ok(())
    }

    #[test]
    fn builder_keeps_insertion_order() {
        let config = AspectRatioConfig::with_ratios([("b", 2.0), ("a", 1.0)]).variants(["hover"]);
        let names: Vec<&str> = config.theme_ratios.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(config.variants, vec!["hover".to_owned()]);
    }
}
