//! Host configuration, loaded from JSON.
//!
//! The shape follows the usual utility-framework config object: top-level
//! `prefix`, `important` and `separator`, a `theme` section with `screens`
//! and per-plugin tables, and a `variants` section keyed by plugin.

use anyhow::{Context as _, Result};
use css_aspect_ratio::{AspectRatioConfig, PLUGIN_KEY, RatioMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default responsive breakpoints, smallest first.
const DEFAULT_SCREENS: &[(&str, &str)] = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
];

/// `theme` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Screen name to min-width, in emission order.
    pub screens: IndexMap<String, String>,
    /// `theme.aspectRatio`.
    pub aspect_ratio: RatioMap,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            screens: DEFAULT_SCREENS
                .iter()
                .map(|&(name, width)| (name.to_owned(), width.to_owned()))
                .collect(),
            aspect_ratio: RatioMap::new(),
        }
    }
}

/// Complete host configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostConfig {
    /// Prepended to every utility class name.
    pub prefix: String,
    /// Mark every utility declaration `!important`.
    pub important: bool,
    /// Joins a variant name to a class name (`sm:`, `hover:`).
    pub separator: String,
    pub theme: ThemeConfig,
    /// Plugin key to variant names. Missing keys fall back to plugin defaults.
    pub variants: IndexMap<String, Vec<String>>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            important: false,
            separator: ":".to_owned(),
            theme: ThemeConfig::default(),
            variants: IndexMap::new(),
        }
    }
}

impl HostConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    /// Returns an error if the text is not valid JSON or a value has the wrong
    /// type (for example a ratio that is neither a number nor a number pair).
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid host configuration")
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Theme lookup for the aspect-ratio table.
    #[inline]
    pub const fn theme_ratios(&self) -> &RatioMap {
        &self.theme.aspect_ratio
    }

    /// Variants configured for `plugin_key`, if the configuration names any.
    #[inline]
    pub fn configured_variants(&self, plugin_key: &str) -> Option<&[String]> {
        self.variants.get(plugin_key).map(Vec::as_slice)
    }

    /// The aspect-ratio plugin's view of this configuration, with plugin
    /// defaults filled in.
    pub fn aspect_ratio_config(&self) -> AspectRatioConfig {
        let defaults = AspectRatioConfig::default();
        AspectRatioConfig {
            theme_ratios: self.theme_ratios().clone(),
            variants: self
                .configured_variants(PLUGIN_KEY)
                .map_or(defaults.variants, <[String]>::to_vec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_aspect_ratio::RatioValue;

    #[test]
    fn empty_object_uses_defaults() -> Result<()> {
        let config = HostConfig::from_json_str("{}")?;
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.separator, ":");
        let screens: Vec<&str> = config.theme.screens.keys().map(String::as_str).collect();
        assert_eq!(screens, vec!["sm", "md", "lg", "xl"]);
        let plugin = config.aspect_ratio_config();
        assert!(plugin.theme_ratios.is_empty());
        assert_eq!(plugin.variants, vec!["responsive".to_owned()]);
        Ok(())
    }

    #[test]
    fn theme_sections_override_independently() -> Result<()> {
        let config = HostConfig::from_json_str(
            r#"{
                "theme": { "aspectRatio": { "16/9": [16, 9], "square": 1 } },
                "variants": { "aspectRatio": [] }
            }"#,
        )?;
        assert_eq!(config.theme.screens.len(), 4);
        let plugin = config.aspect_ratio_config();
        assert_eq!(
            plugin.theme_ratios.get("16/9"),
            Some(&RatioValue::Fraction(16.0, 9.0))
        );
        assert_eq!(plugin.theme_ratios.get("square"), Some(&RatioValue::Scalar(1.0)));
        assert!(plugin.variants.is_empty());
        Ok(())
    }

    #[test]
    fn screens_replace_the_defaults() -> Result<()> {
        let config = HostConfig::from_json_str(r#"{ "theme": { "screens": { "tablet": "700px" } } }"#)?;
        assert_eq!(config.theme.screens.len(), 1);
        assert_eq!(config.theme.screens.get("tablet").map(String::as_str), Some("700px"));
        Ok(())
    }

    #[test]
    fn non_numeric_ratio_is_rejected() {
        let result = HostConfig::from_json_str(r#"{ "theme": { "aspectRatio": { "wide": "16/9" } } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let Err(error) = HostConfig::from_path(Path::new("/nonexistent/utilities.json")) else {
            panic!("expected a read error");
        };
        assert!(format!("{error:#}").contains("/nonexistent/utilities.json"));
    }
}
