//! Utility stylesheet host.
//!
//! Loads a [`HostConfig`], runs the aspect-ratio plugin against it and turns
//! the registered rule groups into a [`Stylesheet`]. The host supplies the
//! plugin's collaborators: CSS identifier escaping ([`CssEscaper`]), variant
//! resolution ([`HostVariants`]) and registration with variant expansion
//! ([`UtilityRegistry`]).

use anyhow::{Context as _, Result};
use css_aspect_ratio::{AspectRatioPlugin, IdentifierEscaper};
use css_selectors::escape_identifier;
use log::info;
use rayon::prelude::*;

mod config;
mod registry;
mod variants;

pub use config::{HostConfig, ThemeConfig};
pub use css_syntax::{CssBlock, Stylesheet};
pub use registry::UtilityRegistry;
pub use variants::{HostVariants, VARIANT_ORDER, Variant};

/// Escapes class names with CSSOM identifier serialization.
#[derive(Clone, Copy, Debug, Default)]
pub struct CssEscaper;

impl IdentifierEscaper for CssEscaper {
    #[inline]
    fn escape_identifier(&self, ident: &str) -> String {
        escape_identifier(ident)
    }
}

/// Builds stylesheets for one configuration.
#[derive(Clone, Debug, Default)]
pub struct UtilityHost {
    config: HostConfig,
}

impl UtilityHost {
    #[inline]
    pub const fn new(config: HostConfig) -> Self {
        Self { config }
    }

    /// Host for a JSON configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration does not parse.
    #[inline]
    pub fn from_json_str(text: &str) -> Result<Self> {
        HostConfig::from_json_str(text).map(Self::new)
    }

    #[inline]
    pub const fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Run the plugins and lay out the registered utilities.
    ///
    /// # Errors
    /// Returns an error if a plugin fails to register, for example because a
    /// configured variant is unknown.
    pub fn build(&self) -> Result<Stylesheet> {
        build_stylesheet(&self.config)
    }

    /// Build and serialize to CSS text.
    ///
    /// # Errors
    /// Same as [`UtilityHost::build`].
    #[inline]
    pub fn css(&self) -> Result<String> {
        self.build().map(|sheet| sheet.to_css())
    }
}

/// Build the stylesheet for `config`.
///
/// # Errors
/// Same as [`UtilityHost::build`].
pub fn build_stylesheet(config: &HostConfig) -> Result<Stylesheet> {
    let plugin = AspectRatioPlugin::new(config.aspect_ratio_config());
    info!(
        "building utilities: {} aspect ratios, variants [{}]",
        plugin.config().theme_ratios.len(),
        plugin.config().variants.join(", ")
    );
    let resolver = HostVariants::new(config);
    let mut registry = UtilityRegistry::new(config);
    plugin.apply(&CssEscaper, &resolver, &mut registry)?;
    let sheet = registry.into_stylesheet();
    info!("built {} top-level blocks", sheet.blocks.len());
    Ok(sheet)
}

/// Build CSS text for `config`.
///
/// # Errors
/// Same as [`UtilityHost::build`].
#[inline]
pub fn build_css(config: &HostConfig) -> Result<String> {
    build_stylesheet(config).map(|sheet| sheet.to_css())
}

/// Build CSS for independent configurations in parallel. Results keep the
/// order of `configs`; one failing configuration does not affect the others.
pub fn build_css_batch(configs: &[HostConfig]) -> Vec<Result<String>> {
    configs
        .par_iter()
        .enumerate()
        .map(|(index, config)| {
            build_css(config).with_context(|| format!("configuration #{index}"))
        })
        .collect()
}
