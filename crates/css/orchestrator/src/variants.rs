//! Variant catalogue and selector rewriting.
//!
//! `responsive` duplicates rules into one min-width media block per screen.
//! Every other variant is a state variant: its rules stay at the top level
//! with a prefixed class and a pseudo-class (or a `.group` ancestor).

use crate::config::HostConfig;
use anyhow::{Result, anyhow};
use css_aspect_ratio::VariantResolver;
use css_selectors::{Selector, class_selector, parse_selector};
use css_syntax::StyleRule;
use log::debug;

/// Variant names in the order the host emits them.
pub const VARIANT_ORDER: &[&str] = &[
    "responsive",
    "group-hover",
    "group-focus",
    "focus-within",
    "first",
    "last",
    "odd",
    "even",
    "hover",
    "focus",
    "active",
    "visited",
    "disabled",
];

/// A variant the host knows how to expand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// One `@media (min-width: ...)` copy per screen.
    Responsive,
    /// `.group:{pseudo} .{variant}:{class}`.
    Group {
        name: &'static str,
        pseudo_class: &'static str,
    },
    /// `.{variant}:{class}{pseudo}`.
    PseudoClass {
        name: &'static str,
        pseudo_class: &'static str,
    },
}

impl Variant {
    /// Look up a variant by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        let variant = match name {
            "responsive" => Self::Responsive,
            "group-hover" => Self::Group {
                name: "group-hover",
                pseudo_class: ":hover",
            },
            "group-focus" => Self::Group {
                name: "group-focus",
                pseudo_class: ":focus",
            },
            "first" => Self::pseudo("first", ":first-child"),
            "last" => Self::pseudo("last", ":last-child"),
            "odd" => Self::pseudo("odd", ":nth-child(odd)"),
            "even" => Self::pseudo("even", ":nth-child(even)"),
            "focus-within" => Self::pseudo("focus-within", ":focus-within"),
            "hover" => Self::pseudo("hover", ":hover"),
            "focus" => Self::pseudo("focus", ":focus"),
            "active" => Self::pseudo("active", ":active"),
            "visited" => Self::pseudo("visited", ":visited"),
            "disabled" => Self::pseudo("disabled", ":disabled"),
            _ => return None,
        };
        Some(variant)
    }

    #[inline]
    const fn pseudo(name: &'static str, pseudo_class: &'static str) -> Self {
        Self::PseudoClass { name, pseudo_class }
    }

    /// Configuration name of the variant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Responsive => "responsive",
            Self::Group { name, .. } | Self::PseudoClass { name, .. } => name,
        }
    }

    /// Position in [`VARIANT_ORDER`].
    pub fn rank(self) -> usize {
        let name = self.name();
        VARIANT_ORDER
            .iter()
            .position(|&known| known == name)
            .unwrap_or(VARIANT_ORDER.len())
    }

    /// Rewrite a state-variant copy of `rule`. Returns `None` for
    /// [`Variant::Responsive`], which is expanded per screen instead.
    #[inline]
    pub fn apply(self, rule: &StyleRule, config: &HostConfig) -> Option<StyleRule> {
        self.rewrite(rule, "", config)
    }

    /// State-variant copy of `rule` inside `screen`'s media block.
    ///
    /// The screen prefix goes in front of the variant prefix on the utility
    /// classes only; a `.group` ancestor keeps its plain name.
    #[inline]
    pub fn apply_on_screen(
        self,
        rule: &StyleRule,
        screen: &str,
        config: &HostConfig,
    ) -> Option<StyleRule> {
        self.rewrite(rule, &variant_prefix(screen, config), config)
    }

    fn rewrite(self, rule: &StyleRule, screen_prefix: &str, config: &HostConfig) -> Option<StyleRule> {
        let mut selector = parse_selector(&rule.prelude);
        match self {
            Self::Responsive => return None,
            Self::Group { name, pseudo_class } => {
                let prefix = format!("{screen_prefix}{}", variant_prefix(name, config));
                selector.prefix_classes(&prefix);
                let group = class_selector(&format!("{}group", config.prefix));
                selector.prepend_verbatim(&format!("{group}{pseudo_class} "));
            }
            Self::PseudoClass { name, pseudo_class } => {
                let prefix = format!("{screen_prefix}{}", variant_prefix(name, config));
                selector.prefix_classes_with_pseudo(&prefix, pseudo_class);
            }
        }
        Some(with_selector(rule, &selector))
    }
}

/// `{name}{separator}`.
#[inline]
fn variant_prefix(name: &str, config: &HostConfig) -> String {
    format!("{name}{}", config.separator)
}

/// Copy of `rule` with its prelude replaced by `selector`.
pub fn with_selector(rule: &StyleRule, selector: &Selector) -> StyleRule {
    StyleRule {
        prelude: selector.to_css(),
        declarations: rule.declarations.clone(),
    }
}

/// Copy of `rule` for `screen`, every class prefixed `{screen}{separator}`.
pub fn screen_copy(rule: &StyleRule, screen: &str, config: &HostConfig) -> StyleRule {
    let mut selector = parse_selector(&rule.prelude);
    selector.prefix_classes(&variant_prefix(screen, config));
    with_selector(rule, &selector)
}

/// Parse variant names into host variants, sorted into [`VARIANT_ORDER`]
/// with duplicates removed.
///
/// # Errors
/// Returns an error naming the first variant the host does not know.
pub fn parse_variants(names: &[String]) -> Result<Vec<Variant>> {
    let mut variants = names
        .iter()
        .map(|name| {
            Variant::from_name(name).ok_or_else(|| {
                anyhow!(
                    "variant `{name}` is not known to this host (known variants: {})",
                    VARIANT_ORDER.join(", ")
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;
    variants.sort_by_key(|variant| variant.rank());
    variants.dedup();
    Ok(variants)
}

/// Resolves plugin variants against the host configuration.
///
/// An explicit `variants.{plugin}` entry wins over what the plugin asks for.
/// Duplicates are dropped; unknown names are kept for the registrar to report.
#[derive(Clone, Copy, Debug)]
pub struct HostVariants<'cfg> {
    config: &'cfg HostConfig,
}

impl<'cfg> HostVariants<'cfg> {
    #[inline]
    pub const fn new(config: &'cfg HostConfig) -> Self {
        Self { config }
    }
}

impl VariantResolver for HostVariants<'_> {
    fn resolve_variants(&self, plugin_key: &str, configured: &[String]) -> Vec<String> {
        let source = self
            .config
            .configured_variants(plugin_key)
            .unwrap_or(configured);
        let mut resolved: Vec<String> = Vec::with_capacity(source.len());
        for name in source {
            if !resolved.contains(name) {
                resolved.push(name.clone());
            }
        }
        debug!("{plugin_key}: variants resolved to [{}]", resolved.join(", "));
        resolved
    }
}
