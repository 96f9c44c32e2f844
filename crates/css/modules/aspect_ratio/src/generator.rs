//! Rule generation for the aspect-ratio utilities.

use crate::{
    AspectRatioConfig, IdentifierEscaper, PLUGIN_KEY, RatioMap, ResolvedRatio, RuleRegistrar,
    VariantResolver,
};
use anyhow::{Context as _, Result};
use css_syntax::{CssValue, RuleSet, StyleRule};
use log::{debug, trace};

/// The ratio-independent rules shared by every aspect-ratio box.
///
/// `.aspect-ratio` reserves height through its `::before` padding and
/// stretches the first child over it; `.min-h-aspect-ratio` floats a zero-width
/// spacer so content taller than the ratio can still grow the box.
pub fn structural_rules() -> RuleSet {
    let empty = || CssValue::quoted("");
    vec![
        StyleRule::new(".aspect-ratio").with("position", CssValue::keyword("relative")),
        StyleRule::new(".aspect-ratio::before")
            .with("content", empty())
            .with("display", CssValue::keyword("block")),
        StyleRule::new(".aspect-ratio > :first-child")
            .with("position", CssValue::keyword("absolute"))
            .with("top", CssValue::Number(0.0))
            .with("left", CssValue::Number(0.0))
            .with("width", CssValue::keyword("100%"))
            .with("height", CssValue::keyword("100%")),
        StyleRule::new(".aspect-ratio > img").with("height", CssValue::keyword("auto")),
        StyleRule::new(".min-h-aspect-ratio::before")
            .with("content", empty())
            .with("width", CssValue::keyword("1px"))
            .with("margin-left", CssValue::keyword("-1px"))
            .with("float", CssValue::keyword("left"))
            .with("height", CssValue::Number(0.0)),
        // Clears the spacer float.
        StyleRule::new(".min-h-aspect-ratio::after")
            .with("content", empty())
            .with("display", CssValue::keyword("table"))
            .with("clear", CssValue::keyword("both")),
    ]
    .into()
}

/// The two rule groups handed to the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UtilityGroups {
    /// The six structural rules, or nothing when no ratio is configured.
    pub structural: RuleSet,
    /// One `padding-bottom` rule per configured ratio.
    pub dynamic: RuleSet,
}

impl UtilityGroups {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.structural.is_empty() && self.dynamic.is_empty()
    }

    /// Groups in registration order: structural first, then dynamic.
    #[inline]
    pub fn into_groups(self) -> [RuleSet; 2] {
        [self.structural, self.dynamic]
    }
}

/// Pure transformation from a ratio table to utility rules.
pub struct RatioRuleGenerator<'host, E: ?Sized> {
    escaper: &'host E,
}

impl<'host, E: IdentifierEscaper + ?Sized> RatioRuleGenerator<'host, E> {
    #[inline]
    pub const fn new(escaper: &'host E) -> Self {
        Self { escaper }
    }

    /// Resolve every ratio to a scalar, keeping table order.
    pub fn resolve(theme_ratios: &RatioMap) -> Vec<ResolvedRatio> {
        theme_ratios
            .iter()
            .map(|(name, value)| ResolvedRatio::new(name.as_str(), *value))
            .collect()
    }

    /// `.aspect-ratio-{name}::before { padding-bottom: ... }`.
    pub fn dynamic_rule(&self, ratio: &ResolvedRatio) -> StyleRule {
        let class = self.escaper.escape_identifier(&ratio.class_name());
        StyleRule::new(format!(".{class}::before"))
            .with("padding-bottom", ratio.padding_bottom())
    }

    /// Generate both rule groups for `theme_ratios`.
    pub fn generate(&self, theme_ratios: &RatioMap) -> UtilityGroups {
        if theme_ratios.is_empty() {
            debug!("{PLUGIN_KEY}: no ratios configured, nothing to generate");
            return UtilityGroups::default();
        }
        let dynamic: Vec<StyleRule> = Self::resolve(theme_ratios)
            .iter()
            .map(|ratio| {
                let rule = self.dynamic_rule(ratio);
                trace!("{PLUGIN_KEY}: {} -> {}", ratio.name, rule.prelude);
                rule
            })
            .collect();
        let groups = UtilityGroups {
            structural: structural_rules(),
            dynamic: dynamic.into(),
        };
        debug!(
            "{PLUGIN_KEY}: generated {} structural and {} dynamic rules",
            groups.structural.len(),
            groups.dynamic.len()
        );
        groups
    }
}

/// The aspect-ratio plugin bound to its configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AspectRatioPlugin {
    config: AspectRatioConfig,
}

impl AspectRatioPlugin {
    #[inline]
    pub const fn new(config: AspectRatioConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &AspectRatioConfig {
        &self.config
    }

    /// Generate the rule groups without registering them.
    #[inline]
    pub fn generate<E: IdentifierEscaper + ?Sized>(&self, escaper: &E) -> UtilityGroups {
        RatioRuleGenerator::new(escaper).generate(&self.config.theme_ratios)
    }

    /// Generate the utilities and register them with the host.
    ///
    /// # Errors
    /// Returns the registrar's error when the host rejects the groups or
    /// their variants.
    pub fn apply<E, V, R>(&self, escaper: &E, resolver: &V, registrar: &mut R) -> Result<()>
    where
        E: IdentifierEscaper + ?Sized,
        V: VariantResolver + ?Sized,
        R: RuleRegistrar + ?Sized,
    {
        let variants = resolver.resolve_variants(PLUGIN_KEY, &self.config.variants);
        let groups = self.generate(escaper).into_groups();
        registrar
            .register_utilities(&groups, &variants)
            .with_context(|| format!("failed to register {PLUGIN_KEY} utilities"))
    }
}
