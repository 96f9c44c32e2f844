//! Collects registered utilities and lays them out as a stylesheet.

use crate::config::HostConfig;
use crate::variants::{Variant, parse_variants, screen_copy, with_selector};
use anyhow::Result;
use css_aspect_ratio::RuleRegistrar;
use css_selectors::parse_selector;
use css_syntax::{CssBlock, RuleSet, StyleRule, Stylesheet};
use log::{debug, trace};

/// A prepared base rule and the state variant still to apply to it.
#[derive(Clone, Copy, Debug)]
struct Expansion<'rule> {
    rule: &'rule StyleRule,
    variant: Option<Variant>,
}

/// A base rule kept for the per-screen media blocks. The state variant is
/// applied per screen so the screen prefix never reaches a `.group` ancestor.
#[derive(Clone, Debug)]
struct ScreenEntry {
    rule: StyleRule,
    variant: Option<Variant>,
}

impl ScreenEntry {
    fn on_screen(&self, screen: &str, config: &HostConfig) -> Option<StyleRule> {
        match self.variant {
            None => Some(screen_copy(&self.rule, screen, config)),
            Some(variant) => variant.apply_on_screen(&self.rule, screen, config),
        }
    }
}

/// Utility rules registered by plugins, already expanded across state
/// variants.
#[derive(Debug)]
pub struct UtilityRegistry<'cfg> {
    config: &'cfg HostConfig,
    /// Top-level rules: each group's base rules followed by its state copies.
    base: Vec<StyleRule>,
    /// Rules that also get a copy per screen.
    responsive: Vec<ScreenEntry>,
}

impl<'cfg> UtilityRegistry<'cfg> {
    #[inline]
    pub const fn new(config: &'cfg HostConfig) -> Self {
        Self {
            config,
            base: Vec::new(),
            responsive: Vec::new(),
        }
    }

    /// Apply the configured class prefix and `!important` flag.
    fn prepare(&self, rule: &StyleRule) -> StyleRule {
        let mut prepared = if self.config.prefix.is_empty() {
            rule.clone()
        } else {
            let mut selector = parse_selector(&rule.prelude);
            selector.prefix_classes(&self.config.prefix);
            with_selector(rule, &selector)
        };
        if self.config.important {
            for decl in &mut prepared.declarations {
                decl.important = true;
            }
        }
        prepared
    }

    /// Base rules first, then one copy of every base rule per state variant.
    fn expand_group<'rule>(
        base: &'rule [StyleRule],
        variants: &[Variant],
    ) -> Vec<Expansion<'rule>> {
        let unvaried = base.iter().map(|rule| Expansion { rule, variant: None });
        let varied = variants
            .iter()
            .filter(|&&variant| variant != Variant::Responsive)
            .flat_map(|&variant| {
                base.iter().map(move |rule| Expansion {
                    rule,
                    variant: Some(variant),
                })
            });
        unvaried.chain(varied).collect()
    }

    /// Number of top-level rules registered so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Lay out the stylesheet: top-level rules first, then one media block
    /// per screen holding that screen's copies. Empty media blocks are omitted.
    pub fn into_stylesheet(self) -> Stylesheet {
        let mut blocks: Vec<CssBlock> = self.base.into_iter().map(CssBlock::Style).collect();
        if !self.responsive.is_empty() {
            for (screen, width) in &self.config.theme.screens {
                let rules = self
                    .responsive
                    .iter()
                    .filter_map(|entry| entry.on_screen(screen, self.config))
                    .collect();
                trace!("screen {screen} ({width})");
                blocks.push(CssBlock::Media {
                    query: format!("(min-width: {width})"),
                    rules,
                });
            }
        }
        Stylesheet { blocks }
    }
}

impl RuleRegistrar for UtilityRegistry<'_> {
    fn register_utilities(&mut self, groups: &[RuleSet], variants: &[String]) -> Result<()> {
        let variants = parse_variants(variants)?;
        let responsive = variants.contains(&Variant::Responsive);
        for group in groups.iter().filter(|group| !group.is_empty()) {
            let base: Vec<StyleRule> = group.iter().map(|rule| self.prepare(rule)).collect();
            for expansion in Self::expand_group(&base, &variants) {
                let top_level = match expansion.variant {
                    None => Some(expansion.rule.clone()),
                    Some(variant) => {
                        trace!("variant {} on {}", variant.name(), expansion.rule.prelude);
                        variant.apply(expansion.rule, self.config)
                    }
                };
                self.base.extend(top_level);
                if responsive {
                    self.responsive.push(ScreenEntry {
                        rule: expansion.rule.clone(),
                        variant: expansion.variant,
                    });
                }
            }
            debug!(
                "registered {} base rules across {} variants",
                base.len(),
                variants.len()
            );
        }
        Ok(())
    }
}
