//! Interfaces a stylesheet host provides to utility plugins.

use anyhow::Result;
use css_syntax::RuleSet;

/// Turns arbitrary names into CSS identifiers safe for class selectors.
pub trait IdentifierEscaper {
    /// Escape `ident` (for example `aspect-ratio-2/1` into `aspect-ratio-2\/1`).
    fn escape_identifier(&self, ident: &str) -> String;
}

/// Resolves which variants are active for a plugin.
pub trait VariantResolver {
    /// Effective variant list for `plugin_key`, given what the plugin's
    /// configuration asks for. Unknown names may be passed through; the
    /// registrar decides whether to reject them.
    fn resolve_variants(&self, plugin_key: &str, configured: &[String]) -> Vec<String>;
}

/// Accepts utility rule groups for expansion into CSS.
pub trait RuleRegistrar {
    /// Register `groups` to be emitted as-is and once per variant in `variants`.
    ///
    /// # Errors
    /// Returns an error if the host cannot expand a group, for example
    /// because a variant name is not known to it.
    fn register_utilities(&mut self, groups: &[RuleSet], variants: &[String]) -> Result<()>;
}

impl<T: IdentifierEscaper + ?Sized> IdentifierEscaper for &T {
    #[inline]
    fn escape_identifier(&self, ident: &str) -> String {
        (**self).escape_identifier(ident)
    }
}

impl<T: VariantResolver + ?Sized> VariantResolver for &T {
    #[inline]
    fn resolve_variants(&self, plugin_key: &str, configured: &[String]) -> Vec<String> {
        (**self).resolve_variants(plugin_key, configured)
    }
}

impl<T: RuleRegistrar + ?Sized> RuleRegistrar for &mut T {
    #[inline]
    fn register_utilities(&mut self, groups: &[RuleSet], variants: &[String]) -> Result<()> {
        (**self).register_utilities(groups, variants)
    }
}
