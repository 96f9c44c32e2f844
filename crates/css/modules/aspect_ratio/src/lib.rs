//! Aspect-ratio utilities: padding-based intrinsic ratio boxes.
//!
//! Given a table of named ratios (`"16/9" => [16, 9]`), the plugin produces:
//! - six structural rules (`.aspect-ratio`, `.min-h-aspect-ratio` and their
//!   pseudo-elements), emitted only when at least one ratio is configured
//! - one `.aspect-ratio-{name}::before` rule per ratio carrying the
//!   `padding-bottom` percentage that reserves the box height
//!
//! The plugin never writes CSS text. It hands both rule groups and the
//! resolved variant list to a host through [`RuleRegistrar`]; escaping and
//! variant resolution are likewise delegated through [`IdentifierEscaper`]
//! and [`VariantResolver`].

#![forbid(unsafe_code)]

mod config;
mod generator;
mod host;
mod ratio;

pub use config::{AspectRatioConfig, DEFAULT_VARIANTS, PLUGIN_KEY, RatioMap};
pub use generator::{AspectRatioPlugin, RatioRuleGenerator, UtilityGroups, structural_rules};
pub use host::{IdentifierEscaper, RuleRegistrar, VariantResolver};
pub use ratio::{RatioValue, ResolvedRatio};
