//! CSS identifier escaping.
//! See: <https://drafts.csswg.org/cssom/#serialize-an-identifier>

use core::fmt::{self, Display, Formatter};
use cssparser::serialize_identifier;

/// Display adapter that writes its contents as an escaped CSS identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CssIdent<'ident>(pub &'ident str);

impl Display for CssIdent<'_> {
    #[inline]
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        serialize_identifier(self.0, formatter)
    }
}

/// Escape `ident` so it can be used as a class name in a selector.
///
/// ASCII characters outside `[A-Za-z0-9_-]` are backslash-escaped (`2/1`
/// becomes `2\/1`). A leading digit is written as a hex escape.
#[inline]
pub fn escape_identifier(ident: &str) -> String {
    CssIdent(ident).to_string()
}

/// Build `.{escaped ident}`.
#[inline]
pub fn class_selector(ident: &str) -> String {
    format!(".{}", CssIdent(ident))
}
