//! Annotation stripping for extracted article text.
//!
//! News body text routinely carries inline annotations the reader does not
//! want: photo credits like `(AP Photo/...)`, editorial notes like
//! `[updated]`, translation markers, and so on. Normalization removes every
//! bracketed or parenthetical span, delimiters included, in a single pass
//! over the assembled text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the shortest span from an opening `(` or `[` to the next closing
/// `)` or `]`. Mixed pairs like `(...]` are intentionally accepted; the
/// delimiters in scraped copy are not reliably balanced.
static ANNOTATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(\[].*?[)\]]").unwrap());

/// Remove every bracketed or parenthetical span from `text`.
///
/// Surrounding whitespace is left exactly as the caller assembled it, so
/// `"a (b) c"` becomes `"a  c"`. An opening delimiter with no closing
/// counterpart is left in place. The pass is idempotent: running it on
/// already-normalized text changes nothing.
pub fn strip_annotations(text: &str) -> String {
    ANNOTATION_RE.replace_all(text, "").into_owned()
}
