//! Masking of credential-shaped fields in request bodies.
//!
//! # Design
//! Request bodies are echoed into `ApiError::original_request` and into debug
//! logs. Before either happens the value of every `password`-like key is
//! replaced with a fixed mask. The transform is textual so it also works on
//! bodies that are not valid JSON; it never fails and leaves every byte outside
//! the masked values untouched.
//!
//! Two shapes are recognized:
//! - `"…password":"value"` (JSON, double quotes)
//! - `'…password':'value'` (single quotes)
//!
//! The leading letter may be `p` or `P`; the rest of the key is matched
//! case-sensitively. Any characters of the same key may precede it, so
//! `"newPassword"` is masked as well.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Replacement written in place of a masked value.
pub const MASK: &str = "********";

static DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]*?)([pP])assword"(\s*:\s*)"(?:[^"\\]|\\.)*""#).expect("literal pattern")
});

static SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'([^']*?)([pP])assword'(\s*:\s*)'(?:[^'\\]|\\.)*'").expect("literal pattern")
});

const DOUBLE_QUOTED_MASKED: &str = r#""${1}${2}assword"${3}"********""#;
const SINGLE_QUOTED_MASKED: &str = r"'${1}${2}assword'${3}'********'";

/// Mask every password value in `text`.
///
/// Returns the input unchanged (borrowed) when nothing matches. Applying the
/// function to its own output is a no-op.
pub fn redact(text: &str) -> Cow<'_, str> {
    match DOUBLE_QUOTED.replace_all(text, DOUBLE_QUOTED_MASKED) {
        Cow::Borrowed(_) => SINGLE_QUOTED.replace_all(text, SINGLE_QUOTED_MASKED),
        Cow::Owned(masked) => {
            Cow::Owned(SINGLE_QUOTED.replace_all(&masked, SINGLE_QUOTED_MASKED).into_owned())
        }
    }
}
