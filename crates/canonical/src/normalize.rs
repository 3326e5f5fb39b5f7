use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;

/// Normalizes `raw` with the default [`NormalizeConfig`].
///
/// Never fails: empty, whitespace-only and punctuation-only input all
/// normalize to the empty string.
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("  Paint (Wall) -  Interior "), "paint wall interior");
/// assert_eq!(normalize("Café"), "cafe");
/// assert_eq!(normalize(" ,. "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, &NormalizeConfig::default())
}

/// Normalizes `raw` according to `cfg`.
pub fn normalize_with(raw: &str, cfg: &NormalizeConfig) -> String {
    // NFKD/NFKC are the identity on ASCII, which covers most catalog names.
    let unicode_text: Cow<str> = if raw.is_ascii() {
        Cow::Borrowed(raw)
    } else if cfg.fold_diacritics {
        Cow::Owned(raw.nfkd().filter(|ch| !is_combining_mark(*ch)).collect())
    } else {
        Cow::Owned(raw.nfkc().collect())
    };

    let mut out = String::with_capacity(unicode_text.len());
    let mut pending_space = false;

    for ch in unicode_text.chars() {
        // Lowercasing can expand a single character into several.
        if cfg.lowercase {
            for lower in ch.to_lowercase() {
                dispatch_char(lower, cfg, &mut out, &mut pending_space);
            }
        } else {
            dispatch_char(ch, cfg, &mut out, &mut pending_space);
        }
    }

    out
}

/// Appends `ch` to `out`, or records a pending word break when it is a delimiter.
fn dispatch_char(ch: char, cfg: &NormalizeConfig, out: &mut String, pending_space: &mut bool) {
    if is_delimiter(ch, cfg) {
        // Leading delimiters never produce a space.
        if !out.is_empty() {
            *pending_space = true;
        }
        return;
    }

    if *pending_space {
        out.push(' ');
        *pending_space = false;
    }
    out.push(ch);
}

fn is_delimiter(ch: char, cfg: &NormalizeConfig) -> bool {
    ch.is_whitespace()
        || ch.is_control()
        || ch.is_other_format()
        || (cfg.strip_punctuation && (ch.is_punctuation() || ch.is_symbol()))
}
