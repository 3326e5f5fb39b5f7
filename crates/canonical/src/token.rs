/// Splits normalized text into word tokens.
///
/// Assumes `text` has already been through [`normalize`](crate::normalize);
/// tokens are the maximal runs of non-whitespace characters, so empty tokens
/// are never produced.
///
/// ```rust
/// use canonical::tokenize;
///
/// assert_eq!(tokenize("drywall sheet 4x8"), vec!["drywall", "sheet", "4x8"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(token_start) = start.take() {
                tokens.push(&text[token_start..idx]);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(&text[token_start..]);
    }

    tokens
}

/// Character n-grams of a single token, counted in `char`s.
///
/// A token shorter than `n` yields itself as its only gram so short words
/// still contribute a signal. `n == 0` and empty tokens yield nothing.
///
/// ```rust
/// use canonical::char_ngrams;
///
/// assert_eq!(char_ngrams("outlet", 3), vec!["out", "utl", "tle", "let"]);
/// assert_eq!(char_ngrams("ea", 3), vec!["ea"]);
/// ```
pub fn char_ngrams(token: &str, n: usize) -> Vec<String> {
    if n == 0 || token.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= n {
        return vec![token.to_string()];
    }

    chars
        .windows(n)
        .map(|window| window.iter().collect::<String>())
        .collect()
}
