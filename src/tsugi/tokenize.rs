use once_cell::sync::Lazy;
use regex::Regex;

static ARG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"([-\w]+|".*?")"#).expect("valid regex"));

/// Splits a raw command argument string into tokens.
///
/// A token is either a maximal run of word characters and hyphens, or a
/// double-quoted span with the quotes stripped. Tokens come out in order of
/// appearance; malformed quoting simply falls back to the word rule. Pure
/// and total: empty input yields an empty vector, missing-argument handling
/// is the caller's job.
pub fn tokenize(arg: &str) -> Vec<String> {
    ARG_RE
        .find_iter(arg)
        .map(|m| m.as_str().trim_matches('"').to_string())
        .collect()
}
