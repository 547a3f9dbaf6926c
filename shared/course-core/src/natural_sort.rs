//! Natural ordering for chapter and file names ("2" before "10")

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

fn digit_runs() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"))
}

/// One piece of a split name
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// Lowercased text between digit runs (may be empty)
    Text(String),

    /// Digit run with leading zeros removed
    Number(String),
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            // Shorter digit run is the smaller number once zeros are stripped
            (Token::Number(a), Token::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Token::Text(_), Token::Number(_)) => Ordering::Less,
            (Token::Number(_), Token::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key that compares digit runs as integers and text case-insensitively.
///
/// Tokens always alternate text, number, text, ... starting with a (possibly
/// empty) text token, so two keys only ever compare like tokens position by
/// position. Names that tie on tokens (`"01"` vs `"1"`, `"A"` vs `"a"`) fall
/// back to the raw string, which keeps the ordering total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalKey {
    tokens: Vec<Token>,
    raw: String,
}

impl NaturalKey {
    /// Build the key for a name
    pub fn new(name: &str) -> Self {
        let mut tokens = Vec::new();
        let mut last = 0;

        for run in digit_runs().find_iter(name) {
            tokens.push(Token::Text(name[last..run.start()].to_lowercase()));

            let digits = run.as_str().trim_start_matches('0');
            let value = if digits.is_empty() { "0" } else { digits };
            tokens.push(Token::Number(value.to_string()));

            last = run.end();
        }
        tokens.push(Token::Text(name[last..].to_lowercase()));

        Self {
            tokens,
            raw: name.to_string(),
        }
    }
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tokens
            .cmp(&other.tokens)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two names in natural order
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a).cmp(&NaturalKey::new(b))
}

/// Sort names in place in natural order
pub fn sort_naturally<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by_cached_key(|name| NaturalKey::new(name.as_ref()));
}
