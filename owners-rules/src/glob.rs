use memchr::memmem;
use regex::Regex;

use crate::error::{Error, Result};

/// A compiled basename pattern. `*` is the only wildcard and matches any run
/// of characters, including none. Every other character is literal.
///
/// The derived regex is unanchored: a glob matches a candidate if the regex is
/// found anywhere within it, so `package*.json` matches `package.lock.json`.
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    regex: Regex,
    condition: MatchCondition,
}

impl Glob {
    /// Compile `pattern`. Fails if the pattern is empty or the derived regex
    /// can't be built.
    pub fn new(pattern: impl Into<String>) -> Result<Glob> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let source = glob_to_regex(&pattern);
        let regex = Regex::new(&source).map_err(|source| Error::Regex {
            pattern: pattern.clone(),
            source,
        })?;
        let condition = MatchCondition::new(&pattern);
        tracing::trace!(pattern = %pattern, regex = %regex, ?condition, "compiled glob");

        Ok(Glob {
            pattern,
            regex,
            condition,
        })
    }

    /// The pattern as it was declared.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The unanchored regex derived from the pattern.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Test a single path segment (usually a basename) against the pattern.
    pub fn is_match(&self, candidate: &str) -> bool {
        match self.condition {
            MatchCondition::Contains => {
                memmem::find(candidate.as_bytes(), self.pattern.as_bytes()).is_some()
            }
            MatchCondition::Regex => self.regex.is_match(candidate),
        }
    }

    /// See [`escape_regex_chars`].
    pub fn escape_regex_chars(text: &str) -> String {
        escape_regex_chars(text)
    }
}

// Patterns without a wildcard are plain substring searches, which don't need
// the regex engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchCondition {
    Contains,
    Regex,
}

impl MatchCondition {
    fn new(pattern: &str) -> Self {
        if pattern.contains('*') {
            Self::Regex
        } else {
            Self::Contains
        }
    }
}

/// Escape the characters of `text` that have a meaning in a regex outside of a
/// character class, leaving `*` untouched. Characters that are only special
/// inside a class or in verbose mode (`-`, `&`, `~`, `#`) pass through, as do
/// spaces.
pub fn escape_regex_chars(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if needs_escape(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn needs_escape(c: char) -> bool {
    match c {
        '*' | '-' | '&' | '~' | '#' => false,
        _ => regex_syntax::is_meta_character(c),
    }
}

/// Translate a glob into the source of its (unanchored) regex. Literal runs
/// are escaped and each `*` becomes a lazy `.*?`.
pub fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    for (i, literal) in pattern.split('*').enumerate() {
        if i > 0 {
            regex.push_str(".*?");
        }
        regex.push_str(&escape_regex_chars(literal));
    }
    regex
}
