use std::{borrow::Cow, fmt};

use regex::Regex;

use crate::{error::Result, glob::Glob, path};

/// A single rule from an OWNERS declaration file: a set of owners and the
/// files they cover. The declaration path fixes the directory the rule was
/// written in.
///
/// Rules are immutable once built. Pattern-based rules compile their glob up
/// front, so matching is a pure lookup and a rule can be shared freely across
/// threads.
#[derive(Debug, Clone)]
pub struct Rule {
    declaration_path: String,
    owners: Vec<String>,
    kind: RuleKind,
}

/// The scope of a [`Rule`].
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Every file. Whether a file is under the declaring directory is left to
    /// the caller.
    AllFiles,
    /// Files at any depth whose basename matches the glob.
    Pattern(Glob),
    /// Files directly in the declaring directory whose basename matches the
    /// glob. Subdirectories are excluded.
    SameDirPattern(Glob),
}

/// How narrow a rule's scope is. Ordered from least to most specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Specificity {
    AllFiles,
    Pattern,
    SameDirPattern,
}

impl Rule {
    /// A rule owning every file in scope.
    pub fn new_all_files(declaration_path: impl Into<String>, owners: Vec<String>) -> Rule {
        Rule {
            declaration_path: declaration_path.into(),
            owners,
            kind: RuleKind::AllFiles,
        }
    }

    /// A rule owning files at any depth whose basename matches `pattern`.
    pub fn new_pattern(
        declaration_path: impl Into<String>,
        owners: Vec<String>,
        pattern: impl Into<String>,
    ) -> Result<Rule> {
        Ok(Rule {
            declaration_path: declaration_path.into(),
            owners,
            kind: RuleKind::Pattern(Glob::new(pattern)?),
        })
    }

    /// A rule owning files in the declaration's own directory whose basename
    /// matches `pattern`.
    pub fn new_same_dir_pattern(
        declaration_path: impl Into<String>,
        owners: Vec<String>,
        pattern: impl Into<String>,
    ) -> Result<Rule> {
        Ok(Rule {
            declaration_path: declaration_path.into(),
            owners,
            kind: RuleKind::SameDirPattern(Glob::new(pattern)?),
        })
    }

    /// Path of the declaration file the rule was read from.
    pub fn declaration_path(&self) -> &str {
        &self.declaration_path
    }

    /// The directory containing the declaration file, `""` at the top level.
    pub fn dir_path(&self) -> &str {
        path::dirname(&self.declaration_path)
    }

    /// Owners in declaration order.
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// The compiled glob, `None` for all-files rules.
    pub fn glob(&self) -> Option<&Glob> {
        match &self.kind {
            RuleKind::AllFiles => None,
            RuleKind::Pattern(glob) | RuleKind::SameDirPattern(glob) => Some(glob),
        }
    }

    /// The declared pattern, `None` for all-files rules.
    pub fn pattern(&self) -> Option<&str> {
        self.glob().map(Glob::pattern)
    }

    /// The regex derived from the pattern, `None` for all-files rules.
    pub fn regex(&self) -> Option<&Regex> {
        self.glob().map(Glob::regex)
    }

    /// Whether the rule applies to `file_path`, a path relative to the
    /// repository root.
    pub fn matches(&self, file_path: &str) -> bool {
        match &self.kind {
            RuleKind::AllFiles => true,
            RuleKind::Pattern(glob) => glob.is_match(path::basename(file_path)),
            RuleKind::SameDirPattern(glob) => {
                path::dirname(file_path) == self.dir_path()
                    && glob.is_match(path::basename(file_path))
            }
        }
    }

    /// A short human-readable description of the files the rule covers.
    pub fn label(&self) -> Cow<'_, str> {
        match &self.kind {
            RuleKind::AllFiles => Cow::Borrowed("All files"),
            RuleKind::Pattern(glob) => Cow::Owned(format!("**/{}", glob.pattern())),
            RuleKind::SameDirPattern(glob) => Cow::Owned(format!("./{}", glob.pattern())),
        }
    }

    pub fn specificity(&self) -> Specificity {
        match self.kind {
            RuleKind::AllFiles => Specificity::AllFiles,
            RuleKind::Pattern(_) => Specificity::Pattern,
            RuleKind::SameDirPattern(_) => Specificity::SameDirPattern,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.owners.join(", "))
    }
}
