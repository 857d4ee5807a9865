use crate::{error::Result, rule::Rule};

/// One rule as written in a declaration file, before it's compiled. This is
/// what a file parser hands over: the owners, and optionally a pattern and
/// whether that pattern is limited to the declaring directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleDeclaration {
    pub owners: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pattern: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub same_dir: bool,
}

impl RuleDeclaration {
    /// Compile the declaration into a [`Rule`] declared at `declaration_path`.
    /// Without a pattern the rule covers all files and `same_dir` is ignored.
    pub fn into_rule(self, declaration_path: impl Into<String>) -> Result<Rule> {
        match (self.pattern, self.same_dir) {
            (None, _) => Ok(Rule::new_all_files(declaration_path, self.owners)),
            (Some(pattern), false) => Rule::new_pattern(declaration_path, self.owners, pattern),
            (Some(pattern), true) => {
                Rule::new_same_dir_pattern(declaration_path, self.owners, pattern)
            }
        }
    }
}
