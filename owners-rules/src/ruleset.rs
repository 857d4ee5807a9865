use crate::{
    declaration::RuleDeclaration,
    error::{Error, Result},
    rule::Rule,
};

/// The rules of a single declaration file, in declaration order.
///
/// A `RuleSet` only ranks rules against each other. Combining the answers of
/// several declaration files (e.g. a nested `OWNERS.yaml` overriding its
/// parent) is up to the caller.
#[derive(Debug, Clone)]
pub struct RuleSet {
    declaration_path: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn declaration_path(&self) -> &str {
        &self.declaration_path
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// All rules that match `path`, with their index in the declaration file.
    pub fn matching_rules(&self, path: &str) -> Vec<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.matches(path))
            .collect()
    }

    /// The most specific rule matching `path`. When several rules share the
    /// highest specificity the one declared last wins.
    pub fn most_specific(&self, path: &str) -> Option<&Rule> {
        self.matching_rules(path)
            .into_iter()
            .max_by_key(|&(idx, rule)| (rule.specificity(), idx))
            .map(|(_, rule)| rule)
    }

    /// Owners of the most specific matching rule. Returns `None` if no rule
    /// matches, or if the winning rule lists no owners.
    pub fn owners(&self, path: &str) -> Option<&[String]> {
        self.most_specific(path).and_then(|rule| {
            if rule.owners().is_empty() {
                None
            } else {
                Some(rule.owners())
            }
        })
    }
}

/// Collects the rules of one declaration file into a [`RuleSet`].
pub struct RuleSetBuilder {
    declaration_path: String,
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    pub fn new(declaration_path: impl Into<String>) -> Self {
        Self {
            declaration_path: declaration_path.into(),
            rules: Vec::new(),
        }
    }

    /// Add an already-built rule. Returns its index in the set. The rule must
    /// come from the same declaration file as the builder.
    pub fn add(&mut self, rule: Rule) -> Result<usize> {
        if rule.declaration_path() != self.declaration_path {
            return Err(Error::DeclarationPathMismatch {
                expected: self.declaration_path.clone(),
                found: rule.declaration_path().to_owned(),
            });
        }
        self.rules.push(rule);
        Ok(self.rules.len() - 1)
    }

    /// Compile a declaration against this builder's declaration path and add
    /// it. Returns its index in the set.
    pub fn add_declaration(&mut self, declaration: RuleDeclaration) -> Result<usize> {
        let rule = declaration.into_rule(self.declaration_path.as_str())?;
        self.add(rule)
    }

    pub fn build(self) -> RuleSet {
        tracing::debug!(
            declaration_path = %self.declaration_path,
            rules = self.rules.len(),
            "built rule set"
        );
        RuleSet {
            declaration_path: self.declaration_path,
            rules: self.rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(owners: &[&str], pattern: Option<&str>, same_dir: bool) -> RuleDeclaration {
        RuleDeclaration {
            owners: owners.iter().map(|&o| o.to_owned()).collect(),
            pattern: pattern.map(str::to_owned),
            same_dir,
        }
    }

    fn ruleset_for(declarations: Vec<RuleDeclaration>) -> RuleSet {
        let mut builder = RuleSetBuilder::new("foo/OWNERS.yaml");
        for declaration in declarations {
            builder.add_declaration(declaration).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_matching_rules() {
        let ruleset = ruleset_for(vec![
            declaration(&["@all"], None, false),
            declaration(&["@js"], Some("*.js"), false),
            declaration(&["@local-js"], Some("*.js"), true),
            declaration(&["@css"], Some("*.css"), false),
        ]);

        let expected: &[(&str, &[usize])] = &[
            ("foo/main.js", &[0, 1, 2]),
            ("foo/bar/main.js", &[0, 1]),
            ("foo/style.css", &[0, 3]),
            ("foo/README.md", &[0]),
        ];
        for (path, indices) in expected {
            let matched = ruleset
                .matching_rules(path)
                .into_iter()
                .map(|(idx, _)| idx)
                .collect::<Vec<_>>();
            assert_eq!(&matched, indices, "matching rules for `{}`", path);
        }
    }

    #[test]
    fn test_most_specific() {
        let ruleset = ruleset_for(vec![
            declaration(&["@local-js"], Some("*.js"), true),
            declaration(&["@js"], Some("*.js"), false),
            declaration(&["@all"], None, false),
        ]);

        let expected = [
            ("foo/main.js", "./*.js: @local-js"),
            ("foo/bar/main.js", "**/*.js: @js"),
            ("foo/bar/style.css", "All files: @all"),
        ];
        for (path, rule) in expected {
            assert_eq!(
                ruleset.most_specific(path).map(|r| r.to_string()).as_deref(),
                Some(rule),
                "most specific rule for `{}`",
                path
            );
        }
    }

    #[test]
    fn test_most_specific_ties_go_to_last_declared() {
        let ruleset = ruleset_for(vec![
            declaration(&["@first"], Some("*.js"), false),
            declaration(&["@second"], Some("main*"), false),
        ]);

        assert_eq!(ruleset.owners("foo/main.js"), Some(&["@second".to_owned()][..]));
        assert_eq!(ruleset.owners("foo/index.js"), Some(&["@first".to_owned()][..]));
    }

    #[test]
    fn test_owners() {
        let ruleset = ruleset_for(vec![
            declaration(&["@a", "@b"], Some("*.js"), false),
            declaration(&[], Some("*.lock"), false),
        ]);

        assert_eq!(
            ruleset.owners("foo/main.js"),
            Some(&["@a".to_owned(), "@b".to_owned()][..])
        );
        assert_eq!(ruleset.owners("foo/yarn.lock"), None);
        assert_eq!(ruleset.owners("foo/style.css"), None);
    }

    #[test]
    fn test_builder_indices() {
        let mut builder = RuleSetBuilder::new("OWNERS.yaml");
        assert_eq!(
            builder
                .add(Rule::new_all_files("OWNERS.yaml", vec![]))
                .unwrap(),
            0
        );
        assert_eq!(
            builder
                .add_declaration(declaration(&[], Some("*.rs"), true))
                .unwrap(),
            1
        );
        assert!(builder
            .add_declaration(declaration(&[], Some(""), false))
            .is_err());

        let ruleset = builder.build();
        assert_eq!(ruleset.declaration_path(), "OWNERS.yaml");
        assert_eq!(ruleset.rules().len(), 2);
        assert_eq!(ruleset.rules()[1].dir_path(), "");
    }

    #[test]
    fn test_rules_from_other_declarations_are_rejected() {
        let mut builder = RuleSetBuilder::new("foo/OWNERS.yaml");
        let foreign =
            Rule::new_same_dir_pattern("bar/OWNERS.yaml", vec!["@bar".to_owned()], "*.js").unwrap();
        assert!(matches!(
            builder.add(foreign),
            Err(Error::DeclarationPathMismatch { expected, found })
                if expected == "foo/OWNERS.yaml" && found == "bar/OWNERS.yaml"
        ));
        builder
            .add(Rule::new_all_files("foo/OWNERS.yaml", vec!["@foo".to_owned()]))
            .unwrap();

        let ruleset = builder.build();
        assert_eq!(ruleset.rules().len(), 1);
        assert_eq!(
            ruleset.most_specific("foo/main.js").map(|r| r.to_string()).as_deref(),
            Some("All files: @foo")
        );
    }
}
