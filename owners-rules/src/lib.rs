//! Rules from OWNERS declaration files, and how they match repository paths.
//!
//! ```
//! use owners_rules::Rule;
//!
//! let rule = Rule::new_same_dir_pattern("foo/OWNERS.yaml", vec!["@web".into()], "*.js")?;
//! assert!(rule.matches("foo/main.js"));
//! assert!(!rule.matches("foo/bar/code.js"));
//! assert_eq!(rule.to_string(), "./*.js: @web");
//! # Ok::<(), owners_rules::Error>(())
//! ```

mod declaration;
mod error;
pub mod glob;
pub mod path;
mod rule;
mod ruleset;

pub use declaration::RuleDeclaration;
pub use error::{Error, Result};
pub use glob::Glob;
pub use rule::{Rule, RuleKind, Specificity};
pub use ruleset::{RuleSet, RuleSetBuilder};
