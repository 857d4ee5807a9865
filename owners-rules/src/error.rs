/// Errors raised while building a rule or rule set from declaration data. Matching itself
/// never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pattern must not be empty")]
    EmptyPattern,

    #[error("invalid pattern `{pattern}`: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule declared in `{found}` can't join the rule set for `{expected}`")]
    DeclarationPathMismatch { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, Error>;
