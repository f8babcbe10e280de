// File: src/error.rs
// Purpose: Error types for template compilation, matching and rendering

use thiserror::Error;

use crate::template::ParamName;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning templates into regular expressions or renderers
///
/// Templates themselves never fail to tokenize; everything here comes from a
/// caller-supplied pattern that the regex engine rejects, from the matcher
/// giving up on a pathological pattern, or from rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// The synthesized path expression could not be compiled
    #[error("invalid path expression `{pattern}`: {source}")]
    InvalidExpression {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// A parameter pattern could not be compiled into its render-time validator
    #[error("invalid pattern for parameter \"{name}\" `{pattern}`: {source}")]
    InvalidParameterPattern {
        name: ParamName,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The matcher failed at runtime (backtrack limit and similar)
    #[error("failed to match `{path}`: {source}")]
    Match {
        path: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Render-time failure: the supplied data does not satisfy a parameter
///
/// Every variant names the parameter; pattern mismatches also carry the
/// required pattern and the encoded segment that failed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("expected \"{name}\" to not repeat, but got a sequence")]
    UnexpectedSequence { name: ParamName },

    #[error("expected \"{name}\" to not be empty")]
    EmptySequence { name: ParamName },

    #[error("expected all \"{name}\" to match \"{pattern}\", but got \"{segment}\"")]
    SequenceMismatch {
        name: ParamName,
        pattern: String,
        segment: String,
    },

    #[error("expected \"{name}\" to match \"{pattern}\", but got \"{segment}\"")]
    Mismatch {
        name: ParamName,
        pattern: String,
        segment: String,
    },

    #[error("expected \"{name}\" to be {expected}")]
    Missing {
        name: ParamName,
        expected: &'static str,
    },
}

impl RenderError {
    /// Name of the parameter that could not be rendered
    pub fn name(&self) -> &ParamName {
        match self {
            RenderError::UnexpectedSequence { name }
            | RenderError::EmptySequence { name }
            | RenderError::SequenceMismatch { name, .. }
            | RenderError::Mismatch { name, .. }
            | RenderError::Missing { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_messages() {
        let err = RenderError::Missing {
            name: ParamName::from("id"),
            expected: "a string",
        };
        assert_eq!(err.to_string(), "expected \"id\" to be a string");

        let err = RenderError::Mismatch {
            name: ParamName::Index(0),
            pattern: "\\d+".to_string(),
            segment: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "expected \"0\" to match \"\\d+\", but got \"abc\""
        );
    }

    #[test]
    fn test_render_error_converts_and_keeps_name() {
        let err: Error = RenderError::EmptySequence {
            name: ParamName::from("tags"),
        }
        .into();

        match err {
            Error::Render(inner) => assert_eq!(inner.name(), &ParamName::from("tags")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
