//! Error types for sqlchain

use thiserror::Error;

/// Result type alias for sqlchain operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while flattening a fragment chain.
///
/// Both substitution errors are fatal to the build call that raised them. Nothing is
/// cached, so the caller can inspect the chain, fix the arguments and build again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SqlError {
    /// A positional placeholder (`@3`) points past the fragment's arguments.
    #[error("Parameter '@{index}' specified but only {count} parameters supplied (in `{template}`)")]
    ParamOutOfRange {
        index: usize,
        count: usize,
        template: String,
    },

    /// A named placeholder (`@name`) has no matching keyed argument.
    #[error(
        "Parameter '@{name}' specified but none of the passed arguments have a property with this name (in `{template}`)"
    )]
    MissingParam { name: String, template: String },
}

impl SqlError {
    /// Create a range error for a positional placeholder
    pub fn out_of_range(index: usize, count: usize, template: impl Into<String>) -> Self {
        Self::ParamOutOfRange {
            index,
            count,
            template: template.into(),
        }
    }

    /// Create a missing-key error for a named placeholder
    pub fn missing_param(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self::MissingParam {
            name: name.into(),
            template: template.into(),
        }
    }

    /// Check if this is a positional range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::ParamOutOfRange { .. })
    }

    /// Check if this is a missing named parameter error
    pub fn is_missing_param(&self) -> bool {
        matches!(self, Self::MissingParam { .. })
    }

    /// The raw template text of the fragment that failed.
    pub fn template(&self) -> &str {
        match self {
            Self::ParamOutOfRange { template, .. } | Self::MissingParam { template, .. } => {
                template
            }
        }
    }
}
