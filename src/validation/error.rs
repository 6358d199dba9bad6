use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// A violation that stops the current validation call.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ValidationError {
    /// A mandatory property is absent.
    #[error("{message}")]
    #[diagnostic(
        code(geoconform::missing),
        help("set `require_mandatory_attributes: false` to report this as a warning")
    )]
    Missing { message: String },

    /// A property that must be absent is present.
    #[error("{message}")]
    #[diagnostic(
        code(geoconform::forbidden),
        help("set `enforce_forbidden_attributes: false` to report this as a warning")
    )]
    Forbidden { message: String },

    /// A value is out of range or contradicts another value.
    #[error("{message}")]
    #[diagnostic(code(geoconform::inconsistent))]
    Inconsistent { message: String },

    #[error("Object graph is deeper than {limit} levels; it probably contains a cycle.")]
    #[diagnostic(
        code(geoconform::depth_exceeded),
        help("raise `max_depth` if the graph is legitimately this deep")
    )]
    DepthExceeded { limit: usize },
}

impl ValidationError {
    pub fn missing(message: impl Into<String>) -> Self {
        Self::Missing {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::Inconsistent {
            message: message.into(),
        }
    }

    /// Presence violations are the only ones the configuration may downgrade.
    pub fn is_presence_violation(&self) -> bool {
        matches!(self, Self::Missing { .. } | Self::Forbidden { .. })
    }
}
