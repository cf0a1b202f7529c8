//! Error types for identity string parsing

use thiserror::Error;

/// Why an identity string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The anchored grammar did not match the input
    GrammarMismatch,
    /// The grammar matched but a capture group was absent
    MissingCapture,
    /// The combined OS field has no space between name and version
    MissingOsVersion,
    /// The combined OS field has an empty or non-alphabetic name
    InvalidOsName,
    /// The combined OS field has a version that is not all digits
    InvalidOsVersion,
}

impl RejectReason {
    /// Short human readable description of the reason
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrammarMismatch => {
                "does not match 'app/version (device, os_name os_version, trailing)'"
            }
            Self::MissingCapture => "a field could not be extracted",
            Self::MissingOsVersion => "os field does not contain name and version",
            Self::InvalidOsName => "os name is not alphabetic",
            Self::InvalidOsVersion => "os version is not a number",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while parsing an identity string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XuaError {
    /// The input is not a well-formed identity string
    #[error("Malformed identity string '{input}': {reason}")]
    MalformedIdentity {
        /// The raw input that was rejected
        input: String,
        /// Classification of the rejection
        reason: RejectReason,
    },
}

impl XuaError {
    pub(crate) fn malformed(input: &str, reason: RejectReason) -> Self {
        Self::MalformedIdentity {
            input: input.to_string(),
            reason,
        }
    }

    /// The raw input that caused the error
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::MalformedIdentity { input, .. } => input,
        }
    }

    /// The classified rejection reason
    #[must_use]
    pub fn reason(&self) -> RejectReason {
        match self {
            Self::MalformedIdentity { reason, .. } => *reason,
        }
    }
}

/// Result type for identity string parsing
pub type XuaResult<T> = Result<T, XuaError>;
