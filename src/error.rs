//! Canonical error and result types for the crate.
//!
//! Registration failures (duplicate steps or annotations) and resolution
//! failures (unknown steps, unfillable templates) share the single
//! [`StepError`] surface so callers can propagate either with `?`.

use thiserror::Error;

/// Top-level error type exposed by `annotated-steps`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepError {
    /// The owning library declares no step with the parsed method name.
    #[error("no step named `{method}` is declared by `{library}`")]
    UnresolvableStep {
        /// Name of the library that was searched.
        library: String,
        /// Method name parsed from the step identifier.
        method: String,
    },
    /// A step method was requested for a description carrying only a title.
    #[error("step `{title}` has no owning library")]
    NoOwner {
        /// The free-standing title.
        title: String,
    },
    /// A template placeholder refers past the end of the supplied arguments.
    #[error("template placeholder {{{index}}} needs an argument but only {available} were supplied")]
    MissingArgument {
        /// Zero-based placeholder index.
        index: usize,
        /// Number of arguments parsed from the step identifier.
        available: usize,
    },
    /// A field placeholder refers to a field whose value is undefined.
    #[error("field `#{field}` is undefined")]
    UndefinedField {
        /// Field name without the leading `#`.
        field: String,
    },
    /// A field placeholder refers to a field that was not supplied.
    #[error("field `#{field}` was not supplied")]
    MissingField {
        /// Field name without the leading `#`.
        field: String,
    },
    /// A step with the same method name was already registered.
    #[error("step `{method}` was already registered on `{library}`")]
    DuplicateStep {
        /// Name of the library being built.
        library: String,
        /// The repeated method name.
        method: String,
    },
    /// A step carries two naming annotations of the same kind.
    #[error("step `{method}` carries more than one `{annotation}` annotation")]
    DuplicateAnnotation {
        /// The offending method name.
        method: String,
        /// Annotation kind, as reported by [`crate::Annotation::kind`].
        annotation: &'static str,
    },
}

/// Canonical result alias used by `annotated-steps` public APIs.
pub type Result<T> = std::result::Result<T, StepError>;
