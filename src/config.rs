//! Resolution configuration.
//!
//! [`NamingConfig`] decides what happens when a naming template refers to a
//! field that cannot be filled. Both policies serialise with `serde` so tools
//! embedding the resolver can keep them in their own configuration files.

use serde::{Deserialize, Serialize};

/// What to do with a field placeholder that has no usable value.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Abort name resolution with an error.
    Fail,
    /// Leave the `#field` placeholder in the name.
    Passthrough,
}

impl FieldPolicy {
    /// The strict policy: an unusable field aborts resolution.
    pub const DEFAULT: FieldPolicy = FieldPolicy::Fail;
}

impl Default for FieldPolicy {
    fn default() -> Self { FieldPolicy::DEFAULT }
}

/// Policies applied while resolving step names.
///
/// # Examples
///
/// ```
/// use annotated_steps::{FieldPolicy, NamingConfig};
///
/// let config = NamingConfig::default().with_missing_fields(FieldPolicy::Fail);
/// assert_eq!(config.missing_fields(), FieldPolicy::Fail);
/// assert_eq!(config.undefined_fields(), FieldPolicy::Fail);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    undefined_fields: FieldPolicy,
    missing_fields: FieldPolicy,
}

impl NamingConfig {
    /// Fail on undefined fields; keep placeholders for fields never supplied.
    pub const DEFAULT: NamingConfig = NamingConfig {
        undefined_fields: FieldPolicy::DEFAULT,
        missing_fields: FieldPolicy::Passthrough,
    };

    /// Set the policy for fields supplied with the undefined sentinel.
    #[must_use]
    pub const fn with_undefined_fields(mut self, policy: FieldPolicy) -> Self {
        self.undefined_fields = policy;
        self
    }

    /// Set the policy for fields absent from the displayed fields.
    #[must_use]
    pub const fn with_missing_fields(mut self, policy: FieldPolicy) -> Self {
        self.missing_fields = policy;
        self
    }

    /// Policy for fields supplied with the undefined sentinel.
    #[must_use]
    pub const fn undefined_fields(&self) -> FieldPolicy { self.undefined_fields }

    /// Policy for fields absent from the displayed fields.
    #[must_use]
    pub const fn missing_fields(&self) -> FieldPolicy { self.missing_fields }
}

impl Default for NamingConfig {
    fn default() -> Self { NamingConfig::DEFAULT }
}
