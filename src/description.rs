//! Descriptions of executed steps.
//!
//! An [`ExecutedStepDescription`] names one occurrence of a step: the library
//! declaring it, the identifier recorded by the runner (`method` or
//! `method: arg1,arg2`), and any field values to display in the step name.
//! A description without a library carries a free-standing title instead.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    error::Result,
    library::{LibraryDescriptor, StepLibrary},
};

/// Value shown for a `#field` template placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// The field's display form.
    Value(String),
    /// The field exists but its value could not be read.
    Undefined,
}

impl FieldValue {
    /// Capture the display form of `value`.
    pub fn of(value: impl fmt::Display) -> Self { Self::Value(value.to_string()) }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self { Self::Value(value.to_owned()) }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self { Self::Value(value) }
}

/// One executed step, as reported by a runner.
///
/// # Examples
///
/// ```
/// use annotated_steps::ExecutedStepDescription;
///
/// let description = ExecutedStepDescription::with_title("a step with no class");
/// assert!(!description.has_owner());
/// assert_eq!(description.name(), "a step with no class");
/// ```
#[derive(Clone, Debug)]
pub struct ExecutedStepDescription {
    owner: Option<Arc<LibraryDescriptor>>,
    raw_identifier: String,
    displayed_fields: HashMap<String, FieldValue>,
}

impl ExecutedStepDescription {
    /// Describe the step `identifier` declared by `owner`.
    #[must_use]
    pub fn new(owner: Arc<LibraryDescriptor>, identifier: impl Into<String>) -> Self {
        Self {
            owner: Some(owner),
            raw_identifier: identifier.into(),
            displayed_fields: HashMap::new(),
        }
    }

    /// Describe the step `identifier` declared by the library `L`.
    ///
    /// # Errors
    ///
    /// Returns any error raised while `L` describes itself for the first time.
    pub fn for_library<L: StepLibrary>(identifier: impl Into<String>) -> Result<Self> {
        Ok(Self::new(LibraryDescriptor::of::<L>()?, identifier))
    }

    /// Describe a step known only by its title.
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            owner: None,
            raw_identifier: title.into(),
            displayed_fields: HashMap::new(),
        }
    }

    /// Attach the field values available to `#field` placeholders.
    #[must_use]
    pub fn with_displayed_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.displayed_fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Library declaring the step, if any.
    #[must_use]
    pub fn owner(&self) -> Option<&Arc<LibraryDescriptor>> { self.owner.as_ref() }

    /// Whether the step belongs to a library.
    #[must_use]
    pub fn has_owner(&self) -> bool { self.owner.is_some() }

    /// The identifier exactly as recorded.
    #[must_use]
    pub fn name(&self) -> &str { &self.raw_identifier }

    /// The method name: the identifier up to the first `:`, trimmed.
    #[must_use]
    pub fn method_name(&self) -> &str {
        self.raw_identifier
            .split_once(':')
            .map_or(self.raw_identifier.as_str(), |(method, _)| method)
            .trim()
    }

    /// Literal arguments following the first `:`, split on `,` and trimmed.
    #[must_use]
    pub fn arguments(&self) -> Vec<String> {
        match self.raw_identifier.split_once(':') {
            Some((_, tail)) if !tail.trim().is_empty() => {
                tail.split(',').map(|arg| arg.trim().to_owned()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Field values available to `#field` placeholders.
    #[must_use]
    pub fn displayed_fields(&self) -> &HashMap<String, FieldValue> { &self.displayed_fields }
}
