//! Resolve executed steps into display names and metadata.
//!
//! [`AnnotatedStepDescription`] is a lazy view over an
//! [`ExecutedStepDescription`]: nothing is looked up until a query runs, and
//! every query reports an unknown step the same way.
//!
//! Names are derived from the method's [`NamingStrategy`]:
//!
//! | Strategy | Display name |
//! |---|---|
//! | `Keyword` | `"Given "` / `"When "` / `"Then "` + text, first letter lower-cased unless it opens an acronym or `I` |
//! | `Title`, `GroupWithText` | the text, verbatim |
//! | `StepWithTemplate` | the template with `{n}` and `#field` filled in |
//! | `GroupBare`, `StepBare`, `NoAnnotation` | the humanised method name |

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    config::NamingConfig,
    description::ExecutedStepDescription,
    error::{Result, StepError},
    humanize::{humanize, uncapitalize_first},
    method::{NamingStrategy, StepMetadata, StepMethod},
    template,
};

/// Resolves step descriptions under a fixed [`NamingConfig`].
///
/// # Examples
///
/// ```
/// use annotated_steps::{ExecutedStepDescription, FieldPolicy, NamingConfig, StepNameResolver};
///
/// let resolver =
///     StepNameResolver::new(NamingConfig::default().with_missing_fields(FieldPolicy::Fail));
/// let description = ExecutedStepDescription::with_title("a step with no class");
/// assert_eq!(resolver.resolve(&description).name().unwrap(), "a step with no class");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepNameResolver {
    config: NamingConfig,
}

impl StepNameResolver {
    /// Create a resolver applying `config`.
    #[must_use]
    pub const fn new(config: NamingConfig) -> Self { Self { config } }

    /// The configuration applied by this resolver.
    #[must_use]
    pub const fn config(&self) -> &NamingConfig { &self.config }

    /// Build the annotated view of `description`.
    #[must_use]
    pub fn resolve<'a>(&self, description: &'a ExecutedStepDescription) -> AnnotatedStepDescription<'a> {
        AnnotatedStepDescription {
            description,
            config: self.config,
        }
    }
}

/// Display name and metadata of one executed step.
#[derive(Clone, Copy, Debug)]
pub struct AnnotatedStepDescription<'a> {
    description: &'a ExecutedStepDescription,
    config: NamingConfig,
}

impl<'a> From<&'a ExecutedStepDescription> for AnnotatedStepDescription<'a> {
    fn from(description: &'a ExecutedStepDescription) -> Self {
        StepNameResolver::default().resolve(description)
    }
}

impl<'a> AnnotatedStepDescription<'a> {
    /// The description being resolved.
    #[must_use]
    pub fn description(&self) -> &'a ExecutedStepDescription { self.description }

    /// The step method the description refers to.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UnresolvableStep`] if the owning library declares
    /// no such method, or [`StepError::NoOwner`] for a title-only description.
    pub fn test_method(&self) -> Result<&'a StepMethod> {
        match self.lookup()? {
            Some(method) => Ok(method),
            None => Err(StepError::NoOwner {
                title: self.description.name().to_owned(),
            }),
        }
    }

    /// The display name of the step.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UnresolvableStep`] for an unknown step, and the
    /// template errors described in [`template::render`].
    pub fn name(&self) -> Result<String> {
        let Some(method) = self.lookup()? else {
            return Ok(self.description.name().to_owned());
        };
        let name = match method.metadata().naming() {
            NamingStrategy::Keyword(keyword, text) => {
                format!("{keyword} {}", uncapitalize_first(text))
            }
            NamingStrategy::Title(text) | NamingStrategy::GroupWithText(text) => text.clone(),
            NamingStrategy::StepWithTemplate(text) => template::render(
                text,
                &self.description.arguments(),
                self.description.displayed_fields(),
                &self.config,
            )?,
            NamingStrategy::GroupBare | NamingStrategy::StepBare | NamingStrategy::NoAnnotation => {
                humanize(method.name())
            }
        };
        tracing::debug!(method = method.name(), name = %name, "resolved step name");
        Ok(name)
    }

    /// Whether the step is marked pending.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UnresolvableStep`] for an unknown step.
    pub fn is_pending(&self) -> Result<bool> { self.flag(StepMetadata::is_pending) }

    /// Whether the step is marked ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UnresolvableStep`] for an unknown step.
    pub fn is_ignored(&self) -> Result<bool> { self.flag(StepMetadata::is_ignored) }

    /// Whether the step is a step group.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UnresolvableStep`] for an unknown step.
    pub fn is_group(&self) -> Result<bool> { self.flag(StepMetadata::is_group) }

    /// Requirement identifiers linked to the step.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UnresolvableStep`] for an unknown step.
    pub fn annotated_requirements(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .lookup()?
            .map(|method| method.metadata().requirements().clone())
            .unwrap_or_default())
    }

    /// Resolve everything at once.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Self::name`] or the metadata
    /// queries.
    pub fn summary(&self) -> Result<StepSummary> {
        Ok(StepSummary {
            name: self.name()?,
            method: self.lookup()?.map(|method| method.name().to_owned()),
            pending: self.is_pending()?,
            ignored: self.is_ignored()?,
            group: self.is_group()?,
            requirements: self.annotated_requirements()?,
        })
    }

    /// `Ok(None)` for title-only descriptions.
    fn lookup(&self) -> Result<Option<&'a StepMethod>> {
        self.description
            .owner()
            .map(|owner| owner.find_method(self.description.method_name()))
            .transpose()
    }

    fn flag(&self, read: fn(&StepMetadata) -> bool) -> Result<bool> {
        Ok(self.lookup()?.is_some_and(|method| read(method.metadata())))
    }
}

/// Eagerly resolved view of a step, ready to hand to report writers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    /// Display name.
    pub name: String,
    /// Method name, absent for title-only steps.
    pub method: Option<String>,
    /// Pending marker.
    pub pending: bool,
    /// Ignored marker.
    pub ignored: bool,
    /// Step group marker.
    pub group: bool,
    /// Linked requirement identifiers.
    pub requirements: BTreeSet<String>,
}
