//! Step method descriptors.
//!
//! A [`StepDeclaration`] collects a method name and its annotations while a
//! library describes itself. Registering the declaration validates the
//! annotations and produces a [`StepMethod`], whose [`StepMetadata`] is
//! computed once and never changes afterwards.

use std::collections::BTreeSet;

use crate::{
    annotation::{Annotation, StepKeyword},
    error::{Result, StepError},
};

/// How the display name of a step is derived.
///
/// Variants are listed in priority order: when a method carries several
/// naming annotations, the earliest applicable variant is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamingStrategy {
    /// Keyword annotation with text, rendered as `"<Keyword> <text>"`.
    ///
    /// The text's first letter is lower-cased unless it opens with an acronym
    /// or the pronoun `I`.
    Keyword(StepKeyword, String),
    /// Explicit title, used verbatim.
    Title(String),
    /// Step group with a literal name.
    GroupWithText(String),
    /// Step group without a name; the method name is humanised.
    GroupBare,
    /// Step with a naming template.
    StepWithTemplate(String),
    /// Step marker without a template; the method name is humanised.
    StepBare,
    /// No naming annotation; the method name is humanised.
    NoAnnotation,
}

/// Typed view over the annotations of one step method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepMetadata {
    naming: NamingStrategy,
    group: bool,
    pending: bool,
    ignored: bool,
    requirements: BTreeSet<String>,
}

impl StepMetadata {
    /// Condense `annotations` into metadata for the method `method`.
    ///
    /// Empty annotation text counts as no text at all.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::DuplicateAnnotation`] if two naming annotations of
    /// the same kind are present.
    pub fn from_annotations(method: &str, annotations: &[Annotation]) -> Result<Self> {
        let mut keyword = None;
        let mut title = None;
        let mut group = None;
        let mut step = None;
        let mut pending = false;
        let mut ignored = false;
        let mut requirements = BTreeSet::new();

        for annotation in annotations {
            let slot_taken = match annotation {
                Annotation::Keyword(kw, text) => keyword.replace((*kw, text.as_str())).is_some(),
                Annotation::Title(text) => title.replace(text.as_str()).is_some(),
                Annotation::StepGroup(text) => group.replace(non_empty(text.as_deref())).is_some(),
                Annotation::Step(text) => step.replace(non_empty(text.as_deref())).is_some(),
                Annotation::Pending => {
                    pending = true;
                    false
                }
                Annotation::Ignored => {
                    ignored = true;
                    false
                }
                Annotation::TestsRequirement(id) => {
                    requirements.insert(id.clone());
                    false
                }
                Annotation::TestsRequirements(ids) => {
                    requirements.extend(ids.iter().cloned());
                    false
                }
            };
            if slot_taken {
                return Err(StepError::DuplicateAnnotation {
                    method: method.to_owned(),
                    annotation: annotation.kind(),
                });
            }
        }

        let naming = match (keyword, title, group, step) {
            (Some((kw, text)), ..) if !text.is_empty() => {
                NamingStrategy::Keyword(kw, text.to_owned())
            }
            (_, Some(text), ..) if !text.is_empty() => NamingStrategy::Title(text.to_owned()),
            (_, _, Some(Some(text)), _) => NamingStrategy::GroupWithText(text.to_owned()),
            (_, _, Some(None), _) => NamingStrategy::GroupBare,
            (_, _, None, Some(Some(text))) => NamingStrategy::StepWithTemplate(text.to_owned()),
            (_, _, None, Some(None)) => NamingStrategy::StepBare,
            (_, _, None, None) => NamingStrategy::NoAnnotation,
        };

        Ok(Self {
            naming,
            group: group.is_some(),
            pending,
            ignored,
            requirements,
        })
    }

    /// Strategy used to derive the display name.
    #[must_use]
    pub fn naming(&self) -> &NamingStrategy { &self.naming }

    /// Whether the method is a step group.
    #[must_use]
    pub fn is_group(&self) -> bool { self.group }

    /// Whether the method carries a pending marker.
    #[must_use]
    pub fn is_pending(&self) -> bool { self.pending }

    /// Whether the method carries an ignored marker.
    #[must_use]
    pub fn is_ignored(&self) -> bool { self.ignored }

    /// Requirement identifiers declared on the method.
    #[must_use]
    pub fn requirements(&self) -> &BTreeSet<String> { &self.requirements }
}

fn non_empty(text: Option<&str>) -> Option<&str> { text.filter(|t| !t.is_empty()) }

/// A step method as declared by a step library, before validation.
///
/// # Examples
///
/// ```
/// use annotated_steps::StepMethod;
///
/// let declaration = StepMethod::declare("a_customized_step")
///     .step_named("a step with a parameter called '{0}'")
///     .tests_requirement("REQ-1");
/// assert_eq!(declaration.name(), "a_customized_step");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct StepDeclaration {
    name: String,
    annotations: Vec<Annotation>,
}

impl StepDeclaration {
    /// Start declaring the method `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    /// Name of the declared method.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Attach an arbitrary annotation.
    pub fn with(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Mark the method as a step.
    pub fn step(self) -> Self { self.with(Annotation::Step(None)) }

    /// Mark the method as a step named by `template`.
    pub fn step_named(self, template: impl Into<String>) -> Self {
        self.with(Annotation::Step(Some(template.into())))
    }

    /// Mark the method as a step group.
    pub fn group(self) -> Self { self.with(Annotation::StepGroup(None)) }

    /// Mark the method as a step group called `name`.
    pub fn group_named(self, name: impl Into<String>) -> Self {
        self.with(Annotation::StepGroup(Some(name.into())))
    }

    /// Give the method an explicit title.
    pub fn title(self, title: impl Into<String>) -> Self {
        self.with(Annotation::Title(title.into()))
    }

    /// Mark the method as a `Given` step.
    pub fn given(self, text: impl Into<String>) -> Self {
        self.with(Annotation::Keyword(StepKeyword::Given, text.into()))
    }

    /// Mark the method as a `When` step.
    pub fn when(self, text: impl Into<String>) -> Self {
        self.with(Annotation::Keyword(StepKeyword::When, text.into()))
    }

    /// Mark the method as a `Then` step.
    pub fn then(self, text: impl Into<String>) -> Self {
        self.with(Annotation::Keyword(StepKeyword::Then, text.into()))
    }

    /// Mark the method as pending.
    pub fn pending(self) -> Self { self.with(Annotation::Pending) }

    /// Mark the method as ignored.
    pub fn ignored(self) -> Self { self.with(Annotation::Ignored) }

    /// Link the method to one requirement.
    pub fn tests_requirement(self, id: impl Into<String>) -> Self {
        self.with(Annotation::TestsRequirement(id.into()))
    }

    /// Link the method to several requirements.
    pub fn tests_requirements<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(Annotation::TestsRequirements(
            ids.into_iter().map(Into::into).collect(),
        ))
    }
}

/// A registered step method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepMethod {
    name: String,
    annotations: Vec<Annotation>,
    metadata: StepMetadata,
}

impl StepMethod {
    /// Start declaring the method `name`.
    pub fn declare(name: impl Into<String>) -> StepDeclaration { StepDeclaration::new(name) }

    /// Method name.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Annotations in declaration order.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] { &self.annotations }

    /// Typed metadata derived from the annotations.
    #[must_use]
    pub fn metadata(&self) -> &StepMetadata { &self.metadata }
}

impl TryFrom<StepDeclaration> for StepMethod {
    type Error = StepError;

    fn try_from(declaration: StepDeclaration) -> Result<Self> {
        let metadata = StepMetadata::from_annotations(&declaration.name, &declaration.annotations)?;
        Ok(Self {
            name: declaration.name,
            annotations: declaration.annotations,
            metadata,
        })
    }
}
