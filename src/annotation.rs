//! Annotation model attached to step methods.
//!
//! Annotations are plain data: a step library lists them for each method when
//! it describes itself, and [`crate::method::StepMetadata`] condenses them into
//! the typed view the resolver works from.

use std::fmt;

/// Gherkin keyword carried by a keyword step annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// A precondition.
    Given,
    /// An action.
    When,
    /// An outcome.
    Then,
}

impl StepKeyword {
    /// Return the keyword as written in a step name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A single annotation on a step method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Annotation {
    /// Explicit display title.
    Title(String),
    /// Step marker, optionally with a naming template.
    Step(Option<String>),
    /// Step group marker, optionally with a literal name.
    StepGroup(Option<String>),
    /// Keyword step (`Given`, `When`, `Then`) with its text.
    Keyword(StepKeyword, String),
    /// Step is not yet implemented.
    Pending,
    /// Step is skipped.
    Ignored,
    /// Step exercises one requirement.
    TestsRequirement(String),
    /// Step exercises several requirements.
    TestsRequirements(Vec<String>),
}

impl Annotation {
    /// Short name of the annotation kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Step(_) => "step",
            Self::StepGroup(_) => "step group",
            Self::Keyword(..) => "keyword",
            Self::Pending => "pending",
            Self::Ignored => "ignored",
            Self::TestsRequirement(_) => "tests requirement",
            Self::TestsRequirements(_) => "tests requirements",
        }
    }
}
