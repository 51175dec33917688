//! The sample step library used across the test suites.

use std::sync::Arc;

use annotated_steps::{
    ExecutedStepDescription,
    LibraryBuilder,
    LibraryDescriptor,
    Result,
    StepLibrary,
    StepMethod,
};
use rstest::fixture;

/// Step library with one method per naming and metadata rule.
pub struct SampleTestSteps;

impl StepLibrary for SampleTestSteps {
    const NAME: &'static str = "SampleTestSteps";

    fn describe(library: LibraryBuilder) -> Result<LibraryBuilder> {
        library
            .step(StepMethod::declare("a_step").step())?
            .step(StepMethod::declare("a_pending_step").step().pending())?
            .step(StepMethod::declare("an_ignored_step").step().ignored())?
            .step(
                StepMethod::declare("an_annotated_step_with_a_title")
                    .title("A step with an annotation")
                    .step(),
            )?
            .step(StepMethod::declare("an_annotated_step").step_named("A step with an annotation"))?
            .step(StepMethod::declare("a_step_group").group())?
            .step(
                StepMethod::declare("an_annotated_step_group")
                    .group_named("A step group with an annotation"),
            )?
            .step(StepMethod::declare("a_step_with_parameters"))?
            .step(
                StepMethod::declare("a_customized_step_with_parameters")
                    .step_named("a step with a parameter called '{0}'"),
            )?
            .step(
                StepMethod::declare("a_customized_step_with_parameters_and_fields")
                    .step_named("a step with a parameter called '{0}' and a field called #color"),
            )?
            .step(
                StepMethod::declare("a_customized_step_with_parameters_and_empty_field_value")
                    .step_named(
                        "a step with a parameter called '{0}' and a field called #emptyField",
                    ),
            )?
            .step(
                StepMethod::declare("a_customized_step_with_two_parameters")
                    .step_named("a step about a person called {0}, aged {1}"),
            )?
            .step(
                StepMethod::declare("a_step_testing_a_requirement")
                    .tests_requirement("REQ-1")
                    .step(),
            )?
            .step(
                StepMethod::declare("a_step_testing_several_requirements")
                    .tests_requirements(["REQ-1", "REQ-2"])
                    .step(),
            )?
            .step(StepMethod::declare("a_given_annotated_step").given("A step with a given annotation"))?
            .step(StepMethod::declare("a_when_annotated_step").when("The user logs in"))?
            .step(StepMethod::declare("a_then_annotated_step").then("the dashboard is shown"))
    }
}

/// Shared descriptor of [`SampleTestSteps`].
///
/// # Panics
///
/// Panics if the sample library fails to describe itself.
#[must_use]
pub fn sample_descriptor() -> Arc<LibraryDescriptor> {
    LibraryDescriptor::of::<SampleTestSteps>().expect("sample library describes itself")
}

/// Describe `identifier` as a step of [`SampleTestSteps`].
///
/// # Panics
///
/// Panics if the sample library fails to describe itself.
#[must_use]
pub fn sample_step(identifier: &str) -> ExecutedStepDescription {
    ExecutedStepDescription::new(sample_descriptor(), identifier)
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn sample_library() -> Arc<LibraryDescriptor> { sample_descriptor() }
