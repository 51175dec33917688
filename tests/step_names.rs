//! Tests for display names derived from step annotations.
//!
//! Each case resolves a method of the sample library and checks the name a
//! report would show for it.

use annotated_steps::{
    AnnotatedStepDescription,
    ExecutedStepDescription,
    FieldPolicy,
    FieldValue,
    NamingConfig,
    StepError,
    StepNameResolver,
};
use annotated_steps_testing::{name_expect, sample_step};
use rstest::rstest;

#[rstest]
#[case::humanised_method_name("a_step", "A step")]
#[case::step_template_without_parameters("an_annotated_step", "A step with an annotation")]
#[case::title_overrides_step("an_annotated_step_with_a_title", "A step with an annotation")]
#[case::given_keyword("a_given_annotated_step", "Given a step with a given annotation")]
#[case::when_keyword("a_when_annotated_step", "When the user logs in")]
#[case::then_keyword("a_then_annotated_step", "Then the dashboard is shown")]
#[case::humanised_group("a_step_group", "A step group")]
#[case::named_group("an_annotated_step_group", "A step group with an annotation")]
#[case::one_parameter(
    "a_customized_step_with_parameters: Joe",
    "a step with a parameter called 'Joe'"
)]
#[case::two_parameters(
    "a_customized_step_with_two_parameters: Joe,20",
    "a step about a person called Joe, aged 20"
)]
#[case::unannotated_with_parameters("a_step_with_parameters: Joe", "A step with parameters")]
fn names_follow_annotations(#[case] identifier: &str, #[case] expected: &str) {
    assert_eq!(name_expect!(sample_step(identifier)), expected);
}

#[test]
fn field_values_fill_the_template() {
    let step = sample_step("a_customized_step_with_parameters_and_fields: Joe")
        .with_displayed_fields([("color", "red")]);
    assert_eq!(
        name_expect!(step),
        "a step with a parameter called 'Joe' and a field called red"
    );
}

#[test]
fn undefined_field_values_fail_by_default() {
    let step = sample_step("a_customized_step_with_parameters_and_empty_field_value: Joe")
        .with_displayed_fields([
            ("color", FieldValue::from("red")),
            ("emptyField", FieldValue::Undefined),
        ]);
    let err = AnnotatedStepDescription::from(&step)
        .name()
        .expect_err("undefined field");
    assert_eq!(
        err,
        StepError::UndefinedField {
            field: "emptyField".into()
        }
    );
}

#[test]
fn undefined_field_values_can_be_tolerated() {
    let step = sample_step("a_customized_step_with_parameters_and_empty_field_value: Joe")
        .with_displayed_fields([("emptyField", FieldValue::Undefined)]);
    let resolver = StepNameResolver::new(
        NamingConfig::default().with_undefined_fields(FieldPolicy::Passthrough),
    );
    assert_eq!(
        resolver.resolve(&step).name().expect("name resolves"),
        "a step with a parameter called 'Joe' and a field called #emptyField"
    );
}

#[test]
fn missing_template_arguments_are_reported() {
    let step = sample_step("a_customized_step_with_two_parameters: Joe");
    let err = AnnotatedStepDescription::from(&step)
        .name()
        .expect_err("second argument is missing");
    assert_eq!(err, StepError::MissingArgument { index: 1, available: 1 });
}

#[test]
fn title_only_steps_keep_their_title() {
    let step = ExecutedStepDescription::with_title("a step with no class");
    assert_eq!(name_expect!(step), "a step with no class");
}

#[test]
fn unknown_steps_cannot_be_named() {
    let step = sample_step("a_step_that_does_not_exist");
    let err = AnnotatedStepDescription::from(&step)
        .name()
        .expect_err("unknown step");
    assert_eq!(
        err,
        StepError::UnresolvableStep {
            library: "SampleTestSteps".into(),
            method: "a_step_that_does_not_exist".into(),
        }
    );
}

#[test]
fn resolution_is_idempotent() {
    let step = sample_step("a_customized_step_with_two_parameters: Joe,20");
    let annotated = AnnotatedStepDescription::from(&step);
    assert_eq!(annotated.name(), annotated.name());
}
