//! Step definitions for step naming behavioural tests.

use annotated_steps::{FieldValue, StepError};
use cucumber::{given, then, when};

use crate::worlds::NamingWorld;

#[given(regex = r#"^the sample step "([^"]*)"$"#)]
fn sample_step(world: &mut NamingWorld, identifier: String) { world.use_sample_step(&identifier); }

#[given(regex = r#"^a step titled "([^"]*)" with no library$"#)]
fn titled_step(world: &mut NamingWorld, title: String) { world.use_title(&title); }

#[given(regex = r#"^the displayed field "([^"]*)" is "([^"]*)"$"#)]
fn displayed_field(world: &mut NamingWorld, field: String, value: String) {
    world.display_field(&field, FieldValue::from(value));
}

#[given(regex = r#"^the displayed field "([^"]*)" is undefined$"#)]
fn undefined_field(world: &mut NamingWorld, field: String) {
    world.display_field(&field, FieldValue::Undefined);
}

#[when("the step name is resolved")]
fn resolve(world: &mut NamingWorld) { world.resolve_name(); }

#[then(regex = r#"^the step name is "([^"]*)"$"#)]
fn check_name(world: &mut NamingWorld, expected: String) {
    assert_eq!(world.name_outcome().as_deref(), Ok(expected.as_str()));
}

#[then("resolution fails because the step cannot be found")]
fn check_unresolvable(world: &mut NamingWorld) {
    assert!(
        matches!(world.name_outcome(), Err(StepError::UnresolvableStep { .. })),
        "{:?}",
        world.name_outcome()
    );
    assert!(matches!(
        world.method_error(),
        Some(StepError::UnresolvableStep { .. })
    ));
}

#[then(regex = r#"^resolution fails because the field "([^"]*)" is undefined$"#)]
fn check_undefined(world: &mut NamingWorld, field: String) {
    assert_eq!(world.name_outcome(), &Err(StepError::UndefinedField { field }));
}

#[then("the step is pending")]
fn check_pending(world: &mut NamingWorld) { assert!(world.is_pending()); }

#[then("the step is not pending")]
fn check_not_pending(world: &mut NamingWorld) { assert!(!world.is_pending()); }

#[then("the step is ignored")]
fn check_ignored(world: &mut NamingWorld) { assert!(world.is_ignored()); }

#[then("the step is not ignored")]
fn check_not_ignored(world: &mut NamingWorld) { assert!(!world.is_ignored()); }

#[then(regex = r#"^the step tests the requirements "([^"]*)"$"#)]
fn check_requirements(world: &mut NamingWorld, expected: String) {
    let ids: Vec<String> = world.requirements().into_iter().collect();
    let expected: Vec<&str> = expected
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();
    assert_eq!(ids, expected);
}
