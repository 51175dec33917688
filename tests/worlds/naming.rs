//! Test world for step naming scenarios.
//!
//! Provides [`NamingWorld`], which holds the step under test, the field values
//! to display, and the outcome of the last resolution.

use std::collections::BTreeSet;

use annotated_steps::{
    AnnotatedStepDescription,
    ExecutedStepDescription,
    FieldValue,
    Result,
    StepError,
};
use annotated_steps_testing::sample_step;
use cucumber::World;

#[derive(Debug, Default, World)]
pub struct NamingWorld {
    step: Option<ExecutedStepDescription>,
    fields: Vec<(String, FieldValue)>,
    name: Option<Result<String>>,
}

impl NamingWorld {
    /// Select a method of the sample library.
    pub fn use_sample_step(&mut self, identifier: &str) {
        self.step = Some(sample_step(identifier));
    }

    /// Select a step known only by its title.
    pub fn use_title(&mut self, title: &str) {
        self.step = Some(ExecutedStepDescription::with_title(title));
    }

    /// Add a field value available to `#field` placeholders.
    pub fn display_field(&mut self, field: &str, value: FieldValue) {
        self.fields.push((field.to_owned(), value));
    }

    /// Resolve the step name and keep the outcome.
    ///
    /// # Panics
    /// Panics if no step was selected.
    pub fn resolve_name(&mut self) {
        let step = self.described();
        self.name = Some(AnnotatedStepDescription::from(&step).name());
    }

    /// Outcome of the last [`Self::resolve_name`].
    ///
    /// # Panics
    /// Panics if the name was never resolved.
    pub fn name_outcome(&self) -> &Result<String> {
        self.name.as_ref().expect("step name was not resolved")
    }

    /// Pending flag of the selected step.
    ///
    /// # Panics
    /// Panics if no step was selected or the step cannot be resolved.
    pub fn is_pending(&self) -> bool {
        let step = self.described();
        AnnotatedStepDescription::from(&step)
            .is_pending()
            .expect("pending flag resolves")
    }

    /// Ignored flag of the selected step.
    ///
    /// # Panics
    /// Panics if no step was selected or the step cannot be resolved.
    pub fn is_ignored(&self) -> bool {
        let step = self.described();
        AnnotatedStepDescription::from(&step)
            .is_ignored()
            .expect("ignored flag resolves")
    }

    /// Requirements linked to the selected step.
    ///
    /// # Panics
    /// Panics if no step was selected or the step cannot be resolved.
    pub fn requirements(&self) -> BTreeSet<String> {
        let step = self.described();
        AnnotatedStepDescription::from(&step)
            .annotated_requirements()
            .expect("requirements resolve")
    }

    /// Error raised by the method lookup of the selected step, if any.
    ///
    /// # Panics
    /// Panics if no step was selected.
    pub fn method_error(&self) -> Option<StepError> {
        let step = self.described();
        AnnotatedStepDescription::from(&step).test_method().err()
    }

    fn described(&self) -> ExecutedStepDescription {
        self.step
            .clone()
            .expect("no step selected")
            .with_displayed_fields(self.fields.clone())
    }
}
