//! Shared fixtures for `annotated-steps` tests.
//!
//! [`SampleTestSteps`] declares one step method for every naming and metadata
//! rule so integration and behavioural tests resolve against the same
//! library. [`logger`] captures log records emitted during resolution.
//!
//! ```rust
//! use annotated_steps::AnnotatedStepDescription;
//! use annotated_steps_testing::sample_step;
//!
//! let step = sample_step("a_step_group");
//! assert_eq!(AnnotatedStepDescription::from(&step).name().unwrap(), "A step group");
//! ```

pub mod logging;
pub mod macros;
pub mod sample;

pub use logging::{LoggerHandle, logger};
pub use sample::{SampleTestSteps, sample_library, sample_step};
