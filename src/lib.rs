#![doc(html_root_url = "https://docs.rs/annotated-steps/latest")]
//! Public API for the `annotated-steps` library.
//!
//! This crate turns executed BDD steps into the names shown in test reports.
//! Step libraries declare their methods and annotations once; the resolver
//! then derives display names (titles, keyword phrases, filled-in templates or
//! humanised method names) together with pending, ignored and requirement
//! metadata.
//!
//! ```
//! use annotated_steps::{
//!     AnnotatedStepDescription,
//!     ExecutedStepDescription,
//!     LibraryBuilder,
//!     Result,
//!     StepLibrary,
//!     StepMethod,
//! };
//!
//! struct PersonSteps;
//!
//! impl StepLibrary for PersonSteps {
//!     const NAME: &'static str = "PersonSteps";
//!
//!     fn describe(library: LibraryBuilder) -> Result<LibraryBuilder> {
//!         library.step(
//!             StepMethod::declare("a_person").step_named("a person called {0}, aged {1}"),
//!         )
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let executed = ExecutedStepDescription::for_library::<PersonSteps>("a_person: Joe,20")?;
//! let step = AnnotatedStepDescription::from(&executed);
//! assert_eq!(step.name()?, "a person called Joe, aged 20");
//! # Ok(())
//! # }
//! ```

pub mod annotated;
pub mod annotation;
pub mod config;
pub mod description;
pub mod error;
pub mod humanize;
pub mod library;
pub mod method;
pub mod template;

pub use annotated::{AnnotatedStepDescription, StepNameResolver, StepSummary};
pub use annotation::{Annotation, StepKeyword};
pub use config::{FieldPolicy, NamingConfig};
pub use description::{ExecutedStepDescription, FieldValue};
pub use error::{Result, StepError};
pub use humanize::humanize;
pub use library::{LibraryBuilder, LibraryDescriptor, StepLibrary};
pub use method::{NamingStrategy, StepDeclaration, StepMetadata, StepMethod};
