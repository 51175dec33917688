//! Step libraries and their descriptors.
//!
//! Rust has no runtime reflection, so a step library describes its methods
//! once through [`LibraryBuilder`]. The resulting [`LibraryDescriptor`] is the
//! read-only view the resolver queries. Descriptors of types implementing
//! [`StepLibrary`] are cached per type in a process-wide catalogue.

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use dashmap::DashMap;

use crate::{
    error::{Result, StepError},
    method::{StepDeclaration, StepMethod},
};

/// A type owning a set of step methods.
///
/// # Examples
///
/// ```
/// use annotated_steps::{LibraryBuilder, LibraryDescriptor, Result, StepLibrary, StepMethod};
///
/// struct LoginSteps;
///
/// impl StepLibrary for LoginSteps {
///     const NAME: &'static str = "LoginSteps";
///
///     fn describe(library: LibraryBuilder) -> Result<LibraryBuilder> {
///         library
///             .step(StepMethod::declare("open_the_login_page").step())?
///             .step(StepMethod::declare("log_in_as").step_named("log in as {0}"))
///     }
/// }
///
/// let descriptor = LibraryDescriptor::of::<LoginSteps>().unwrap();
/// assert!(descriptor.method("log_in_as").is_some());
/// ```
pub trait StepLibrary: 'static {
    /// Name reported in errors and logs.
    const NAME: &'static str;

    /// Register the library's step methods on `library`.
    ///
    /// # Errors
    ///
    /// Implementations propagate registration errors from
    /// [`LibraryBuilder::step`].
    fn describe(library: LibraryBuilder) -> Result<LibraryBuilder>;
}

/// Read-only view of one step library.
#[derive(Debug, PartialEq, Eq)]
pub struct LibraryDescriptor {
    name: String,
    methods: HashMap<String, StepMethod>,
}

impl LibraryDescriptor {
    /// Start describing a library called `name`.
    pub fn builder(name: impl Into<String>) -> LibraryBuilder {
        LibraryBuilder {
            name: name.into(),
            methods: HashMap::new(),
        }
    }

    /// Descriptor for the library `L`, built on first use and then shared.
    ///
    /// # Errors
    ///
    /// Returns the registration error raised by [`StepLibrary::describe`].
    pub fn of<L: StepLibrary>() -> Result<Arc<Self>> {
        let key = TypeId::of::<L>();
        if let Some(found) = catalogue().get(&key) {
            return Ok(Arc::clone(found.value()));
        }
        // Describe outside the map lock: `describe` may look up other libraries.
        let built = Arc::new(L::describe(Self::builder(L::NAME))?.build());
        tracing::debug!(
            library = L::NAME,
            steps = built.methods.len(),
            "described step library"
        );
        Ok(Arc::clone(catalogue().entry(key).or_insert(built).value()))
    }

    /// Library name.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// The method called `name`, if declared.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&StepMethod> { self.methods.get(name) }

    /// The method called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UnresolvableStep`] if no such method is declared.
    pub fn find_method(&self, name: &str) -> Result<&StepMethod> {
        self.method(name).ok_or_else(|| StepError::UnresolvableStep {
            library: self.name.clone(),
            method: name.to_owned(),
        })
    }

    /// All declared methods, in no particular order.
    pub fn methods(&self) -> impl Iterator<Item = &StepMethod> { self.methods.values() }
}

fn catalogue() -> &'static DashMap<TypeId, Arc<LibraryDescriptor>> {
    static CATALOGUE: OnceLock<DashMap<TypeId, Arc<LibraryDescriptor>>> = OnceLock::new();
    CATALOGUE.get_or_init(DashMap::new)
}

/// Collects step methods for a [`LibraryDescriptor`].
///
/// Registrations return [`Result<Self>`] so they can be chained with `?`.
#[derive(Debug)]
#[must_use]
pub struct LibraryBuilder {
    name: String,
    methods: HashMap<String, StepMethod>,
}

impl LibraryBuilder {
    /// Register a step method.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::DuplicateStep`] if a method with the same name is
    /// already registered, or [`StepError::DuplicateAnnotation`] if the
    /// declaration repeats a naming annotation.
    pub fn step(mut self, declaration: StepDeclaration) -> Result<Self> {
        if self.methods.contains_key(declaration.name()) {
            return Err(StepError::DuplicateStep {
                library: self.name,
                method: declaration.name().to_owned(),
            });
        }
        let method = StepMethod::try_from(declaration)?;
        self.methods.insert(method.name().to_owned(), method);
        Ok(self)
    }

    /// Finish the descriptor.
    #[must_use]
    pub fn build(self) -> LibraryDescriptor {
        LibraryDescriptor {
            name: self.name,
            methods: self.methods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSteps;

    impl StepLibrary for CountingSteps {
        const NAME: &'static str = "CountingSteps";

        fn describe(library: LibraryBuilder) -> Result<LibraryBuilder> {
            library
                .step(StepMethod::declare("count_to").step_named("count to {0}"))?
                .step(StepMethod::declare("stop_counting"))
        }
    }

    struct BrokenSteps;

    impl StepLibrary for BrokenSteps {
        const NAME: &'static str = "BrokenSteps";

        fn describe(library: LibraryBuilder) -> Result<LibraryBuilder> {
            library
                .step(StepMethod::declare("twice").step())?
                .step(StepMethod::declare("twice").pending())
        }
    }

    #[test]
    fn descriptors_are_shared_per_type() {
        let first = LibraryDescriptor::of::<CountingSteps>().expect("library describes itself");
        let second = LibraryDescriptor::of::<CountingSteps>().expect("library describes itself");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name(), "CountingSteps");
        assert_eq!(first.methods().count(), 2);
    }

    struct RacedSteps;

    impl StepLibrary for RacedSteps {
        const NAME: &'static str = "RacedSteps";

        fn describe(library: LibraryBuilder) -> Result<LibraryBuilder> {
            library.step(StepMethod::declare("race").step())
        }
    }

    #[test]
    fn concurrent_first_descriptions_share_one_descriptor() {
        const THREADS: usize = 16;
        let barrier = std::sync::Barrier::new(THREADS);
        let descriptors: Vec<Arc<LibraryDescriptor>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        LibraryDescriptor::of::<RacedSteps>().expect("library describes itself")
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("describing thread panicked"))
                .collect()
        });
        let first = &descriptors[0];
        assert!(descriptors.iter().all(|other| Arc::ptr_eq(first, other)));
        assert!(Arc::ptr_eq(
            first,
            &LibraryDescriptor::of::<RacedSteps>().expect("library describes itself")
        ));
    }

    #[test]
    fn duplicate_methods_are_rejected() {
        let err = LibraryDescriptor::of::<BrokenSteps>().expect_err("duplicate step");
        assert_eq!(
            err,
            StepError::DuplicateStep {
                library: "BrokenSteps".into(),
                method: "twice".into(),
            }
        );
    }

    #[test]
    fn unknown_methods_are_unresolvable() {
        let descriptor = LibraryDescriptor::builder("Empty").build();
        assert!(descriptor.method("missing").is_none());
        assert_eq!(
            descriptor.find_method("missing"),
            Err(StepError::UnresolvableStep {
                library: "Empty".into(),
                method: "missing".into(),
            })
        );
    }
}
