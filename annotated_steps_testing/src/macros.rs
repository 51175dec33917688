//! Assertion macros shared by integration and behavioural tests.

/// Resolve the display name of a description and panic with the call site on
/// failure.
#[macro_export]
macro_rules! name_expect {
    ($description:expr) => {{
        ::annotated_steps::AnnotatedStepDescription::from(&$description)
            .name()
            .expect(concat!("name resolution failed at ", file!(), ":", line!()))
    }};
    ($description:expr, $msg:expr) => {{
        let m = ::std::format!("{msg} at {}:{}", file!(), line!(), msg = $msg);
        ::annotated_steps::AnnotatedStepDescription::from(&$description)
            .name()
            .expect(&m)
    }};
}

pub use crate::name_expect;
