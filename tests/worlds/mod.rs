//! Cucumber test worlds.
//!
//! [`NamingWorld`] drives the step naming scenarios against the shared sample
//! library.

pub mod naming;

pub use naming::NamingWorld;
