//! Common utilities.

pub mod introspection;
