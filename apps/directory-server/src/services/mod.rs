//! Supporting services.

pub mod runtime;
