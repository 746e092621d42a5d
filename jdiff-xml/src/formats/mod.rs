//! Format implementations
//!
//! This module contains the output formats an API model can be written to.

pub mod jdiff;

pub use jdiff::{serialize_codebase, write_codebase, JDiffXmlWriter, WriteOptions};
