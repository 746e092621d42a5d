//! JDiff XML serialization
//!
//! Writes an API surface in the XML dialect read by JDiff-style API comparison tools.
//!
//! ## Format
//!
//! - `<api>` root with no attributes and no XML declaration
//! - one `<package>` per package, classes flattened inside it
//! - `<class>` or `<interface>` per type, with `<implements>`, `<constructor>`, `<method>` and
//!   `<field>` children
//! - parameters and thrown types nested inside their constructor or method
//!
//! ## Example
//!
//! ```text
//! <api>
//! <package name="p"
//! >
//! <class name="Foo"
//!  abstract="false"
//!  static="false"
//!  final="true"
//!  deprecated="not deprecated"
//!  visibility="public"
//! >
//! </class>
//! </package>
//! </api>
//! ```
//!
//! Which attributes appear, and how values are spelled, is controlled by
//! [`Compatibility`](crate::policy::Compatibility).

pub mod escape;
pub mod modifiers;
pub mod writer;

pub use escape::escape_attribute_value;
pub use writer::{JDiffXmlWriter, WriteOptions};

use crate::error::WriteError;
use crate::model::Codebase;
use crate::walk::walk;
use std::io::Write;
use tracing::info;

/// Write the whole of `codebase` to `out` and give the sink back.
///
/// On error the content already written to `out` is incomplete and should be discarded.
pub fn write_codebase<W: Write>(
    codebase: &Codebase,
    options: &WriteOptions,
    out: W,
) -> Result<W, WriteError> {
    let mut writer = JDiffXmlWriter::new(out, codebase, options);
    walk(codebase, &options.filters, &mut writer)?;
    info!(packages = codebase.packages.len(), "wrote JDiff document");
    Ok(writer.into_inner())
}

/// Serialize `codebase` to a JDiff XML string.
pub fn serialize_codebase(codebase: &Codebase, options: &WriteOptions) -> Result<String, WriteError> {
    let bytes = write_codebase(codebase, options, Vec::new())?;
    String::from_utf8(bytes).map_err(|e| WriteError::Utf8(e.to_string()))
}
