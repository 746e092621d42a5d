//! Legacy-compatible JDiff XML output for API surface models
//!
//!     This crate writes an in-memory model of an API (packages, classes, members, types) in the
//!     JDiff XML format, matching the predecessor tool attribute for attribute and line for line,
//!     quirks included. Downstream diffing tools compare these files textually, so a document
//!     that is well formed but differs in one attribute is still a broken document.
//!
//!     TLDR:
//!         - The writer never decides what to visit. A traversal (./walk.rs) calls it once per node.
//!         - Every legacy quirk is a named toggle on one immutable Compatibility value (./policy.rs).
//!         - Each toggle is read in exactly one place in the writer.
//!
//! Architecture
//!
//!     The work is split between three roles:
//!
//!     - model: plain data the writer reads (./model). Building it is someone else's job; here it
//!       can be built in code or decoded from JSON.
//!     - traversal: ./walk.rs drives an ApiVisitor (./visitor.rs) over the model in a fixed sorted
//!       pre-order, consulting the emit filter.
//!     - rendering: ./formats/jdiff renders one node per visitor call straight into the sink.
//!
//!     This is a pure lib: it powers jdiff-cli but assumes nothing about a shell environment.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── filter.rs               # Emit / reference predicates and filtered hierarchy lookups
//!     ├── policy.rs               # Compatibility toggles
//!     ├── visitor.rs              # Traversal callback contract
//!     ├── walk.rs                 # Reference traversal
//!     ├── model
//!     │   ├── items.rs            # Packages, classes, members
//!     │   ├── types.rs            # Type references and their rendering
//!     │   └── constant.rs         # Constant field values
//!     ├── formats
//!     │   └── jdiff
//!     │       ├── escape.rs       # Attribute escaping
//!     │       ├── modifiers.rs    # Modifier attribute text
//!     │       └── writer.rs       # The JDiff writer
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── properties.rs           # proptest properties of the text helpers
//!     ├── common
//!     └── jdiff
//!         └── <area>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Failure
//!
//!     Rendering is total over a well-formed model. The only failure is the output sink itself;
//!     I/O errors propagate unchanged and the partial output must be thrown away.
//!
pub mod error;
pub mod filter;
pub mod formats;
pub mod model;
pub mod policy;
pub mod visitor;
pub mod walk;

pub use error::WriteError;
pub use filter::Filters;
pub use formats::{serialize_codebase, write_codebase, JDiffXmlWriter, WriteOptions};
pub use model::Codebase;
pub use policy::Compatibility;
pub use visitor::ApiVisitor;
