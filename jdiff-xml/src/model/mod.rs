//! In-memory model of an API surface.
//!
//! The writer only ever reads these structures. They are plain data so a model can be built in
//! code (tests, other tools) or decoded from JSON via [`Codebase::from_json`].

pub mod constant;
pub mod items;
pub mod types;

pub use constant::ConstantValue;
pub use items::{
    ClassItem, ClassKind, Codebase, ConstructorItem, FieldItem, Item, MethodItem, ModifierSet,
    PackageItem, ParameterItem, PropertyItem, TypeParameter, Visibility,
};
pub use types::TypeRef;
