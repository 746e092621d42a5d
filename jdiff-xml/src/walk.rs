//! Drives an [`ApiVisitor`] over a [`Codebase`].
//!
//! # The High-Level Concept
//!
//! The writer renders one node per call and never decides what to visit. This module is the
//! traversal that makes those calls: it walks the codebase in pre-order, in a fixed sorted
//! order, and only hands over nodes accepted by the emit filter.
//!
//! # The Algorithm
//!
//! 1. **Codebase:** `visit_codebase`, then every package sorted by name, then
//!    `after_visit_codebase`.
//!
//! 2. **Packages:**
//!    - Skip packages the emit filter rejects
//!    - Flatten the package's emitted classes, nested classes included; nothing nested in a
//!      rejected class is emitted
//!    - Skip the package if no class is left
//!    - Visit the classes sorted by qualified name between `visit_package`/`after_visit_package`
//!
//! 3. **Classes:** `visit_class`, then the emitted members, each group sorted:
//!    - constructors by parameter types
//!    - methods by name, then parameter types
//!    - fields by name
//!    - properties by name
//!
//!    then `after_visit_class`. Nested classes are never visited inside their outer class; the
//!    flattening in step 2 makes them siblings.

use crate::filter::Filters;
use crate::model::{ClassItem, Codebase, Item, PackageItem, ParameterItem};
use crate::visitor::ApiVisitor;
use std::io;
use tracing::trace;

/// Visit every emitted node of `codebase`, in order.
pub fn walk<V: ApiVisitor + ?Sized>(
    codebase: &Codebase,
    filters: &Filters,
    visitor: &mut V,
) -> io::Result<()> {
    visitor.visit_codebase(codebase)?;

    let mut packages: Vec<&PackageItem> = codebase.packages.iter().collect();
    packages.sort_by(|a, b| a.name.cmp(&b.name));

    for pkg in packages {
        if !filters.should_emit(&Item::Package(pkg)) {
            trace!(package = %pkg.name, "package filtered out");
            continue;
        }
        let classes = emitted_classes(pkg, filters);
        if classes.is_empty() {
            trace!(package = %pkg.name, "package has no emitted classes");
            continue;
        }

        visitor.visit_package(pkg)?;
        for cls in classes {
            walk_class(cls, filters, visitor)?;
        }
        visitor.after_visit_package(pkg)?;
    }

    visitor.after_visit_codebase(codebase)
}

fn walk_class<V: ApiVisitor + ?Sized>(
    cls: &ClassItem,
    filters: &Filters,
    visitor: &mut V,
) -> io::Result<()> {
    visitor.visit_class(cls)?;

    let mut constructors: Vec<_> = cls
        .constructors
        .iter()
        .filter(|ctor| filters.should_emit(&Item::Constructor(ctor)))
        .collect();
    constructors.sort_by_cached_key(|ctor| parameter_key(&ctor.parameters));
    for ctor in constructors {
        visitor.visit_constructor(cls, ctor)?;
    }

    let mut methods: Vec<_> = cls
        .methods
        .iter()
        .filter(|method| filters.should_emit(&Item::Method(method)))
        .collect();
    methods.sort_by_cached_key(|method| (method.name.clone(), parameter_key(&method.parameters)));
    for method in methods {
        visitor.visit_method(cls, method)?;
    }

    let mut fields: Vec<_> = cls
        .fields
        .iter()
        .filter(|field| filters.should_emit(&Item::Field(field)))
        .collect();
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    for field in fields {
        visitor.visit_field(cls, field)?;
    }

    let mut properties: Vec<_> = cls
        .properties
        .iter()
        .filter(|property| filters.should_emit(&Item::Property(property)))
        .collect();
    properties.sort_by(|a, b| a.name.cmp(&b.name));
    for property in properties {
        visitor.visit_property(cls, property)?;
    }

    visitor.after_visit_class(cls)
}

fn emitted_classes<'a>(pkg: &'a PackageItem, filters: &Filters) -> Vec<&'a ClassItem> {
    let mut classes = Vec::new();
    for cls in &pkg.classes {
        flatten(cls, filters, &mut classes);
    }
    classes.sort_by(|a, b| a.qualified_name.cmp(&b.qualified_name));
    classes
}

/// Collect `cls` and its nested classes. A rejected class hides everything nested in it.
fn flatten<'a>(cls: &'a ClassItem, filters: &Filters, out: &mut Vec<&'a ClassItem>) {
    if !filters.should_emit(&Item::Class(cls)) {
        trace!(class = %cls.qualified_name, "class filtered out");
        return;
    }
    out.push(cls);
    for inner in &cls.inner_classes {
        flatten(inner, filters, out);
    }
}

fn parameter_key(parameters: &[ParameterItem]) -> String {
    parameters
        .iter()
        .map(|param| param.type_ref.to_type_string(false, None))
        .collect::<Vec<_>>()
        .join(",")
}
