//! Traversal callback contract
//!
//! A traversal engine (see [`crate::walk`]) drives an [`ApiVisitor`] in pre-order: enter a
//! container, visit its sorted children, leave the container. Members are visited with their
//! containing class so a visitor never needs to track where it is.

use crate::model::{
    ClassItem, Codebase, ConstructorItem, FieldItem, MethodItem, PackageItem, PropertyItem,
};
use std::io;

/// Hooks called by a traversal over a [`Codebase`].
///
/// Every hook defaults to doing nothing, so implementors only override what they render. Errors
/// abort the traversal and are returned to its caller unchanged.
///
/// # Examples
///
/// ```ignore
/// struct ClassCounter(usize);
///
/// impl ApiVisitor for ClassCounter {
///     fn visit_class(&mut self, _cls: &ClassItem) -> io::Result<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait ApiVisitor {
    fn visit_codebase(&mut self, _codebase: &Codebase) -> io::Result<()> {
        Ok(())
    }

    fn after_visit_codebase(&mut self, _codebase: &Codebase) -> io::Result<()> {
        Ok(())
    }

    fn visit_package(&mut self, _pkg: &PackageItem) -> io::Result<()> {
        Ok(())
    }

    fn after_visit_package(&mut self, _pkg: &PackageItem) -> io::Result<()> {
        Ok(())
    }

    fn visit_class(&mut self, _cls: &ClassItem) -> io::Result<()> {
        Ok(())
    }

    fn after_visit_class(&mut self, _cls: &ClassItem) -> io::Result<()> {
        Ok(())
    }

    fn visit_constructor(&mut self, _cls: &ClassItem, _ctor: &ConstructorItem) -> io::Result<()> {
        Ok(())
    }

    fn visit_method(&mut self, _cls: &ClassItem, _method: &MethodItem) -> io::Result<()> {
        Ok(())
    }

    fn visit_field(&mut self, _cls: &ClassItem, _field: &FieldItem) -> io::Result<()> {
        Ok(())
    }

    fn visit_property(&mut self, _cls: &ClassItem, _property: &PropertyItem) -> io::Result<()> {
        Ok(())
    }
}
