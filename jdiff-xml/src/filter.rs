//! Emit and reference predicates
//!
//! Both predicates are supplied once, when a writer or walk is set up, and are pure functions of
//! an [`Item`]. The emit predicate decides whether a node produces output at all; the reference
//! predicate decides whether a class that is only *mentioned* (as a supertype or thrown type) is
//! known well enough to be named.
//!
//! Classes that are not part of the [`Codebase`] (platform types such as `java.lang.Object`) are
//! always considered known.

use crate::model::{ClassItem, Codebase, Item, TypeRef};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// A predicate over model items.
pub type Predicate = Arc<dyn Fn(&Item<'_>) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct Filters {
    pub emit: Predicate,
    pub reference: Predicate,
}

impl fmt::Debug for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filters").finish_non_exhaustive()
    }
}

impl Default for Filters {
    fn default() -> Self {
        Self::all()
    }
}

impl Filters {
    pub fn new<E, R>(emit: E, reference: R) -> Self
    where
        E: Fn(&Item<'_>) -> bool + Send + Sync + 'static,
        R: Fn(&Item<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            emit: Arc::new(emit),
            reference: Arc::new(reference),
        }
    }

    /// Accept every item.
    pub fn all() -> Self {
        Self::new(|_| true, |_| true)
    }

    /// Accept public and protected items; packages are always accepted.
    pub fn visible_api() -> Self {
        fn visible(item: &Item<'_>) -> bool {
            item.modifiers()
                .map_or(true, |modifiers| modifiers.visibility.is_api())
        }
        Self::new(visible, visible)
    }

    pub fn should_emit(&self, item: &Item<'_>) -> bool {
        (self.emit)(item)
    }

    pub fn should_reference(&self, item: &Item<'_>) -> bool {
        (self.reference)(item)
    }

    /// Resolve `ty` to a class of the codebase that the reference filter rejects, either itself
    /// or through one of its enclosing classes.
    fn hidden_class<'c>(&self, codebase: &'c Codebase, ty: &TypeRef) -> Option<&'c ClassItem> {
        let path = codebase.class_with_outers(ty.qualified_name()?)?;
        let resolved = *path.last()?;
        path.iter()
            .any(|cls| !self.should_reference(&Item::Class(cls)))
            .then_some(resolved)
    }

    /// The superclass of `cls`, skipping over superclasses the reference filter rejects.
    pub fn filtered_super_class_type(
        &self,
        codebase: &Codebase,
        cls: &ClassItem,
    ) -> Option<TypeRef> {
        let mut current = cls.super_class.as_ref()?;
        let mut visited = HashSet::new();
        while let Some(hidden) = self.hidden_class(codebase, current) {
            if !visited.insert(hidden.qualified_name.as_str()) {
                return None;
            }
            current = hidden.super_class.as_ref()?;
        }
        Some(current.clone())
    }

    /// The interfaces of `cls` as a client sees them.
    ///
    /// A rejected interface is replaced by its own (filtered) super interfaces, and interfaces
    /// implemented by skipped superclasses are inherited.
    pub fn filtered_interface_types(&self, codebase: &Codebase, cls: &ClassItem) -> Vec<TypeRef> {
        let mut out = Vec::new();
        let mut visited = HashSet::new();
        self.collect_interfaces(codebase, &cls.interfaces, &mut visited, &mut out);

        let mut current = cls.super_class.as_ref();
        let mut skipped = HashSet::new();
        while let Some(hidden) = current.and_then(|ty| self.hidden_class(codebase, ty)) {
            if !skipped.insert(hidden.qualified_name.as_str()) {
                break;
            }
            self.collect_interfaces(codebase, &hidden.interfaces, &mut visited, &mut out);
            current = hidden.super_class.as_ref();
        }
        out
    }

    fn collect_interfaces<'c>(
        &self,
        codebase: &'c Codebase,
        interfaces: &[TypeRef],
        visited: &mut HashSet<&'c str>,
        out: &mut Vec<TypeRef>,
    ) {
        for ty in interfaces {
            match self.hidden_class(codebase, ty) {
                Some(hidden) => {
                    if visited.insert(hidden.qualified_name.as_str()) {
                        self.collect_interfaces(codebase, &hidden.interfaces, visited, out);
                    }
                }
                None => {
                    if !out.contains(ty) {
                        out.push(ty.clone());
                    }
                }
            }
        }
    }

    /// Thrown types with each rejected class replaced by its nearest known superclass.
    pub fn filtered_throws_types(&self, codebase: &Codebase, throws: &[TypeRef]) -> Vec<TypeRef> {
        let mut out: Vec<TypeRef> = Vec::new();
        for ty in throws {
            let mut current = Some(ty);
            let mut visited = HashSet::new();
            while let Some(hidden) = current.and_then(|ty| self.hidden_class(codebase, ty)) {
                current = if visited.insert(hidden.qualified_name.as_str()) {
                    hidden.super_class.as_ref()
                } else {
                    None
                };
            }
            if let Some(known) = current {
                if !out.contains(known) {
                    out.push(known.clone());
                }
            }
        }
        out
    }
}
