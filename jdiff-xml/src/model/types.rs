//! Type references and their textual rendering.

use crate::model::items::ClassItem;
use serde::Deserialize;
use std::cmp::Ordering;

pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";
pub const JAVA_LANG_ENUM: &str = "java.lang.Enum";
pub const JAVA_LANG_ANNOTATION: &str = "java.lang.annotation.Annotation";

/// A reference to a type, as it appears in a signature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    Primitive {
        name: String,
    },
    Class {
        name: String,
        #[serde(default)]
        arguments: Vec<TypeRef>,
    },
    Array {
        component: Box<TypeRef>,
        #[serde(default)]
        varargs: bool,
    },
    Variable {
        name: String,
    },
    Wildcard {
        #[serde(default)]
        extends: Option<Box<TypeRef>>,
        #[serde(default, rename = "super")]
        super_bound: Option<Box<TypeRef>>,
    },
}

impl TypeRef {
    pub fn primitive(name: &str) -> Self {
        TypeRef::Primitive {
            name: name.to_string(),
        }
    }

    /// A raw (non-parameterized) class type.
    pub fn class(qualified_name: &str) -> Self {
        TypeRef::Class {
            name: qualified_name.to_string(),
            arguments: Vec::new(),
        }
    }

    pub fn generic(qualified_name: &str, arguments: Vec<TypeRef>) -> Self {
        TypeRef::Class {
            name: qualified_name.to_string(),
            arguments,
        }
    }

    pub fn array(component: TypeRef) -> Self {
        TypeRef::Array {
            component: Box::new(component),
            varargs: false,
        }
    }

    pub fn varargs(component: TypeRef) -> Self {
        TypeRef::Array {
            component: Box::new(component),
            varargs: true,
        }
    }

    pub fn variable(name: &str) -> Self {
        TypeRef::Variable {
            name: name.to_string(),
        }
    }

    pub fn wildcard() -> Self {
        TypeRef::Wildcard {
            extends: None,
            super_bound: None,
        }
    }

    pub fn wildcard_extends(bound: TypeRef) -> Self {
        TypeRef::Wildcard {
            extends: Some(Box::new(bound)),
            super_bound: None,
        }
    }

    pub fn wildcard_super(bound: TypeRef) -> Self {
        TypeRef::Wildcard {
            extends: None,
            super_bound: Some(Box::new(bound)),
        }
    }

    /// Qualified name of a class type; `None` for every other kind of type.
    pub fn qualified_name(&self) -> Option<&str> {
        match self {
            TypeRef::Class { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeRef::Array { .. })
    }

    pub fn is_java_lang_object(&self) -> bool {
        self.qualified_name() == Some(JAVA_LANG_OBJECT)
    }

    /// Render this type.
    ///
    /// With `erased` set, every type argument list is dropped and type variables are replaced by
    /// the erasure of their first bound, looked up in `context`'s type parameters. Type
    /// arguments are separated by a bare comma; see [`normalize_comma_spacing`].
    pub fn to_type_string(&self, erased: bool, context: Option<&ClassItem>) -> String {
        let mut out = String::new();
        self.render(&mut out, erased, context, 0);
        out
    }

    fn render(&self, out: &mut String, erased: bool, context: Option<&ClassItem>, depth: usize) {
        match self {
            TypeRef::Primitive { name } => out.push_str(name),
            TypeRef::Class { name, arguments } => {
                out.push_str(name);
                if !erased && !arguments.is_empty() {
                    out.push('<');
                    for (i, argument) in arguments.iter().enumerate() {
                        if i > 0 {
                            out.push(',');
                        }
                        argument.render(out, false, context, depth);
                    }
                    out.push('>');
                }
            }
            TypeRef::Array { component, varargs } => {
                component.render(out, erased, context, depth);
                out.push_str(if *varargs { "..." } else { "[]" });
            }
            TypeRef::Variable { name } => {
                if !erased {
                    out.push_str(name);
                    return;
                }
                // Recursive bounds (`T extends Comparable<T>`) are erased without arguments,
                // so depth only guards against malformed mutually-bounded variables.
                let bound = context
                    .and_then(|cls| cls.type_parameter(name))
                    .and_then(|param| param.bounds.first());
                match bound {
                    Some(bound) if depth < 8 => bound.render(out, true, context, depth + 1),
                    _ => out.push_str(JAVA_LANG_OBJECT),
                }
            }
            TypeRef::Wildcard {
                extends,
                super_bound,
            } => {
                if erased {
                    match extends {
                        Some(bound) => bound.render(out, true, context, depth),
                        None => out.push_str(JAVA_LANG_OBJECT),
                    }
                    return;
                }
                out.push('?');
                if let Some(bound) = extends {
                    out.push_str(" extends ");
                    bound.render(out, false, context, depth);
                } else if let Some(bound) = super_bound {
                    out.push_str(" super ");
                    bound.render(out, false, context, depth);
                }
            }
        }
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::class(JAVA_LANG_OBJECT)
    }
}

/// Put a space after every comma in `type_string`.
///
/// A comma with no space after it gains one. A comma followed by one or more spaces keeps them
/// as they are. Any other whitespace after a comma, such as a tab, still gets a space in front
/// of it (`"a,\tb"` becomes `"a, \tb"`). Applying it twice gives the same result as once.
pub fn normalize_comma_spacing(type_string: &str) -> String {
    type_string.replace(',', ", ").replace(",  ", ", ")
}

/// Total order over types, by their full rendered form.
pub fn compare_types(a: &TypeRef, b: &TypeRef) -> Ordering {
    a.to_type_string(false, None)
        .cmp(&b.to_type_string(false, None))
}

/// Last segment of a dotted name.
pub fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map(|(_, simple)| simple)
        .unwrap_or(qualified_name)
}
