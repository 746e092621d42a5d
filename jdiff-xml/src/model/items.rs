//! Packages, classes and members.

use crate::error::WriteError;
use crate::model::constant::ConstantValue;
use crate::model::types::TypeRef;
use serde::Deserialize;

/// Visibility levels, most visible first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::PackagePrivate => "package-private",
            Visibility::Private => "private",
        }
    }

    /// Public or protected: part of the API a client can program against.
    pub fn is_api(self) -> bool {
        self <= Visibility::Protected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ModifierSet {
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "native")]
    pub is_native: bool,
    #[serde(rename = "synchronized")]
    pub is_synchronized: bool,
    #[serde(rename = "transient")]
    pub is_transient: bool,
    #[serde(rename = "volatile")]
    pub is_volatile: bool,
    pub visibility: Visibility,
}

impl ModifierSet {
    pub fn public() -> Self {
        Self::default()
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    AnnotationType,
}

impl ClassKind {
    /// Annotation types count as interfaces.
    pub fn is_interface(self) -> bool {
        matches!(self, ClassKind::Interface | ClassKind::AnnotationType)
    }

    /// A plain class: not an interface, enum or annotation type.
    pub fn is_class(self) -> bool {
        self == ClassKind::Class
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Codebase {
    pub packages: Vec<PackageItem>,
}

impl Codebase {
    pub fn new(packages: Vec<PackageItem>) -> Self {
        Self { packages }
    }

    /// Decode a codebase from its JSON form.
    pub fn from_json(source: &str) -> Result<Self, WriteError> {
        serde_json::from_str(source).map_err(|e| WriteError::Model(e.to_string()))
    }

    /// Find a class, nested or not, by qualified name.
    pub fn find_class(&self, qualified_name: &str) -> Option<&ClassItem> {
        self.packages
            .iter()
            .flat_map(|pkg| pkg.classes.iter())
            .find_map(|cls| cls.find(qualified_name))
    }

    /// The enclosing classes of a class, outermost first, followed by the class itself.
    pub fn class_with_outers(&self, qualified_name: &str) -> Option<Vec<&ClassItem>> {
        self.packages
            .iter()
            .flat_map(|pkg| pkg.classes.iter())
            .find_map(|cls| cls.path_to(qualified_name))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PackageItem {
    pub name: String,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub classes: Vec<ClassItem>,
}

impl PackageItem {
    pub fn new(name: &str, classes: Vec<ClassItem>) -> Self {
        Self {
            name: name.to_string(),
            deprecated: false,
            classes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ClassItem {
    /// Name including enclosing classes but not the package, e.g. `Map.Entry`.
    pub name: String,
    pub qualified_name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub super_class: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub constructors: Vec<ConstructorItem>,
    #[serde(default)]
    pub methods: Vec<MethodItem>,
    #[serde(default)]
    pub fields: Vec<FieldItem>,
    #[serde(default)]
    pub properties: Vec<PropertyItem>,
    #[serde(default)]
    pub inner_classes: Vec<ClassItem>,
}

impl ClassItem {
    /// A public class with no members; `name` may contain enclosing classes (`Outer.Inner`).
    pub fn new(package: &str, name: &str, kind: ClassKind) -> Self {
        let qualified_name = if package.is_empty() {
            name.to_string()
        } else {
            format!("{package}.{name}")
        };
        Self {
            name: name.to_string(),
            qualified_name,
            kind,
            ..Self::default()
        }
    }

    pub fn type_parameter(&self, name: &str) -> Option<&TypeParameter> {
        self.type_parameters.iter().find(|param| param.name == name)
    }

    fn find(&self, qualified_name: &str) -> Option<&ClassItem> {
        if self.qualified_name == qualified_name {
            return Some(self);
        }
        self.inner_classes
            .iter()
            .find_map(|inner| inner.find(qualified_name))
    }

    fn path_to(&self, qualified_name: &str) -> Option<Vec<&ClassItem>> {
        if self.qualified_name == qualified_name {
            return Some(vec![self]);
        }
        let mut path = self
            .inner_classes
            .iter()
            .find_map(|inner| inner.path_to(qualified_name))?;
        path.insert(0, self);
        Some(path)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ParameterItem {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

impl ParameterItem {
    pub fn new(name: &str, type_ref: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            type_ref,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ConstructorItem {
    #[serde(default)]
    pub parameters: Vec<ParameterItem>,
    #[serde(default)]
    pub throws: Vec<TypeRef>,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MethodItem {
    pub name: String,
    /// `None` only for members that have no return type at all.
    #[serde(default)]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub parameters: Vec<ParameterItem>,
    #[serde(default)]
    pub throws: Vec<TypeRef>,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub deprecated: bool,
}

impl MethodItem {
    pub fn new(name: &str, return_type: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            return_type: Some(return_type),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FieldItem {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Compile-time constant initializer, if any.
    #[serde(default)]
    pub value: Option<ConstantValue>,
    #[serde(default)]
    pub enum_constant: bool,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub deprecated: bool,
}

impl FieldItem {
    pub fn new(name: &str, type_ref: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            type_ref,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PropertyItem {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub modifiers: ModifierSet,
    #[serde(default)]
    pub deprecated: bool,
}

/// Borrowed view over any node of the model, as seen by filter predicates.
#[derive(Debug, Clone, Copy)]
pub enum Item<'a> {
    Package(&'a PackageItem),
    Class(&'a ClassItem),
    Constructor(&'a ConstructorItem),
    Method(&'a MethodItem),
    Field(&'a FieldItem),
    Property(&'a PropertyItem),
}

impl<'a> Item<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Item::Package(pkg) => &pkg.name,
            Item::Class(cls) => &cls.name,
            Item::Constructor(_) => "<init>",
            Item::Method(method) => &method.name,
            Item::Field(field) => &field.name,
            Item::Property(property) => &property.name,
        }
    }

    pub fn deprecated(&self) -> bool {
        match self {
            Item::Package(pkg) => pkg.deprecated,
            Item::Class(cls) => cls.deprecated,
            Item::Constructor(ctor) => ctor.deprecated,
            Item::Method(method) => method.deprecated,
            Item::Field(field) => field.deprecated,
            Item::Property(property) => property.deprecated,
        }
    }

    /// Packages carry no modifiers.
    pub fn modifiers(&self) -> Option<&'a ModifierSet> {
        match self {
            Item::Package(_) => None,
            Item::Class(cls) => Some(&cls.modifiers),
            Item::Constructor(ctor) => Some(&ctor.modifiers),
            Item::Method(method) => Some(&method.modifiers),
            Item::Field(field) => Some(&field.modifiers),
            Item::Property(property) => Some(&property.modifiers),
        }
    }
}
