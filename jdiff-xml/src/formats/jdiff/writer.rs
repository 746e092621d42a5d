//! JDiff XML writer
//!
//! Renders each node handed over by a traversal as one tagged block. The layout copies the
//! predecessor tool byte for byte: the first attribute shares the line with the tag name, every
//! further attribute starts a new line indented by one space, and `>` closes the opening tag on
//! its own line. Attribute order is fixed per element and is never affected by the
//! compatibility toggles, only attribute presence and values are.

use crate::filter::Filters;
use crate::formats::jdiff::escape::escape_attribute_value;
use crate::formats::jdiff::modifiers::{deprecation, flag, visibility};
use crate::model::types::{
    compare_types, normalize_comma_spacing, simple_name, JAVA_LANG_ANNOTATION, JAVA_LANG_ENUM,
    JAVA_LANG_OBJECT,
};
use crate::model::{
    ClassItem, ClassKind, Codebase, ConstantValue, ConstructorItem, FieldItem, MethodItem,
    ModifierSet, PackageItem, ParameterItem, PropertyItem, TypeRef,
};
use crate::policy::Compatibility;
use crate::visitor::ApiVisitor;
use std::borrow::Cow;
use std::io::{self, Write};
use tracing::{debug, trace};

/// The implicit members of every enum type. `$CLASS` is replaced by the enum's qualified name.
const ENUM_METHODS_TEMPLATE: &str = r#"<method name="valueOf"
 return="$CLASS"
 abstract="false"
 native="false"
 synchronized="false"
 static="true"
 final="false"
 deprecated="not deprecated"
 visibility="public"
>
<parameter name="null" type="java.lang.String">
</parameter>
</method>
<method name="values"
 return="$CLASS[]"
 abstract="false"
 native="false"
 synchronized="false"
 static="true"
 final="true"
 deprecated="not deprecated"
 visibility="public"
>
</method>
"#;

/// Options for JDiff serialization
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    pub compatibility: Compatibility,
    pub filters: Filters,
    /// Superclass, interface and throws collections of the model are already filtered.
    pub pre_filtered: bool,
}

impl WriteOptions {
    pub fn new(compatibility: Compatibility) -> Self {
        Self {
            compatibility,
            ..Self::default()
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_pre_filtered(mut self, pre_filtered: bool) -> Self {
        self.pre_filtered = pre_filtered;
        self
    }
}

/// Attributes of one opening tag, in output order.
#[derive(Default)]
struct Attributes<'a>(Vec<(&'static str, Cow<'a, str>)>);

impl<'a> Attributes<'a> {
    fn add(&mut self, key: &'static str, value: impl Into<Cow<'a, str>>) -> &mut Self {
        self.0.push((key, value.into()));
        self
    }

    /// The `static, final, deprecated, visibility` tail shared by every element.
    fn add_trailing(&mut self, modifiers: &ModifierSet, deprecated: bool) -> &mut Self {
        self.add("static", flag(modifiers.is_static))
            .add("final", flag(modifiers.is_final))
            .add("deprecated", deprecation(deprecated))
            .add("visibility", visibility(modifiers.visibility))
    }
}

/// [`ApiVisitor`] that writes the JDiff XML document for a codebase.
pub struct JDiffXmlWriter<'a, W: Write> {
    out: W,
    codebase: &'a Codebase,
    filters: Filters,
    pre_filtered: bool,
    compat: Compatibility,
}

impl<'a, W: Write> JDiffXmlWriter<'a, W> {
    /// `codebase` is used to resolve referenced classes for the reference filter.
    pub fn new(out: W, codebase: &'a Codebase, options: &WriteOptions) -> Self {
        Self {
            out,
            codebase,
            filters: options.filters.clone(),
            pre_filtered: options.pre_filtered,
            compat: options.compatibility,
        }
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn escape(&self, raw: &str) -> String {
        escape_attribute_value(raw, self.compat.xml_escape_greater_than)
    }

    fn format_type(&self, ty: &TypeRef, cls: &ClassItem) -> String {
        let type_string = ty.to_type_string(false, Some(cls));
        if self.compat.space_after_comma_in_types {
            normalize_comma_spacing(&type_string)
        } else {
            type_string
        }
    }

    fn open_tag(&mut self, tag: &str, attributes: &Attributes<'_>) -> io::Result<()> {
        write!(self.out, "<{tag}")?;
        for (i, (key, value)) in attributes.0.iter().enumerate() {
            let separator = if i == 0 { " " } else { "\n " };
            write!(self.out, "{separator}{key}=\"{value}\"")?;
        }
        writeln!(self.out, "\n>")
    }

    /// Value of the `extends` attribute, if the class gets one.
    fn super_class_attribute(&self, cls: &ClassItem) -> Option<String> {
        if cls.kind.is_interface() && self.compat.extends_for_interface_super_class {
            // Written in the implements list instead.
            return None;
        }
        if cls.kind == ClassKind::AnnotationType {
            let name = if self.compat.xml_annotation_as_object {
                JAVA_LANG_OBJECT
            } else {
                JAVA_LANG_ANNOTATION
            };
            return Some(name.to_string());
        }

        let super_class = if self.pre_filtered {
            cls.super_class.clone()
        } else {
            self.filters.filtered_super_class_type(self.codebase, cls)
        };
        match super_class {
            Some(ty) if !cls.kind.is_class() && ty.is_java_lang_object() => None,
            Some(ty) => Some(self.escape(&ty.to_type_string(
                self.compat.omit_type_parameters_in_interfaces,
                Some(cls),
            ))),
            None if cls.kind == ClassKind::Enum => Some(JAVA_LANG_ENUM.to_string()),
            None => None,
        }
    }

    fn write_interface_list(&mut self, cls: &ClassItem) -> io::Result<()> {
        let mut interfaces = if self.pre_filtered {
            cls.interfaces.clone()
        } else {
            self.filters.filtered_interface_types(self.codebase, cls)
        };
        if cls.kind.is_interface() && self.compat.extends_for_interface_super_class {
            if let Some(super_class) = &cls.super_class {
                if !super_class.is_java_lang_object() {
                    interfaces.push(super_class.clone());
                }
            }
        }

        interfaces.sort_by(compare_types);
        interfaces.dedup();
        for ty in &interfaces {
            let name = self.escape(
                &ty.to_type_string(self.compat.omit_type_parameters_in_interfaces, Some(cls)),
            );
            writeln!(self.out, "<implements name=\"{name}\">\n</implements>")?;
        }
        Ok(())
    }

    fn write_parameter_list(&mut self, cls: &ClassItem, params: &[ParameterItem]) -> io::Result<()> {
        for param in params {
            // The real parameter name is never written.
            let type_name = self.escape(&self.format_type(&param.type_ref, cls));
            writeln!(
                self.out,
                "<parameter name=\"null\" type=\"{type_name}\">\n</parameter>"
            )?;
        }
        Ok(())
    }

    fn write_throws_list(&mut self, cls: &ClassItem, throws: &[TypeRef]) -> io::Result<()> {
        let throws = if !self.pre_filtered && self.compat.filter_throws_classes {
            self.filters.filtered_throws_types(self.codebase, throws)
        } else {
            throws.to_vec()
        };

        let mut names: Vec<String> = throws
            .iter()
            .map(|ty| ty.to_type_string(true, Some(cls)))
            .collect();
        names.sort();
        names.dedup();
        for qualified in &names {
            let name = if self.compat.simple_exception_names {
                simple_name(qualified)
            } else {
                qualified.as_str()
            };
            writeln!(
                self.out,
                "<exception name=\"{name}\" type=\"{qualified}\">\n</exception>"
            )?;
        }
        Ok(())
    }

    fn field_value(&self, field: &FieldItem) -> Option<String> {
        match &field.value {
            Some(ConstantValue::Char(c)) if self.compat.xml_char_as_int => {
                Some((*c as u32).to_string())
            }
            Some(value) => Some(self.escape(&value.to_source())),
            None if self.compat.xml_show_array_fields_as_null && field.type_ref.is_array() => {
                Some("null".to_string())
            }
            None => None,
        }
    }
}

fn class_tag(cls: &ClassItem) -> &'static str {
    if cls.kind.is_interface() {
        "interface"
    } else {
        "class"
    }
}

impl<W: Write> ApiVisitor for JDiffXmlWriter<'_, W> {
    fn visit_codebase(&mut self, _codebase: &Codebase) -> io::Result<()> {
        writeln!(self.out, "<api>")
    }

    fn after_visit_codebase(&mut self, _codebase: &Codebase) -> io::Result<()> {
        writeln!(self.out, "</api>")?;
        self.out.flush()
    }

    fn visit_package(&mut self, pkg: &PackageItem) -> io::Result<()> {
        debug!(package = %pkg.name, "writing package");
        // Package annotations have no place in this format.
        let mut attributes = Attributes::default();
        attributes.add("name", pkg.name.as_str());
        self.open_tag("package", &attributes)
    }

    fn after_visit_package(&mut self, _pkg: &PackageItem) -> io::Result<()> {
        writeln!(self.out, "</package>")
    }

    fn visit_class(&mut self, cls: &ClassItem) -> io::Result<()> {
        debug!(class = %cls.qualified_name, kind = ?cls.kind, "writing class");
        let modifiers = &cls.modifiers;

        // Type parameters are never written, only the full name.
        let mut attributes = Attributes::default();
        attributes.add("name", cls.name.as_str());
        if let Some(extends) = self.super_class_attribute(cls) {
            attributes.add("extends", extends);
        }
        attributes
            .add("abstract", flag(modifiers.is_abstract))
            .add_trailing(modifiers, cls.deprecated);
        self.open_tag(class_tag(cls), &attributes)?;

        self.write_interface_list(cls)?;

        if cls.kind == ClassKind::Enum && self.compat.default_enum_methods {
            let methods = ENUM_METHODS_TEMPLATE.replace("$CLASS", &cls.qualified_name);
            self.out.write_all(methods.as_bytes())?;
        }
        Ok(())
    }

    fn after_visit_class(&mut self, cls: &ClassItem) -> io::Result<()> {
        writeln!(self.out, "</{}>", class_tag(cls))
    }

    fn visit_constructor(&mut self, cls: &ClassItem, ctor: &ConstructorItem) -> io::Result<()> {
        let mut attributes = Attributes::default();
        attributes
            .add("name", cls.name.as_str())
            .add("type", cls.qualified_name.as_str())
            .add_trailing(&ctor.modifiers, ctor.deprecated);
        self.open_tag("constructor", &attributes)?;

        self.write_parameter_list(cls, &ctor.parameters)?;
        self.write_throws_list(cls, &ctor.throws)?;
        writeln!(self.out, "</constructor>")
    }

    fn visit_method(&mut self, cls: &ClassItem, method: &MethodItem) -> io::Result<()> {
        if cls.kind == ClassKind::AnnotationType && self.compat.xml_skip_annotation_methods {
            trace!(class = %cls.qualified_name, method = %method.name, "skipping annotation method");
            return Ok(());
        }
        let modifiers = &method.modifiers;

        let mut attributes = Attributes::default();
        attributes.add("name", method.name.as_str());
        if let Some(return_type) = &method.return_type {
            attributes.add("return", self.escape(&self.format_type(return_type, cls)));
        }
        attributes
            .add("abstract", flag(modifiers.is_abstract))
            .add("native", flag(modifiers.is_native));
        if !self.compat.xml_omit_synchronized {
            attributes.add("synchronized", flag(modifiers.is_synchronized));
        }
        attributes.add_trailing(modifiers, method.deprecated);
        self.open_tag("method", &attributes)?;

        self.write_parameter_list(cls, &method.parameters)?;
        self.write_throws_list(cls, &method.throws)?;
        writeln!(self.out, "</method>")
    }

    fn visit_field(&mut self, cls: &ClassItem, field: &FieldItem) -> io::Result<()> {
        if field.enum_constant && self.compat.xml_skip_enum_fields {
            trace!(class = %cls.qualified_name, field = %field.name, "skipping enum constant");
            return Ok(());
        }
        let modifiers = &field.modifiers;

        let mut attributes = Attributes::default();
        attributes
            .add("name", field.name.as_str())
            .add("type", self.escape(&self.format_type(&field.type_ref, cls)))
            .add("transient", flag(modifiers.is_transient))
            .add("volatile", flag(modifiers.is_volatile));
        if let Some(value) = self.field_value(field) {
            attributes.add("value", value);
        }
        attributes.add_trailing(modifiers, field.deprecated);
        self.open_tag("field", &attributes)?;
        writeln!(self.out, "</field>")
    }

    fn visit_property(&mut self, cls: &ClassItem, property: &PropertyItem) -> io::Result<()> {
        trace!(class = %cls.qualified_name, property = %property.name, "properties are not written");
        Ok(())
    }
}
