//! Compatibility policy
//!
//! Every legacy quirk of the JDiff format is a named toggle on [`Compatibility`]. One value is
//! fixed for a whole run and handed by reference to the writer, so every element of a document
//! is rendered under the same conventions.

use serde::Deserialize;

/// Immutable set of legacy-format toggles for one serialization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Compatibility {
    /// Interfaces list their super interface under `implements` instead of `extends`.
    pub extends_for_interface_super_class: bool,
    /// Erase type arguments in `extends` and `implements` names.
    pub omit_type_parameters_in_interfaces: bool,
    /// Array fields without an initializer get `value="null"`.
    pub xml_show_array_fields_as_null: bool,
    /// Enum constants are not written as fields.
    pub xml_skip_enum_fields: bool,
    /// Methods of annotation types are not written.
    pub xml_skip_annotation_methods: bool,
    /// Methods carry no `synchronized` attribute.
    pub xml_omit_synchronized: bool,
    /// Annotation types extend `java.lang.Object` rather than `java.lang.annotation.Annotation`.
    pub xml_annotation_as_object: bool,
    /// Char constants are written as their numeric code point.
    pub xml_char_as_int: bool,
    /// Escape `>` in attribute values.
    pub xml_escape_greater_than: bool,
    /// Enums get the implicit `valueOf(String)` and `values()` methods.
    pub default_enum_methods: bool,
    /// Thrown types go through the reference filter.
    pub filter_throws_classes: bool,
    /// Member types get a space after every comma.
    pub space_after_comma_in_types: bool,
    /// Thrown types are named by simple name instead of qualified name.
    pub simple_exception_names: bool,
}

impl Compatibility {
    /// Names accepted by [`Compatibility::set`], in declaration order.
    pub const TOGGLE_NAMES: &'static [&'static str] = &[
        "extends_for_interface_super_class",
        "omit_type_parameters_in_interfaces",
        "xml_show_array_fields_as_null",
        "xml_skip_enum_fields",
        "xml_skip_annotation_methods",
        "xml_omit_synchronized",
        "xml_annotation_as_object",
        "xml_char_as_int",
        "xml_escape_greater_than",
        "default_enum_methods",
        "filter_throws_classes",
        "space_after_comma_in_types",
        "simple_exception_names",
    ];

    /// The conventions of the predecessor tool, quirks included.
    pub fn legacy() -> Self {
        Self {
            extends_for_interface_super_class: true,
            omit_type_parameters_in_interfaces: true,
            xml_show_array_fields_as_null: true,
            xml_skip_enum_fields: true,
            xml_skip_annotation_methods: true,
            xml_omit_synchronized: false,
            xml_annotation_as_object: true,
            xml_char_as_int: true,
            xml_escape_greater_than: true,
            default_enum_methods: true,
            filter_throws_classes: false,
            space_after_comma_in_types: true,
            simple_exception_names: true,
        }
    }

    /// Set a toggle by name. Returns `false` if no toggle has that name.
    ///
    /// Dashes are accepted in place of underscores (`xml-char-as-int`).
    pub fn set(&mut self, name: &str, value: bool) -> bool {
        match self.slot(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Read a toggle by name, with the same spelling rules as [`Compatibility::set`].
    pub fn get(&self, name: &str) -> Option<bool> {
        let mut copy = *self;
        copy.slot(name).map(|slot| *slot)
    }

    fn slot(&mut self, name: &str) -> Option<&mut bool> {
        let slot = match name.replace('-', "_").as_str() {
            "extends_for_interface_super_class" => &mut self.extends_for_interface_super_class,
            "omit_type_parameters_in_interfaces" => &mut self.omit_type_parameters_in_interfaces,
            "xml_show_array_fields_as_null" => &mut self.xml_show_array_fields_as_null,
            "xml_skip_enum_fields" => &mut self.xml_skip_enum_fields,
            "xml_skip_annotation_methods" => &mut self.xml_skip_annotation_methods,
            "xml_omit_synchronized" => &mut self.xml_omit_synchronized,
            "xml_annotation_as_object" => &mut self.xml_annotation_as_object,
            "xml_char_as_int" => &mut self.xml_char_as_int,
            "xml_escape_greater_than" => &mut self.xml_escape_greater_than,
            "default_enum_methods" => &mut self.default_enum_methods,
            "filter_throws_classes" => &mut self.filter_throws_classes,
            "space_after_comma_in_types" => &mut self.space_after_comma_in_types,
            "simple_exception_names" => &mut self.simple_exception_names,
            _ => return None,
        };
        Some(slot)
    }
}

impl Default for Compatibility {
    fn default() -> Self {
        Self {
            extends_for_interface_super_class: false,
            omit_type_parameters_in_interfaces: false,
            xml_show_array_fields_as_null: false,
            xml_skip_enum_fields: false,
            xml_skip_annotation_methods: false,
            xml_omit_synchronized: false,
            xml_annotation_as_object: false,
            xml_char_as_int: false,
            xml_escape_greater_than: false,
            default_enum_methods: false,
            filter_throws_classes: true,
            space_after_comma_in_types: false,
            simple_exception_names: false,
        }
    }
}
