//! Class, interface and enum elements

use crate::common::{render, single_package};
use jdiff_xml::model::{ClassItem, ClassKind, MethodItem, ModifierSet, TypeRef, Visibility};
use jdiff_xml::Compatibility;

fn class_block(xml: &str, tag: &str, name: &str) -> String {
    let start = xml
        .find(&format!("<{tag} name=\"{name}\""))
        .unwrap_or_else(|| panic!("no <{tag}> for {name} in:\n{xml}"));
    let end = xml[start..]
        .find(&format!("</{tag}>"))
        .expect("closing tag");
    xml[start..start + end].to_string()
}

// ============================================================================
// OPENING TAG
// ============================================================================

#[test]
fn test_class_attribute_order() {
    let mut cls = ClassItem::new("p", "Foo", ClassKind::Class);
    cls.modifiers = ModifierSet::public()
        .with_visibility(Visibility::Protected)
        .with_static()
        .with_abstract();
    cls.deprecated = true;
    cls.super_class = Some(TypeRef::class("p.Base"));

    let xml = render(&single_package("p", vec![cls]), Compatibility::default());
    assert!(xml.contains(
        "<class name=\"Foo\"\n extends=\"p.Base\"\n abstract=\"true\"\n static=\"true\"\n final=\"false\"\n deprecated=\"deprecated\"\n visibility=\"protected\"\n>\n"
    ));
}

#[test]
fn test_nested_class_uses_full_name() {
    let mut outer = ClassItem::new("p", "Outer", ClassKind::Class);
    outer
        .inner_classes
        .push(ClassItem::new("p", "Outer.Inner", ClassKind::Interface));

    let xml = render(&single_package("p", vec![outer]), Compatibility::default());
    assert!(xml.contains("</class>\n<interface name=\"Outer.Inner\"\n"));
}

#[test]
fn test_type_parameters_are_not_written() {
    let mut cls = ClassItem::new("p", "Holder", ClassKind::Class);
    cls.type_parameters = vec![jdiff_xml::model::TypeParameter {
        name: "T".into(),
        bounds: vec![],
    }];

    let xml = render(&single_package("p", vec![cls]), Compatibility::default());
    assert!(xml.contains("<class name=\"Holder\"\n abstract="));
}

// ============================================================================
// EXTENDS
// ============================================================================

#[test]
fn test_interface_super_class_moves_to_implements_in_legacy_mode() {
    let mut child = ClassItem::new("p", "Child", ClassKind::Interface);
    child.super_class = Some(TypeRef::class("p.Parent"));
    let codebase = single_package("p", vec![child]);

    let default = render(&codebase, Compatibility::default());
    let block = class_block(&default, "interface", "Child");
    assert!(block.contains(" extends=\"p.Parent\""));
    assert!(!block.contains("<implements"));

    let legacy = render(&codebase, Compatibility::legacy());
    let block = class_block(&legacy, "interface", "Child");
    assert!(!block.contains("extends="));
    assert!(block.contains("<implements name=\"p.Parent\">\n</implements>\n"));
}

#[test]
fn test_interface_never_extends_object() {
    let mut iface = ClassItem::new("p", "Shape", ClassKind::Interface);
    iface.super_class = Some(TypeRef::class("java.lang.Object"));
    let codebase = single_package("p", vec![iface]);

    for compat in [Compatibility::default(), Compatibility::legacy()] {
        let xml = render(&codebase, compat);
        assert!(!xml.contains("java.lang.Object"), "{xml}");
    }
}

#[test]
fn test_annotation_type_super_class() {
    let marker = ClassItem::new("p", "Marker", ClassKind::AnnotationType);
    let codebase = single_package("p", vec![marker]);

    let default = render(&codebase, Compatibility::default());
    assert!(default.contains(
        "<interface name=\"Marker\"\n extends=\"java.lang.annotation.Annotation\"\n"
    ));

    let as_object = Compatibility {
        xml_annotation_as_object: true,
        ..Compatibility::default()
    };
    let xml = render(&codebase, as_object);
    assert!(xml.contains("<interface name=\"Marker\"\n extends=\"java.lang.Object\"\n"));
}

#[test]
fn test_enum_super_class() {
    let mut color = ClassItem::new("p", "Color", ClassKind::Enum);
    color.super_class = Some(TypeRef::generic(
        "java.lang.Enum",
        vec![TypeRef::class("p.Color")],
    ));
    let codebase = single_package("p", vec![color]);

    let default = render(&codebase, Compatibility::default());
    assert!(default.contains(" extends=\"java.lang.Enum&lt;p.Color>\""));

    let legacy = render(&codebase, Compatibility::legacy());
    assert!(legacy.contains(" extends=\"java.lang.Enum\""));
}

// ============================================================================
// IMPLEMENTS
// ============================================================================

#[test]
fn test_interfaces_sorted_and_deduplicated() {
    let mut cls = ClassItem::new("p", "Foo", ClassKind::Class);
    cls.interfaces = vec![
        TypeRef::class("p.Zeta"),
        TypeRef::class("java.lang.Runnable"),
        TypeRef::class("p.Zeta"),
    ];

    let xml = render(&single_package("p", vec![cls]), Compatibility::default());
    assert!(xml.contains(
        ">\n<implements name=\"java.lang.Runnable\">\n</implements>\n<implements name=\"p.Zeta\">\n</implements>\n</class>\n"
    ));
}

#[test]
fn test_generic_interface_names_follow_policy() {
    let mut cls = ClassItem::new("p", "Names", ClassKind::Class);
    cls.interfaces = vec![TypeRef::generic(
        "java.util.Map",
        vec![
            TypeRef::class("java.lang.String"),
            TypeRef::wildcard_extends(TypeRef::class("java.lang.Number")),
        ],
    )];
    let codebase = single_package("p", vec![cls]);

    let default = render(&codebase, Compatibility::default());
    assert!(default.contains(
        "<implements name=\"java.util.Map&lt;java.lang.String,? extends java.lang.Number>\">"
    ));

    let legacy = render(&codebase, Compatibility::legacy());
    assert!(legacy.contains("<implements name=\"java.util.Map\">"));
}

// ============================================================================
// ENUMS
// ============================================================================

#[test]
fn test_enum_methods_only_when_enabled() {
    let color = ClassItem::new("p", "Color", ClassKind::Enum);
    let plain = ClassItem::new("p", "Plain", ClassKind::Class);
    let codebase = single_package("p", vec![color, plain]);
    let with_methods = Compatibility {
        default_enum_methods: true,
        ..Compatibility::default()
    };

    let xml = render(&codebase, with_methods);
    let color_block = class_block(&xml, "class", "Color");
    assert!(color_block.contains("<method name=\"valueOf\"\n return=\"p.Color\"\n"));
    assert!(color_block.contains("<method name=\"values\"\n return=\"p.Color[]\"\n"));
    assert!(!class_block(&xml, "class", "Plain").contains("valueOf"));

    let xml = render(&codebase, Compatibility::default());
    assert!(!xml.contains("valueOf"));
}

#[test]
fn test_enum_methods_precede_declared_members() {
    let mut color = ClassItem::new("p", "Color", ClassKind::Enum);
    color.methods = vec![MethodItem::new("hex", TypeRef::class("java.lang.String"))];

    let xml = render(&single_package("p", vec![color]), Compatibility::legacy());
    let values = xml.find("<method name=\"values\"").expect("values()");
    let hex = xml.find("<method name=\"hex\"").expect("hex()");
    assert!(values < hex);
}
