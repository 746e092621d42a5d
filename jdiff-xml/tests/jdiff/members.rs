//! Constructor, method and field elements

use crate::common::{constant, param, public_static_final, render, single_package};
use jdiff_xml::model::{
    ClassItem, ClassKind, ConstantValue, ConstructorItem, FieldItem, MethodItem, ModifierSet,
    TypeParameter, TypeRef,
};
use jdiff_xml::Compatibility;

fn with_class(setup: impl FnOnce(&mut ClassItem)) -> jdiff_xml::Codebase {
    let mut cls = ClassItem::new("p", "Foo", ClassKind::Class);
    setup(&mut cls);
    single_package("p", vec![cls])
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

#[test]
fn test_constructor_element() {
    let codebase = with_class(|cls| {
        cls.constructors = vec![ConstructorItem {
            parameters: vec![
                param(TypeRef::primitive("int")),
                param(TypeRef::varargs(TypeRef::class("java.lang.String"))),
            ],
            ..ConstructorItem::default()
        }];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(xml.contains(
        "<constructor name=\"Foo\"\n type=\"p.Foo\"\n static=\"false\"\n final=\"false\"\n deprecated=\"not deprecated\"\n visibility=\"public\"\n>\n<parameter name=\"null\" type=\"int\">\n</parameter>\n<parameter name=\"null\" type=\"java.lang.String...\">\n</parameter>\n</constructor>\n"
    ));
}

#[test]
fn test_parameter_names_are_never_written() {
    let codebase = with_class(|cls| {
        let mut method = MethodItem::new("put", TypeRef::primitive("void"));
        method.parameters = vec![jdiff_xml::model::ParameterItem::new(
            "secretName",
            TypeRef::primitive("long"),
        )];
        cls.methods = vec![method];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(!xml.contains("secretName"));
    assert!(xml.contains("<parameter name=\"null\" type=\"long\">"));
}

// ============================================================================
// METHODS
// ============================================================================

#[test]
fn test_method_without_return_type() {
    let codebase = with_class(|cls| {
        cls.methods = vec![MethodItem {
            name: "init".into(),
            ..MethodItem::default()
        }];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(xml.contains("<method name=\"init\"\n abstract=\"false\"\n"));
}

#[test]
fn test_native_synchronized_method() {
    let codebase = with_class(|cls| {
        let mut method = MethodItem::new("lock", TypeRef::primitive("void"));
        method.modifiers = ModifierSet::public().with_final();
        method.modifiers.is_native = true;
        method.modifiers.is_synchronized = true;
        cls.methods = vec![method];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(xml.contains(
        " native=\"true\"\n synchronized=\"true\"\n static=\"false\"\n final=\"true\"\n"
    ));
}

#[test]
fn test_throws_are_sorted_by_qualified_name() {
    let codebase = with_class(|cls| {
        let mut method = MethodItem::new("run", TypeRef::primitive("void"));
        method.throws = vec![
            TypeRef::class("p.CError"),
            TypeRef::class("p.AError"),
            TypeRef::class("p.BError"),
            TypeRef::class("p.AError"),
        ];
        cls.methods = vec![method];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(xml.contains(
        "<exception name=\"p.AError\" type=\"p.AError\">\n</exception>\n<exception name=\"p.BError\" type=\"p.BError\">\n</exception>\n<exception name=\"p.CError\" type=\"p.CError\">\n</exception>\n</method>\n"
    ));
}

#[test]
fn test_thrown_type_variable_is_erased_to_its_bound() {
    let codebase = with_class(|cls| {
        cls.type_parameters = vec![TypeParameter {
            name: "E".into(),
            bounds: vec![TypeRef::class("java.lang.Exception")],
        }];
        let mut method = MethodItem::new("run", TypeRef::primitive("void"));
        method.throws = vec![TypeRef::variable("E")];
        cls.methods = vec![method];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(xml.contains("<exception name=\"java.lang.Exception\" type=\"java.lang.Exception\">"));

    let xml = render(&codebase, Compatibility::legacy());
    assert!(xml.contains("<exception name=\"Exception\" type=\"java.lang.Exception\">"));
}

#[test]
fn test_member_types_keep_type_arguments() {
    let codebase = with_class(|cls| {
        let mut method = MethodItem::new(
            "entries",
            TypeRef::generic(
                "java.util.Map",
                vec![
                    TypeRef::class("java.lang.String"),
                    TypeRef::wildcard_super(TypeRef::class("java.lang.Integer")),
                ],
            ),
        );
        method.parameters = vec![param(TypeRef::array(TypeRef::generic(
            "java.util.List",
            vec![TypeRef::wildcard()],
        )))];
        cls.methods = vec![method];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(xml.contains(" return=\"java.util.Map&lt;java.lang.String,? super java.lang.Integer>\"\n"));
    assert!(xml.contains("<parameter name=\"null\" type=\"java.util.List&lt;?>[]\">"));
}

// ============================================================================
// FIELDS
// ============================================================================

#[test]
fn test_field_attribute_order() {
    let codebase = with_class(|cls| {
        let mut field = FieldItem::new("count", TypeRef::primitive("int"));
        field.modifiers.is_transient = true;
        field.modifiers.is_volatile = true;
        field.deprecated = true;
        cls.fields = vec![field];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(xml.contains(
        "<field name=\"count\"\n type=\"int\"\n transient=\"true\"\n volatile=\"true\"\n static=\"false\"\n final=\"false\"\n deprecated=\"deprecated\"\n visibility=\"public\"\n>\n</field>\n"
    ));
}

#[test]
fn test_constant_values() {
    let codebase = with_class(|cls| {
        cls.fields = vec![
            constant("A_LONG", TypeRef::primitive("long"), ConstantValue::Long(7)),
            constant("B_FLOAT", TypeRef::primitive("float"), ConstantValue::Float(0.5)),
            constant("C_BOOL", TypeRef::primitive("boolean"), ConstantValue::Boolean(true)),
            constant(
                "D_TEXT",
                TypeRef::class("java.lang.String"),
                ConstantValue::String("a\"b&c\n".into()),
            ),
            constant("E_BYTE", TypeRef::primitive("byte"), ConstantValue::Byte(-1)),
        ];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(xml.contains(" value=\"7L\"\n"));
    assert!(xml.contains(" value=\"0.5f\"\n"));
    assert!(xml.contains(" value=\"true\"\n"));
    assert!(xml.contains(" value=\"&quot;a\\&quot;b&amp;c\\n&quot;\"\n"));
    assert!(xml.contains(" value=\"(byte)-1\"\n"));
}

#[test]
fn test_char_constant_follows_policy() {
    let codebase = with_class(|cls| {
        cls.fields = vec![constant(
            "QUOTE",
            TypeRef::primitive("char"),
            ConstantValue::Char('\''),
        )];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(xml.contains(" value=\"'\\''\"\n"));

    let as_int = Compatibility {
        xml_char_as_int: true,
        ..Compatibility::default()
    };
    let xml = render(&codebase, as_int);
    assert!(xml.contains(" value=\"39\"\n"));
}

#[test]
fn test_array_field_value_follows_policy() {
    let codebase = with_class(|cls| {
        let mut names = FieldItem::new(
            "names",
            TypeRef::array(TypeRef::class("java.lang.String")),
        );
        names.modifiers = ModifierSet::public();
        let mut ids = FieldItem::new("ids", TypeRef::array(TypeRef::primitive("int")));
        ids.modifiers = public_static_final();
        cls.fields = vec![names, ids, FieldItem::new("plain", TypeRef::primitive("int"))];
    });

    let xml = render(&codebase, Compatibility::default());
    assert!(!xml.contains("value="));

    let as_null = Compatibility {
        xml_show_array_fields_as_null: true,
        ..Compatibility::default()
    };
    let xml = render(&codebase, as_null);
    assert_eq!(xml.matches(" value=\"null\"\n").count(), 2);
}

#[test]
fn test_fields_are_sorted_by_name() {
    let codebase = with_class(|cls| {
        cls.fields = vec![
            FieldItem::new("zeta", TypeRef::primitive("int")),
            FieldItem::new("alpha", TypeRef::primitive("int")),
        ];
    });

    let xml = render(&codebase, Compatibility::default());
    let alpha = xml.find("<field name=\"alpha\"").expect("alpha");
    let zeta = xml.find("<field name=\"zeta\"").expect("zeta");
    assert!(alpha < zeta);
}
