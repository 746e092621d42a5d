//! Compile-time constant field values and their source-literal form.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantValue {
    Boolean(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl ConstantValue {
    /// The value as it would be written in source.
    pub fn to_source(&self) -> String {
        match self {
            ConstantValue::Boolean(value) => value.to_string(),
            ConstantValue::Char(value) => format!("'{}'", java_escape(&value.to_string())),
            ConstantValue::Byte(value) => format!("(byte){value}"),
            ConstantValue::Short(value) => format!("(short){value}"),
            ConstantValue::Int(value) => value.to_string(),
            ConstantValue::Long(value) => format!("{value}L"),
            ConstantValue::Float(value) => {
                if value.is_nan() {
                    "(0.0f/0.0f)".to_string()
                } else if value.is_infinite() {
                    if *value > 0.0 {
                        "(1.0f/0.0f)".to_string()
                    } else {
                        "(-1.0f/0.0f)".to_string()
                    }
                } else {
                    format!("{}f", canonical_float(format!("{value:?}")))
                }
            }
            ConstantValue::Double(value) => {
                if value.is_nan() {
                    "(0.0/0.0)".to_string()
                } else if value.is_infinite() {
                    if *value > 0.0 {
                        "(1.0/0.0)".to_string()
                    } else {
                        "(-1.0/0.0)".to_string()
                    }
                } else {
                    canonical_float(format!("{value:?}"))
                }
            }
            ConstantValue::String(value) => format!("\"{}\"", java_escape(value)),
        }
    }
}

/// Rust's `Debug` form always has a fraction or an exponent; only the exponent needs reshaping
/// (`1e20` becomes `1.0E20`).
fn canonical_float(debug: String) -> String {
    match debug.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => debug,
    }
}

/// Escape a string the way a Java string or char literal spells it.
pub fn java_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 || (0x7f..0xa0).contains(&(c as u32)) => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}
