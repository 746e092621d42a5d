//! Attribute value escaping

/// Escape `raw` for use inside a double-quoted XML attribute.
///
/// `&`, `<` and `"` become entities. Tab, newline and carriage return become numeric character
/// references; the other C0 control characters cannot appear in XML 1.0 at all and are replaced
/// by U+FFFD. Standard XML leaves `>` alone; with `strict` set it is escaped as well, the way the
/// legacy format always did.
pub fn escape_attribute_value(raw: &str, strict: bool) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            '\t' | '\n' | '\r' => {
                escaped.push_str(&format!("&#{};", c as u32));
            }
            c if (c as u32) < 0x20 => escaped.push(char::REPLACEMENT_CHARACTER),
            c => escaped.push(c),
        }
    }

    if strict && escaped.contains('>') {
        escaped.replace('>', "&gt;")
    } else {
        escaped
    }
}
