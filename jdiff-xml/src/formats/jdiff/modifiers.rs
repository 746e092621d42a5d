//! Modifier and visibility attribute text

use crate::model::Visibility;

pub fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Deprecation is a phrase, not a boolean.
pub fn deprecation(deprecated: bool) -> &'static str {
    if deprecated {
        "deprecated"
    } else {
        "not deprecated"
    }
}

pub fn visibility(visibility: Visibility) -> &'static str {
    visibility.as_str()
}
