//! Small text helpers shared by the renderers

use std::borrow::Cow;

use zqlz_core::QueryDialect;

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// The value itself, or an inline comment placeholder when it is blank
pub(crate) fn or_placeholder<'a>(dialect: QueryDialect, value: &'a str, label: &str) -> Cow<'a, str> {
    if is_blank(value) {
        Cow::Owned(dialect.placeholder(label))
    } else {
        Cow::Borrowed(value)
    }
}

/// The value itself, or a fixed fallback when it is blank
pub(crate) fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if is_blank(value) { fallback } else { value }
}

/// Trim surrounding whitespace and any trailing commas so a fragment can be
/// joined with an explicit separator.
pub(crate) fn trim_fragment(value: &str) -> &str {
    value.trim().trim_end_matches(',').trim_end()
}
