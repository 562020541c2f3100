use std::fmt::Display;

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Text shown for optional values that are not present.
pub const NOT_SET: &str = "<not set>";

/// Text shown for empty collections.
pub const NONE: &str = "<none>";

/// Converts optional value to string, returning [`NOT_SET`] for `None`.
pub fn optional_to_string<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_SET.to_owned(), |v| v.to_string())
}

/// Formats `current/total` ratio, treating `None` as zero.
pub fn ratio<T: Display + Default>(current: Option<T>, total: Option<T>) -> String {
    format!("{}/{}", current.unwrap_or_default(), total.unwrap_or_default())
}

/// Joins the string slices with `separator`, returning [`NONE`] if there is nothing to join.
pub fn join_or_none<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    if items.is_empty() {
        return NONE.to_owned();
    }

    items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(separator)
}
