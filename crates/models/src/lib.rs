//! Records persisted by the heritage site backend.
//!
//! Both record kinds live as whole JSON arrays under one key each; the types
//! here are the wire and storage shape (camelCase field names).

pub mod errors;
pub mod ids;
pub mod video;
pub mod contact;

/// Trimmed value of an optional text field, `None` when missing or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Record id exactly as sent, `None` when missing or blank. Ids are matched
/// verbatim, so surrounding whitespace is kept.
pub fn present_id(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
