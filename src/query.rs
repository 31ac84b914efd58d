//! Filter construction for the order collection.
//!
//! Two separate constructors: CRUD identity paths match `title` exactly,
//! the search path matches a case-insensitive substring. The two are never
//! interchanged.

use mongodb::bson::{Document, doc};

/// Exact-match filter on `title`.
///
/// Returns `None` for an empty title: the caller decides whether that means
/// "match all" (list) or "do nothing, title required" (find-single, delete).
#[must_use]
pub fn exact_title_filter(title: &str) -> Option<Document> {
    if title.is_empty() {
        return None;
    }
    Some(doc! { "title": title })
}

/// Case-insensitive substring filter on `title`.
///
/// Empty or absent text matches all records. The text is regex-escaped so
/// the match is a literal substring match, not a user-supplied pattern.
#[must_use]
pub fn substring_title_filter(text: Option<&str>) -> Document {
    match text {
        Some(t) if !t.is_empty() => {
            doc! { "title": { "$regex": regex::escape(t), "$options": "i" } }
        }
        _ => Document::new(),
    }
}
