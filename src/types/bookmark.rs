use serde::{Deserialize, Serialize};

/// A stored bookmark record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub rating: i64,
    pub description: Option<String>,
}

/// Raw create request body, before validation.
///
/// Every field is optional here so the validator owns the presence checks;
/// JSON `null` and an absent key are equivalent.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookmarkPayload {
    pub title: Option<String>,
    pub url: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
}

/// A validated, normalized create payload. `rating` has been floored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub rating: i64,
    pub description: Option<String>,
}

/// Raw partial-update request body. Unrecognized fields are ignored by serde.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookmarkPayload {
    pub title: Option<String>,
    pub url: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
}

/// A validated patch. Only `Some` fields are written to storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub rating: Option<i64>,
    pub description: Option<String>,
}

impl BookmarkPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.rating.is_none()
            && self.description.is_none()
    }
}
