//! Payload validation for bookmark create and update requests.
//!
//! Validation always runs before any storage call, so invalid input never
//! reaches the database. The `Display` impl of [`ValidationError`] carries
//! the exact client-facing message for each failure.

use crate::types::bookmark::{
    BookmarkPatch, CreateBookmarkPayload, NewBookmark, UpdateBookmarkPayload,
};
use crate::types::errors::ValidationError;

/// Minimum accepted `url` length, in characters.
const MIN_URL_LEN: usize = 5;

/// Inclusive `rating` bounds, applied after flooring the supplied number.
const MIN_RATING: i64 = 0;
const MAX_RATING: i64 = 5;

/// Validates a create payload and returns the normalized record to insert.
///
/// Required fields are checked in declaration order (`title`, `url`,
/// `rating`); the first absent one wins. An empty `title` counts as missing
/// since the entity requires non-empty text. `description` is never
/// required.
pub fn validate_create(payload: CreateBookmarkPayload) -> Result<NewBookmark, ValidationError> {
    let title = payload
        .title
        .filter(|t| !t.is_empty())
        .ok_or(ValidationError::MissingField("title"))?;
    let url = payload.url.ok_or(ValidationError::MissingField("url"))?;
    let rating = payload
        .rating
        .ok_or(ValidationError::MissingField("rating"))?;

    check_url(&url)?;
    let rating = check_rating(rating)?;

    Ok(NewBookmark {
        title,
        url,
        rating,
        description: payload.description,
    })
}

/// Validates a partial-update payload and returns the patch to apply.
///
/// At least one recognized field must be present. Supplied `url` and
/// `rating` values pass through the same range checks create applies.
pub fn validate_update(payload: UpdateBookmarkPayload) -> Result<BookmarkPatch, ValidationError> {
    let patch = BookmarkPatch {
        title: payload.title,
        url: payload.url,
        rating: payload.rating.map(|r| r.floor() as i64),
        description: payload.description,
    };

    if patch.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }

    if let Some(url) = &patch.url {
        check_url(url)?;
    }
    if let Some(rating) = patch.rating {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::InvalidRating);
        }
    }

    Ok(patch)
}

fn check_url(url: &str) -> Result<(), ValidationError> {
    if url.chars().count() < MIN_URL_LEN {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(())
}

/// Floors the supplied number and checks the rating bounds.
fn check_rating(rating: f64) -> Result<i64, ValidationError> {
    let floored = rating.floor() as i64;
    if !(MIN_RATING..=MAX_RATING).contains(&floored) {
        return Err(ValidationError::InvalidRating);
    }
    Ok(floored)
}
