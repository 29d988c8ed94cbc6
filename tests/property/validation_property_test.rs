//! Property-based tests for payload validation and sanitization.
//!
//! These tests verify that the rating floor/range rule and the url length
//! rule hold for arbitrary inputs, and that sanitized output can never
//! carry an executable script tag or event-handler attribute.

use proptest::prelude::*;

use bookmarkd::services::sanitizer::{clean_description, escape_html};
use bookmarkd::services::validator::validate_create;
use bookmarkd::types::bookmark::CreateBookmarkPayload;
use bookmarkd::types::errors::ValidationError;

/// Strategy for generating valid URL strings of at least 5 characters.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}://{}{}", scheme, host, tld))
}

/// Strategy for generating non-empty titles.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,30}"
}

fn payload(title: String, url: String, rating: f64) -> CreateBookmarkPayload {
    CreateBookmarkPayload {
        title: Some(title),
        url: Some(url),
        rating: Some(rating),
        description: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // *For any* valid title/url and a rating whose floor lands in 0..=5,
    // create validation SHALL succeed and normalize the rating to its floor.
    #[test]
    fn in_range_rating_is_floored(
        title in arb_title(),
        url in arb_url(),
        rating in 0.0f64..5.99,
    ) {
        let normalized = validate_create(payload(title, url, rating))
            .expect("in-range rating should validate");
        prop_assert_eq!(normalized.rating, rating.floor() as i64);
    }

    // *For any* rating whose floor lands outside 0..=5, create validation
    // SHALL fail with the rating-range error regardless of other fields.
    #[test]
    fn out_of_range_rating_is_rejected(
        title in arb_title(),
        url in arb_url(),
        rating in prop_oneof![6.0f64..1e6, -1e6f64..-0.01],
    ) {
        let err = validate_create(payload(title, url, rating)).unwrap_err();
        prop_assert_eq!(err, ValidationError::InvalidRating);
    }

    // *For any* url shorter than 5 characters, create validation SHALL fail
    // with the url-length error regardless of other field validity.
    #[test]
    fn short_url_is_rejected(
        title in arb_title(),
        url in "[a-z.]{0,4}",
        rating in 0.0f64..5.99,
    ) {
        let err = validate_create(payload(title, url, rating)).unwrap_err();
        prop_assert_eq!(err, ValidationError::InvalidUrl);
    }

    // Escaped titles never carry raw angle brackets.
    #[test]
    fn escaped_title_has_no_raw_markup(text in ".*") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
    }

    // Cleaned descriptions never carry a script tag, whatever the input.
    #[test]
    fn cleaned_description_has_no_script_tag(text in ".*") {
        let cleaned = clean_description(&text).to_ascii_lowercase();
        prop_assert!(!cleaned.contains("<script"));
    }

    // Cleaned descriptions never carry an onerror/onclick/onload attribute
    // inside a surviving tag.
    #[test]
    fn cleaned_description_has_no_event_handlers(
        handler in prop_oneof![Just("onerror"), Just("onclick"), Just("onload")],
        value in "[a-z(1);]{0,12}",
    ) {
        let input = format!(r#"<img src="x.png" {}="{}">"#, handler, value);
        let cleaned = clean_description(&input);
        prop_assert_eq!(cleaned, r#"<img src="x.png">"#);
    }
}
