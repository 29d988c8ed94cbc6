//! Read-path sanitization for untrusted bookmark text.
//!
//! Stored data keeps the original text; sanitization happens only when a
//! record is shaped into a response. `title` is fully escaped (no markup
//! survives), `description` keeps a small whitelist of inline tags with
//! their event-handler attributes stripped.

use crate::types::bookmark::Bookmark;

/// Inline tags allowed to survive in a description.
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "br", "code", "em", "i", "img", "p", "small", "span", "strong", "sub", "sup", "u",
];

/// Escapes HTML-significant characters so markup renders as literal text.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Cleans a description: whitelisted tags are kept minus any `on*`
/// attribute, everything else is escaped to literal text.
pub fn clean_description(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(lt) = rest.find('<') {
        result.push_str(&rest[..lt]);
        let tag_region = &rest[lt..];

        match tag_region.find('>') {
            Some(gt) => {
                let raw = &tag_region[..=gt];
                result.push_str(&clean_tag(raw));
                rest = &tag_region[gt + 1..];
            }
            None => {
                // Unterminated tag, escape the remainder
                result.push_str(&escape_html(tag_region));
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

/// Applies the sanitization rules to a record's text fields for a response.
/// `id`, `url` and `rating` pass through untouched.
pub fn sanitize_bookmark(bookmark: Bookmark) -> Bookmark {
    Bookmark {
        title: escape_html(&bookmark.title),
        description: bookmark.description.as_deref().map(clean_description),
        ..bookmark
    }
}

/// Rebuilds a single raw `<...>` sequence: kept (minus `on*` attributes)
/// when the tag is whitelisted, escaped to text otherwise.
fn clean_tag(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];

    if let Some(name) = inner.strip_prefix('/') {
        let name = name.trim().to_ascii_lowercase();
        if ALLOWED_TAGS.contains(&name.as_str()) {
            return format!("</{}>", name);
        }
        return escape_html(raw);
    }

    let name_end = inner
        .find(|c: char| c.is_ascii_whitespace() || c == '/')
        .unwrap_or(inner.len());
    let name = inner[..name_end].to_ascii_lowercase();
    if name.is_empty() || !ALLOWED_TAGS.contains(&name.as_str()) {
        return escape_html(raw);
    }

    let mut tag = format!("<{}", name);
    for (attr, value) in parse_attributes(&inner[name_end..]) {
        // Drop event handlers and anything that is not a plain attribute name
        if attr.to_ascii_lowercase().starts_with("on")
            || !attr
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
        {
            continue;
        }
        tag.push(' ');
        tag.push_str(&attr);
        if let Some(value) = value {
            tag.push_str("=\"");
            tag.push_str(&escape_html(&value).replace('"', "&quot;"));
            tag.push('"');
        }
    }
    tag.push('>');
    tag
}

/// Scans the attribute portion of a tag into (name, optional value) pairs.
/// Values may be double-quoted, single-quoted, or bare.
fn parse_attributes(s: &str) -> Vec<(String, Option<String>)> {
    let mut attrs = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && (chars[i].is_ascii_whitespace() || chars[i] == '/') {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        let name_start = i;
        while i < chars.len() && !chars[i].is_ascii_whitespace() && chars[i] != '=' && chars[i] != '/' {
            i += 1;
        }
        let name: String = chars[name_start..i].iter().collect();
        if name.is_empty() {
            break;
        }

        while i < chars.len() && chars[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= chars.len() || chars[i] != '=' {
            attrs.push((name, None));
            continue;
        }
        i += 1;
        while i < chars.len() && chars[i].is_ascii_whitespace() {
            i += 1;
        }

        let value = if i < chars.len() && (chars[i] == '"' || chars[i] == '\'') {
            let quote = chars[i];
            i += 1;
            let value_start = i;
            while i < chars.len() && chars[i] != quote {
                i += 1;
            }
            let value: String = chars[value_start..i].iter().collect();
            if i < chars.len() {
                i += 1;
            }
            value
        } else {
            let value_start = i;
            while i < chars.len() && !chars[i].is_ascii_whitespace() {
                i += 1;
            }
            chars[value_start..i].iter().collect()
        };
        attrs.push((name, Some(value)));
    }

    attrs
}
