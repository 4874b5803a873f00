//! Rotation filter: rewrites `data-rotate` directives into class lists.
//!
//! Editors mark up elements with `data-rotate="left|right"` (and optionally
//! `data-rotate-caption`) to request rotated presentation. This filter runs
//! once per rendered fragment, consumes the directive attributes, and leaves
//! CSS class hooks behind:
//!
//! - `data-rotate="left"` → `rotate-left` plus `rotate-caption` or
//!   `caption-not-rotated` depending on the caption flag
//! - any other `data-rotate` value → `not-rotated`
//! - an embed display-settings payload with an `image_style` key contributes
//!   an `image-style--<id>` hook (underscores become hyphens)
//!
//! The directive attributes never appear in the output. Everything the
//! filter does not rewrite is copied through byte-for-byte.

use std::borrow::Cow;

use memchr::memmem;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use crate::error::Result;

const ROTATE_ATTR: &[u8] = b"data-rotate";
const CAPTION_ATTR: &[u8] = b"data-rotate-caption";
const EMBED_SETTINGS_ATTR: &[u8] = b"data-entity-embed-display-settings";

/// Rewrite rotation directives in a markup fragment.
///
/// Fragments without any `data-rotate` occurrence are returned borrowed and
/// unchanged. Otherwise the fragment is streamed through a parser; elements
/// carrying a `data-rotate` attribute are re-emitted with the directive
/// attributes stripped and the class list rewritten, and all other content
/// is copied verbatim. The fragment must be well-formed: a parse error is
/// fatal and produces no partial output.
///
/// # Examples
///
/// ```
/// use media_extra::rotate_classes;
///
/// let out = rotate_classes(r#"<img src="cat.jpg" data-rotate="left"/>"#).unwrap();
/// assert_eq!(out, r#"<img src="cat.jpg" class="rotate-left caption-not-rotated"/>"#);
/// ```
pub fn rotate_classes(fragment: &str) -> Result<Cow<'_, str>> {
    // Common case: nothing to do, skip the parse entirely.
    if memmem::find(fragment.as_bytes(), ROTATE_ATTR).is_none() {
        return Ok(Cow::Borrowed(fragment));
    }

    let mut reader = Reader::from_str(fragment);
    let mut out = String::with_capacity(fragment.len() + 64);
    // Input is copied verbatim up to this byte offset; only rewritten tags
    // advance it past their own span.
    let mut copied = 0usize;

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) => {
                if let Some(tag) = rewrite_tag(&e, false)? {
                    out.push_str(&fragment[copied..before]);
                    out.push_str(&tag);
                    copied = reader.buffer_position() as usize;
                }
            }
            Event::Empty(e) => {
                if let Some(tag) = rewrite_tag(&e, true)? {
                    out.push_str(&fragment[copied..before]);
                    out.push_str(&tag);
                    copied = reader.buffer_position() as usize;
                }
            }
            _ => {}
        }
    }

    out.push_str(&fragment[copied..]);
    Ok(Cow::Owned(out))
}

/// Usage tips for the filter, in short or long form.
pub fn rotation_tips(long: bool) -> &'static str {
    if long {
        "You can rotate images, videos, blockquotes and so on to the left or \
         right. Examples: rotate an image to the left with \
         <img src=\"\" data-rotate=\"left\"/>, to the right with \
         <img src=\"\" data-rotate=\"right\"/>, and the same attribute works \
         on other elements such as <video src=\"\" data-rotate=\"left\"/>."
    } else {
        "You can rotate images (data-rotate=\"left\"), but also videos, \
         blockquotes, and so on."
    }
}

/// Re-render one tag with directives consumed, or `None` when the element
/// carries no `data-rotate` attribute (left for verbatim copy).
fn rewrite_tag(e: &BytesStart<'_>, self_closing: bool) -> Result<Option<String>> {
    let mut rotate: Option<Vec<u8>> = None;
    let mut caption: Option<Vec<u8>> = None;
    let mut embed_settings: Option<Vec<u8>> = None;
    // Remaining attributes in document order, raw (still-escaped) values.
    let mut kept: Vec<(Vec<u8>, Vec<u8>)> = Vec::new();

    for attr in e.attributes() {
        let attr = attr?;
        let key = attr.key.as_ref();
        match key {
            k if k == ROTATE_ATTR => rotate = Some(attr.value.to_vec()),
            k if k == CAPTION_ATTR => caption = Some(attr.value.to_vec()),
            _ => {
                if key == EMBED_SETTINGS_ATTR {
                    embed_settings = Some(attr.value.to_vec());
                }
                kept.push((key.to_vec(), attr.value.to_vec()));
            }
        }
    }

    let Some(rotate) = rotate else {
        return Ok(None);
    };

    let mut appended: Vec<String> = Vec::new();
    if rotate == b"left" || rotate == b"right" {
        appended.push(format!("rotate-{}", String::from_utf8_lossy(&rotate)));
        if is_truthy(caption.as_deref()) {
            appended.push("rotate-caption".to_string());
        } else {
            appended.push("caption-not-rotated".to_string());
        }
        if let Some(raw) = &embed_settings
            && let Some(style) = embed_image_style(raw)
        {
            appended.push(format!("image-style--{}", style.replace('_', "-")));
        }
    } else {
        appended.push("not-rotated".to_string());
    }
    let appended = appended.join(" ");

    let mut tag = String::with_capacity(64);
    tag.push('<');
    tag.push_str(&String::from_utf8_lossy(e.name().as_ref()));

    let mut wrote_class = false;
    for (key, value) in &kept {
        let key = String::from_utf8_lossy(key);
        let value = String::from_utf8_lossy(value);
        if key == "class" {
            // Existing tokens keep their order and spacing; new tokens go last.
            let merged = if value.is_empty() {
                appended.clone()
            } else {
                format!("{value} {appended}")
            };
            push_attribute(&mut tag, &key, &merged);
            wrote_class = true;
        } else {
            push_attribute(&mut tag, &key, &value);
        }
    }
    if !wrote_class {
        push_attribute(&mut tag, "class", &appended);
    }

    tag.push_str(if self_closing { "/>" } else { ">" });
    Ok(Some(tag))
}

fn push_attribute(tag: &mut String, key: &str, raw_value: &str) {
    tag.push(' ');
    tag.push_str(key);
    tag.push_str("=\"");
    // Values are kept in raw (escaped) form; only quotes need re-escaping
    // since the original may have used single-quote delimiters.
    if raw_value.contains('"') {
        tag.push_str(&raw_value.replace('"', "&quot;"));
    } else {
        tag.push_str(raw_value);
    }
    tag.push('"');
}

/// Caption flag semantics: present, non-empty, and not `"0"`.
fn is_truthy(value: Option<&[u8]>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != b"0")
}

/// Extract a non-empty `image_style` from the embed display-settings payload.
///
/// The payload is a JSON object stored XML-escaped in the attribute value.
/// Anything that fails to unescape or parse contributes no style token.
fn embed_image_style(raw: &[u8]) -> Option<String> {
    let raw = String::from_utf8_lossy(raw);
    let json = unescape(&raw).ok()?;
    let value: serde_json::Value = serde_json::from_str(&json).ok()?;
    let style = value.get("image_style")?.as_str()?;
    if style.is_empty() {
        None
    } else {
        Some(style.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_directive_is_untouched() {
        let html = r#"<p class="lead">Hello <em>world</em></p>"#;
        let out = rotate_classes(html).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, html);
    }

    #[test]
    fn test_rotate_left_without_caption() {
        let out = rotate_classes(r#"<img src="a.jpg" data-rotate="left"/>"#).unwrap();
        assert_eq!(out, r#"<img src="a.jpg" class="rotate-left caption-not-rotated"/>"#);
    }

    #[test]
    fn test_rotate_right_with_caption() {
        let out =
            rotate_classes(r#"<img data-rotate="right" data-rotate-caption="1" src="a.jpg"/>"#)
                .unwrap();
        assert_eq!(out, r#"<img src="a.jpg" class="rotate-right rotate-caption"/>"#);
    }

    #[test]
    fn test_caption_zero_counts_as_absent() {
        let out = rotate_classes(r#"<img data-rotate="left" data-rotate-caption="0"/>"#).unwrap();
        assert_eq!(out, r#"<img class="rotate-left caption-not-rotated"/>"#);
    }

    #[test]
    fn test_invalid_value_is_not_rotated() {
        let out = rotate_classes(r#"<img data-rotate="up"/>"#).unwrap();
        assert_eq!(out, r#"<img class="not-rotated"/>"#);
        let out = rotate_classes(r#"<img data-rotate=""/>"#).unwrap();
        assert_eq!(out, r#"<img class="not-rotated"/>"#);
    }

    #[test]
    fn test_existing_classes_are_preserved_in_order() {
        let out = rotate_classes(r#"<img class="a b" data-rotate="left"/>"#).unwrap();
        assert_eq!(out, r#"<img class="a b rotate-left caption-not-rotated"/>"#);
    }

    #[test]
    fn test_no_deduplication() {
        let out = rotate_classes(r#"<img class="rotate-left" data-rotate="left"/>"#).unwrap();
        assert_eq!(
            out,
            r#"<img class="rotate-left rotate-left caption-not-rotated"/>"#
        );
    }

    #[test]
    fn test_image_style_token() {
        let html = concat!(
            r#"<img data-rotate="right" "#,
            r#"data-entity-embed-display-settings="{&quot;image_style&quot;:&quot;wide_image&quot;}"/>"#,
        );
        let out = rotate_classes(html).unwrap();
        assert!(out.contains("image-style--wide-image"));
        // The settings payload itself survives; only the directive is stripped.
        assert!(out.contains("data-entity-embed-display-settings"));
        assert!(!out.contains("data-rotate="));
    }

    #[test]
    fn test_image_style_skipped_on_not_rotated() {
        let html = concat!(
            r#"<img data-rotate="center" "#,
            r#"data-entity-embed-display-settings="{&quot;image_style&quot;:&quot;wide&quot;}"/>"#,
        );
        let out = rotate_classes(html).unwrap();
        assert!(!out.contains("image-style--"));
        assert!(out.contains("not-rotated"));
    }

    #[test]
    fn test_malformed_settings_payload_is_ignored() {
        let out =
            rotate_classes(r#"<img data-rotate="left" data-entity-embed-display-settings="nope"/>"#)
                .unwrap();
        assert!(out.contains("rotate-left"));
        assert!(!out.contains("image-style--"));
    }

    #[test]
    fn test_orphan_caption_attribute_is_left_alone() {
        // Only elements with data-rotate are rewritten; the fast path still
        // fires because "data-rotate" is a prefix of "data-rotate-caption".
        let html = r#"<img data-rotate-caption="1" src="a.jpg"/>"#;
        let out = rotate_classes(html).unwrap();
        assert_eq!(out, html);
    }

    #[test]
    fn test_surrounding_content_is_verbatim() {
        let html = "<p>before &amp; more</p><img data-rotate=\"left\"/><p>after</p>";
        let out = rotate_classes(html).unwrap();
        assert!(out.starts_with("<p>before &amp; more</p>"));
        assert!(out.ends_with("<p>after</p>"));
    }

    #[test]
    fn test_non_self_closing_element() {
        let out = rotate_classes(r#"<blockquote data-rotate="left">quoted</blockquote>"#).unwrap();
        assert_eq!(
            out,
            r#"<blockquote class="rotate-left caption-not-rotated">quoted</blockquote>"#
        );
    }

    #[test]
    fn test_malformed_fragment_is_fatal() {
        assert!(rotate_classes("<img data-rotate=\"left\" <broken").is_err());
    }

    #[test]
    fn test_tips() {
        assert!(rotation_tips(false).contains("data-rotate"));
        assert!(rotation_tips(true).contains("data-rotate=\"right\""));
    }

    proptest! {
        #[test]
        fn prop_directive_attributes_never_survive(
            rotate in "[a-z]{0,8}",
            caption in proptest::option::of("[01]"),
            classes in prop::collection::vec("[a-z][a-z0-9-]{0,8}", 0..4),
        ) {
            let mut html = String::from("<img src=\"a.jpg\"");
            if !classes.is_empty() {
                html.push_str(&format!(" class=\"{}\"", classes.join(" ")));
            }
            html.push_str(&format!(" data-rotate=\"{rotate}\""));
            if let Some(c) = &caption {
                html.push_str(&format!(" data-rotate-caption=\"{c}\""));
            }
            html.push_str("/>");

            let out = rotate_classes(&html).unwrap();
            prop_assert!(!out.contains("data-rotate"));
            // Original tokens survive in order.
            for class in &classes {
                prop_assert!(out.contains(class.as_str()));
            }
            if rotate == "left" || rotate == "right" {
                let expected = format!("rotate-{rotate}");
                prop_assert!(out.contains(&expected));
            } else {
                prop_assert!(out.contains("not-rotated"));
            }
        }

        #[test]
        fn prop_no_directive_roundtrips(
            text in "[A-Za-z0-9 .,]{0,32}",
            attr in "[a-z]{1,8}",
            value in "[A-Za-z0-9 _-]{0,16}",
        ) {
            let html = format!("<p {attr}=\"{value}\">{text}</p>");
            let out = rotate_classes(&html).unwrap();
            prop_assert_eq!(out, html.as_str());
        }
    }
}
