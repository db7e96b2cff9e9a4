//! HTML sanitization
//!
//! Feed bodies arrive as arbitrary HTML. Everything outside a small
//! allow list is stripped before items reach the wire, and `<img>` tags
//! get lazy-loading and referrer-policy attributes injected.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

const ALLOWED_TAGS: [&str; 15] = [
    "a", "abbr", "b", "blockquote", "br", "code", "em", "i", "img", "li", "ol", "p", "pre",
    "strong", "ul",
];

const ALLOWED_PROTOCOLS: [&str; 2] = ["http", "https"];

/// Return sanitized HTML (limited tags) with enhanced images.
pub fn sanitize_html(raw: &str) -> String {
    let cleaned = ammonia::Builder::default()
        .tags(HashSet::from(ALLOWED_TAGS))
        .generic_attributes(HashSet::new())
        .tag_attributes(HashMap::from([
            ("a", HashSet::from(["href", "title", "rel"])),
            (
                "img",
                HashSet::from(["src", "alt", "title", "loading", "decoding", "referrerpolicy"]),
            ),
        ]))
        .url_schemes(HashSet::from(ALLOWED_PROTOCOLS))
        .link_rel(None)
        .clean(raw)
        .to_string();
    enhance_images(&cleaned)
}

fn img_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<img\b[^>]*?>").expect("img pattern compiles"))
}

/// Inject defaults for `<img>` tags that lack them. Runs on sanitized
/// output, so a plain regex is enough.
fn enhance_images(html: &str) -> String {
    img_regex()
        .replace_all(html, |caps: &regex::Captures<'_>| {
            let mut tag = caps[0].to_string();
            for (marker, attr) in [
                ("loading=", " loading=\"lazy\""),
                ("decoding=", " decoding=\"async\""),
                ("referrerpolicy=", " referrerpolicy=\"no-referrer\""),
                ("class=", " class=\"tl-img\""),
            ] {
                if !tag.contains(marker) {
                    tag.insert_str(tag.len() - 1, attr);
                }
            }
            tag
        })
        .into_owned()
}
