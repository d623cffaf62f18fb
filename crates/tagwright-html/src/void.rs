//! Void-element classification.
//!
//! [§ 8.1.2 Elements](https://www.w3.org/TR/html5/syntax.html#void-elements)
//!
//! "Void elements only have a start tag; end tags must not be specified for
//! void elements."

/// All tag names that must never contain inner markup or a closing tag.
///
/// [§ 8.1.2 Elements](https://www.w3.org/TR/html5/syntax.html#void-elements)
///
/// The list is pinned to these 15 names: `keygen` stays although later
/// revisions of the standard dropped it, and names added later are not
/// recognized.
pub const VOID_TAGS: [&str; 15] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Returns true if `name` is one of the fixed void-element names.
///
/// Case-sensitive: only the lowercase spellings in [`VOID_TAGS`] are members,
/// and every other string (including the empty string) is non-void.
#[must_use]
pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}
