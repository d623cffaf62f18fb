//! Markup serialization for tag objects.
//!
//! A single-pass, stateless transform: one [`HtmlTagObject`] in, one markup
//! string out. Rendering never fails — malformed inputs (an empty tag name,
//! say) produce visibly malformed output instead of an error, so the caller
//! that built the tag is the one that sees the damage.

use core::fmt;

use crate::tag::{AttributeValue, HtmlTagObject};

/// Optional transform applied to a tag object before serialization.
///
/// The preprocessor receives a copy of the tag and its return value fully
/// supersedes the original for that call; the serializer uses it wholesale
/// with no re-validation.
pub type TagPreprocessor = dyn Fn(HtmlTagObject) -> HtmlTagObject;

/// Render a tag object to markup.
///
/// With `xhtml` unset, void tags close with a bare `>` and `Flag(true)`
/// attributes render as the bare name; with `xhtml` set, void tags self-close
/// (`/>`) and flags expand to `name="name"`. Attributes render in map
/// insertion order; `Flag(false)` entries are dropped; text values are
/// emitted verbatim with no escaping. Inner markup and the closing tag are
/// emitted only for non-void tags.
///
/// ```
/// use tagwright_html::{HtmlTagObject, render_tag};
///
/// let mut img = HtmlTagObject::new("img");
/// img.set_attr("src", "a.png");
/// assert_eq!(render_tag(&img, true), "<img src=\"a.png\"/>");
/// ```
#[must_use]
pub fn render_tag(tag: &HtmlTagObject, xhtml: bool) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(&tag.tag_name);

    for (name, value) in &tag.attributes {
        match value {
            // "do not emit"
            AttributeValue::Flag(false) => {}
            AttributeValue::Flag(true) => {
                out.push(' ');
                out.push_str(name);
                if xhtml {
                    out.push_str("=\"");
                    out.push_str(name);
                    out.push('"');
                }
            }
            AttributeValue::Text(text) => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(text);
                out.push('"');
            }
        }
    }

    if tag.void_tag && xhtml {
        out.push('/');
    }
    out.push('>');

    if !tag.void_tag {
        if let Some(inner) = &tag.inner_html {
            out.push_str(inner);
        }
        out.push_str("</");
        out.push_str(&tag.tag_name);
        out.push('>');
    }

    out
}

/// Render a tag object to markup, applying an optional preprocessor first.
///
/// When `preprocess` is present the tag is cloned, transformed, and the
/// transformed value is rendered; the caller's tag object is never mutated.
/// `render_tag_with(tag, xhtml, None)` is identical to
/// [`render_tag(tag, xhtml)`](render_tag).
#[must_use]
pub fn render_tag_with(
    tag: &HtmlTagObject,
    xhtml: bool,
    preprocess: Option<&TagPreprocessor>,
) -> String {
    match preprocess {
        Some(pre) => render_tag(&pre(tag.clone()), xhtml),
        None => render_tag(tag, xhtml),
    }
}

impl fmt::Display for HtmlTagObject {
    /// The element's own text form: HTML-mode rendering, no preprocessor.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_tag(self, false))
    }
}
