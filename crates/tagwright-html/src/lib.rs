//! Structured HTML tag objects and deterministic markup serialization.
//!
//! Tooling that emits HTML is easier to write against structured values than
//! against markup strings: build a [`HtmlTagObject`], inspect or rewrite its
//! attributes, collect related tags in a [`TagList`], and only at the very end
//! turn the result into text with [`render_tag`].
//!
//! # Scope
//!
//! This crate implements:
//! - **Void-element classification** — the fixed 15-name set of elements that
//!   never carry inner markup or a closing tag
//! - **Tag objects** — tag name, insertion-ordered attribute map, optional
//!   inner markup, derived void flag
//! - **Serialization** — one-shot tag-object-to-string rendering with an
//!   optional preprocessing hook and an XHTML-compliance mode
//! - **Tag collections** — an ordered sequence whose text form is the
//!   concatenation of its elements' text forms
//!
//! Parsing markup, DOM tree mutation, and escaping are out of scope; attribute
//! values and inner markup are emitted verbatim, so callers escape before
//! construction.
//!
//! # Usage
//!
//! ```
//! use tagwright_html::{HtmlTagObject, render_tag};
//!
//! let mut heading = HtmlTagObject::new("h1").with_inner_html("Hello World");
//! heading.set_attr("class", "demo");
//!
//! assert_eq!(render_tag(&heading, false), "<h1 class=\"demo\">Hello World</h1>");
//! ```

/// Ordered tag collection with concatenating text conversion.
pub mod collection;
/// Markup serialization for tag objects.
pub mod render;
/// Tag objects and the attribute mapping they carry.
pub mod tag;
/// Void-element classification.
pub mod void;

mod json;

pub use collection::TagList;
pub use render::{TagPreprocessor, render_tag, render_tag_with};
pub use tag::{AttributeMap, AttributeValue, HtmlTagObject};
pub use void::{VOID_TAGS, is_void_tag};
