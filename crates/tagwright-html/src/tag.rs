//! Tag objects and the attribute mapping they carry.
//!
//! A [`HtmlTagObject`] is the structured in-memory form of one HTML element
//! before serialization. It is a plain value: the factory builds it, callers
//! may freely mutate it (add attributes, swap inner markup), and the
//! serializer reads it without taking ownership.

use std::collections::HashSet;

use crate::void::is_void_tag;

/// One attribute value: explicit text or a boolean flag.
///
/// The flag states mirror the tag-definition notation this crate serializes:
/// `Flag(true)` is a presence attribute (`disabled`), `Flag(false)` means
/// "attribute suppressed, do not emit".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Key/value attribute rendered as `name="value"`, value verbatim.
    Text(String),
    /// Presence flag. `true` renders as the bare name (HTML) or `name="name"`
    /// (XHTML); `false` never appears in output.
    Flag(bool),
}

impl AttributeValue {
    /// Returns true for the `Flag(false)` state, which the serializer drops.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        matches!(self, Self::Flag(false))
    }

    /// Returns the text payload for `Text` values, `None` for flags.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Flag(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Attribute mapping with unique keys and insertion-ordered iteration.
///
/// Backed by a vector of entries rather than a hash map so that rendered
/// attribute order is deterministic and follows the order keys were first
/// inserted, the way tag tokens keep their attribute lists in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeMap {
    /// Create an empty attribute map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace an attribute, returning the previous value if the
    /// key was already present.
    ///
    /// A replaced key keeps its original position in iteration order.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter().position(|(key, _)| *key == name) {
            Some(index) => Some(core::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    /// Remove an attribute by name, returning its value if present.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns true if an attribute with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Number of attributes in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> AttributeIter<'_> {
        AttributeIter {
            inner: self.entries.iter(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            let _ = map.insert(name, value);
        }
        map
    }
}

impl<K, V> Extend<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            let _ = self.insert(name, value);
        }
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a str, &'a AttributeValue);
    type IntoIter = AttributeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, AttributeValue);
    type IntoIter = std::vec::IntoIter<(String, AttributeValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Iterator over attribute entries in insertion order.
pub struct AttributeIter<'a> {
    inner: core::slice::Iter<'a, (String, AttributeValue)>,
}

impl<'a> Iterator for AttributeIter<'a> {
    type Item = (&'a str, &'a AttributeValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), value))
    }
}

/// The structured in-memory representation of one HTML element prior to
/// serialization.
///
/// All fields are public: a tag object is caller-owned plain data, not a
/// tracked node in a tree. `void_tag` is derived from the tag name at
/// construction; the serializer trusts whatever value is present, so code
/// assembling tag objects by struct literal should go through
/// [`HtmlTagObject::new`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTagObject {
    /// The element's tag name, e.g. `div`. Lowercase by convention, not
    /// enforced; an empty name renders as visibly malformed markup rather
    /// than failing.
    pub tag_name: String,
    /// The element's attribute list.
    pub attributes: AttributeMap,
    /// Raw inner markup. Ignored entirely for void tags.
    pub inner_html: Option<String>,
    /// True iff `tag_name` is in the fixed void-element set.
    pub void_tag: bool,
}

impl HtmlTagObject {
    /// Create a tag object with no attributes and no inner markup.
    ///
    /// The void flag is computed from the fixed void-element set; unknown
    /// names are non-void. No validation is performed — construction is
    /// total over any string.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        let void_tag = is_void_tag(&tag_name);
        Self {
            tag_name,
            attributes: AttributeMap::new(),
            inner_html: None,
            void_tag,
        }
    }

    /// Replace the attribute map.
    #[must_use]
    pub fn with_attributes(mut self, attributes: AttributeMap) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the inner markup.
    ///
    /// Supplying inner markup on a void tag is accepted; the serializer will
    /// simply never emit it.
    #[must_use]
    pub fn with_inner_html(mut self, inner_html: impl Into<String>) -> Self {
        self.inner_html = Some(inner_html.into());
        self
    }

    /// Insert or replace one attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        let _ = self.attributes.insert(name, value);
    }

    /// Remove one attribute, returning its value if present.
    pub fn remove_attr(&mut self, name: &str) -> Option<AttributeValue> {
        self.attributes.remove(name)
    }

    /// Returns the element's id attribute value if present as text.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The id attribute specifies its element's unique identifier (ID)."
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").and_then(AttributeValue::as_text)
    }

    /// Returns the set of class names from the class attribute.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The class attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the element belongs to."
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        match self.attributes.get("class").and_then(AttributeValue::as_text) {
            Some(classlist) => classlist.split(' ').collect(),
            None => HashSet::new(),
        }
    }
}
