//! JSON tag notation.
//!
//! Serde wiring for the tag-definition notation HTML-generating build tooling
//! passes around: `{"tagName": "script", "attributes": {"defer": true,
//! "src": "main.js"}, "innerHTML": "...", "voidTag": false}`. Attribute
//! values are plain JSON strings or booleans.
//!
//! `voidTag` is emitted on write but ignored on read and recomputed from the
//! fixed void set — the flag is derived data, and a document may not
//! contradict the classifier. Unknown keys and a missing `tagName` are
//! accepted: the notation grows extra fields in the wild, and construction
//! stays total (an absent name becomes the empty string and renders as
//! visibly malformed markup instead of failing).

use core::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::tag::{AttributeMap, AttributeValue, HtmlTagObject};
use crate::void::is_void_tag;

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Flag(value) => serializer.serialize_bool(*value),
        }
    }
}

struct AttributeValueVisitor;

impl Visitor<'_> for AttributeValueVisitor {
    type Value = AttributeValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string or boolean attribute value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(AttributeValue::Flag(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(AttributeValue::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(AttributeValue::Text(value))
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AttributeValueVisitor)
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct AttributeMapVisitor;

impl<'de> Visitor<'de> for AttributeMapVisitor {
    type Value = AttributeMap;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of attribute names to string or boolean values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = AttributeMap::new();
        while let Some((name, value)) = access.next_entry::<String, AttributeValue>()? {
            let _ = map.insert(name, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributeMapVisitor)
    }
}

impl Serialize for HtmlTagObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HtmlTagObject", 4)?;
        state.serialize_field("tagName", &self.tag_name)?;
        state.serialize_field("attributes", &self.attributes)?;
        match &self.inner_html {
            Some(inner) => state.serialize_field("innerHTML", inner)?,
            None => state.skip_field("innerHTML")?,
        }
        state.serialize_field("voidTag", &self.void_tag)?;
        state.end()
    }
}

struct HtmlTagObjectVisitor;

impl<'de> Visitor<'de> for HtmlTagObjectVisitor {
    type Value = HtmlTagObject;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a tag definition object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut tag_name = String::new();
        let mut attributes = AttributeMap::new();
        let mut inner_html: Option<String> = None;

        // Later duplicate keys win, matching the object notation's semantics.
        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "tagName" => tag_name = access.next_value()?,
                "attributes" => attributes = access.next_value()?,
                "innerHTML" => inner_html = access.next_value()?,
                // voidTag is derived and anything else is foreign; discard.
                _ => {
                    let _ = access.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(HtmlTagObject {
            void_tag: is_void_tag(&tag_name),
            tag_name,
            attributes,
            inner_html,
        })
    }
}

impl<'de> Deserialize<'de> for HtmlTagObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HtmlTagObjectVisitor)
    }
}
