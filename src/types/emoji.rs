//! Emoji record as returned by the EmojiHub API

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single emoji entry
///
/// Field names follow the API (`htmlCode` is camelCase on the wire). Text
/// fields are optional because the API is not guaranteed to send them; the
/// presentation layer decides what a missing value looks like. Only JSON
/// objects decode into a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct EmojiRecord {
    /// Human-readable label (e.g., "grinning face")
    pub name: Option<String>,

    /// Top-level category (e.g., "smileys and people")
    pub category: Option<String>,

    /// Group within the category (e.g., "face positive")
    pub group: Option<String>,

    /// HTML numeric character references (e.g., ["&#128512;"])
    #[serde(rename = "htmlCode")]
    pub html_code: Vec<String>,

    /// Code points (e.g., ["U+1F600"])
    pub unicode: Vec<String>,
}

impl EmojiRecord {
    /// Create a record with every field present
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        group: impl Into<String>,
        html_code: Vec<String>,
        unicode: Vec<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            group: Some(group.into()),
            html_code,
            unicode,
        }
    }
}

/// Field-level decoding rules, applied once the body is known to be an object
#[derive(Deserialize)]
struct WireRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default, rename = "htmlCode", deserialize_with = "null_as_empty")]
    html_code: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    unicode: Vec<String>,
}

impl TryFrom<Map<String, Value>> for EmojiRecord {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let wire = WireRecord::deserialize(Value::Object(object))?;
        Ok(Self {
            name: wire.name,
            category: wire.category,
            group: wire.group,
            html_code: wire.html_code,
            unicode: wire.unicode,
        })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
