use crate::error::ExportError;
use crate::number::MetricValue;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// Placement of one glyph inside the atlas texture
///
/// Every field must be a JSON number. Integral values print back without a
/// decimal point, see [`MetricValue`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterMetric {
    pub x: MetricValue,
    pub y: MetricValue,
    pub width: MetricValue,
    pub height: MetricValue,
    #[serde(rename = "originX")]
    pub origin_x: MetricValue,
    #[serde(rename = "originY")]
    pub origin_y: MetricValue,
    pub advance: MetricValue,
}

impl CharacterMetric {
    /// Read a single `characters` entry, naming the character on failure
    pub fn from_value(id: &str, value: &Value) -> Result<Self, ExportError> {
        CharacterMetric::deserialize(value).map_err(|source| ExportError::InvalidCharacter {
            id: id.to_string(),
            source,
        })
    }
}

impl fmt::Display for CharacterMetric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CharCoord {{  x: {}, y: {}, w: {}, h: {}, originX: {}, originY: {}, advance: {} }},",
            self.x, self.y, self.width, self.height, self.origin_x, self.origin_y, self.advance
        )
    }
}

/// Optional atlas description which generators put next to `characters`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AtlasInfo {
    pub name: Option<String>,
    pub size: Option<Number>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    /// Texture width
    pub width: Option<Number>,
    /// Texture height
    pub height: Option<Number>,
}

impl AtlasInfo {
    // Wrongly-typed keys are treated as absent.
    fn from_root(root: &serde_json::Map<String, Value>) -> Self {
        let number = |key: &str| match root.get(key) {
            Some(Value::Number(n)) => Some(n.clone()),
            _ => None,
        };
        AtlasInfo {
            name: root.get("name").and_then(|v| v.as_str()).map(String::from),
            size: number("size"),
            bold: root.get("bold").and_then(|v| v.as_bool()),
            italic: root.get("italic").and_then(|v| v.as_bool()),
            width: number("width"),
            height: number("height"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == AtlasInfo::default()
    }
}

impl fmt::Display for AtlasInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or("<unnamed>"))?;
        if let Some(size) = &self.size {
            write!(f, " {}px", size)?;
        }
        if self.bold == Some(true) {
            write!(f, " bold")?;
        }
        if self.italic == Some(true) {
            write!(f, " italic")?;
        }
        if let (Some(w), Some(h)) = (&self.width, &self.height) {
            write!(f, ", atlas {}x{}", w, h)?;
        }
        Ok(())
    }
}

/// A parsed font metrics file
///
/// Character records are held unconverted, in document order, so that a
/// bad record only fails once an export reaches it.
#[derive(Debug, Clone)]
pub struct FontDocument {
    pub info: AtlasInfo,
    pub characters: IndexMap<String, Value>,
}

impl FontDocument {
    pub fn from_value(value: Value) -> Result<Self, ExportError> {
        let Value::Object(mut root) = value else {
            return Err(ExportError::NotAnObject);
        };
        let info = AtlasInfo::from_root(&root);
        let characters = match root.remove("characters") {
            Some(Value::Object(map)) => map.into_iter().collect(),
            Some(_) => return Err(ExportError::CharactersNotAnObject),
            None => return Err(ExportError::MissingCharacters),
        };
        Ok(FontDocument { info, characters })
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl FromStr for FontDocument {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s).map_err(ExportError::Json)?;
        FontDocument::from_value(value)
    }
}
