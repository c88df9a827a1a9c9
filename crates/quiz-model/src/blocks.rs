//! The flat block representation exchanged with block-based rich-text
//! editors. A block is `{ "type": ..., "data": ... }` on the wire; the
//! typed enum keeps the kinds this crate understands and carries anything
//! else through [`EditorBlock::Unknown`] so newer editor payloads degrade
//! gracefully instead of failing deserialization.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Value, json};

use crate::question::Question;

/// One node of the flat editor representation.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorBlock {
    /// Heading, level 1–4. Level 1 is the quiz title, level 2 opens a section.
    Header { text: String, level: u8 },
    Paragraph { text: String },
    /// A `quiz-*` block wrapping one question's data.
    Question(Question),
    /// Any block kind this crate does not understand, kept verbatim.
    Unknown { kind: String, data: Value },
}

impl EditorBlock {
    /// The wire `type` string of this block.
    pub fn kind(&self) -> String {
        match self {
            EditorBlock::Header { .. } => "header".to_string(),
            EditorBlock::Paragraph { .. } => "paragraph".to_string(),
            EditorBlock::Question(question) => question.block_kind(),
            EditorBlock::Unknown { kind, .. } => kind.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

#[derive(Serialize, Deserialize)]
struct HeaderData {
    #[serde(default)]
    text: String,
    #[serde(default = "default_header_level")]
    level: u8,
}

#[derive(Serialize, Deserialize)]
struct ParagraphData {
    #[serde(default)]
    text: String,
}

fn default_header_level() -> u8 {
    1
}

impl Serialize for EditorBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = match self {
            EditorBlock::Header { text, level } => RawBlock {
                kind: "header".to_string(),
                data: json!({ "text": text, "level": level }),
            },
            EditorBlock::Paragraph { text } => RawBlock {
                kind: "paragraph".to_string(),
                data: json!({ "text": text }),
            },
            EditorBlock::Question(question) => RawBlock {
                kind: question.block_kind(),
                data: serde_json::to_value(question).map_err(serde::ser::Error::custom)?,
            },
            EditorBlock::Unknown { kind, data } => RawBlock {
                kind: kind.clone(),
                data: data.clone(),
            },
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EditorBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBlock::deserialize(deserializer)?;
        if raw.kind.is_empty() {
            return Err(D::Error::custom("block type must be a non-empty string"));
        }
        Ok(block_from_raw(raw))
    }
}

fn block_from_raw(raw: RawBlock) -> EditorBlock {
    match raw.kind.as_str() {
        "header" => match serde_json::from_value::<HeaderData>(raw.data.clone()) {
            Ok(header) => EditorBlock::Header {
                text: header.text,
                level: header.level,
            },
            Err(_) => EditorBlock::Unknown {
                kind: raw.kind,
                data: raw.data,
            },
        },
        "paragraph" => match serde_json::from_value::<ParagraphData>(raw.data.clone()) {
            Ok(paragraph) => EditorBlock::Paragraph {
                text: paragraph.text,
            },
            Err(_) => EditorBlock::Unknown {
                kind: raw.kind,
                data: raw.data,
            },
        },
        kind if kind.starts_with("quiz-") => {
            let mut data = raw.data.clone();
            // Blocks written by the editor may omit the inner `type`; it is
            // recoverable from the block kind.
            if let Some(map) = data.as_object_mut() {
                map.entry("type").or_insert_with(|| {
                    Value::String(kind.trim_start_matches("quiz-").replace('-', "_"))
                });
            }
            match serde_json::from_value::<Question>(data) {
                Ok(question) => EditorBlock::Question(question),
                Err(_) => EditorBlock::Unknown {
                    kind: raw.kind,
                    data: raw.data,
                },
            }
        }
        _ => EditorBlock::Unknown {
            kind: raw.kind,
            data: raw.data,
        },
    }
}
