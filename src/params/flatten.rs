//! Flattening of parameter structs into multipart text fields.
//!
//! A multipart body cannot carry a JSON document next to file parts, so every
//! non-file parameter is rendered to a single string. Each parameter type
//! declares its fields once in a static [`FormSchema::FIELDS`] table of
//! (wire name, extractor, omit-empty) entries; [`flatten`] walks that table in
//! declared order.

use crate::error::BotError;
use crate::types::ChatId;
use serde::Serialize;

/// Wire name of fields that never travel as text (they are file parts).
pub const OMIT: &str = "-";

/// A field value as seen by the flattener.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    Bool(bool),
    ChatId(&'a ChatId),
    /// Nested structure, already rendered as compact JSON text.
    Json(String),
    /// The value could not be serialized; flattening fails with this message.
    Invalid(String),
    Absent,
}

impl<'a> FieldValue<'a> {
    pub fn opt_str(value: &'a Option<String>) -> Self {
        value.as_deref().map_or(Self::Absent, Self::Str)
    }

    pub fn opt_int(value: Option<i64>) -> Self {
        value.map_or(Self::Absent, Self::Int)
    }

    pub fn opt_chat_id(value: &'a Option<ChatId>) -> Self {
        value.as_ref().map_or(Self::Absent, Self::ChatId)
    }

    /// Serialize a nested value; `null` counts as absent.
    ///
    /// Rendered straight to text so object keys keep their declared order,
    /// exactly as in a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(text) if text == "null" => Self::Absent,
            Ok(text) => Self::Json(text),
            Err(e) => Self::Invalid(e.to_string()),
        }
    }

    pub fn opt_json<T: Serialize>(value: &Option<T>) -> Self {
        value.as_ref().map_or(Self::Absent, |v| Self::json(v))
    }

    /// Render to the form text, or `None` when the field is left out.
    fn render(self, omit_empty: bool) -> Result<Option<String>, BotError> {
        let text = match self {
            Self::Absent => return Ok(None),
            Self::Invalid(message) => return Err(BotError::BuildRequestError(message)),
            Self::Bool(b) => return Ok(Some(b.to_string())),
            Self::Str(s) => {
                if omit_empty && s.is_empty() {
                    return Ok(None);
                }
                s.to_string()
            }
            Self::ChatId(id) => {
                let encoded = id.encode();
                if omit_empty && encoded.is_empty() {
                    return Ok(None);
                }
                encoded
            }
            Self::Int(n) => {
                if omit_empty && n == 0 {
                    return Ok(None);
                }
                n.to_string()
            }
            Self::Json(text) => {
                if omit_empty && is_empty_json(&text) {
                    return Ok(None);
                }
                text
            }
        };
        Ok(Some(text))
    }
}

fn is_empty_json(text: &str) -> bool {
    matches!(text, "[]" | "{}")
}

/// One row of a parameter type's field table.
pub struct FieldSpec<P> {
    pub name: &'static str,
    pub extract: fn(&P) -> FieldValue<'_>,
    /// Leave the field out when its value is empty or zero.
    pub omit_empty: bool,
}

impl<P> FieldSpec<P> {
    /// Optional field: zero values are left out.
    pub const fn optional(name: &'static str, extract: fn(&P) -> FieldValue<'_>) -> Self {
        Self {
            name,
            extract,
            omit_empty: true,
        }
    }

    /// Required field: sent even when empty or zero.
    pub const fn required(name: &'static str, extract: fn(&P) -> FieldValue<'_>) -> Self {
        Self {
            name,
            extract,
            omit_empty: false,
        }
    }

    /// Placeholder for a field that only travels as a file part.
    pub const fn file_only() -> Self {
        Self {
            name: OMIT,
            extract: absent::<P>,
            omit_empty: true,
        }
    }
}

fn absent<P>(_: &P) -> FieldValue<'_> {
    FieldValue::Absent
}

/// Static field table of a parameter type.
pub trait FormSchema: Sized + 'static {
    const FIELDS: &'static [FieldSpec<Self>];
}

/// Flattened text fields, in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatFields(Vec<(String, String)>);

impl FlatFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for FlatFields {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

/// Flatten `params` into text fields following its [`FormSchema`] table.
pub fn flatten<P: FormSchema>(params: &P) -> Result<FlatFields, BotError> {
    let mut fields = FlatFields::new();
    for spec in P::FIELDS {
        if spec.name == OMIT {
            continue;
        }
        if let Some(text) = (spec.extract)(params).render(spec.omit_empty)? {
            fields.insert(spec.name, text);
        }
    }
    Ok(fields)
}
