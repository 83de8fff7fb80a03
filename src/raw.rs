//! The raw tag dictionary and the typed values it holds.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A metadata value stored as an exact rational, common in legacy EXIF encodings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Fraction {
    pub numerator: f64,
    pub denominator: f64,
}

impl Fraction {
    /// Resolves the rational to a float. A zero denominator or a non-finite
    /// result yields `None`.
    pub fn to_float(&self) -> Option<f64> {
        if self.denominator == 0.0 {
            return None;
        }
        let value = self.numerator / self.denominator;
        value.is_finite().then_some(value)
    }
}

/// A single tag value as emitted by the extraction tool.
///
/// Raw dictionaries are heterogeneous: the same tag can arrive as a plain
/// number in one file and a rational pair or a string in the next. Extractors
/// read through the `as_*` accessors instead of probing shapes themselves.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    Numbers(Vec<f64>),
    Fraction(Fraction),
    /// Any shape the variants above do not cover. Kept verbatim for
    /// pass-through, unusable for typed extraction.
    Other(Value),
}

impl TagValue {
    /// Reads the value as a float: plain numbers pass through, rationals
    /// resolve via [`Fraction::to_float`], everything else is absent.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            Self::Fraction(fraction) => fraction.to_float(),
            _ => None,
        }
    }

    /// Reads the value as an unsigned integer; non-integral and negative
    /// numbers are absent.
    pub fn as_uint(&self) -> Option<u64> {
        let value = self.as_float()?;
        (value >= 0.0 && value.fract() == 0.0).then_some(value as u64)
    }

    /// Reads the value as text. An empty string counts as absent, matching
    /// the rest of the crate's "absent means not present in source" rule.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// The unresolved key/value output of the extraction step, before domain
/// normalization. A given tag name maps to at most one value.
pub type TagDictionary = BTreeMap<String, TagValue>;

/// Builds a [`TagDictionary`] from the extraction tool's JSON output.
///
/// Returns `None` if the JSON is not an object. Explicit nulls are dropped:
/// a null tag and a missing tag are both "absent."
pub fn dictionary_from_json(raw: &Value) -> Option<TagDictionary> {
    let object = raw.as_object()?;
    let mut tags = TagDictionary::new();
    for (key, value) in object {
        if value.is_null() {
            continue;
        }
        let tag = serde_json::from_value(value.clone())
            .unwrap_or_else(|_| TagValue::Other(value.clone()));
        tags.insert(key.clone(), tag);
    }
    Some(tags)
}

/// Returns the first candidate key whose value reads as a float.
pub fn first_float(tags: &TagDictionary, candidates: &[&str]) -> Option<f64> {
    candidates
        .iter()
        .find_map(|key| tags.get(*key).and_then(TagValue::as_float))
}

/// Returns the first candidate key whose value reads as an unsigned integer.
pub fn first_uint(tags: &TagDictionary, candidates: &[&str]) -> Option<u64> {
    candidates
        .iter()
        .find_map(|key| tags.get(*key).and_then(TagValue::as_uint))
}

/// Returns the first candidate key whose value reads as non-empty text.
pub fn first_text<'a>(tags: &'a TagDictionary, candidates: &[&str]) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|key| tags.get(*key).and_then(TagValue::as_text))
}
