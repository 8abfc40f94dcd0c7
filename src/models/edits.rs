//! Local edits to player cards: portrait overrides and details overlays.

use crate::models::entity::{EntityId, Player};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Where a new portrait comes from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PhotoSource {
    Url(String),
    /// A local file read fully into memory.
    Upload { content_type: String, bytes: Vec<u8> },
}

impl PhotoSource {
    /// Display-ready image reference, or `None` for empty input.
    pub fn into_portrait(self) -> Option<String> {
        match self {
            PhotoSource::Url(url) => {
                let url = url.trim();
                (!url.is_empty()).then(|| url.to_string())
            }
            PhotoSource::Upload { content_type, bytes } => {
                if bytes.is_empty() {
                    return None;
                }
                let content_type = if content_type.trim().is_empty() {
                    "application/octet-stream"
                } else {
                    content_type.trim()
                };
                let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                Some(format!("data:{content_type};base64,{encoded}"))
            }
        }
    }
}

/// Raw details form as typed by the user. Every field is optional text; JSON numbers are
/// accepted too and kept as their decimal text.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetailsForm {
    #[serde(deserialize_with = "text_or_number")]
    pub name: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub age: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub base_price: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub batting_style: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub bowling_style: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FormValue {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<FormValue>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        FormValue::Text(text) => text,
        FormValue::Number(n) => n.to_string(),
    }))
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn numeric<T: std::str::FromStr>(field: &Option<String>) -> Option<T> {
    non_empty(field).and_then(|s| s.parse().ok())
}

impl DetailsForm {
    /// Coerce the form: empty inputs are dropped, numeric fields that do not parse are dropped.
    pub fn to_overlay(&self) -> DetailsOverlay {
        DetailsOverlay {
            name: non_empty(&self.name),
            age: numeric(&self.age),
            base_price: numeric(&self.base_price),
            batting_style: non_empty(&self.batting_style),
            bowling_style: non_empty(&self.bowling_style),
        }
    }
}

/// Replacement values for some of a player's details.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailsOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowling_style: Option<String>,
}

impl DetailsOverlay {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Later values win field by field.
    pub fn merge(&mut self, newer: &DetailsOverlay) {
        if newer.name.is_some() {
            self.name = newer.name.clone();
        }
        if newer.age.is_some() {
            self.age = newer.age;
        }
        if newer.base_price.is_some() {
            self.base_price = newer.base_price;
        }
        if newer.batting_style.is_some() {
            self.batting_style = newer.batting_style.clone();
        }
        if newer.bowling_style.is_some() {
            self.bowling_style = newer.bowling_style.clone();
        }
    }

    pub fn apply(&self, player: &mut Player) {
        if let Some(name) = &self.name {
            player.name = name.clone();
        }
        if let Some(age) = self.age {
            player.age = age;
        }
        if let Some(price) = self.base_price {
            player.base_price = price;
        }
        if let Some(style) = &self.batting_style {
            player.batting_style = style.clone();
        }
        if let Some(style) = &self.bowling_style {
            player.bowling_style = style.clone();
        }
    }
}

/// One persisted edit, keyed by card id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditRecord {
    pub entity_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,
    #[serde(flatten)]
    pub details: DetailsOverlay,
    pub updated_at: DateTime<Utc>,
}

impl EditRecord {
    pub fn portrait(entity_id: EntityId, portrait: String) -> Self {
        Self {
            entity_id,
            portrait: Some(portrait),
            details: DetailsOverlay::default(),
            updated_at: Utc::now(),
        }
    }

    pub fn details(entity_id: EntityId, details: DetailsOverlay) -> Self {
        Self {
            entity_id,
            portrait: None,
            details,
            updated_at: Utc::now(),
        }
    }

    /// Upsert semantics: fields present in `newer` replace ours.
    pub fn merge(&mut self, newer: &EditRecord) {
        if newer.portrait.is_some() {
            self.portrait = newer.portrait.clone();
        }
        self.details.merge(&newer.details);
        self.updated_at = self.updated_at.max(newer.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_ignores_empty_and_unparseable_fields() {
        let form = DetailsForm {
            name: Some("  ".into()),
            age: Some("abc".into()),
            base_price: Some(" 0 ".into()),
            batting_style: Some("Left-handed".into()),
            bowling_style: None,
        };
        let overlay = form.to_overlay();
        assert_eq!(overlay.name, None);
        assert_eq!(overlay.age, None);
        assert_eq!(overlay.base_price, Some(0));
        assert_eq!(overlay.batting_style.as_deref(), Some("Left-handed"));
        assert_eq!(overlay.bowling_style, None);
    }

    #[test]
    fn form_accepts_json_numbers() {
        let form: DetailsForm =
            serde_json::from_str(r#"{"age": 30, "base_price": 0, "name": null}"#).unwrap();
        assert_eq!(form.age.as_deref(), Some("30"));
        let overlay = form.to_overlay();
        assert_eq!(overlay.age, Some(30));
        assert_eq!(overlay.base_price, Some(0));
        assert_eq!(overlay.name, None);

        let form: DetailsForm =
            serde_json::from_str(r#"{"age": -3, "base_price": 2.5, "batting_style": "Left"}"#)
                .unwrap();
        let overlay = form.to_overlay();
        assert_eq!(overlay.age, None);
        assert_eq!(overlay.base_price, None);
        assert_eq!(overlay.batting_style.as_deref(), Some("Left"));
    }

    #[test]
    fn upload_becomes_data_url() {
        let src = PhotoSource::Upload {
            content_type: "image/png".into(),
            bytes: b"abc".to_vec(),
        };
        assert_eq!(src.into_portrait().as_deref(), Some("data:image/png;base64,YWJj"));
        assert_eq!(PhotoSource::Url("   ".into()).into_portrait(), None);
    }
}
