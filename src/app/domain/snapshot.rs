use serde::Serialize;
use serde::de::Error as _;
use serde_json::Value;

use super::content::BuilderContent;
use super::theme::ThemeSettings;

/// Full serialized state: both slots, written under one storage key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersistedSnapshot {
    pub theme: ThemeSettings,

    #[serde(rename = "grapesJsContent")]
    pub builder_content: Option<BuilderContent>,
}

impl PersistedSnapshot {
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Decode a stored snapshot slot by slot.
    ///
    /// Only text that is not a JSON object is an error. Inside the object a
    /// missing or malformed slot falls back to its default on its own, so a
    /// broken theme never costs the saved builder content.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut slots = match serde_json::from_str::<Value>(json)? {
            Value::Object(slots) => slots,
            _ => return Err(serde_json::Error::custom("snapshot is not a JSON object")),
        };

        let theme = slots
            .remove("theme")
            .map(ThemeSettings::from_value)
            .unwrap_or_default();
        let builder_content = match slots.remove("grapesJsContent") {
            None | Some(Value::Null) => None,
            Some(document) => Some(BuilderContent::new(document)),
        };

        Ok(Self {
            theme,
            builder_content,
        })
    }
}
