use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named colors of the page theme.
///
/// Values are stored exactly as given. Nothing here checks that a value is a
/// well-formed color; renderers use [`Rgb::parse`] and decide what to do with
/// a `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,

    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,

    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    #[serde(default = "default_background_color")]
    pub background_color: String,

    #[serde(default = "default_text_color")]
    pub text_color: String,
}

fn default_primary_color() -> String {
    "#3B82F6".to_string() // blue
}

fn default_secondary_color() -> String {
    "#10B981".to_string() // green
}

fn default_accent_color() -> String {
    "#F59E0B".to_string() // amber
}

fn default_background_color() -> String {
    "#F3F4F6".to_string() // light gray
}

fn default_text_color() -> String {
    "#1F2937".to_string() // dark gray
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            accent_color: default_accent_color(),
            background_color: default_background_color(),
            text_color: default_text_color(),
        }
    }
}

impl ThemeSettings {
    /// Shallow merge: every key present in `patch` overwrites, the rest stay.
    pub fn merge(&mut self, patch: ThemePatch) {
        let ThemePatch {
            primary_color,
            secondary_color,
            accent_color,
            background_color,
            text_color,
        } = patch;

        if let Some(value) = primary_color {
            self.primary_color = value;
        }
        if let Some(value) = secondary_color {
            self.secondary_color = value;
        }
        if let Some(value) = accent_color {
            self.accent_color = value;
        }
        if let Some(value) = background_color {
            self.background_color = value;
        }
        if let Some(value) = text_color {
            self.text_color = value;
        }
    }

    /// Rebuild a theme from persisted JSON, one color at a time.
    ///
    /// Keys that are missing or not strings keep their default; unknown keys
    /// are ignored.
    pub fn from_value(value: Value) -> Self {
        let mut theme = Self::default();
        let colors = match value {
            Value::Object(colors) => colors,
            other => {
                tracing::warn!("Ignoring persisted theme that is not an object: {}. Using defaults.", other);
                return theme;
            }
        };

        let mut patch = ThemePatch::new();
        for field in ThemeField::all() {
            match colors.get(field.key()) {
                None => {}
                Some(Value::String(color)) => patch = patch.with(*field, color.as_str()),
                Some(other) => {
                    tracing::warn!(key = field.key(), "Ignoring persisted color {}. Using default.", other);
                }
            }
        }
        theme.merge(patch);
        theme
    }

    /// Get the raw value of one color slot
    pub fn color(&self, field: ThemeField) -> &str {
        match field {
            ThemeField::Primary => &self.primary_color,
            ThemeField::Secondary => &self.secondary_color,
            ThemeField::Accent => &self.accent_color,
            ThemeField::Background => &self.background_color,
            ThemeField::Text => &self.text_color,
        }
    }

    /// Parse one color slot for rendering. `None` when the stored value is not a hex color.
    pub fn rgb(&self, field: ThemeField) -> Option<Rgb> {
        Rgb::parse(self.color(field))
    }
}

/// Identifies one of the five theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeField {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl ThemeField {
    /// Serialized key name
    pub fn key(&self) -> &'static str {
        match self {
            Self::Primary => "primaryColor",
            Self::Secondary => "secondaryColor",
            Self::Accent => "accentColor",
            Self::Background => "backgroundColor",
            Self::Text => "textColor",
        }
    }

    pub fn all() -> &'static [ThemeField] {
        &[
            Self::Primary,
            Self::Secondary,
            Self::Accent,
            Self::Background,
            Self::Text,
        ]
    }
}

/// Partial theme update. Absent keys leave the current value untouched.
///
/// Keys outside the five known colors are rejected when a patch is decoded
/// from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl ThemePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a single color
    pub fn with(mut self, field: ThemeField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            ThemeField::Primary => self.primary_color = value,
            ThemeField::Secondary => self.secondary_color = value,
            ThemeField::Accent => self.accent_color = value,
            ThemeField::Background => self.background_color = value,
            ThemeField::Text => self.text_color = value,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.primary_color.is_none()
            && self.secondary_color.is_none()
            && self.accent_color.is_none()
            && self.background_color.is_none()
            && self.text_color.is_none()
    }
}

impl From<ThemeSettings> for ThemePatch {
    fn from(theme: ThemeSettings) -> Self {
        Self {
            primary_color: Some(theme.primary_color),
            secondary_color: Some(theme.secondary_color),
            accent_color: Some(theme.accent_color),
            background_color: Some(theme.background_color),
            text_color: Some(theme.text_color),
        }
    }
}

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` (leading `#` optional, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *slot = v * 17; // 0xF -> 0xFF
                }
                Some(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Uppercase `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
