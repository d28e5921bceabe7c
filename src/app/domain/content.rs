use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Document authored in the page-builder widget.
///
/// The store never looks inside it: whatever the widget exports (a component
/// tree, a raw HTML string, ...) is kept and handed back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuilderContent(Value);

impl BuilderContent {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Borrow the content as text when the widget exported a plain string
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl From<Value> for BuilderContent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<String> for BuilderContent {
    fn from(markup: String) -> Self {
        Self(Value::String(markup))
    }
}

impl From<&str> for BuilderContent {
    fn from(markup: &str) -> Self {
        Self(Value::String(markup.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transparent_serialization() {
        let content = BuilderContent::new(json!({"pages": [{"id": "home"}]}));
        let json = serde_json::to_string(&content).unwrap();
        assert_eq!(json, r#"{"pages":[{"id":"home"}]}"#);
    }

    #[test]
    fn test_string_content() {
        let content = BuilderContent::from("<h1>Hello</h1>");
        assert_eq!(content.as_str(), Some("<h1>Hello</h1>"));
        assert_eq!(
            BuilderContent::new(json!({"html": ""})).as_str(),
            None
        );
    }
}
