use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Типизированный UI-артефакт, прикреплённый к сообщению чата.
///
/// `data` передаётся как есть: форма зависит от `kind` (массив,
/// `{items: [...]}` или произвольный объект), разбирает её только рендерер.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl Artifact {
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }
}

/// Режим размещения артефакта в ленте сообщений
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Компактный элемент, стоит в ряду с соседними
    Inline,
    /// Занимает всю ширину ряда
    Block,
}

impl LayoutMode {
    pub fn as_str(&self) -> &str {
        match self {
            LayoutMode::Inline => "inline",
            LayoutMode::Block => "block",
        }
    }
}

/// Единое событие, которое отдаёт любой отрисованный артефакт
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl ActionEvent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            payload: None,
        }
    }

    pub fn with_payload(action: impl Into<String>, payload: Value) -> Self {
        Self {
            action: action.into(),
            payload: Some(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_artifact_wire_format_uses_type_key() {
        let artifact = Artifact::new("restaurants", json!([{"name": "Noodle Bar"}]));
        let wire = serde_json::to_value(&artifact).unwrap();
        assert_eq!(wire["type"], "restaurants");
        assert_eq!(wire["data"][0]["name"], "Noodle Bar");
    }

    #[test]
    fn test_artifact_without_data_defaults_to_null() {
        let artifact: Artifact = serde_json::from_str(r#"{"type":"countdown"}"#).unwrap();
        assert_eq!(artifact.kind, "countdown");
        assert!(artifact.data.is_null());
    }

    #[test]
    fn test_action_event_omits_missing_payload() {
        let wire = serde_json::to_string(&ActionEvent::new("book")).unwrap();
        assert_eq!(wire, r#"{"action":"book"}"#);
    }

    #[test]
    fn test_layout_mode_lowercase() {
        assert_eq!(serde_json::to_string(&LayoutMode::Inline).unwrap(), r#""inline""#);
        assert_eq!(LayoutMode::Block.as_str(), "block");
    }
}
