use leptos::prelude::*;
use serde_json::Value;
use thaw::{Button, ButtonAppearance, ButtonShape, ButtonSize};

use super::str_field;
use crate::shared::artifacts::ArtifactHandlers;

/// Reply options: `{options: [...]}` or a bare array; entries may be strings
/// or objects with a `label`
pub fn options_of(data: &Value) -> Vec<String> {
    let entries = match data {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("options") {
            Some(Value::Array(entries)) => entries,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|e| match e {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Object(_) => str_field(e, &["label", "text"]).map(str::to_string),
            _ => None,
        })
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn QuickReplies(handlers: ArtifactHandlers) -> impl IntoView {
    options_of(handlers.data())
        .into_iter()
        .map(|option| {
            let handlers = handlers.clone();
            let label = option.clone();
            view! {
                <Button
                    size=ButtonSize::Small
                    shape=ButtonShape::Circular
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| handlers.on_action(&option, None)
                >
                    {label}
                </Button>
            }
        })
        .collect_view()
}
