//! Generic artifact renderers
//!
//! Every renderer normalises its own `data`; the dispatcher never looks inside.

mod countdown;
mod dashboard;
mod elapsed_clock;
mod item_list;
mod quick_replies;
mod result_card;

pub use countdown::{format_remaining, Countdown};
pub use dashboard::{metrics_of, Dashboard, Metric};
pub use elapsed_clock::{format_elapsed, ElapsedClock};
pub use item_list::ItemList;
pub use quick_replies::{options_of, QuickReplies};
pub use result_card::ResultCard;

use leptos::prelude::*;
use serde_json::Value;

use super::dispatcher::ArtifactHandlers;
use super::registry::RendererKind;

impl RendererKind {
    pub fn render(self, handlers: ArtifactHandlers) -> AnyView {
        match self {
            RendererKind::ItemList => view! { <ItemList handlers=handlers /> }.into_any(),
            RendererKind::Dashboard => view! { <Dashboard handlers=handlers /> }.into_any(),
            RendererKind::QuickReplies => view! { <QuickReplies handlers=handlers /> }.into_any(),
            RendererKind::ResultCard => view! { <ResultCard handlers=handlers /> }.into_any(),
            RendererKind::Countdown => view! { <Countdown handlers=handlers /> }.into_any(),
            RendererKind::ElapsedClock => view! { <ElapsedClock handlers=handlers /> }.into_any(),
        }
    }
}

/// Items of a list-like payload: a bare array, `{items: [...]}`, or one object
pub fn items_of(data: &Value) -> Vec<Value> {
    match data {
        Value::Array(items) => items.clone(),
        Value::Object(map) => match map.get("items") {
            Some(Value::Array(items)) => items.clone(),
            _ => vec![data.clone()],
        },
        _ => Vec::new(),
    }
}

/// First non-empty string among `keys`
pub fn str_field<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| item.get(*k).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
}

/// Human text for a scalar: strings as-is, numbers and booleans printed
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
