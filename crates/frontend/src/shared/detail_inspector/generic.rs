use contracts::domain::a001_artifact::aggregate::ActionEvent;
use leptos::prelude::*;
use serde_json::Value;
use thaw::{Button, ButtonAppearance};

use crate::shared::artifacts::renderers::str_field;

pub const DEFAULT_ACTIONS: [&str; 2] = ["Book Now", "Share"];

/// Поля элемента, который не подошёл ни под одну раскладку
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenericDetail {
    pub image: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub actions: Vec<String>,
}

impl GenericDetail {
    pub fn from_item(item: &Value) -> Self {
        let owned = |keys: &[&str]| str_field(item, keys).map(str::to_string);

        // Явный availableActions заменяет набор по умолчанию целиком
        let actions = match item.get("availableActions").and_then(Value::as_array) {
            Some(list) => list
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect(),
        };

        Self {
            image: owned(&["image"]),
            title: owned(&["name", "eventName"]).unwrap_or_else(|| "Details".to_string()),
            subtitle: owned(&["category", "brand"]),
            location: owned(&["location"]),
            description: owned(&["description"]),
            actions,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn GenericLayout(item: Value, on_action: Callback<ActionEvent>) -> impl IntoView {
    let detail = GenericDetail::from_item(&item);
    let title = detail.title.clone();

    view! {
        <div style="display: flex; flex-direction: column; gap: 10px;">
            {detail.image.map(|src| view! {
                <img src=src alt="" style="width: 100%; max-height: 220px; object-fit: cover; border-radius: 10px;" />
            })}
            <h3 style="margin: 0;">{detail.title}</h3>
            {detail.subtitle.map(|s| view! {
                <div style="color: var(--colorNeutralForeground3);">{s}</div>
            })}
            {detail.location.map(|l| view! { <div>"📍 " {l}</div> })}
            {detail.description.map(|d| view! { <p style="margin: 0;">{d}</p> })}
            <div style="display: flex; flex-wrap: wrap; gap: 8px;">
                {detail
                    .actions
                    .into_iter()
                    .enumerate()
                    .map(|(i, action)| {
                        let label = action.clone();
                        let title = title.clone();
                        view! {
                            <Button
                                appearance=if i == 0 { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                                on_click=move |_| on_action.run(ActionEvent::new(format!("{} {}", action, title)))
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
