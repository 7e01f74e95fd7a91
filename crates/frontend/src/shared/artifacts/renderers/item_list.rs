use leptos::prelude::*;
use serde_json::Value;
use thaw::{Button, ButtonAppearance, ButtonSize};

use super::{items_of, str_field};
use crate::shared::artifacts::ArtifactHandlers;

/// Cards for list-like payloads (places, events, people, products...)
#[component]
#[allow(non_snake_case)]
pub fn ItemList(handlers: ArtifactHandlers) -> impl IntoView {
    let items = items_of(handlers.data());

    if items.is_empty() {
        return view! {
            <div style="color: var(--colorNeutralForeground3); font-size: 13px;">"Nothing found"</div>
        }
        .into_any();
    }

    view! {
        <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 10px;">
            {items
                .into_iter()
                .map(|item| item_card(item, handlers.clone()))
                .collect_view()}
        </div>
    }
    .into_any()
}

fn item_card(item: Value, handlers: ArtifactHandlers) -> impl IntoView {
    let title = str_field(&item, &["name", "eventName", "title"])
        .unwrap_or("Untitled")
        .to_string();
    let subtitle = str_field(&item, &["category", "brand"]).map(str::to_string);
    let location = str_field(&item, &["location", "address"]).map(str::to_string);
    let image = str_field(&item, &["image"]).map(str::to_string);

    let details_item = item.clone();
    let details_handlers = handlers.clone();
    let select_action = format!("Select {}", title);

    view! {
        <div
            style="border: 1px solid var(--colorNeutralStroke2); border-radius: 10px; overflow: hidden; background: var(--colorNeutralBackground1); cursor: pointer;"
            on:click=move |_| details_handlers.on_show_details(details_item.clone())
        >
            {image.map(|src| view! {
                <img src=src alt="" style="width: 100%; height: 110px; object-fit: cover;" />
            })}
            <div style="padding: 10px;">
                <div style="font-weight: 600;">{title}</div>
                {subtitle.map(|s| view! {
                    <div style="font-size: 12px; color: var(--colorNeutralForeground3);">{s}</div>
                })}
                {location.map(|l| view! {
                    <div style="font-size: 12px; margin-top: 4px;">"📍 " {l}</div>
                })}
                <div style="margin-top: 8px;" on:click=|ev| ev.stop_propagation()>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| handlers.on_action(&select_action, Some(item.clone()))
                    >
                        "Select"
                    </Button>
                </div>
            </div>
        </div>
    }
}
