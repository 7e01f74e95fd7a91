use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use super::str_field;
use crate::shared::artifacts::ArtifactHandlers;

/// Outcome of a completed flow (order, booking, payment...)
#[component]
#[allow(non_snake_case)]
pub fn ResultCard(handlers: ArtifactHandlers) -> impl IntoView {
    let data = handlers.data();
    let result = data.get("result").unwrap_or(data);

    let summary = str_field(result, &["summary", "title", "message"])
        .unwrap_or("Done")
        .to_string();
    let has_details = result.get("details").is_some_and(|d| !d.is_null());

    view! {
        <div style="display: flex; justify-content: space-between; align-items: center; gap: 12px; padding: 12px; border-radius: 10px; border: 1px solid var(--colorPaletteGreenBorder2); background: var(--colorPaletteGreenBackground1);">
            <div>"✅ " {summary}</div>
            <Show when=move || has_details>
                {
                    let handlers = handlers.clone();
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| handlers.on_click(None)
                        >
                            "View details"
                        </Button>
                    }
                }
            </Show>
        </div>
    }
}
