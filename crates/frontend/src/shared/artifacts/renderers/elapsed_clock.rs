use std::time::Duration;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use super::str_field;
use crate::shared::artifacts::ArtifactHandlers;

/// "MM:SS" below an hour, "H:MM:SS" above. Future start reads as "00:00".
pub fn format_elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - since).num_seconds().max(0);
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}

/// Counts up from `data.since` (or from mount when absent)
#[component]
#[allow(non_snake_case)]
pub fn ElapsedClock(handlers: ArtifactHandlers) -> impl IntoView {
    let label = str_field(handlers.data(), &["label", "title"])
        .unwrap_or("Elapsed")
        .to_string();
    let since = str_field(handlers.data(), &["since", "startedAt"])
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let now = RwSignal::new(Utc::now());
    match set_interval_with_handle(move || now.set(Utc::now()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("elapsed clock interval failed: {:?}", e),
    }

    let stop_handlers = handlers.clone();

    view! {
        <span style="display: inline-flex; align-items: center; gap: 6px; padding: 4px 10px; border-radius: 999px; background: var(--colorNeutralBackground3); font-size: 13px;">
            "⏱ " {label} ": "
            <strong style="font-variant-numeric: tabular-nums;">
                {move || format_elapsed(since, now.get())}
            </strong>
            <button
                style="border: none; background: none; cursor: pointer; color: var(--colorBrandForeground1);"
                on:click=move |_| stop_handlers.on_click(Some("stop_timer"))
            >
                "Stop"
            </button>
        </span>
    }
}
