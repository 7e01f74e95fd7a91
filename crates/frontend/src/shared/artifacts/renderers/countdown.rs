use std::time::Duration;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use super::str_field;
use crate::shared::artifacts::ArtifactHandlers;

/// "2d 03:04:05", "03:04:05", or "Now" once the target has passed
pub fn format_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (target - now).num_seconds();
    if secs <= 0 {
        return "Now".to_string();
    }
    let (days, rest) = (secs / 86_400, secs % 86_400);
    let clock = format!("{:02}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);
    if days > 0 {
        format!("{}d {}", days, clock)
    } else {
        clock
    }
}

/// Ticks down to `data.target`. One interval per instance, cleared on unmount.
#[component]
#[allow(non_snake_case)]
pub fn Countdown(handlers: ArtifactHandlers) -> impl IntoView {
    let label = str_field(handlers.data(), &["label", "title"])
        .unwrap_or("Starts in")
        .to_string();
    let target = str_field(handlers.data(), &["target", "startsAt", "date"])
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc));

    let Some(target) = target else {
        log::warn!("countdown artifact without a valid target date");
        return view! { <span>{label}</span> }.into_any();
    };

    let now = RwSignal::new(Utc::now());
    match set_interval_with_handle(move || now.set(Utc::now()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("countdown interval failed: {:?}", e),
    }

    view! {
        <span style="display: inline-flex; gap: 6px; padding: 4px 10px; border-radius: 999px; background: var(--colorNeutralBackground3); font-size: 13px;">
            "⏳ " {label} ": "
            <strong>{move || format_remaining(target, now.get())}</strong>
        </span>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_remaining() {
        let now = Utc.with_ymd_and_hms(2030, 5, 17, 12, 0, 0).unwrap();
        assert_eq!(
            format_remaining(Utc.with_ymd_and_hms(2030, 5, 17, 19, 0, 5).unwrap(), now),
            "07:00:05"
        );
        assert_eq!(
            format_remaining(Utc.with_ymd_and_hms(2030, 5, 19, 13, 1, 0).unwrap(), now),
            "2d 01:01:00"
        );
        assert_eq!(format_remaining(now, now), "Now");
    }
}
