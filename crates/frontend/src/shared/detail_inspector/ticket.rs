use leptos::prelude::*;
use serde_json::Value;

use crate::shared::artifacts::renderers::{display_value, str_field};

/// Ticket with seat and QR code (static)
#[component]
#[allow(non_snake_case)]
pub fn TicketLayout(item: Value) -> impl IntoView {
    let title = str_field(&item, &["eventName", "name"])
        .unwrap_or("Ticket")
        .to_string();
    let seat = item.get("seat").map(display_value).filter(|s| !s.is_empty());
    let code = str_field(&item, &["qrCode"]).map(str::to_string);
    let location = str_field(&item, &["location", "venue"]).map(str::to_string);
    let date = str_field(&item, &["date", "startsAt"]).map(str::to_string);

    view! {
        <div style="display: flex; flex-direction: column; gap: 10px; padding: 14px; border: 2px dashed var(--colorNeutralStroke1); border-radius: 12px;">
            <h3 style="margin: 0;">"🎟 " {title}</h3>
            {location.map(|l| view! { <div>"📍 " {l}</div> })}
            {date.map(|d| view! { <div>"🗓 " {d}</div> })}
            {seat.map(|s| view! { <div style="font-size: 20px; font-weight: 700;">"Seat " {s}</div> })}
            {code.map(|c| view! {
                <div style="align-self: center; padding: 18px; background: white; color: black; font-family: monospace; border: 1px solid black;">
                    {c}
                </div>
            })}
        </div>
    }
}
