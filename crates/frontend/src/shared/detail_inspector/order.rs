use leptos::prelude::*;
use serde_json::Value;

use crate::shared::artifacts::renderers::{display_value, str_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Preparing,
    OnTheWay,
    Delivered,
    Cancelled,
}

/// Progress steps in display order. `Cancelled` is not a step.
pub const ORDER_STEPS: [OrderStatus; 5] = [
    OrderStatus::Placed,
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
    OrderStatus::OnTheWay,
    OrderStatus::Delivered,
];

impl OrderStatus {
    /// Unknown or missing statuses read as `Placed`
    pub fn parse(raw: Option<&str>) -> Self {
        let normalized = raw
            .unwrap_or_default()
            .trim()
            .to_lowercase()
            .replace([' ', '-'], "_");
        match normalized.as_str() {
            "confirmed" => OrderStatus::Confirmed,
            "preparing" => OrderStatus::Preparing,
            "on_the_way" | "in_transit" => OrderStatus::OnTheWay,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => OrderStatus::Placed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OnTheWay => "On the way",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

pub fn order_steps(status: OrderStatus) -> Vec<(OrderStatus, StepState)> {
    let current = ORDER_STEPS.iter().position(|s| *s == status);
    ORDER_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let state = match current {
                Some(c) if i < c => StepState::Done,
                Some(c) if i == c => StepState::Current,
                _ => StepState::Pending,
            };
            (*step, state)
        })
        .collect()
}

/// Order status with progress steps (static)
#[component]
#[allow(non_snake_case)]
pub fn OrderStatusLayout(item: Value) -> impl IntoView {
    let number = item.get("orderNumber").map(display_value).unwrap_or_default();
    let status = OrderStatus::parse(str_field(&item, &["status"]));
    let merchant = str_field(&item, &["name", "merchant"]).map(str::to_string);
    let eta = str_field(&item, &["eta"]).map(str::to_string);

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px;">
            <h3 style="margin: 0;">"Order " {number}</h3>
            {merchant.map(|m| view! { <div>{m}</div> })}
            <Show when=move || status == OrderStatus::Cancelled>
                <div style="color: var(--colorPaletteRedForeground1); font-weight: 600;">"Order cancelled"</div>
            </Show>
            <ol style="list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 6px;">
                {order_steps(status)
                    .into_iter()
                    .map(|(step, state)| {
                        let (marker, style) = match state {
                            StepState::Done => ("●", "color: var(--colorPaletteGreenForeground1);"),
                            StepState::Current => ("◉", "font-weight: 700; color: var(--colorBrandForeground1);"),
                            StepState::Pending => ("○", "color: var(--colorNeutralForeground4);"),
                        };
                        view! { <li style=style>{marker} " " {step.label()}</li> }
                    })
                    .collect_view()}
            </ol>
            {eta.map(|e| view! { <div>"ETA: " {e}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(OrderStatus::parse(Some("on_the_way")), OrderStatus::OnTheWay);
        assert_eq!(OrderStatus::parse(Some("On the way")), OrderStatus::OnTheWay);
        assert_eq!(OrderStatus::parse(Some("canceled")), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::parse(Some("???")), OrderStatus::Placed);
        assert_eq!(OrderStatus::parse(None), OrderStatus::Placed);
    }

    #[test]
    fn test_steps_for_on_the_way() {
        let states: Vec<StepState> = order_steps(OrderStatus::OnTheWay)
            .into_iter()
            .map(|(_, s)| s)
            .collect();
        assert_eq!(
            states,
            vec![
                StepState::Done,
                StepState::Done,
                StepState::Done,
                StepState::Current,
                StepState::Pending
            ]
        );
    }

    #[test]
    fn test_cancelled_has_no_current_step() {
        assert!(order_steps(OrderStatus::Cancelled)
            .iter()
            .all(|(_, s)| *s == StepState::Pending));
    }
}
