use leptos::prelude::*;
use serde_json::Value;
use thaw::{Button, ButtonAppearance, ButtonSize};

use super::{display_value, str_field};
use crate::shared::artifacts::ArtifactHandlers;

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// `{metrics: [{label, value}]}`, a bare metrics array, or a flat object of scalars
pub fn metrics_of(data: &Value) -> Vec<Metric> {
    let from_entries = |entries: &Vec<Value>| {
        entries
            .iter()
            .filter_map(|m| {
                Some(Metric {
                    label: str_field(m, &["label", "name"])?.to_string(),
                    value: m.get("value").map(display_value).unwrap_or_default(),
                })
            })
            .collect()
    };

    match data {
        Value::Array(entries) => from_entries(entries),
        Value::Object(map) => match map.get("metrics") {
            Some(Value::Array(entries)) => from_entries(entries),
            _ => map
                .iter()
                .filter(|(k, v)| k.as_str() != "title" && !v.is_object() && !v.is_array())
                .map(|(k, v)| Metric {
                    label: k.clone(),
                    value: display_value(v),
                })
                .collect(),
        },
        _ => Vec::new(),
    }
}

/// Tile grid shared by every industry dashboard
#[component]
#[allow(non_snake_case)]
pub fn Dashboard(handlers: ArtifactHandlers) -> impl IntoView {
    let title = str_field(handlers.data(), &["title"])
        .unwrap_or("Overview")
        .to_string();
    let metrics = metrics_of(handlers.data());

    view! {
        <div style="border: 1px solid var(--colorNeutralStroke2); border-radius: 10px; padding: 12px; background: var(--colorNeutralBackground2);">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;">
                <strong>{title}</strong>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| handlers.on_click(Some("refresh_dashboard"))
                >
                    "Refresh"
                </Button>
            </div>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 8px;">
                {metrics
                    .into_iter()
                    .map(|m| view! {
                        <div style="padding: 8px; border-radius: 8px; background: var(--colorNeutralBackground1);">
                            <div style="font-size: 11px; color: var(--colorNeutralForeground3);">{m.label}</div>
                            <div style="font-size: 18px; font-weight: 600;">{m.value}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metrics_from_metrics_array() {
        let data = json!({"title": "Week", "metrics": [
            {"label": "Workouts", "value": 3},
            {"label": "Steps", "value": "41k"},
            {"value": 1}
        ]});
        let metrics = metrics_of(&data);
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].value, "3");
        assert_eq!(metrics[1].label, "Steps");
    }

    #[test]
    fn test_metrics_from_flat_object() {
        let metrics = metrics_of(&json!({"title": "Farm", "yield": 12, "nested": {"x": 1}}));
        assert_eq!(
            metrics,
            vec![Metric {
                label: "yield".into(),
                value: "12".into()
            }]
        );
    }
}
