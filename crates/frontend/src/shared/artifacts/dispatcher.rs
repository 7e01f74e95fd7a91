//! Resolves message artifacts through the registry and gives every renderer
//! the same callback surface.
//!
//! Renderers were written against two calling conventions: `on_action(action,
//! payload)` / `on_show_details(item)` and a legacy `on_click(action?)`. Both
//! are reconciled here, in [`ArtifactHandlers::on_click`], and nowhere else.

use std::fmt;
use std::sync::Arc;

use contracts::domain::a001_artifact::aggregate::{ActionEvent, Artifact, LayoutMode};
use leptos::prelude::*;
use serde_json::Value;

use super::registry::{ArtifactRegistry, RendererKind};

/// What a rendered artifact reports back to the chat
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactEvent {
    /// Becomes the next outgoing message
    Action(ActionEvent),
    /// Opens the detail inspector for the item
    ShowDetails(Value),
}

/// An artifact that passed the registry lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArtifact {
    /// Position in the original message
    pub index: usize,
    pub kind: String,
    pub renderer: RendererKind,
    pub layout: LayoutMode,
    pub data: Value,
}

/// Resolve every artifact of one message, preserving order.
/// Unknown tags are logged and left out.
pub fn dispatch(registry: &ArtifactRegistry, artifacts: &[Artifact]) -> Vec<ResolvedArtifact> {
    artifacts
        .iter()
        .enumerate()
        .filter_map(|(index, artifact)| match registry.lookup(&artifact.kind) {
            Some(entry) => Some(ResolvedArtifact {
                index,
                kind: artifact.kind.clone(),
                renderer: entry.renderer,
                layout: entry.layout,
                data: artifact.data.clone(),
            }),
            None => {
                log::warn!(
                    "Unknown artifact type '{}' at position {}, skipped",
                    artifact.kind,
                    index
                );
                None
            }
        })
        .collect()
}

type EventSink = Arc<dyn Fn(ArtifactEvent) + Send + Sync>;

/// Normalized props handed to every renderer
#[derive(Clone)]
pub struct ArtifactHandlers {
    data: Value,
    sink: EventSink,
}

impl fmt::Debug for ArtifactHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactHandlers")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl ArtifactHandlers {
    pub fn new(data: Value, sink: impl Fn(ArtifactEvent) + Send + Sync + 'static) -> Self {
        Self {
            data,
            sink: Arc::new(sink),
        }
    }

    /// Raw artifact data, untouched
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn on_action(&self, action: &str, payload: Option<Value>) {
        let event = match payload {
            Some(p) => ActionEvent::with_payload(action, p),
            None => ActionEvent::new(action),
        };
        (self.sink)(ArtifactEvent::Action(event));
    }

    pub fn on_show_details(&self, item: Value) {
        (self.sink)(ArtifactEvent::ShowDetails(item));
    }

    /// Legacy single-callback convention.
    ///
    /// With an action it forwards to `on_action(action, data)`. Without one it
    /// opens `data.result.details` when the artifact carries them.
    pub fn on_click(&self, action: Option<&str>) {
        match action {
            Some(action) => self.on_action(action, Some(self.data.clone())),
            None => match self.data.pointer("/result/details") {
                Some(details) if !details.is_null() => self.on_show_details(details.clone()),
                _ => log::debug!("on_click without action and without result.details, ignored"),
            },
        }
    }
}

/// Wrapper style of one artifact: inline ones flow side by side,
/// block ones take the full row
pub fn slot_style(layout: LayoutMode) -> &'static str {
    match layout {
        LayoutMode::Inline => "flex: 0 0 auto;",
        LayoutMode::Block => "flex: 1 1 100%; min-width: 0;",
    }
}

/// Renders every artifact of one message in a single pass, in wire order.
/// The layout mode only decides how much of the row an artifact takes.
#[component]
#[allow(non_snake_case)]
pub fn MessageArtifacts(
    artifacts: Vec<Artifact>,
    #[prop(into)] on_event: Callback<ArtifactEvent>,
) -> impl IntoView {
    let registry =
        use_context::<Arc<ArtifactRegistry>>().expect("ArtifactRegistry not found in context");

    let resolved = dispatch(&registry, &artifacts);

    view! {
        <div class="artifacts" style="display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;">
            {resolved
                .into_iter()
                .map(|artifact| {
                    let handlers = ArtifactHandlers::new(artifact.data.clone(), move |event| {
                        on_event.run(event)
                    });
                    view! {
                        <div
                            class=format!("artifact artifact-{}", artifact.layout.as_str())
                            style=slot_style(artifact.layout)
                            data-artifact-type=artifact.kind.clone()
                        >
                            {artifact.renderer.render(handlers)}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    fn recorder() -> (ArtifactHandlers, Arc<Mutex<Vec<ArtifactEvent>>>) {
        recorder_with(json!({"items": []}))
    }

    fn recorder_with(data: Value) -> (ArtifactHandlers, Arc<Mutex<Vec<ArtifactEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let handlers = ArtifactHandlers::new(data, move |e| sink.lock().unwrap().push(e));
        (handlers, events)
    }

    #[test]
    fn test_unknown_types_dropped_order_kept() {
        let registry = ArtifactRegistry::standard();
        let artifacts = vec![
            Artifact::new("restaurants", json!([])),
            Artifact::new("weather_radar", json!({})),
            Artifact::new("quick_replies", json!(["a"])),
            Artifact::new("", Value::Null),
            Artifact::new("gym_dashboard", json!({})),
        ];

        let resolved = dispatch(&registry, &artifacts);
        let kinds: Vec<&str> = resolved.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec!["restaurants", "quick_replies", "gym_dashboard"]);
        assert_eq!(
            resolved.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![0, 2, 4]
        );
    }

    #[test]
    fn test_only_unknown_types_yield_nothing() {
        let registry = ArtifactRegistry::standard();
        let artifacts = vec![Artifact::new("hologram", json!(null))];
        assert!(dispatch(&registry, &artifacts).is_empty());
        assert!(dispatch(&registry, &[]).is_empty());
    }

    #[test]
    fn test_mixed_layouts_keep_wire_order() {
        let registry = ArtifactRegistry::standard();
        let artifacts = vec![
            Artifact::new("restaurants", json!([])),
            Artifact::new("quick_replies", json!(["a"])),
            Artifact::new("gym_dashboard", json!({})),
        ];

        let layouts: Vec<LayoutMode> = dispatch(&registry, &artifacts)
            .iter()
            .map(|r| r.layout)
            .collect();
        assert_eq!(
            layouts,
            vec![LayoutMode::Block, LayoutMode::Inline, LayoutMode::Block]
        );
        assert_ne!(slot_style(LayoutMode::Inline), slot_style(LayoutMode::Block));
    }

    #[test]
    fn test_data_passed_untouched() {
        let registry = ArtifactRegistry::standard();
        let data = json!({"items": [{"name": "x"}], "extra": 1});
        let resolved = dispatch(&registry, &[Artifact::new("hotels", data.clone())]);
        assert_eq!(resolved[0].data, data);
    }

    #[test]
    fn test_on_click_with_action_forwards_artifact_data() {
        let data = json!({"title": "Week", "metrics": []});
        let (handlers, events) = recorder_with(data.clone());
        handlers.on_click(Some("refresh"));
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[ArtifactEvent::Action(ActionEvent::with_payload("refresh", data))]
        );
    }

    #[test]
    fn test_on_click_without_action_opens_result_details() {
        let (handlers, events) = recorder_with(json!({
            "result": {"summary": "Order", "details": {"orderNumber": "#1"}}
        }));
        handlers.on_click(None);
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[ArtifactEvent::ShowDetails(json!({"orderNumber": "#1"}))]
        );
    }

    #[test]
    fn test_on_click_without_action_or_details_is_noop() {
        let (handlers, events) = recorder();
        handlers.on_click(None);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_on_action_and_show_details_emit_directly() {
        let (handlers, events) = recorder();
        handlers.on_action("Only vegan", None);
        handlers.on_show_details(json!({"seat": "A4"}));
        let events = events.lock().unwrap();
        assert_eq!(events[0], ArtifactEvent::Action(ActionEvent::new("Only vegan")));
        assert_eq!(events[1], ArtifactEvent::ShowDetails(json!({"seat": "A4"})));
    }
}
