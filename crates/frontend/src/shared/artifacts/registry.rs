use std::collections::HashMap;

use contracts::domain::a001_artifact::aggregate::LayoutMode;

/// Generic renderers. Many type tags share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererKind {
    ItemList,
    Dashboard,
    QuickReplies,
    ResultCard,
    Countdown,
    ElapsedClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub renderer: RendererKind,
    pub layout: LayoutMode,
}

/// Type tags grouped by the renderer that draws them
const STANDARD_TAGS: &[(RendererKind, LayoutMode, &[&str])] = &[
    (
        RendererKind::ItemList,
        LayoutMode::Block,
        &[
            "restaurants",
            "cafes",
            "bars",
            "hotels",
            "apartments",
            "events",
            "concerts",
            "tickets",
            "movies",
            "museums",
            "parks",
            "places",
            "friends",
            "groups",
            "products",
            "shops",
            "pharmacies",
            "doctors",
            "clinics",
            "salons",
            "gyms",
            "classes",
            "jobs",
            "cars",
            "rides",
            "flights",
            "parking_spots",
            "services",
        ],
    ),
    (
        RendererKind::Dashboard,
        LayoutMode::Block,
        &[
            "gym_dashboard",
            "restaurant_dashboard",
            "clinic_dashboard",
            "salon_dashboard",
            "hotel_dashboard",
            "retail_dashboard",
            "school_dashboard",
            "farm_dashboard",
            "logistics_dashboard",
            "energy_dashboard",
            "parking_dashboard",
            "transit_dashboard",
            "wallet_summary",
            "health_summary",
            "spending_summary",
        ],
    ),
    (
        RendererKind::QuickReplies,
        LayoutMode::Inline,
        &["quick_replies", "suggestions", "follow_ups"],
    ),
    (
        RendererKind::ResultCard,
        LayoutMode::Block,
        &[
            "order_result",
            "booking_result",
            "reservation_result",
            "payment_result",
            "ride_result",
            "delivery_result",
            "appointment_result",
        ],
    ),
    (
        RendererKind::Countdown,
        LayoutMode::Inline,
        &[
            "event_countdown",
            "flight_countdown",
            "sale_countdown",
            "booking_countdown",
        ],
    ),
    (
        RendererKind::ElapsedClock,
        LayoutMode::Inline,
        &["ride_tracker", "parking_timer", "workout_timer", "queue_timer"],
    ),
];

/// Closed map from artifact type tag to renderer.
/// Built once at startup and provided through context.
#[derive(Debug, Clone, Default)]
pub struct ArtifactRegistry {
    entries: HashMap<&'static str, RegistryEntry>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every tag the client knows how to draw
    pub fn standard() -> Self {
        STANDARD_TAGS
            .iter()
            .fold(Self::new(), |registry, (renderer, layout, tags)| {
                registry.with(tags, *renderer, *layout)
            })
    }

    /// Registers `tags` for one renderer. Construction only.
    pub fn with(mut self, tags: &[&'static str], renderer: RendererKind, layout: LayoutMode) -> Self {
        for tag in tags {
            self.entries.insert(tag, RegistryEntry { renderer, layout });
        }
        self
    }

    pub fn lookup(&self, kind: &str) -> Option<RegistryEntry> {
        self.entries.get(kind).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_tags_share_renderer() {
        let registry = ArtifactRegistry::standard();
        let gym = registry.lookup("gym_dashboard").unwrap();
        let farm = registry.lookup("farm_dashboard").unwrap();
        assert_eq!(gym, farm);
        assert_eq!(gym.renderer, RendererKind::Dashboard);
    }

    #[test]
    fn test_unknown_tag_is_none() {
        let registry = ArtifactRegistry::standard();
        assert!(registry.lookup("weather_radar").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_layout_modes() {
        let registry = ArtifactRegistry::standard();
        assert_eq!(
            registry.lookup("quick_replies").unwrap().layout,
            LayoutMode::Inline
        );
        assert_eq!(
            registry.lookup("restaurants").unwrap().layout,
            LayoutMode::Block
        );
    }

    #[test]
    fn test_every_renderer_reachable() {
        let registry = ArtifactRegistry::standard();
        for (renderer, _, tags) in STANDARD_TAGS {
            assert!(!tags.is_empty());
            assert_eq!(registry.lookup(tags[0]).unwrap().renderer, *renderer);
        }
        assert!(registry.len() > STANDARD_TAGS.len());
    }

    #[test]
    fn test_custom_registry_is_isolated() {
        let registry = ArtifactRegistry::new().with(
            &["alpha", "beta"],
            RendererKind::ItemList,
            LayoutMode::Block,
        );
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup("restaurants").is_none());
    }
}
