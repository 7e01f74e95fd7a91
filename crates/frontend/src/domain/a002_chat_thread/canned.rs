//! Canned assistant replies. There is no model behind the chat: a keyword in
//! the user's message picks a reply and the artifacts that go with it.

use contracts::domain::a001_artifact::aggregate::{ActionEvent, Artifact};
use contracts::domain::a002_chat_thread::aggregate::ChatMessage;
use serde_json::{json, Value};

struct CannedReply {
    keywords: &'static [&'static str],
    build: fn() -> (String, Vec<Artifact>),
}

const REPLIES: &[CannedReply] = &[
    CannedReply {
        keywords: &["plan", "meetup"],
        build: meetup_reply,
    },
    CannedReply {
        keywords: &["dinner", "restaurant", "eat", "lunch", "food"],
        build: food_reply,
    },
    CannedReply {
        keywords: &["ticket", "concert", "event", "show"],
        build: ticket_reply,
    },
    CannedReply {
        keywords: &["order", "pizza", "delivery", "courier"],
        build: order_reply,
    },
    CannedReply {
        keywords: &["friend", "invite", "weekend"],
        build: friends_reply,
    },
    CannedReply {
        keywords: &["gym", "workout", "fitness", "steps"],
        build: gym_reply,
    },
    CannedReply {
        keywords: &["book", "reserve", "select"],
        build: booking_reply,
    },
];

/// Assistant reply for `input`; falls back to suggestions
pub fn reply_for(input: &str) -> ChatMessage {
    let lowered = input.to_lowercase();
    let (text, artifacts) = REPLIES
        .iter()
        .find(|r| r.keywords.iter().any(|k| lowered.contains(k)))
        .map(|r| (r.build)())
        .unwrap_or_else(fallback_reply);

    ChatMessage::assistant(text).with_artifacts(artifacts)
}

/// Text of the user message an artifact action turns into
pub fn message_for_action(event: &ActionEvent) -> String {
    let field = |key: &str| {
        event
            .payload
            .as_ref()
            .and_then(|p| p.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    match event.action.as_str() {
        "plan_meetup" => format!(
            "Plan {} with {} ({})",
            field("vibe").to_lowercase(),
            field("friend"),
            field("time").to_lowercase()
        ),
        "share_invite" => format!("I shared the invite via {}", field("channel")),
        "refresh_dashboard" => "Refresh my dashboard".to_string(),
        "stop_timer" => "Stop the timer".to_string(),
        other => other.to_string(),
    }
}

fn fallback_reply() -> (String, Vec<Artifact>) {
    (
        "I can help with food, tickets, deliveries, friends and workouts. Try one of these:"
            .to_string(),
        vec![Artifact::new(
            "quick_replies",
            json!({"options": ["Dinner nearby", "My tickets", "Where is my order?", "Who is free this weekend?", "Gym stats"]}),
        )],
    )
}

fn food_reply() -> (String, Vec<Artifact>) {
    (
        "Here are a few places with free tables tonight.".to_string(),
        vec![
            Artifact::new(
                "restaurants",
                json!({"items": [
                    {"name": "Riverside Noodle Bar", "category": "Asian", "location": "Embankment 12",
                     "description": "Hand-pulled noodles, terrace seating."},
                    {"name": "Old Harbour Grill", "category": "Steakhouse", "location": "Pier 3",
                     "availableActions": ["Reserve", "Call", "Directions"]},
                    {"name": "Green Table", "category": "Vegan", "location": "Mill Street 5"}
                ]}),
            ),
            Artifact::new(
                "quick_replies",
                json!({"options": ["Only vegan", "Cheaper options", "Book Green Table"]}),
            ),
        ],
    )
}

fn ticket_reply() -> (String, Vec<Artifact>) {
    let doors = (chrono::Utc::now() + chrono::Duration::hours(5)).to_rfc3339();
    (
        "Your ticket is ready.".to_string(),
        vec![
            Artifact::new(
                "tickets",
                json!([{"eventName": "City Lights Live", "location": "Arena North",
                        "seat": "B12", "qrCode": "CLL-2231-B12"}]),
            ),
            Artifact::new("event_countdown", json!({"label": "Doors open", "target": doors})),
        ],
    )
}

fn order_reply() -> (String, Vec<Artifact>) {
    let since = (chrono::Utc::now() - chrono::Duration::minutes(7)).to_rfc3339();
    (
        "Your order is on the way.".to_string(),
        vec![
            Artifact::new(
                "order_result",
                json!({"result": {
                    "summary": "Order #4471 · 2 items",
                    "details": {"orderNumber": "#4471", "status": "on_the_way",
                                "name": "Luigi's Pizza", "eta": "12 min"}
                }}),
            ),
            Artifact::new("ride_tracker", json!({"label": "Courier en route", "since": since})),
        ],
    )
}

fn friends_reply() -> (String, Vec<Artifact>) {
    (
        "Two friends are nearby. Invite more people?".to_string(),
        vec![Artifact::new(
            "friends",
            json!([
                {"name": "Mira", "category": "Social Connection", "location": "2 km away",
                 "interests": ["climbing", "jazz"]},
                {"name": "Jonas", "category": "Social Connection", "location": "Old Town"},
                {"type": "invite", "name": "Invite friends", "link": "https://city.example/invite/wk-88"}
            ]),
        )],
    )
}

fn gym_reply() -> (String, Vec<Artifact>) {
    (
        "Here is your week so far.".to_string(),
        vec![Artifact::new(
            "gym_dashboard",
            json!({"title": "Your week", "metrics": [
                {"label": "Workouts", "value": 3},
                {"label": "Steps", "value": "41k"},
                {"label": "Calories", "value": 2150}
            ]}),
        )],
    )
}

fn booking_reply() -> (String, Vec<Artifact>) {
    (
        "Done, you're booked.".to_string(),
        vec![Artifact::new(
            "booking_result",
            json!({"result": {
                "summary": "Table for 2 · 19:30",
                "details": {"name": "Green Table", "category": "Vegan", "location": "Mill Street 5",
                            "availableActions": ["Directions", "Cancel booking"]}
            }}),
        )],
    )
}

fn meetup_reply() -> (String, Vec<Artifact>) {
    (
        "Invite sent. I'll let you know when they answer.".to_string(),
        vec![Artifact::new(
            "quick_replies",
            json!(["Find a place", "Invite someone else"]),
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::artifacts::{dispatch, ArtifactRegistry};
    use contracts::domain::a002_chat_thread::aggregate::ChatRole;

    #[test]
    fn test_keyword_picks_reply() {
        let reply = reply_for("Any good DINNER spots?");
        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.artifacts()[0].kind, "restaurants");

        let reply = reply_for("where is my pizza");
        assert_eq!(reply.artifacts()[0].kind, "order_result");
    }

    #[test]
    fn test_fallback_offers_quick_replies() {
        let reply = reply_for("hello");
        assert_eq!(reply.artifacts().len(), 1);
        assert_eq!(reply.artifacts()[0].kind, "quick_replies");
    }

    #[test]
    fn test_every_canned_artifact_is_registered() {
        let registry = ArtifactRegistry::standard();
        let mut all: Vec<(String, Vec<Artifact>)> = REPLIES.iter().map(|r| (r.build)()).collect();
        all.push(fallback_reply());
        for (_, artifacts) in all {
            assert_eq!(dispatch(&registry, &artifacts).len(), artifacts.len());
        }
    }

    #[test]
    fn test_message_for_action() {
        let meetup = ActionEvent::with_payload(
            "plan_meetup",
            json!({"friend": "Mira", "vibe": "Coffee", "time": "Tonight"}),
        );
        assert_eq!(message_for_action(&meetup), "Plan coffee with Mira (tonight)");
        assert_eq!(message_for_action(&ActionEvent::new("Only vegan")), "Only vegan");
        // a meetup message routes to the meetup reply, not the friends list
        assert_eq!(
            reply_for(&message_for_action(&meetup)).artifacts()[0].kind,
            "quick_replies"
        );
    }
}
