//! Demo threads loaded by the development-only seed endpoint

use contracts::domain::a001_artifact::aggregate::Artifact;
use contracts::domain::a002_chat_thread::aggregate::ChatMessage;
use serde_json::json;

pub struct DemoThread {
    pub id: &'static str,
    pub title: Option<&'static str>,
    pub messages: Vec<ChatMessage>,
}

pub fn demo_threads() -> Vec<DemoThread> {
    vec![
        DemoThread {
            id: "demo-dinner",
            title: None,
            messages: vec![
                ChatMessage::user("Dinner spots near the river tonight?"),
                ChatMessage::assistant("Here are three places with free tables after 19:00.")
                    .with_artifacts(vec![
                        Artifact::new(
                            "restaurants",
                            json!({"items": [
                                {
                                    "name": "Riverside Noodle Bar",
                                    "category": "Asian",
                                    "location": "Embankment 12",
                                    "image": "/img/noodles.jpg",
                                    "description": "Hand-pulled noodles, terrace seating."
                                },
                                {
                                    "name": "Old Harbour Grill",
                                    "category": "Steakhouse",
                                    "location": "Pier 3",
                                    "availableActions": ["Reserve", "Call", "Directions"]
                                },
                                {
                                    "name": "Green Table",
                                    "category": "Vegan",
                                    "location": "Mill Street 5"
                                }
                            ]}),
                        ),
                        Artifact::new(
                            "quick_replies",
                            json!({"options": ["Only vegan", "Cheaper options", "Book Green Table"]}),
                        ),
                    ]),
            ],
        },
        DemoThread {
            id: "demo-concert",
            title: Some("Friday concert"),
            messages: vec![
                ChatMessage::user("Show my ticket for Friday"),
                ChatMessage::assistant("Your ticket is ready. Doors open in a few hours.")
                    .with_artifacts(vec![
                        Artifact::new(
                            "tickets",
                            json!([{
                                "eventName": "City Lights Live",
                                "location": "Arena North",
                                "seat": "B12",
                                "qrCode": "CLL-2231-B12"
                            }]),
                        ),
                        Artifact::new(
                            "event_countdown",
                            json!({"label": "Doors open", "target": "2030-05-17T19:00:00Z"}),
                        ),
                    ]),
            ],
        },
        DemoThread {
            id: "demo-order",
            title: None,
            messages: vec![
                ChatMessage::user("Where is my pizza?"),
                ChatMessage::assistant("Your order is on the way.").with_artifacts(vec![
                    Artifact::new(
                        "order_result",
                        json!({"result": {
                            "summary": "Order #4471 · 2 items",
                            "details": {
                                "orderNumber": "#4471",
                                "status": "on_the_way",
                                "name": "Luigi's Pizza",
                                "eta": "12 min"
                            }
                        }}),
                    ),
                    Artifact::new(
                        "ride_tracker",
                        json!({"label": "Courier en route", "since": "2024-01-01T12:00:00Z"}),
                    ),
                ]),
            ],
        },
        DemoThread {
            id: "demo-friends",
            title: Some("Weekend with friends"),
            messages: vec![
                ChatMessage::user("Who is free this weekend?"),
                ChatMessage::assistant("Two friends are nearby. Invite more people?")
                    .with_artifacts(vec![
                        Artifact::new(
                            "friends",
                            json!([
                                {
                                    "name": "Mira",
                                    "category": "Social Connection",
                                    "location": "2 km away",
                                    "interests": ["climbing", "jazz"]
                                },
                                {
                                    "name": "Jonas",
                                    "category": "Social Connection",
                                    "location": "Old Town"
                                },
                                {
                                    "type": "invite",
                                    "name": "Invite friends",
                                    "link": "https://city.example/invite/wk-88"
                                }
                            ]),
                        ),
                        Artifact::new(
                            "gym_dashboard",
                            json!({"title": "Your week", "metrics": [
                                {"label": "Workouts", "value": 3},
                                {"label": "Steps", "value": "41k"}
                            ]}),
                        ),
                    ]),
            ],
        },
    ]
}
