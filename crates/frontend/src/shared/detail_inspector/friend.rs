use contracts::domain::a001_artifact::aggregate::ActionEvent;
use leptos::prelude::*;
use serde_json::{json, Value};
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::shared::artifacts::renderers::str_field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibe {
    Coffee,
    Dinner,
    Drinks,
    Outdoors,
    Sports,
}

impl Vibe {
    pub const ALL: [Vibe; 5] = [Vibe::Coffee, Vibe::Dinner, Vibe::Drinks, Vibe::Outdoors, Vibe::Sports];

    pub fn label(self) -> &'static str {
        match self {
            Vibe::Coffee => "Coffee",
            Vibe::Dinner => "Dinner",
            Vibe::Drinks => "Drinks",
            Vibe::Outdoors => "Outdoors",
            Vibe::Sports => "Sports",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetupTime {
    Tonight,
    Tomorrow,
    ThisWeekend,
    NextWeek,
}

impl MeetupTime {
    pub const ALL: [MeetupTime; 4] = [
        MeetupTime::Tonight,
        MeetupTime::Tomorrow,
        MeetupTime::ThisWeekend,
        MeetupTime::NextWeek,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MeetupTime::Tonight => "Tonight",
            MeetupTime::Tomorrow => "Tomorrow",
            MeetupTime::ThisWeekend => "This weekend",
            MeetupTime::NextWeek => "Next week",
        }
    }
}

/// Profile ⇄ plan-a-meetup, without leaving the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FriendPanel {
    #[default]
    Profile,
    PlanMeetup {
        vibe: Option<Vibe>,
        time: Option<MeetupTime>,
    },
}

impl FriendPanel {
    pub fn start_planning(self) -> Self {
        FriendPanel::PlanMeetup {
            vibe: None,
            time: None,
        }
    }

    pub fn choose_vibe(self, vibe: Vibe) -> Self {
        match self {
            FriendPanel::PlanMeetup { time, .. } => FriendPanel::PlanMeetup {
                vibe: Some(vibe),
                time,
            },
            profile => profile,
        }
    }

    pub fn choose_time(self, time: MeetupTime) -> Self {
        match self {
            FriendPanel::PlanMeetup { vibe, .. } => FriendPanel::PlanMeetup {
                vibe,
                time: Some(time),
            },
            profile => profile,
        }
    }

    pub fn back(self) -> Self {
        FriendPanel::Profile
    }

    pub fn can_confirm(self) -> bool {
        matches!(
            self,
            FriendPanel::PlanMeetup {
                vibe: Some(_),
                time: Some(_)
            }
        )
    }

    /// Back to the profile view, with the meetup event when both choices are made
    pub fn confirm(self, friend: &str) -> (Self, Option<ActionEvent>) {
        match self {
            FriendPanel::PlanMeetup {
                vibe: Some(vibe),
                time: Some(time),
            } => (
                FriendPanel::Profile,
                Some(ActionEvent::with_payload(
                    "plan_meetup",
                    json!({"friend": friend, "vibe": vibe.label(), "time": time.label()}),
                )),
            ),
            other => (other, None),
        }
    }
}

/// Friend / connection profile with the meetup planner
#[component]
#[allow(non_snake_case)]
pub fn FriendProfilePanel(item: Value, on_action: Callback<ActionEvent>) -> impl IntoView {
    let panel = RwSignal::new(FriendPanel::Profile);
    let name = str_field(&item, &["name"]).unwrap_or("Friend").to_string();
    let location = str_field(&item, &["location"]).map(str::to_string);
    let interests = item
        .get("interests")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" · ")
        })
        .filter(|s| !s.is_empty());

    let friend = name.clone();
    let confirm = move |_| {
        let (next, event) = panel.get_untracked().confirm(&friend);
        panel.set(next);
        if let Some(event) = event {
            on_action.run(event);
        }
    };

    let profile_view = move || {
        view! {
            <div style="display: flex; flex-direction: column; gap: 8px;">
                {location.clone().map(|l| view! { <div>"📍 " {l}</div> })}
                {interests.clone().map(|i| view! {
                    <div style="color: var(--colorNeutralForeground3);">{i}</div>
                })}
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| panel.update(|p| *p = p.start_planning())
                >
                    "Plan a meetup"
                </Button>
            </div>
        }
    };

    let planner_view = move || {
        let current = panel.get();
        let (vibe, time) = match current {
            FriendPanel::PlanMeetup { vibe, time } => (vibe, time),
            FriendPanel::Profile => (None, None),
        };
        view! {
            <div style="display: flex; flex-direction: column; gap: 10px;">
                <div>"Vibe"</div>
                <div style="display: flex; flex-wrap: wrap; gap: 6px;">
                    {Vibe::ALL
                        .into_iter()
                        .map(|v| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=if vibe == Some(v) { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                                on_click=move |_| panel.update(|p| *p = p.choose_vibe(v))
                            >
                                {v.label()}
                            </Button>
                        })
                        .collect_view()}
                </div>
                <div>"When"</div>
                <div style="display: flex; flex-wrap: wrap; gap: 6px;">
                    {MeetupTime::ALL
                        .into_iter()
                        .map(|t| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=if time == Some(t) { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                                on_click=move |_| panel.update(|p| *p = p.choose_time(t))
                            >
                                {t.label()}
                            </Button>
                        })
                        .collect_view()}
                </div>
                <div style="display: flex; gap: 8px;">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| panel.update(|p| *p = p.back())
                    >
                        "Back"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !panel.get().can_confirm())
                        on_click=confirm.clone()
                    >
                        "Send invite"
                    </Button>
                </div>
            </div>
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px;">
            <h3 style="margin: 0;">"👤 " {name}</h3>
            {move || match panel.get() {
                FriendPanel::Profile => profile_view().into_any(),
                FriendPanel::PlanMeetup { .. } => planner_view().into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_round_trip() {
        let p = FriendPanel::default().start_planning();
        assert!(!p.can_confirm());
        let p = p.choose_vibe(Vibe::Coffee).choose_time(MeetupTime::Tonight);
        assert!(p.can_confirm());

        let (next, event) = p.confirm("Mira");
        assert_eq!(next, FriendPanel::Profile);
        let event = event.unwrap();
        assert_eq!(event.action, "plan_meetup");
        assert_eq!(
            event.payload.unwrap(),
            json!({"friend": "Mira", "vibe": "Coffee", "time": "Tonight"})
        );
    }

    #[test]
    fn test_incomplete_plan_stays_put() {
        let p = FriendPanel::default()
            .start_planning()
            .choose_vibe(Vibe::Drinks);
        let (next, event) = p.confirm("Jonas");
        assert_eq!(next, p);
        assert!(event.is_none());
    }

    #[test]
    fn test_choices_ignored_on_profile_and_back_resets() {
        let p = FriendPanel::Profile.choose_vibe(Vibe::Sports);
        assert_eq!(p, FriendPanel::Profile);
        let p = FriendPanel::Profile
            .start_planning()
            .choose_time(MeetupTime::NextWeek)
            .back();
        assert_eq!(p, FriendPanel::Profile);
        assert_eq!(p.start_planning(), FriendPanel::PlanMeetup { vibe: None, time: None });
    }
}
