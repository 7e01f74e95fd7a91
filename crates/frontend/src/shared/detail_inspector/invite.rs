use std::sync::{Arc, Mutex};
use std::time::Duration;

use contracts::domain::a001_artifact::aggregate::ActionEvent;
use leptos::prelude::*;
use serde_json::{json, Value};
use thaw::{Button, ButtonAppearance};

use crate::shared::artifacts::renderers::str_field;
use crate::shared::clipboard::copy_to_clipboard_with_callback;

const DEFAULT_INVITE_LINK: &str = "https://city.example/invite";
const RESET_AFTER: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    Messages,
    Email,
    WhatsApp,
}

impl ShareChannel {
    pub const ALL: [ShareChannel; 3] = [ShareChannel::Messages, ShareChannel::Email, ShareChannel::WhatsApp];

    pub fn label(self) -> &'static str {
        match self {
            ShareChannel::Messages => "Messages",
            ShareChannel::Email => "Email",
            ShareChannel::WhatsApp => "WhatsApp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteState {
    Idle,
    LinkCopied,
    Shared(ShareChannel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteEvent {
    CopyLink,
    Share(ShareChannel),
    Reset,
}

impl InviteState {
    pub fn next(self, event: InviteEvent) -> Self {
        match event {
            InviteEvent::CopyLink => InviteState::LinkCopied,
            InviteEvent::Share(channel) => InviteState::Shared(channel),
            InviteEvent::Reset => InviteState::Idle,
        }
    }

    pub fn status_text(self) -> Option<String> {
        match self {
            InviteState::Idle => None,
            InviteState::LinkCopied => Some("Link copied".to_string()),
            InviteState::Shared(channel) => Some(format!("Shared via {}", channel.label())),
        }
    }
}

pub fn invite_link(item: &Value) -> String {
    str_field(item, &["link", "url"])
        .unwrap_or(DEFAULT_INVITE_LINK)
        .to_string()
}

/// Сброс в Idle по таймеру. `false`, если панель уже закрыта
fn reset_invite(state: RwSignal<InviteState>) -> bool {
    state
        .try_update(|s| *s = s.next(InviteEvent::Reset))
        .is_some()
}

/// Один отложенный сброс на панель: новый таймер отменяет старый
#[derive(Clone, Default)]
struct ResetTimer(Arc<Mutex<Option<TimeoutHandle>>>);

impl ResetTimer {
    fn cancel(&self) {
        if let Some(handle) = self.0.lock().ok().and_then(|mut h| h.take()) {
            handle.clear();
        }
    }

    fn schedule(&self, state: RwSignal<InviteState>) {
        self.cancel();
        match set_timeout_with_handle(
            move || {
                reset_invite(state);
            },
            RESET_AFTER,
        ) {
            Ok(handle) => {
                if let Ok(mut pending) = self.0.lock() {
                    *pending = Some(handle);
                }
            }
            Err(e) => log::warn!("invite reset timer not started: {:?}", e),
        }
    }
}

/// Копирование ссылки и отправка приглашения
#[component]
#[allow(non_snake_case)]
pub fn InviteFlowPanel(item: Value, on_action: Callback<ActionEvent>) -> impl IntoView {
    let state = RwSignal::new(InviteState::Idle);
    let link = invite_link(&item);
    let title = str_field(&item, &["name", "title"])
        .unwrap_or("Invite friends")
        .to_string();

    // Таймер живёт не дольше панели
    let timer = ResetTimer::default();
    on_cleanup({
        let timer = timer.clone();
        move || timer.cancel()
    });

    // Через 2 секунды возвращаемся в исходное состояние
    let apply = move |event: InviteEvent| {
        state.update(|s| *s = s.next(event));
        timer.schedule(state);
    };

    let copy_link = link.clone();

    view! {
        <div style="display: flex; flex-direction: column; gap: 12px;">
            <h3 style="margin: 0;">{title}</h3>
            <code style="padding: 8px; border-radius: 6px; background: var(--colorNeutralBackground3); word-break: break-all;">
                {link.clone()}
            </code>
            <Button
                appearance=ButtonAppearance::Primary
                on_click={
                    let apply = apply.clone();
                    move |_| {
                        let apply = apply.clone();
                        copy_to_clipboard_with_callback(&copy_link, move || apply(InviteEvent::CopyLink))
                    }
                }
            >
                "Copy link"
            </Button>
            <div style="display: flex; gap: 8px;">
                {ShareChannel::ALL
                    .into_iter()
                    .map(|channel| {
                        let link = link.clone();
                        let apply = apply.clone();
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    apply(InviteEvent::Share(channel));
                                    on_action.run(ActionEvent::with_payload(
                                        "share_invite",
                                        json!({"channel": channel.label(), "link": link}),
                                    ));
                                }
                            >
                                {channel.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || state.get().status_text().map(|text| view! {
                <div style="color: var(--colorPaletteGreenForeground1);">"✓ " {text}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_transitions() {
        let s = InviteState::Idle.next(InviteEvent::CopyLink);
        assert_eq!(s, InviteState::LinkCopied);
        let s = s.next(InviteEvent::Share(ShareChannel::Email));
        assert_eq!(s, InviteState::Shared(ShareChannel::Email));
        assert_eq!(s.status_text().as_deref(), Some("Shared via Email"));
        assert_eq!(s.next(InviteEvent::Reset), InviteState::Idle);
        assert_eq!(InviteState::Idle.status_text(), None);
    }

    #[test]
    fn test_reset_after_panel_closed_is_noop() {
        let owner = Owner::new();
        let state = owner.with(|| RwSignal::new(InviteState::LinkCopied));
        assert!(reset_invite(state));
        assert_eq!(state.get_untracked(), InviteState::Idle);

        state.set(InviteState::Shared(ShareChannel::Email));
        owner.cleanup();
        // Панель закрыта до срабатывания таймера
        assert!(!reset_invite(state));
    }

    #[test]
    fn test_cancel_without_pending_timer() {
        let timer = ResetTimer::default();
        timer.cancel();
        assert!(timer.0.lock().unwrap().is_none());
    }

    #[test]
    fn test_invite_link_fallback() {
        assert_eq!(
            invite_link(&serde_json::json!({"link": "https://x/y"})),
            "https://x/y"
        );
        assert_eq!(invite_link(&serde_json::json!({})), DEFAULT_INVITE_LINK);
    }
}
