//! Chat Thread - View Component

use contracts::domain::a001_artifact::aggregate::ActionEvent;
use contracts::domain::a002_chat_thread::aggregate::{ChatMessage, ChatRole};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

use super::model::save_thread;
use super::view_model::{ChatThreadVm, TYPING_DELAY_MS};
use crate::domain::a002_chat_thread::canned::{message_for_action, reply_for};
use crate::shared::artifacts::{ArtifactEvent, MessageArtifacts};
use crate::shared::detail_inspector::DetailInspector;
use crate::shared::icons::icon;

/// Saves the whole thread and refreshes its sidebar entry
async fn persist(vm: ChatThreadVm, thread_id: &str, messages: Vec<ChatMessage>) {
    match save_thread(thread_id, messages).await {
        Ok(meta) => vm.upsert_thread(meta),
        Err(e) => {
            log::error!("Failed to save thread {}: {}", thread_id, e);
            vm.error.set(Some(e));
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ChatThreadDetails(vm: ChatThreadVm) -> impl IntoView {
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // User message, then the canned reply after a short typing delay.
    // Both saves send the full array.
    let send = Callback::new(move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() || vm.is_typing.get_untracked() {
            return;
        }

        let thread_id = vm.thread_id.get_untracked();
        vm.draft.set(String::new());
        vm.inspected.set(None);
        vm.error.set(None);
        vm.messages.update(|m| m.push(ChatMessage::user(text.clone())));
        vm.is_typing.set(true);
        scroll_to_bottom();

        wasm_bindgen_futures::spawn_local(async move {
            persist(vm, &thread_id, vm.messages.get_untracked()).await;

            TimeoutFuture::new(TYPING_DELAY_MS).await;
            vm.is_typing.set(false);

            // Another thread was opened meanwhile
            if vm.thread_id.get_untracked() != thread_id {
                return;
            }

            vm.messages.update(|m| m.push(reply_for(&text)));
            scroll_to_bottom();
            persist(vm, &thread_id, vm.messages.get_untracked()).await;
        });
    });

    let on_artifact_event = Callback::new(move |event: ArtifactEvent| match event {
        ArtifactEvent::Action(action) => send.run(message_for_action(&action)),
        ArtifactEvent::ShowDetails(item) => vm.inspected.set(Some(item)),
    });

    let on_inspector_action =
        Callback::new(move |action: ActionEvent| send.run(message_for_action(&action)));
    let on_inspector_close = Callback::new(move |_: ()| vm.inspected.set(None));

    view! {
        <div style="flex: 1; display: flex; min-width: 0; height: 100%;">
            <div style="flex: 1; display: flex; flex-direction: column; padding: 20px; min-width: 0;">
                // Error display
                {move || {
                    vm.error
                        .get()
                        .map(|e| {
                            view! {
                                <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                    <span style="color: var(--color-error);">{e}</span>
                                </div>
                            }
                        })
                }}

                // Messages area
                <div
                    node_ref=messages_container_ref
                    style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
                >
                    <Show when=move || vm.messages.with(Vec::is_empty)>
                        <div style="margin: auto; color: var(--colorNeutralForeground3); text-align: center;">
                            "Ask about dinner, tickets, your order, friends or the gym."
                        </div>
                    </Show>
                    <For
                        each={move || {
                            vm.messages
                                .get()
                                .into_iter()
                                .enumerate()
                                .collect::<Vec<(usize, ChatMessage)>>()
                        }}
                        key=|(index, msg)| format!("{}:{}", index, msg.id)
                        let:entry
                    >
                        {{
                            let (_, msg) = entry;
                            let is_user = msg.role == ChatRole::User;
                            let artifacts = msg.artifacts().to_vec();
                            view! {
                                <div
                                    class=format!("message message-{}", msg.role.as_str())
                                    style=if is_user {
                                        "align-self: flex-end; max-width: 70%;"
                                    } else {
                                        "align-self: flex-start; max-width: 85%;"
                                    }
                                >
                                    <div
                                        style=if is_user {
                                            "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                                        } else {
                                            "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                                        }
                                    >
                                        <div style="white-space: pre-wrap;">{msg.content.clone()}</div>
                                    </div>
                                    <MessageArtifacts artifacts=artifacts on_event=on_artifact_event />
                                </div>
                            }
                        }}
                    </For>
                    <Show when=move || vm.is_typing.get()>
                        <div style="align-self: flex-start; color: var(--colorNeutralForeground3); font-size: 13px;">
                            "typing…"
                        </div>
                    </Show>
                </div>

                // Input area
                <Flex style="gap: 8px; align-items: center;">
                    <div style="flex: 1;">
                        <Input
                            value=vm.draft
                            placeholder="Message (Enter to send)"
                            attr:style="width: 100%;"
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    send.run(vm.draft.get_untracked());
                                }
                            }
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=vm.is_typing
                        on_click=move |_| send.run(vm.draft.get_untracked())
                    >
                        {icon("send")}
                        " Send"
                    </Button>
                </Flex>
            </div>

            {move || {
                vm.inspected
                    .get()
                    .map(|item| {
                        view! {
                            <DetailInspector
                                item=item
                                on_action=on_inspector_action
                                on_close=on_inspector_close
                            />
                        }
                    })
            }}
        </div>
    }
}
