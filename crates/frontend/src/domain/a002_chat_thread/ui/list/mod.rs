use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use super::details::model::{delete_thread, fetch_messages, fetch_threads};
use super::details::view_model::ChatThreadVm;
use crate::shared::icons::icon;

/// Перезагрузить сайдбар для текущего тенанта
pub fn reload_threads(vm: ChatThreadVm) {
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_threads().await {
            Ok(threads) => vm.threads.set(threads),
            Err(e) => vm.error.set(Some(e)),
        }
    });
}

pub fn open_thread(vm: ChatThreadVm, thread_id: String) {
    vm.thread_id.set(thread_id.clone());
    vm.inspected.set(None);
    vm.messages.set(Vec::new());
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_messages(&thread_id).await {
            Ok(messages) => {
                // Ответ пришёл для треда, который уже закрыт
                if vm.thread_id.get_untracked() == thread_id {
                    vm.messages.set(messages);
                    vm.error.set(None);
                }
            }
            Err(e) => vm.error.set(Some(e)),
        }
    });
}

#[component]
#[allow(non_snake_case)]
pub fn ChatThreadList(vm: ChatThreadVm) -> impl IntoView {
    let handle_delete = move |thread_id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match delete_thread(&thread_id).await {
                Ok(()) => {
                    vm.threads.update(|t| t.retain(|m| m.id != thread_id));
                    if vm.thread_id.get_untracked() == thread_id {
                        vm.start_new_thread();
                    }
                }
                Err(e) => vm.error.set(Some(e)),
            }
        });
    };

    view! {
        <nav style="width: 260px; flex-shrink: 0; display: flex; flex-direction: column; gap: 8px; padding: 16px; border-right: 1px solid var(--colorNeutralStroke2); overflow-y: auto;">
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.start_new_thread()
            >
                {icon("plus")}
                " New chat"
            </Button>

            <For
                each=move || vm.threads.get()
                key=|meta| format!("{}:{}", meta.id, meta.timestamp.timestamp_millis())
                let:meta
            >
                {{
                    let id = meta.id.clone();
                    let open_id = meta.id.clone();
                    let delete_id = meta.id.clone();
                    let is_current = move || vm.thread_id.get() == id;
                    view! {
                        <div
                            style=move || {
                                if is_current() {
                                    "display: flex; align-items: center; gap: 6px; padding: 8px; border-radius: 8px; cursor: pointer; background: var(--colorNeutralBackground1Selected);"
                                } else {
                                    "display: flex; align-items: center; gap: 6px; padding: 8px; border-radius: 8px; cursor: pointer;"
                                }
                            }
                            on:click=move |_| open_thread(vm, open_id.clone())
                        >
                            {icon("chat")}
                            <div style="flex: 1; min-width: 0;">
                                <div style="font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;">
                                    {meta.title.clone()}
                                </div>
                                <div style="font-size: 12px; color: var(--colorNeutralForeground3); white-space: nowrap; overflow: hidden; text-overflow: ellipsis;">
                                    {meta.last_message.clone()}
                                </div>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    handle_delete(delete_id.clone());
                                }
                            >
                                {icon("trash")}
                            </Button>
                        </div>
                    }
                }}
            </For>
        </nav>
    }
}
