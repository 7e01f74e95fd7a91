//! Тред чата - View Model

use contracts::domain::a002_chat_thread::aggregate::{ChatMessage, ThreadMeta};
use leptos::prelude::*;
use serde_json::Value;

/// Задержка перед ответом ассистента
pub const TYPING_DELAY_MS: u32 = 700;

#[derive(Clone, Copy)]
pub struct ChatThreadVm {
    pub threads: RwSignal<Vec<ThreadMeta>>,
    pub thread_id: RwSignal<String>,
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub draft: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub is_typing: RwSignal<bool>,
    /// Элемент, открытый в инспекторе
    pub inspected: RwSignal<Option<Value>>,
}

impl ChatThreadVm {
    pub fn new() -> Self {
        Self {
            threads: RwSignal::new(Vec::new()),
            thread_id: RwSignal::new(new_thread_id()),
            messages: RwSignal::new(Vec::new()),
            draft: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            is_typing: RwSignal::new(false),
            inspected: RwSignal::new(None),
        }
    }

    /// Новый пустой тред; в хранилище попадёт при первом сохранении
    pub fn start_new_thread(&self) {
        self.thread_id.set(new_thread_id());
        self.messages.set(Vec::new());
        self.inspected.set(None);
        self.error.set(None);
    }

    /// Обновить сводку треда в сайдбаре и поднять его наверх
    pub fn upsert_thread(&self, meta: ThreadMeta) {
        self.threads.update(|threads| merge_thread(threads, meta));
    }
}

pub fn new_thread_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn merge_thread(threads: &mut Vec<ThreadMeta>, meta: ThreadMeta) {
    threads.retain(|t| t.id != meta.id);
    threads.insert(0, meta);
}
