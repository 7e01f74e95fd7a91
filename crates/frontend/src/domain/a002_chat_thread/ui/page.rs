use leptos::prelude::*;

use super::details::{view_model::ChatThreadVm, ChatThreadDetails};
use super::list::{reload_threads, ChatThreadList};
use crate::system::auth::context::use_auth;

/// Сайдбар с тредами и открытый диалог
#[component]
#[allow(non_snake_case)]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatThreadVm::new();
    let (auth_state, _) = use_auth();

    // Треды принадлежат тенанту: при входе и выходе список меняется
    Effect::new(move |_| {
        let tenant = auth_state.with(|s| s.tenant.clone());
        log::debug!("loading threads for tenant {:?}", tenant);
        vm.start_new_thread();
        reload_threads(vm);
    });

    view! {
        <div style="display: flex; flex: 1; min-height: 0;">
            <ChatThreadList vm=vm />
            <ChatThreadDetails vm=vm />
        </div>
    }
}
