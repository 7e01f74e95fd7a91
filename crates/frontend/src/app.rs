use std::sync::Arc;

use leptos::prelude::*;

use crate::domain::a002_chat_thread::ui::page::ChatPage;
use crate::shared::artifacts::ArtifactRegistry;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::panel::AccountPanel;

#[component]
pub fn App() -> impl IntoView {
    // Registry of artifact renderers, built once for the whole app
    provide_context(Arc::new(ArtifactRegistry::standard()));

    view! {
        <AuthProvider>
            <div style="height: 100vh; display: flex; flex-direction: column;">
                <header style="display: flex; justify-content: space-between; align-items: center; padding: 8px 20px; border-bottom: 1px solid var(--colorNeutralStroke2);">
                    <h1 style="font-size: 18px; font-weight: bold;">"City Chat"</h1>
                    <AccountPanel />
                </header>
                <ChatPage />
            </div>
        </AuthProvider>
    }
}
