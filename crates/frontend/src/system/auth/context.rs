use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Tenant as resolved by the backend ("anon" for guests)
    pub tenant: Option<String>,
}

impl AuthState {
    pub fn is_guest(&self) -> bool {
        self.access_token.is_none()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from localStorage; a token the backend no longer
    // accepts resolves to "anon" and is dropped
    spawn_local(async move {
        let token = storage::get_access_token();
        match api::who_am_i(token.as_deref()).await {
            Ok(me) if me.anonymous => {
                if token.is_some() {
                    log::info!("Stored session no longer valid, continuing as guest");
                    storage::clear_tokens();
                }
                set_auth_state.set(AuthState {
                    tenant: Some(me.tenant.to_string()),
                    ..AuthState::default()
                });
            }
            Ok(me) => set_auth_state.set(AuthState {
                access_token: token,
                user_info: None,
                tenant: Some(me.tenant.to_string()),
            }),
            Err(e) => log::warn!("Session check failed: {}", e),
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Log in and store the session
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access_token);
    set_auth_state.set(AuthState {
        tenant: Some(response.user.id.clone()),
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Forget the session; later requests carry the anonymous key
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState {
        tenant: Some(contracts::system::auth::ANON_TENANT.to_string()),
        ..AuthState::default()
    });
}
