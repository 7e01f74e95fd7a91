use contracts::system::auth::SignupRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize};

use super::api;
use super::context::{do_login, do_logout, use_auth};
use crate::shared::icons::icon;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

/// Guest banner with login / signup, or the signed-in account
#[component]
#[allow(non_snake_case)]
pub fn AccountPanel() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (mode, set_mode) = signal(Mode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let name_val = name.get();
        let signing_up = mode.get() == Mode::Signup;

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let result = async {
                if signing_up {
                    api::signup(&SignupRequest {
                        email: email_val.clone(),
                        password: password_val.clone(),
                        name: name_val,
                    })
                    .await?;
                }
                do_login(email_val, password_val, set_auth_state).await
            }
            .await;

            match result {
                Ok(()) => set_password.set(String::new()),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    let signed_in = move || {
        let state = auth_state.get();
        let who = state
            .user_info
            .as_ref()
            .map(|u| u.email.clone())
            .or(state.tenant.clone())
            .unwrap_or_default();
        view! {
            <div style="display: flex; align-items: center; gap: 8px;">
                {icon("user")}
                <span style="flex: 1; overflow: hidden; text-overflow: ellipsis;">{who}</span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| do_logout(set_auth_state)
                >
                    "Log out"
                </Button>
            </div>
        }
    };

    let guest_form = move || {
        view! {
            <form on:submit=on_submit style="display: flex; flex-direction: column; gap: 6px;">
                <div style="font-size: 12px; color: var(--colorNeutralForeground3);">
                    "Chatting as guest. Sign in to keep threads private."
                </div>
                <Show when=move || mode.get() == Mode::Signup>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        disabled=move || is_loading.get()
                    />
                </Show>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
                <Show when=move || error_message.get().is_some()>
                    <div style="color: var(--colorPaletteRedForeground1); font-size: 12px;">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || match (mode.get(), is_loading.get()) {
                        (_, true) => "...",
                        (Mode::Login, false) => "Log in",
                        (Mode::Signup, false) => "Create account",
                    }}
                </button>
                <a
                    href="#"
                    style="font-size: 12px;"
                    on:click=move |ev| {
                        ev.prevent_default();
                        set_error_message.set(None);
                        set_mode.update(|m| *m = if *m == Mode::Login { Mode::Signup } else { Mode::Login });
                    }
                >
                    {move || if mode.get() == Mode::Login { "No account? Sign up" } else { "Have an account? Log in" }}
                </a>
            </form>
        }
    };

    view! {
        <div style="padding: 10px; border-top: 1px solid var(--colorNeutralStroke2);">
            {move || if auth_state.get().is_guest() {
                guest_form().into_any()
            } else {
                signed_in().into_any()
            }}
        </div>
    }
}
