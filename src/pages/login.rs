//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::browser;
use crate::context::use_auth;

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        if username.is_empty() || password.is_empty() {
            return;
        }
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&username, &password).await {
                Ok(response) => match auth.login(response.access_token) {
                    Ok(()) => navigate("/dashboard", Default::default()),
                    // The server answered but the token would not decode;
                    // surface it instead of silently staying logged out.
                    Err(_) => set_error.set(Some("Login failed: unreadable token.".to_string())),
                },
                Err(_) => set_error.set(Some("Invalid credentials".to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Sweet Shop Login"</h2>

                {move || error.get().map(|message| view! { <p class="error-banner">{message}</p> })}

                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(browser::input_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(browser::input_value(&ev))
                />

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>

                <p class="auth-switch">
                    "No account yet? " <a href="/register">"Register here"</a>
                </p>
            </form>
        </div>
    }
}
