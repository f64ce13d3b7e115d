//! Register Page
//!
//! Account creation with a customer/admin role choice.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::browser;

const ROLES: &[(&str, &str)] = &[("customer", "Customer"), ("admin", "Admin")];

#[component]
pub fn Register() -> impl IntoView {
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(String::from("customer"));
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        let role = role.get();
        if username.is_empty() || password.is_empty() {
            return;
        }
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&username, &password, &role).await {
                Ok(()) => {
                    browser::alert("Registration successful! Please log in.");
                    navigate("/login", Default::default());
                }
                Err(_) => {
                    set_error.set(Some(
                        "Registration failed. Username might be taken.".to_string(),
                    ));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Create Account"</h2>

                {move || error.get().map(|message| view! { <p class="error-banner">{message}</p> })}

                <div class="role-selector">
                    {ROLES.iter().map(|(value, label)| {
                        let val = value.to_string();
                        let val_clone = val.clone();
                        let is_selected = move || role.get() == val;
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() { "role-btn active" } else { "role-btn" }
                                on:click=move |_| set_role.set(val_clone.clone())
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <input
                    type="text"
                    placeholder="Choose a username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(browser::input_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Choose a password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(browser::input_value(&ev))
                />

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
                </button>

                <p class="auth-switch">
                    "Already have an account? " <a href="/login">"Login here"</a>
                </p>
            </form>
        </div>
    }
}
