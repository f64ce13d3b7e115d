//! Welcome Page
//!
//! Landing page with login/register calls to action.

use leptos::prelude::*;

#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <div class="welcome-page">
            <div class="welcome-card">
                <h1>"Sweet Shop " <span class="accent">"Manager"</span></h1>
                <p class="tagline">
                    "Manage your inventory, track sales, and delight your customers "
                    "with the best sweets in town."
                </p>
                <div class="welcome-actions">
                    <a href="/login" class="primary-btn">"Login"</a>
                    <a href="/register" class="secondary-btn">"Register"</a>
                </div>
            </div>
        </div>
    }
}
