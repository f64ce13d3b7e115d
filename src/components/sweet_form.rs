//! Sweet Form Component
//!
//! Create/edit form. Price and stock are validated locally before any
//! request goes out; editing pre-fills the fields from the selected sweet.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::context::use_auth;
use crate::models::{Sweet, SweetPayload};

#[component]
pub fn SweetForm(
    editing: ReadSignal<Option<Sweet>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (is_veg, set_is_veg) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    // Pre-fill when a sweet is selected for editing, reset otherwise.
    Effect::new(move |_| match editing.get() {
        Some(sweet) => {
            set_name.set(sweet.name);
            set_category.set(sweet.category);
            set_price.set(sweet.price.to_string());
            set_quantity.set(sweet.quantity.to_string());
            set_is_veg.set(sweet.is_veg);
        }
        None => {
            set_name.set(String::new());
            set_category.set(String::new());
            set_price.set(String::new());
            set_quantity.set(String::new());
            set_is_veg.set(true);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth.token_untracked() else {
            return;
        };

        let name = name.get();
        let category = category.get();
        if name.trim().is_empty() || category.trim().is_empty() {
            set_error.set(Some("Name and category are required.".to_string()));
            return;
        }
        let (Ok(price), Ok(quantity)) = (
            price.get().trim().parse::<f64>(),
            quantity.get().trim().parse::<i64>(),
        ) else {
            set_error.set(Some("Price and stock must be numbers.".to_string()));
            return;
        };
        if price < 0.0 || quantity < 0 {
            set_error.set(Some("Price and stock must not be negative.".to_string()));
            return;
        }

        let target = editing.get_untracked();
        let payload = SweetPayload {
            name,
            category,
            price,
            quantity,
            // The form has no image field; keep whatever the sweet had.
            image_url: target.as_ref().and_then(|s| s.image_url.clone()),
            is_veg: is_veg.get(),
        };

        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            let result = match &target {
                Some(sweet) => api::update_sweet(&token, sweet.id, &payload).await.map(|_| ()),
                None => api::create_sweet(&token, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(_) => browser::alert("Operation failed."),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="sweet-form" on:submit=on_submit>
            <h3>
                {move || if editing.get().is_some() { "Edit Item Details" } else { "Create New Item" }}
            </h3>

            {move || error.get().map(|message| view! { <p class="error-banner">{message}</p> })}

            <input
                type="text"
                placeholder="e.g. Red Velvet Cake"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(browser::input_value(&ev))
            />
            <input
                type="text"
                placeholder="e.g. Cake"
                prop:value=move || category.get()
                on:input=move |ev| set_category.set(browser::input_value(&ev))
            />
            <input
                type="text"
                placeholder="Price ($)"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(browser::input_value(&ev))
            />
            <input
                type="text"
                placeholder="Stock"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(browser::input_value(&ev))
            />

            <button
                type="button"
                class=move || if is_veg.get() { "veg-toggle veg" } else { "veg-toggle non-veg" }
                on:click=move |_| set_is_veg.update(|v| *v = !*v)
            >
                {move || if is_veg.get() { "VEG" } else { "NON-VEG" }}
            </button>

            <button type="submit" disabled=move || submitting.get()>
                {move || {
                    match (submitting.get(), editing.get().is_some()) {
                        (true, true) => "Updating...",
                        (true, false) => "Saving...",
                        (false, true) => "Update Item",
                        (false, false) => "Save to Inventory",
                    }
                }}
            </button>
        </form>
    }
}
