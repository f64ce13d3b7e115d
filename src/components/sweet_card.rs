//! Sweet Card Component
//!
//! One catalog item: purchase for everyone, restock/edit/delete for
//! admins. Each action button watches only its own row's in-flight flag.

use leptos::prelude::*;

use crate::context::use_auth;
use crate::models::Sweet;

const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1578985545062-69928b1d9587?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=60";

const LOW_STOCK_THRESHOLD: i64 = 5;

#[component]
pub fn SweetCard(
    sweet: Sweet,
    buying_id: ReadSignal<Option<i64>>,
    deleting_id: ReadSignal<Option<i64>>,
    restocking_id: ReadSignal<Option<i64>>,
    #[prop(into)] on_purchase: Callback<i64>,
    #[prop(into)] on_delete: Callback<i64>,
    #[prop(into)] on_restock: Callback<i64>,
    #[prop(into)] on_edit: Callback<i64>,
) -> impl IntoView {
    let auth = use_auth();

    let id = sweet.id;
    let quantity = sweet.quantity;
    let sold_out = quantity == 0;
    let low_stock = quantity > 0 && quantity < LOW_STOCK_THRESHOLD;
    let image = sweet.image_url.clone().unwrap_or_else(|| DEFAULT_IMAGE.to_string());

    view! {
        <div class=if sold_out { "sweet-card sold-out" } else { "sweet-card" }>
            <div class="sweet-image">
                <img src=image alt=sweet.name.clone()/>
                <span class=if sweet.is_veg { "veg-badge veg" } else { "veg-badge non-veg" }>
                    {if sweet.is_veg { "VEG" } else { "NON-VEG" }}
                </span>
                <Show when=move || sold_out>
                    <span class="sold-out-banner">"SOLD OUT"</span>
                </Show>
            </div>

            <div class="sweet-info">
                <span class="sweet-category">{sweet.category.clone()}</span>
                <h3>{sweet.name.clone()}</h3>
            </div>

            <Show when=move || auth.is_admin()>
                <div class="admin-actions">
                    <button
                        class="restock-btn"
                        disabled=move || restocking_id.get() == Some(id)
                        on:click=move |_| on_restock.run(id)
                    >
                        {move || if restocking_id.get() == Some(id) { "Restocking..." } else { "Restock" }}
                    </button>
                    <button class="edit-btn" on:click=move |_| on_edit.run(id)>
                        "Edit"
                    </button>
                    <button
                        class="delete-btn"
                        disabled=move || deleting_id.get() == Some(id)
                        on:click=move |_| on_delete.run(id)
                    >
                        {move || if deleting_id.get() == Some(id) { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </Show>

            <div class="sweet-footer">
                <span class="price">{format!("${}", sweet.price)}</span>
                <button
                    class="buy-btn"
                    disabled=move || sold_out || buying_id.get() == Some(id)
                    on:click=move |_| on_purchase.run(id)
                >
                    {move || if buying_id.get() == Some(id) { "Buying..." } else { "Buy" }}
                </button>
            </div>

            <div class="stock-row">
                <span class=if low_stock { "stock low" } else { "stock" }>
                    {format!("{quantity} items left")}
                </span>
                <span class="sweet-id">{format!("ID: #{id}")}</span>
            </div>
        </div>
    }
}
