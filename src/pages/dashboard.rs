//! Dashboard Page
//!
//! The inventory view: master list fetched from the API, a derived view
//! list driven by search + category, and the CRUD actions. Every mutation
//! refetches the master list afterwards instead of patching it locally,
//! so the client can never drift from the server.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::browser;
use crate::components::{CategoryBar, SweetCard, SweetForm};
use crate::context::use_auth;
use crate::filter::{
    apply_category_filter, derive_categories, SearchGeneration, ALL_CATEGORIES,
    SEARCH_DEBOUNCE_MS,
};
use crate::models::Sweet;
use crate::session::Role;

/// A restock amount is only valid as a positive integer.
fn parse_restock_amount(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(amount) if amount > 0 => Some(amount),
        _ => None,
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    // Master list (source of truth) and the view list the user sees.
    let (sweets, set_sweets) = signal(Vec::<Sweet>::new());
    let (filtered, set_filtered) = signal(Vec::<Sweet>::new());

    let (search_query, set_search_query) = signal(String::new());
    let (selected_category, set_selected_category) = signal(ALL_CATEGORIES.to_string());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(Option::<Sweet>::None);

    // Per-row in-flight flags: deleting row A must not lock row B.
    let (buying_id, set_buying_id) = signal(Option::<i64>::None);
    let (deleting_id, set_deleting_id) = signal(Option::<i64>::None);
    let (restocking_id, set_restocking_id) = signal(Option::<i64>::None);

    let categories = Memo::new(move |_| derive_categories(&sweets.get()));

    // Unauthenticated visitors go back to the welcome page.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if !auth.is_authenticated() {
                navigate("/", Default::default());
            }
        });
    }

    // Load the master list on mount and whenever a mutation bumps the
    // trigger. Failure keeps the previous list.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(token) = auth.token_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::list_sweets(&token).await {
                Ok(loaded) => set_sweets.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to fetch sweets: {err}").into());
                }
            }
        });
    });

    // Re-derive the view list whenever query, category, or master list
    // changes. Debounced so typing does not fire a request per keystroke,
    // and generation-tagged so a stale response can never overwrite a
    // newer one, whatever order the network completes in.
    let generation = SearchGeneration::new();
    Effect::new(move |_| {
        let query = search_query.get();
        let category = selected_category.get();
        let master = sweets.get();
        let ticket = generation.begin();
        let generation = generation.clone();
        let Some(token) = auth.token_untracked() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if !generation.is_current(ticket) {
                return;
            }
            let base = if query.trim().is_empty() {
                master
            } else {
                match api::search_sweets(&token, &query).await {
                    Ok(results) => results,
                    Err(err) => {
                        web_sys::console::error_1(&format!("search failed: {err}").into());
                        // Fail closed rather than showing stale data.
                        Vec::new()
                    }
                }
            };
            if !generation.is_current(ticket) {
                return;
            }
            set_filtered.set(apply_category_filter(base, &category));
        });
    });

    let refresh = move || set_reload_trigger.update(|v| *v += 1);

    let handle_purchase = move |id: i64| {
        let Some(token) = auth.token_untracked() else {
            return;
        };
        set_buying_id.set(Some(id));
        spawn_local(async move {
            match api::purchase_sweet(&token, id, 1).await {
                Ok(()) => refresh(),
                Err(_) => browser::alert("Purchase failed."),
            }
            set_buying_id.set(None);
        });
    };

    let handle_delete = move |id: i64| {
        if !browser::confirm("Delete this sweet from the catalog?") {
            return;
        }
        let Some(token) = auth.token_untracked() else {
            return;
        };
        set_deleting_id.set(Some(id));
        spawn_local(async move {
            match api::delete_sweet(&token, id).await {
                Ok(()) => refresh(),
                Err(_) => browser::alert("Delete failed."),
            }
            set_deleting_id.set(None);
        });
    };

    let handle_restock = move |id: i64| {
        let Some(raw) = browser::prompt("How many items to add?") else {
            return;
        };
        // Anything that is not a positive integer aborts with no request.
        let Some(amount) = parse_restock_amount(&raw) else {
            browser::alert("Restock amount must be a positive number.");
            return;
        };
        let Some(token) = auth.token_untracked() else {
            return;
        };
        set_restocking_id.set(Some(id));
        spawn_local(async move {
            match api::restock_sweet(&token, id, amount).await {
                Ok(()) => refresh(),
                Err(_) => browser::alert("Restock failed."),
            }
            set_restocking_id.set(None);
        });
    };

    let handle_edit = move |id: i64| {
        let Some(sweet) = sweets.get_untracked().into_iter().find(|s| s.id == id) else {
            return;
        };
        set_editing.set(Some(sweet));
        set_show_form.set(true);
    };

    let on_saved = move |_: ()| {
        set_show_form.set(false);
        set_editing.set(None);
        refresh();
    };

    let toggle_form = move |_| {
        set_editing.set(None);
        set_show_form.update(|open| *open = !*open);
    };

    let handle_logout = {
        let navigate = navigate.clone();
        move |_| {
            auth.logout();
            navigate("/", Default::default());
        }
    };

    view! {
        <div class="dashboard">
            <nav class="navbar">
                <h1 class="logo">"SweetShop"</h1>

                <input
                    class="search-input"
                    type="text"
                    placeholder="Find your favorite treat..."
                    prop:value=move || search_query.get()
                    on:input=move |ev| set_search_query.set(browser::input_value(&ev))
                />

                <div class="nav-right">
                    <span class="role-badge">
                        {move || match auth.role() {
                            Some(Role::Admin) => "admin",
                            Some(Role::Customer) => "customer",
                            None => "",
                        }}
                    </span>
                    <button class="logout-btn" on:click=handle_logout>"Logout"</button>
                </div>
            </nav>

            <main class="dashboard-main">
                <div class="dashboard-header">
                    <h2>
                        "Inventory"
                        <span class="item-count">
                            {move || format!("{} items", filtered.get().len())}
                        </span>
                    </h2>

                    <Show when=move || auth.is_admin()>
                        <button class="add-btn" on:click=toggle_form>
                            {move || if show_form.get() { "Close Editor" } else { "Add New Item" }}
                        </button>
                    </Show>
                </div>

                <Show when=move || show_form.get()>
                    <SweetForm editing=editing on_saved=on_saved/>
                </Show>

                <CategoryBar
                    categories=categories
                    selected=selected_category
                    on_select=move |category: String| set_selected_category.set(category)
                />

                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! {
                        <p class="empty-state">"No sweets found matching your criteria"</p>
                    }
                >
                    <div class="sweet-grid">
                        <For
                            each=move || filtered.get()
                            key=|sweet| sweet.id
                            children=move |sweet| view! {
                                <SweetCard
                                    sweet=sweet
                                    buying_id=buying_id
                                    deleting_id=deleting_id
                                    restocking_id=restocking_id
                                    on_purchase=handle_purchase
                                    on_delete=handle_delete
                                    on_restock=handle_restock
                                    on_edit=handle_edit
                                />
                            }
                        />
                    </div>
                </Show>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_restock_amount;

    #[test]
    fn positive_integers_are_accepted() {
        assert_eq!(parse_restock_amount("7"), Some(7));
        assert_eq!(parse_restock_amount("  12 "), Some(12));
    }

    #[test]
    fn zero_negative_and_non_numeric_are_rejected() {
        assert_eq!(parse_restock_amount("0"), None);
        assert_eq!(parse_restock_amount("-5"), None);
        assert_eq!(parse_restock_amount("five"), None);
        assert_eq!(parse_restock_amount(""), None);
        assert_eq!(parse_restock_amount("3.5"), None);
    }
}
