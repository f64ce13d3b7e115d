//! Category Bar Component
//!
//! Chip row over the derived categories, sentinel ("All") first.

use leptos::prelude::*;

#[component]
pub fn CategoryBar(
    #[prop(into)] categories: Signal<Vec<String>>,
    selected: ReadSignal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-bar">
            <span class="category-label">"Filters:"</span>
            <For
                each=move || categories.get()
                key=|category| category.clone()
                children=move |category| {
                    let for_class = category.clone();
                    let for_click = category.clone();
                    view! {
                        <button
                            class=move || {
                                if selected.get() == for_class {
                                    "category-chip active"
                                } else {
                                    "category-chip"
                                }
                            }
                            on:click=move |_| on_select.run(for_click.clone())
                        >
                            {category}
                        </button>
                    }
                }
            />
        </div>
    }
}
