//! Search box and sort selector

use crate::app::use_app_state;
use leptos::prelude::*;
use shopping_list_common::SortMode;

#[component]
pub fn Toolbar() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="row g-2 mb-3">
            <div class="col-sm-8">
                <input
                    type="search"
                    id="searchInput"
                    class="form-control"
                    placeholder="Pesquisar itens..."
                    prop:value=move || state.search.get()
                    on:input=move |ev| state.search.set(event_target_value(&ev))
                />
            </div>
            <div class="col-sm-4">
                <select
                    id="sortSelect"
                    class="form-select"
                    on:change=move |ev| {
                        let sort = event_target_value(&ev).parse().unwrap_or_default();
                        state.sort.set(sort);
                    }
                >
                    {SortMode::all()
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <option
                                    value=mode.as_str()
                                    selected=move || state.sort.get() == mode
                                >
                                    {mode.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
