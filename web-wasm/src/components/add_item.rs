//! New item form

use crate::app::use_app_state;
use leptos::prelude::*;

#[component]
pub fn AddItemForm() -> impl IntoView {
    let state = use_app_state();
    let name = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let submit = move || {
        let value = name.get_untracked();
        // The field is cleared even when the name is rejected
        name.set(String::new());
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
        state.apply(|store| store.add_item(&value));
    };

    view! {
        <div class="input-group mb-3">
            <input
                type="text"
                id="newItemName"
                class="form-control"
                placeholder="Nome do item"
                node_ref=input_ref
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button class="btn btn-primary" on:click=move |_| submit()>
                "Adicionar"
            </button>
        </div>
    }
}
