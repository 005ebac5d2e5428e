//! Rename dialog

use crate::app::use_app_state;
use leptos::prelude::*;

#[component]
pub fn EditDialog() -> impl IntoView {
    let state = use_app_state();
    let name = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(id) = state.renaming.get() {
            let current = state
                .store
                .with_untracked(|store| store.find_item(&id).map(|i| i.name.clone()));
            name.set(current.unwrap_or_default());
        }
    });

    let close = move |_| state.renaming.set(None);

    let on_save = move |_| {
        let Some(id) = state.renaming.get_untracked() else {
            return;
        };
        let new_name = name.get_untracked();
        if state.apply(|store| store.edit_name(&id, &new_name)).is_some() {
            state.renaming.set(None);
            state.success("Atualizado!", "Item editado com sucesso.");
        }
    };

    view! {
        <Show when=move || state.renaming.get().is_some()>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Editar item"</h5>
                            <button type="button" class="btn-close" on:click=close></button>
                        </div>
                        <div class="modal-body">
                            <input
                                type="text"
                                id="editItemName"
                                class="form-control"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=close>
                                "Cancelar"
                            </button>
                            <button type="button" class="btn btn-primary" on:click=on_save>
                                "Salvar"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop show"></div>
        </Show>
    }
}
