//! Purchase dialog opened from an item's checkbox

use crate::app::use_app_state;
use leptos::prelude::*;

#[component]
pub fn BoughtDialog() -> impl IntoView {
    let state = use_app_state();
    let quantity = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());

    // Prefill from the item's last purchase whenever the dialog opens
    Effect::new(move |_| {
        let Some(id) = state.purchasing.get() else {
            return;
        };
        let defaults = state.store.with_untracked(|store| {
            store.find_item(&id).map(|item| {
                let q = if item.bought_quantity > 0.0 { item.bought_quantity } else { 1.0 };
                (q, item.price_per_unit)
            })
        });
        if let Some((q, p)) = defaults {
            quantity.set(q.to_string());
            price.set(p.to_string());
        }
    });

    let item_name = move || {
        state
            .purchasing
            .get()
            .and_then(|id| state.store.with(|store| store.find_item(&id).map(|i| i.name.clone())))
            .unwrap_or_default()
    };

    let close = move |_| state.purchasing.set(None);

    let on_confirm = move |_| {
        let Some(id) = state.purchasing.get_untracked() else {
            return;
        };
        let (q, p) = (quantity.get_untracked(), price.get_untracked());
        if state.apply(|store| store.mark_bought_text(&id, &q, &p)).is_some() {
            let name = state
                .store
                .with_untracked(|store| store.find_item(&id).map(|i| i.name.clone()))
                .unwrap_or_default();
            state.purchasing.set(None);
            state.success("Confirmado!", format!("{} marcado como pego.", name));
        }
    };

    view! {
        <Show when=move || state.purchasing.get().is_some()>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Marcar como pego: " {item_name}</h5>
                            <button type="button" class="btn-close" on:click=close></button>
                        </div>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label class="form-label" for="boughtQuantity">"Quantidade"</label>
                                <input
                                    type="number"
                                    id="boughtQuantity"
                                    class="form-control"
                                    step="any"
                                    min="0"
                                    prop:value=move || quantity.get()
                                    on:input=move |ev| quantity.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="pricePerUnit">"Valor por unidade (R$)"</label>
                                <input
                                    type="number"
                                    id="pricePerUnit"
                                    class="form-control"
                                    step="0.01"
                                    min="0"
                                    prop:value=move || price.get()
                                    on:input=move |ev| price.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=close>
                                "Cancelar"
                            </button>
                            <button type="button" class="btn btn-success" on:click=on_confirm>
                                "Confirmar"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop show"></div>
        </Show>
    }
}
