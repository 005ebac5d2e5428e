//! Item rows of the current month

use crate::app::{confirm, use_app_state};
use leptos::prelude::*;
use shopping_list_common::{format_currency, BoughtField, ItemId, ItemRow, ViewQuery};

#[component]
pub fn ItemList() -> impl IntoView {
    let state = use_app_state();
    let projection = Memo::new(move |_| {
        let query = ViewQuery::new(state.search.get(), state.sort.get());
        state.store.with(|store| store.project(&query))
    });

    view! {
        <div id="itemsContainer" class="mb-3">
            {move || {
                projection
                    .with(|p| p.empty_state)
                    .map(|empty| {
                        view! { <p class="text-muted text-center mb-0">{empty.message()}</p> }
                    })
            }}
            <ul class="list-group">
                <For
                    each=move || projection.with(|p| p.rows.clone())
                    key=|row| {
                        (
                            row.id.clone(),
                            row.name.clone(),
                            row.bought,
                            row.quantity.to_bits(),
                            row.price_per_unit.to_bits(),
                        )
                    }
                    children=move |row| view! { <ItemRowView row=row /> }
                />
            </ul>
        </div>
    }
}

#[component]
fn ItemRowView(row: ItemRow) -> impl IntoView {
    let state = use_app_state();
    let bought = row.bought;

    let on_toggle = {
        let id = row.id.clone();
        move |ev: leptos::ev::MouseEvent| {
            // The box reflects the store, not the click
            ev.prevent_default();
            if bought {
                state.apply(|store| store.unmark_bought(&id));
            } else {
                state.purchasing.set(Some(id.clone()));
            }
        }
    };

    let on_edit = {
        let id = row.id.clone();
        move |_| state.renaming.set(Some(id.clone()))
    };

    let on_delete = {
        let id = row.id.clone();
        move |_| {
            if !confirm("Remover item? Esta ação não pode ser desfeita.") {
                return;
            }
            if state.apply(|store| store.delete_item(&id)).is_some() {
                state.success("Removido!", "Item excluído com sucesso.");
            }
        }
    };

    let (row_class, name_class) = if bought {
        ("list-group-item list-group-item-success", "flex-grow-1 text-decoration-line-through")
    } else {
        ("list-group-item", "flex-grow-1")
    };

    let purchase_fields = bought.then(|| {
        view! {
            <div class="d-flex gap-2 align-items-center mt-2">
                <LiveField id=row.id.clone() field=BoughtField::Quantity value=row.quantity label="Qtd" />
                <LiveField
                    id=row.id.clone()
                    field=BoughtField::PricePerUnit
                    value=row.price_per_unit
                    label="R$/un"
                />
                <span class="ms-auto fw-semibold">{format_currency(row.line_total)}</span>
            </div>
        }
    });

    view! {
        <li class=row_class>
            <div class="d-flex align-items-center gap-2">
                <input
                    type="checkbox"
                    class="form-check-input"
                    title="Pego"
                    prop:checked=bought
                    on:click=on_toggle
                />
                <span class=name_class>
                    {row.name.clone()}
                </span>
                <button class="btn btn-sm btn-outline-secondary edit-item" title="Editar" on:click=on_edit>
                    "✏️"
                </button>
                <button class="btn btn-sm btn-outline-danger delete-item" title="Remover" on:click=on_delete>
                    "🗑️"
                </button>
            </div>
            {purchase_fields}
        </li>
    }
}

/// Quantity or price input of a bought item, committed on change
#[component]
fn LiveField(id: ItemId, field: BoughtField, value: f64, label: &'static str) -> impl IntoView {
    let state = use_app_state();

    view! {
        <label class="input-group input-group-sm w-auto">
            <span class="input-group-text">{label}</span>
            <input
                type="number"
                step="any"
                min="0"
                class="form-control form-control-sm"
                prop:value=value.to_string()
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    state.apply(|store| store.set_bought_field_text(&id, field, &raw));
                }
            />
        </label>
    }
}
