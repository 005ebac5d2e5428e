//! Month total and the archive button

use crate::app::use_app_state;
use leptos::prelude::*;
use shopping_list_common::{format_currency, month_year_label};

#[component]
pub fn MonthSummary() -> impl IntoView {
    let state = use_app_state();

    let label = move || state.store.with(|store| month_year_label(store.current().period()));
    let total = move || state.store.with(|store| format_currency(store.current_total()));

    let on_archive = move |_| {
        if let Some(entry) = state.apply(|store| store.archive_month()) {
            state.success(
                "Mês arquivado!",
                format!("Total gasto: {}", format_currency(entry.total)),
            );
        }
    };

    view! {
        <div class="d-flex flex-wrap justify-content-between align-items-center border-top pt-3">
            <div>
                <div class="text-muted small">{label}</div>
                <div class="fs-5">
                    "Total: " <span id="totalAmount" class="fw-bold">{total}</span>
                </div>
            </div>
            <button id="archiveMonthBtn" class="btn btn-warning" on:click=on_archive>
                "Arquivar mês"
            </button>
        </div>
    }
}
