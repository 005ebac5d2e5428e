//! Archived months, average and CSV export

use crate::app::{confirm, use_app_state, NoticeKind};
use crate::download::{download_text, iso_date_today, CSV_MIME};
use leptos::prelude::*;
use shopping_list_common::{export_file_name, format_currency, Error, HistoryRow, Period};

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let state = use_app_state();
    let history = Memo::new(move |_| state.store.with(|store| store.history_view()));

    let on_export = move |_| {
        match state.store.with_untracked(|store| store.export_csv()) {
            Ok(csv) => {
                let filename = export_file_name(&iso_date_today());
                match download_text(&csv, &filename, CSV_MIME) {
                    Ok(()) => state.success("Exportado!", "Arquivo CSV gerado com sucesso."),
                    Err(e) => {
                        log::error!("CSV download failed: {}", e);
                        state.notify(NoticeKind::Warning, "Erro", e);
                    }
                }
            }
            Err(e @ Error::EmptyHistory) => state.notify(NoticeKind::Info, "Sem dados", e.to_string()),
            Err(e) => state.notify(NoticeKind::Warning, "Erro", e.to_string()),
        }
    };

    view! {
        <div class="card">
            <div class="card-body">
                <div class="d-flex justify-content-between align-items-center mb-3">
                    <h2 class="h5 mb-0">"Histórico"</h2>
                    <button id="exportHistoryBtn" class="btn btn-sm btn-outline-primary" on:click=on_export>
                        "Exportar CSV"
                    </button>
                </div>
                <table class="table table-hover table-sm mb-2">
                    <thead>
                        <tr>
                            <th>"Mês/Ano"</th>
                            <th class="text-end">"Total"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody id="historyBody">
                        <For
                            each=move || history.with(|h| h.rows.clone())
                            key=|row| (row.period, row.total.to_bits())
                            children=move |row| view! { <HistoryRowView row=row /> }
                        />
                    </tbody>
                </table>
                <Show when=move || history.with(|h| h.rows.is_empty())>
                    <p class="text-muted text-center">"Nenhum mês arquivado."</p>
                </Show>
                <div class="text-end">
                    "Média mensal: "
                    <span id="averageAmount" class="fw-bold">
                        {move || history.with(|h| format_currency(h.average))}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn HistoryRowView(row: HistoryRow) -> impl IntoView {
    let state = use_app_state();
    let period: Period = row.period;

    let on_delete = move |_| {
        if !confirm("Remover registro? Esta ação não pode ser desfeita.") {
            return;
        }
        if state.apply(|store| store.delete_history_entry(period)).is_some() {
            state.success("Removido!", "Registro excluído com sucesso.");
        }
    };

    view! {
        <tr>
            <td>{row.label}</td>
            <td class="text-end">{format_currency(row.total)}</td>
            <td class="text-end">
                <button class="btn btn-sm btn-outline-danger delete-history" title="Remover" on:click=on_delete>
                    "🗑️"
                </button>
            </td>
        </tr>
    }
}
