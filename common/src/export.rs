//! History CSV export
//!
//! Layout (comma-delimited, fields quoted only when needed):
//!
//! ```text
//! Mês/Ano,Total Gasto
//! Junho de 2025,"R$ 387,90"
//! Maio de 2025,"R$ 620,30"
//! Abril de 2025,"R$ 450,75"
//! Média geral,"R$ 486,32"
//! ```

use crate::error::{Error, Result};
use crate::format::format_decimal_comma;
use crate::types::HistoryEntry;
use crate::view::history_view;

pub const CSV_HEADER: [&str; 2] = ["Mês/Ano", "Total Gasto"];
pub const AVERAGE_LABEL: &str = "Média geral";

fn money_cell(value: f64) -> String {
    format!("R$ {}", format_decimal_comma(value))
}

/// Renders the history ledger, most recent month first, with a closing average row
pub fn export_history_csv(history: &[HistoryEntry]) -> Result<String> {
    if history.is_empty() {
        return Err(Error::EmptyHistory);
    }

    let view = history_view(history);
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in &view.rows {
        writer.write_record([row.label.as_str(), money_cell(row.total).as_str()])?;
    }
    writer.write_record([AVERAGE_LABEL, money_cell(view.average).as_str()])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Storage(format!("CSV buffer: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Storage(format!("CSV encoding: {}", e)))
}

/// `historico-compras-2025-06-30.csv`
pub fn export_file_name(iso_date: &str) -> String {
    format!("historico-compras-{}.csv", iso_date)
}
