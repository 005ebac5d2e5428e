//! Plain-text rendering of the list and the history

use shopping_list_common::{format_currency, month_year_label, HistoryView, Period, Projection};
use std::fmt::Write;

pub fn render_list(period: Period, projection: &Projection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🛒 {}", month_year_label(period));
    let _ = writeln!(out);

    if let Some(empty) = projection.empty_state {
        let _ = writeln!(out, "  {}", empty.message());
    }

    for row in &projection.rows {
        let mark = if row.bought { "x" } else { " " };
        let _ = write!(out, "  [{}] {}  {}", mark, row.id.short(), row.name);
        if row.bought {
            let _ = write!(
                out,
                "  ({} × {} = {})",
                row.quantity,
                format_currency(row.price_per_unit),
                format_currency(row.line_total)
            );
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total do mês:   {}", format_currency(projection.current_total));
    let _ = writeln!(out, "Média mensal:   {}", format_currency(projection.historical_average));
    out
}

pub fn render_history(view: &HistoryView) -> String {
    let mut out = String::new();
    if view.rows.is_empty() {
        let _ = writeln!(out, "Nenhum mês arquivado.");
        return out;
    }

    for row in &view.rows {
        let _ = writeln!(
            out,
            "  {}  {:<20} {}",
            row.period,
            row.label,
            format_currency(row.total)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Média geral: {}", format_currency(view.average));
    out
}
