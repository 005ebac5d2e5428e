//! pt-BR display formatting

use crate::types::Period;

const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Lowercase month name
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize) % 12]
}

/// `Abril de 2025`
pub fn month_year_label(period: Period) -> String {
    let name = month_name(period.month);
    let mut chars = name.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{} de {}", capitalized, period.year)
}

/// Two decimals with a comma separator and no grouping: `1234,50`
pub fn format_decimal_comma(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// Brazilian real: `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0 && format!("{:.2}", value.abs()) != "0.00";
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }

    format!(
        "{}R$ {},{}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}
