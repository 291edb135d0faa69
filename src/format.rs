//! Display formatting for Brazilian fiscal identifiers and amounts
//!
//! Pure string helpers consumed by presentation layers: CNPJ-root and CPF
//! masks, pt-BR currency, AAAAMM period labels. No styling, no locale
//! machinery — just the fixed formats the review screens use.

use rust_decimal::Decimal;

/// Format a CNPJ root as `XX.XXX.XXX`, zero-padding to 8 digits.
///
/// Non-numeric or over-length inputs are returned unchanged.
#[must_use]
pub fn company_id(raw: &str) -> String {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.to_string();
    }
    let padded = format!("{raw:0>8}");
    if padded.len() != 8 {
        return raw.to_string();
    }
    format!("{}.{}.{}", &padded[..2], &padded[2..5], &padded[5..8])
}

/// Format a CPF as `XXX.XXX.XXX-XX`, zero-padding to 11 digits.
///
/// Non-numeric or over-length inputs are returned unchanged.
#[must_use]
pub fn partner_id(raw: &str) -> String {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.to_string();
    }
    let padded = format!("{raw:0>11}");
    if padded.len() != 11 {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &padded[..3],
        &padded[3..6],
        &padded[6..9],
        &padded[9..11]
    )
}

/// Format a monetary amount as pt-BR currency: `R$ 1.234.567,89`.
#[must_use]
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (text, "00".to_string()),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("R$ {sign}{grouped},{frac_part}")
}

/// Format an `AAAAMM` period label as `MM/AAAA`.
///
/// Labels that are not six digits are returned unchanged.
#[must_use]
pub fn period(raw: &str) -> String {
    if raw.len() == 6 && raw.chars().all(|c| c.is_ascii_digit()) {
        format!("{}/{}", &raw[4..6], &raw[..4])
    } else {
        raw.to_string()
    }
}
