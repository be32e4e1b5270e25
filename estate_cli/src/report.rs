//! Text and JSON rendering of a distribution.

use chrono::{DateTime, Utc};
use serde::Serialize;

use estate_core::{Distribution, Money};

use crate::i18n::Language;

const RULE_WIDTH: usize = 48;

/// Amounts below half a cent are not worth reporting as unallocated
const CENT_EPSILON: f64 = 0.005;

/// Envelope for `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub language: Language,
    pub distribution: &'a Distribution,
}

impl<'a> JsonReport<'a> {
    pub fn new(language: Language, distribution: &'a Distribution) -> Self {
        JsonReport {
            generated_at: Utc::now(),
            language,
            distribution,
        }
    }
}

pub fn render_json(language: Language, distribution: &Distribution) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(language, distribution))
}

/// Format an amount with thousands separators and two decimals: `$1,234.50`.
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let signed_cents = amount.to_cents();
    let cents = signed_cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if signed_cents < 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{fraction:02}")
}

/// Render the human-readable report.
///
/// Right-to-left languages list the columns in reverse so the heir name sits
/// at the reading start.
pub fn render_text(language: Language, currency: &str, distribution: &Distribution) -> String {
    let labels = language.labels();
    let rule = "═".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\n  {}\n{rule}\n", labels.title));
    out.push_str(&format!(
        "{}: {}\n\n",
        labels.net_estate,
        format_currency(distribution.net_estate, currency)
    ));

    if distribution.is_empty() {
        out.push_str(labels.no_heirs);
        out.push('\n');
        return out;
    }

    let header = [labels.heir, labels.relationship, labels.share, labels.amount].map(String::from);
    let rows: Vec<[String; 4]> = distribution
        .heirs
        .iter()
        .map(|heir| {
            [
                language.heir_name(heir),
                language.relationship(heir.relationship).to_string(),
                language.share(heir),
                format_currency(heir.amount, currency),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let order: [usize; 4] = if language.is_rtl() { [3, 2, 1, 0] } else { [0, 1, 2, 3] };
    let format_row = |row: &[String; 4]| {
        let cells: Vec<String> = order
            .iter()
            .map(|&i| pad(&row[i], widths[i]))
            .collect();
        format!("{}\n", cells.join("  ").trim_end())
    };

    out.push_str(&format_row(&header));
    let separator = order
        .iter()
        .map(|&i| "─".repeat(widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row));
    }

    if distribution.unallocated.value() >= CENT_EPSILON {
        out.push_str(&format!(
            "\n{}: {}\n",
            labels.unallocated,
            format_currency(distribution.unallocated, currency)
        ));
    }

    out
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{cell}{}", " ".repeat(width.saturating_sub(len)))
}
