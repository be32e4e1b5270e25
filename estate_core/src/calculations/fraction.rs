//! # Fraction Formatting
//!
//! Turns a share expressed as a decimal fraction of the estate into a short
//! label. Only affects the `share` label of a record, never its amount.
//!
//! The value is rounded to three decimal places and looked up in a fixed table
//! of canonical fractions. Anything else falls back to a percentage with one
//! decimal place, rounding ties upward (`0.0625` gives "6.3%").
//!
//! The table keys are truncated for sixths and two-thirds, so an exact `1/6`
//! (0.1667) is not a table hit and reads "16.7%".
//!
//! ```rust
//! use estate_core::format_fraction;
//!
//! assert_eq!(format_fraction(0.125), "1/8");
//! assert_eq!(format_fraction(1.0 / 3.0), "1/3");
//! assert_eq!(format_fraction(1.0 / 6.0), "16.7%");
//! assert_eq!(format_fraction(0.375), "37.5%");
//! ```

/// Canonical fractions keyed by thousandths
const CANONICAL_FRACTIONS: [(i64, &str); 6] = [
    (125, "1/8"),
    (250, "1/4"),
    (333, "1/3"),
    (500, "1/2"),
    (166, "1/6"),
    (666, "2/3"),
];

/// Format a decimal share as a canonical fraction or a percentage.
pub fn format_fraction(decimal: f64) -> String {
    let thousandths = (decimal * 1000.0).round();

    if thousandths.is_finite() {
        let key = thousandths as i64;
        if let Some((_, label)) = CANONICAL_FRACTIONS.iter().find(|(k, _)| *k == key) {
            return (*label).to_string();
        }
    }

    // Tenths of a percent are thousandths of the whole, already rounded half up.
    format!("{:.1}%", thousandths / 10.0)
}
