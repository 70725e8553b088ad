//! Numeric parsing and display formatting for valuation worksheet fields.
//!
//! Every worksheet field is stored as text. This crate provides the two directions of the
//! conversion:
//! - [`parse_num`] turns raw user input into an integer. It never fails: anything unparseable
//!   is `0`, so partially filled forms can always be summed.
//! - [`fmt_num`], [`fmt_amount`] and [`fmt_pct`] render integers and percentages for display,
//!   with Japanese thousands grouping (`1,234,567`).
//!
//! Rounding helpers ([`round_div`], [`floor_div`], [`pct`]) work on exact integer ratios so
//! derived amounts never depend on binary floating point.

mod number;

pub use number::{floor_div, mul_percent_floor, parse_num, pct, round_div};

/// Format a positive amount with Japanese thousands grouping.
///
/// Zero and negative amounts render as the empty string; the worksheet leaves those cells blank.
pub fn fmt_num(n: i64) -> String {
    if n > 0 {
        group_digits(n)
    } else {
        String::new()
    }
}

/// Thousands separator used by the worksheet.
const THOUSANDS_SEPARATOR: char = ',';

/// Render `n` with [`THOUSANDS_SEPARATOR`] between every three digits, counted from the right.
fn group_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        r => r,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.char_indices() {
        if i >= lead && (i - lead) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Format a derived amount that may be undefined.
///
/// Unlike [`fmt_num`], a defined zero or negative value is still rendered: a computed `0` is
/// information, while `None` means the inputs are not there yet.
pub fn fmt_amount(value: Option<i64>) -> String {
    match value {
        Some(n) => group_digits(n),
        None => String::new(),
    }
}

/// Format a percentage as `"{n}%"`, or the empty string when undefined.
pub fn fmt_pct(value: Option<i64>) -> String {
    match value {
        Some(n) => format!("{n}%"),
        None => String::new(),
    }
}
