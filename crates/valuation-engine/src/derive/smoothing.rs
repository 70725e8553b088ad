use valuation_format::round_div;
use valuation_model::{FieldAccess, TableId};

use super::FiscalYear;

const T: TableId = TableId::Table4;

fn field(name: &str, year: FiscalYear) -> String {
    format!("{name}_{}", year.suffix())
}

/// Dividend of the year excluding extraordinary dividends; `None` until the dividend is entered.
pub fn regular_dividend<A: FieldAccess + ?Sized>(access: &A, year: FiscalYear) -> Option<i64> {
    let dividend = field("div", year);
    if !access.is_present(T, &dividend) {
        return None;
    }
    Some(
        access
            .number(T, &dividend)
            .saturating_sub(access.number(T, &field("div_extra", year))),
    )
}

/// Profit used for comparison: income less extraordinary profit and excluded dividends, plus
/// tax and loss carryforward deduction. `None` until income is entered.
pub fn normalized_profit<A: FieldAccess + ?Sized>(access: &A, year: FiscalYear) -> Option<i64> {
    let income = field("income", year);
    if !access.is_present(T, &income) {
        return None;
    }
    let n = |name: &str| access.number(T, &field(name, year));
    Some(
        n("income")
            .saturating_sub(n("extra_profit"))
            .saturating_sub(n("div_exclusion"))
            .saturating_add(n("tax"))
            .saturating_add(n("loss_deduct")),
    )
}

/// Capital component plus retained earnings; `None` while both are empty.
pub fn net_asset<A: FieldAccess + ?Sized>(access: &A, year: FiscalYear) -> Option<i64> {
    let capital = field("cap", year);
    let retained = field("retained", year);
    if !access.is_present(T, &capital) && !access.is_present(T, &retained) {
        return None;
    }
    Some(
        access
            .number(T, &capital)
            .saturating_add(access.number(T, &retained)),
    )
}

fn average(a: Option<i64>, b: Option<i64>) -> Option<i64> {
    round_div(a?.saturating_add(b?), 2)
}

/// Two-year average of regular dividends for the last two fiscal years.
pub fn average_dividend<A: FieldAccess + ?Sized>(access: &A) -> Option<i64> {
    average(
        regular_dividend(access, FiscalYear::Y1),
        regular_dividend(access, FiscalYear::Y2),
    )
}

/// Two-year average one year earlier (second and third year back).
pub fn average_dividend_prior<A: FieldAccess + ?Sized>(access: &A) -> Option<i64> {
    average(
        regular_dividend(access, FiscalYear::Y2),
        regular_dividend(access, FiscalYear::Y3),
    )
}

pub fn average_profit<A: FieldAccess + ?Sized>(access: &A) -> Option<i64> {
    average(
        normalized_profit(access, FiscalYear::Y1),
        normalized_profit(access, FiscalYear::Y2),
    )
}

pub fn average_profit_prior<A: FieldAccess + ?Sized>(access: &A) -> Option<i64> {
    average(
        normalized_profit(access, FiscalYear::Y2),
        normalized_profit(access, FiscalYear::Y3),
    )
}

/// Every input field of the comparable-industry page, cleared by its reset action.
pub const COMPARABLE_INPUT_FIELDS: &[&str] = &[
    "capital",
    "issued_shares",
    "div_y1",
    "div_extra_y1",
    "div_y2",
    "div_extra_y2",
    "div_y3",
    "div_extra_y3",
    "income_y1",
    "extra_profit_y1",
    "div_exclusion_y1",
    "tax_y1",
    "loss_deduct_y1",
    "income_y2",
    "extra_profit_y2",
    "div_exclusion_y2",
    "tax_y2",
    "loss_deduct_y2",
    "income_y3",
    "extra_profit_y3",
    "div_exclusion_y3",
    "tax_y3",
    "loss_deduct_y3",
    "cap_y1",
    "retained_y1",
    "cap_y2",
    "retained_y2",
    "cap_y3",
    "retained_y3",
];

pub fn reset_comparable_inputs<A: FieldAccess + ?Sized>(access: &mut A) {
    for name in COMPARABLE_INPUT_FIELDS {
        access.update_field(T, name, "");
    }
    log::debug!("reset {} comparable-industry inputs", COMPARABLE_INPUT_FIELDS.len());
}
