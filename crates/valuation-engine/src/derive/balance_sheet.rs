use serde::{Deserialize, Serialize};
use valuation_format::{floor_div, mul_percent_floor};
use valuation_model::{
    FieldAccess, RowLayout, TableId, ValuationSettings, ASSETS, INSURANCE_GAIN_TAX_SUBJECT,
    LIABILITIES, NOTE_LAND, NOTE_STOCKS,
};

use super::capital::TREASURY_SHARES;
use super::shareholders::ratio_controlling;
use crate::RowCollection;

const T: TableId = TableId::Table5;

const CONTRIBUTED_EVAL: &str = "genbutsu_eval";
const CONTRIBUTED_BOOK: &str = "genbutsu_book";
const INSURANCE_CLAIM: &str = "ins_claim";
const INSURANCE_RETIREMENT: &str = "ins_retire";
/// Issued shares as of the valuation date, entered on the shareholder page.
const ISSUED_SHARES_NOW: &str = "issued_shares";

/// Column sums of the balance sheet lists (thousand yen).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetTotals {
    pub asset_eval: i64,
    pub asset_book: i64,
    /// Assets noted as securities.
    pub stock_eval: i64,
    pub stock_book: i64,
    /// Assets noted as land or land rights.
    pub land_eval: i64,
    pub liability_eval: i64,
    pub liability_book: i64,
}

struct ColumnSums {
    eval: i64,
    book: i64,
    stock_eval: i64,
    stock_book: i64,
    land_eval: i64,
}

fn column_sums<A: FieldAccess + ?Sized>(
    access: &A,
    layout: &RowLayout,
    settings: &ValuationSettings,
) -> ColumnSums {
    let count = layout.row_count(access, &settings.balance_sheet_rows);
    let mut sums = ColumnSums {
        eval: 0,
        book: 0,
        stock_eval: 0,
        stock_book: 0,
        land_eval: 0,
    };
    for i in 0..count {
        let eval = layout.number(access, "eval", i);
        let book = layout.number(access, "book", i);
        sums.eval = sums.eval.saturating_add(eval);
        sums.book = sums.book.saturating_add(book);
        match layout.text(access, "note", i) {
            NOTE_STOCKS => {
                sums.stock_eval = sums.stock_eval.saturating_add(eval);
                sums.stock_book = sums.stock_book.saturating_add(book);
            }
            NOTE_LAND => sums.land_eval = sums.land_eval.saturating_add(eval),
            _ => {}
        }
    }
    sums
}

pub fn balance_sheet_totals<A: FieldAccess + ?Sized>(
    access: &A,
    settings: &ValuationSettings,
) -> BalanceSheetTotals {
    let assets = column_sums(access, &ASSETS, settings);
    let liabilities = column_sums(access, &LIABILITIES, settings);
    BalanceSheetTotals {
        asset_eval: assets.eval,
        asset_book: assets.book,
        stock_eval: assets.stock_eval,
        stock_book: assets.stock_book,
        land_eval: assets.land_eval,
        liability_eval: liabilities.eval,
        liability_book: liabilities.book,
    }
}

/// Which per-share value applies, decided by the controlling group's vote ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetAssetBasis {
    /// Controlling group above the threshold: the full per-share value.
    Full,
    /// Controlling group at or below the threshold: the discounted per-share value.
    Discounted,
}

/// Every intermediate amount of the net asset computation (thousand yen unless noted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetAssetValuation {
    pub totals: BalanceSheetTotals,
    pub contributed_eval: i64,
    pub contributed_book: i64,
    /// `max(0, assetEval - liabilityEval)`.
    pub net_eval: i64,
    /// `max(0, assetBook + contributedEval - contributedBook - liabilityBook)`.
    pub net_book: i64,
    /// `max(0, netEval - netBook)`.
    pub evaluation_difference: i64,
    pub corporate_tax_equivalent: i64,
    pub current_net_asset: i64,
    pub issued_shares: i64,
    pub treasury_shares: i64,
    pub current_shares: i64,
    /// Yen per share; `None` without a positive share count.
    pub net_asset_per_share: Option<i64>,
    pub discounted_net_asset_per_share: Option<i64>,
    /// Controlling group vote ratio from the shareholder page.
    pub ratio_controlling: Option<i64>,
    pub basis: Option<NetAssetBasis>,
}

impl NetAssetValuation {
    /// Per-share value selected by [`NetAssetValuation::basis`].
    pub fn applicable_net_asset_per_share(&self) -> Option<i64> {
        match self.basis? {
            NetAssetBasis::Full => self.net_asset_per_share,
            NetAssetBasis::Discounted => self.discounted_net_asset_per_share,
        }
    }
}

pub fn net_asset_valuation<A: FieldAccess + ?Sized>(
    access: &A,
    settings: &ValuationSettings,
) -> NetAssetValuation {
    let totals = balance_sheet_totals(access, settings);
    let contributed_eval = access.number(T, CONTRIBUTED_EVAL);
    let contributed_book = access.number(T, CONTRIBUTED_BOOK);

    let net_eval = totals
        .asset_eval
        .saturating_sub(totals.liability_eval)
        .max(0);
    let net_book = totals
        .asset_book
        .saturating_add(contributed_eval)
        .saturating_sub(contributed_book)
        .saturating_sub(totals.liability_book)
        .max(0);
    let evaluation_difference = net_eval.saturating_sub(net_book).max(0);
    let corporate_tax_equivalent =
        mul_percent_floor(evaluation_difference, settings.corporate_tax_rate_percent);
    let current_net_asset = net_eval.saturating_sub(corporate_tax_equivalent);

    let issued_shares = access.number(TableId::Table1_1, ISSUED_SHARES_NOW);
    let treasury_shares = access.number(TableId::Table1_1, TREASURY_SHARES);
    let current_shares = issued_shares.saturating_sub(treasury_shares);

    let net_asset_per_share = if current_shares > 0 {
        floor_div(current_net_asset.saturating_mul(1000), current_shares)
    } else {
        None
    };
    let discounted_net_asset_per_share = net_asset_per_share
        .map(|value| mul_percent_floor(value, settings.discounted_net_asset_percent));

    let ratio_controlling = ratio_controlling(access, settings);
    let basis = ratio_controlling.map(|ratio| {
        if ratio <= settings.control_threshold_percent {
            NetAssetBasis::Discounted
        } else {
            NetAssetBasis::Full
        }
    });

    NetAssetValuation {
        totals,
        contributed_eval,
        contributed_book,
        net_eval,
        net_book,
        evaluation_difference,
        corporate_tax_equivalent,
        current_net_asset,
        issued_shares,
        treasury_shares,
        current_shares,
        net_asset_per_share,
        discounted_net_asset_per_share,
        ratio_controlling,
        basis,
    }
}

/// Corporate tax on the gain between a life insurance claim and the retirement pay it funds.
pub fn insurance_gain_tax<A: FieldAccess + ?Sized>(access: &A, settings: &ValuationSettings) -> i64 {
    let gain = access
        .number(T, INSURANCE_CLAIM)
        .saturating_sub(access.number(T, INSURANCE_RETIREMENT))
        .max(0);
    mul_percent_floor(gain, settings.corporate_tax_rate_percent)
}

/// Write [`insurance_gain_tax`] into the evaluation and book amounts of the liability row for
/// it. Returns the row index, or `None` when no such row exists.
pub fn apply_insurance_gain_tax<A: FieldAccess + ?Sized>(
    access: &mut A,
    settings: &ValuationSettings,
) -> Option<usize> {
    let liabilities = RowCollection::liabilities(settings);
    let index = liabilities.find_by_name(access, INSURANCE_GAIN_TAX_SUBJECT)?;
    let amount = insurance_gain_tax(access, settings).to_string();
    let layout = liabilities.layout();
    access.update_field(T, &layout.field_name("eval", index), &amount);
    access.update_field(T, &layout.field_name("book", index), &amount);
    Some(index)
}
