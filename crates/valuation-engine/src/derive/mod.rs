//! Derived values of the worksheet.
//!
//! Every derivation is a pure function of the field store, recomputed on each read. `None`
//! means the value cannot be computed from the current inputs, which is distinct from zero.

mod balance_sheet;
mod capital;
mod shareholders;
mod smoothing;

use serde::{Deserialize, Serialize};
use valuation_model::{FieldAccess, ValuationSettings};

use crate::classify::employee_count;

pub use balance_sheet::{
    apply_insurance_gain_tax, balance_sheet_totals, insurance_gain_tax, net_asset_valuation,
    BalanceSheetTotals, NetAssetBasis, NetAssetValuation,
};
pub use capital::{capital_per_share, net_shares, shares_at_50_yen};
pub use shareholders::{ratio_controlling, ratio_top, vote_totals, VoteTotals};
pub use smoothing::{
    average_dividend, average_dividend_prior, average_profit, average_profit_prior, net_asset,
    normalized_profit, regular_dividend, reset_comparable_inputs, COMPARABLE_INPUT_FIELDS,
};

/// One of the three fiscal years entered on the comparable-industry page, most recent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FiscalYear {
    Y1,
    Y2,
    Y3,
}

impl FiscalYear {
    pub const ALL: [FiscalYear; 3] = [FiscalYear::Y1, FiscalYear::Y2, FiscalYear::Y3];

    /// Field name suffix (`div_y1`, `income_y2`, ...).
    pub fn suffix(self) -> &'static str {
        match self {
            FiscalYear::Y1 => "y1",
            FiscalYear::Y2 => "y2",
            FiscalYear::Y3 => "y3",
        }
    }
}

/// Addressable numeric derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivationId {
    TotalShares,
    TotalVotes,
    ControllingGroupVotes,
    TopGroupVotes,
    RatioControlling,
    RatioTop,
    NetShares,
    CapitalPerShare,
    SharesAt50Yen,
    RegularDividend(FiscalYear),
    AverageDividend,
    AverageDividendPrior,
    NormalizedProfit(FiscalYear),
    AverageProfit,
    AverageProfitPrior,
    NetAsset(FiscalYear),
    AssetEvalSum,
    AssetBookSum,
    StockEvalSum,
    StockBookSum,
    LandEvalSum,
    LiabilityEvalSum,
    LiabilityBookSum,
    NetEval,
    NetBook,
    EvaluationDifference,
    CorporateTaxEquivalent,
    CurrentNetAsset,
    CurrentShares,
    NetAssetPerShare,
    DiscountedNetAssetPerShare,
    ApplicableNetAssetPerShare,
    InsuranceGainTax,
    EmployeeCount,
}

impl DerivationId {
    pub fn evaluate<A: FieldAccess + ?Sized>(
        self,
        access: &A,
        settings: &ValuationSettings,
    ) -> Option<i64> {
        use DerivationId::*;
        match self {
            TotalShares => Some(vote_totals(access, settings).total_shares),
            TotalVotes => Some(vote_totals(access, settings).total_votes),
            ControllingGroupVotes => Some(vote_totals(access, settings).controlling_group_votes),
            TopGroupVotes => Some(vote_totals(access, settings).top_group_votes),
            RatioControlling => ratio_controlling(access, settings),
            RatioTop => ratio_top(access, settings),
            NetShares => Some(net_shares(access)),
            CapitalPerShare => capital_per_share(access),
            SharesAt50Yen => shares_at_50_yen(access),
            RegularDividend(year) => regular_dividend(access, year),
            AverageDividend => average_dividend(access),
            AverageDividendPrior => average_dividend_prior(access),
            NormalizedProfit(year) => normalized_profit(access, year),
            AverageProfit => average_profit(access),
            AverageProfitPrior => average_profit_prior(access),
            NetAsset(year) => net_asset(access, year),
            AssetEvalSum => Some(balance_sheet_totals(access, settings).asset_eval),
            AssetBookSum => Some(balance_sheet_totals(access, settings).asset_book),
            StockEvalSum => Some(balance_sheet_totals(access, settings).stock_eval),
            StockBookSum => Some(balance_sheet_totals(access, settings).stock_book),
            LandEvalSum => Some(balance_sheet_totals(access, settings).land_eval),
            LiabilityEvalSum => Some(balance_sheet_totals(access, settings).liability_eval),
            LiabilityBookSum => Some(balance_sheet_totals(access, settings).liability_book),
            NetEval => Some(net_asset_valuation(access, settings).net_eval),
            NetBook => Some(net_asset_valuation(access, settings).net_book),
            EvaluationDifference => Some(net_asset_valuation(access, settings).evaluation_difference),
            CorporateTaxEquivalent => {
                Some(net_asset_valuation(access, settings).corporate_tax_equivalent)
            }
            CurrentNetAsset => Some(net_asset_valuation(access, settings).current_net_asset),
            CurrentShares => Some(net_asset_valuation(access, settings).current_shares),
            NetAssetPerShare => net_asset_valuation(access, settings).net_asset_per_share,
            DiscountedNetAssetPerShare => {
                net_asset_valuation(access, settings).discounted_net_asset_per_share
            }
            ApplicableNetAssetPerShare => {
                net_asset_valuation(access, settings).applicable_net_asset_per_share()
            }
            InsuranceGainTax => Some(insurance_gain_tax(access, settings)),
            EmployeeCount => employee_count(access),
        }
    }
}

/// Evaluate `id` against the current contents of `access`.
pub fn evaluate<A: FieldAccess + ?Sized>(
    access: &A,
    settings: &ValuationSettings,
    id: DerivationId,
) -> Option<i64> {
    id.evaluate(access, settings)
}
