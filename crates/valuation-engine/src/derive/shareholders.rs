use valuation_format::pct;
use valuation_model::{FieldAccess, ValuationSettings, SHAREHOLDERS};

/// Share and vote totals of the shareholder list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTotals {
    pub total_shares: i64,
    pub total_votes: i64,
    /// Votes of rows flagged as the taxpayer's family group (`sh_dozoku_i`).
    pub controlling_group_votes: i64,
    /// Votes of rows flagged as the top shareholder group (`sh_hittou_i`).
    pub top_group_votes: i64,
}

impl VoteTotals {
    /// Controlling group share of all votes, `None` while no votes are entered.
    pub fn ratio_controlling(&self) -> Option<i64> {
        pct(self.controlling_group_votes, self.total_votes)
    }

    pub fn ratio_top(&self) -> Option<i64> {
        pct(self.top_group_votes, self.total_votes)
    }
}

pub fn vote_totals<A: FieldAccess + ?Sized>(access: &A, settings: &ValuationSettings) -> VoteTotals {
    let count = SHAREHOLDERS.row_count(access, &settings.shareholder_rows);
    let mut totals = VoteTotals::default();
    for i in 0..count {
        let shares = SHAREHOLDERS.number(access, "shares", i);
        let votes = SHAREHOLDERS.number(access, "votes", i);
        totals.total_shares = totals.total_shares.saturating_add(shares);
        totals.total_votes = totals.total_votes.saturating_add(votes);
        if SHAREHOLDERS.is_checked(access, "dozoku", i) {
            totals.controlling_group_votes = totals.controlling_group_votes.saturating_add(votes);
        }
        if SHAREHOLDERS.is_checked(access, "hittou", i) {
            totals.top_group_votes = totals.top_group_votes.saturating_add(votes);
        }
    }
    totals
}

pub fn ratio_controlling<A: FieldAccess + ?Sized>(
    access: &A,
    settings: &ValuationSettings,
) -> Option<i64> {
    vote_totals(access, settings).ratio_controlling()
}

pub fn ratio_top<A: FieldAccess + ?Sized>(access: &A, settings: &ValuationSettings) -> Option<i64> {
    vote_totals(access, settings).ratio_top()
}
