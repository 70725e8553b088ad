use valuation_format::round_div;
use valuation_model::{FieldAccess, TableId};

pub(crate) const CAPITAL: &str = "capital";
pub(crate) const ISSUED_SHARES: &str = "issued_shares";
/// Treasury shares are entered once, on the shareholder page, and reused here.
pub(crate) const TREASURY_SHARES: &str = "treasury_shares";

/// Issued shares at the end of the last fiscal year minus treasury shares.
pub fn net_shares<A: FieldAccess + ?Sized>(access: &A) -> i64 {
    let issued = access.number(TableId::Table4, ISSUED_SHARES);
    let treasury = access.number(TableId::Table1_1, TREASURY_SHARES);
    issued.saturating_sub(treasury)
}

/// Capital per share in yen: `round(capital * 1000 / netShares)` (capital is in thousand yen).
pub fn capital_per_share<A: FieldAccess + ?Sized>(access: &A) -> Option<i64> {
    let capital = access.number(TableId::Table4, CAPITAL);
    let shares = net_shares(access);
    if capital > 0 && shares > 0 {
        round_div(capital.saturating_mul(1000), shares)
    } else {
        None
    }
}

/// Number of shares if each share carried 50 yen of capital: `capital * 1000 / 50`.
pub fn shares_at_50_yen<A: FieldAccess + ?Sized>(access: &A) -> Option<i64> {
    let capital = access.number(TableId::Table4, CAPITAL);
    (capital > 0).then(|| capital.saturating_mul(20))
}
