use serde::{Deserialize, Serialize};
use valuation_model::{FieldAccess, ValuationSettings};

use crate::derive::vote_totals;

/// Shareholder class decided by the controlling group's vote ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareholderClass {
    /// Controlling group holds more than the threshold.
    FamilyGroup,
    /// Controlling group holds the threshold or less.
    NonFamilyGroup,
}

impl ShareholderClass {
    pub fn label(self) -> &'static str {
        match self {
            ShareholderClass::FamilyGroup => "同族株主等",
            ShareholderClass::NonFamilyGroup => "同族株主等以外",
        }
    }
}

/// Strict `>` against the threshold: a ratio exactly at the threshold is not a family group.
pub fn classify_ratio(ratio: Option<i64>, settings: &ValuationSettings) -> Option<ShareholderClass> {
    let ratio = ratio?;
    Some(if ratio > settings.control_threshold_percent {
        ShareholderClass::FamilyGroup
    } else {
        ShareholderClass::NonFamilyGroup
    })
}

pub fn classify_shareholder<A: FieldAccess + ?Sized>(
    access: &A,
    settings: &ValuationSettings,
) -> Option<ShareholderClass> {
    classify_ratio(vote_totals(access, settings).ratio_controlling(), settings)
}

/// Row of the 50%/30% presentation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlBand {
    Over50,
    From30To50,
    Under30,
}

/// Highlighted cell of the presentation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlMatrixCell {
    pub band: ControlBand,
    /// The top shareholder group holds at least the top-group threshold.
    pub top_group_at_threshold: bool,
}

/// Cell to highlight for the given ratios. Display only; it never feeds
/// [`classify_shareholder`].
pub fn control_matrix(
    ratio_controlling: Option<i64>,
    ratio_top: Option<i64>,
    settings: &ValuationSettings,
) -> Option<ControlMatrixCell> {
    let controlling = ratio_controlling?;
    let top = ratio_top?;
    let lower = settings.top_group_threshold_percent;
    let band = if controlling > settings.control_threshold_percent {
        ControlBand::Over50
    } else if controlling >= lower {
        ControlBand::From30To50
    } else {
        ControlBand::Under30
    };
    Some(ControlMatrixCell {
        band,
        top_group_at_threshold: top >= lower,
    })
}
