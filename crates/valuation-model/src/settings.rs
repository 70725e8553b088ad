use serde::{Deserialize, Serialize};

/// Bounds for a repeating-row section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLimits {
    /// Rows that can never be deleted.
    pub min_rows: usize,
    /// Append is a no-op at this count.
    pub max_rows: usize,
    /// Count assumed while the count field is empty, and the floor applied by prune.
    pub default_rows: usize,
}

impl RowLimits {
    pub const fn new(min_rows: usize, max_rows: usize, default_rows: usize) -> Self {
        Self {
            min_rows,
            max_rows,
            default_rows,
        }
    }

    /// Clamp a requested row count into `[min_rows, max_rows]`.
    #[must_use]
    pub fn clamp(&self, count: usize) -> usize {
        count.max(self.min_rows).min(self.max_rows.max(self.min_rows))
    }
}

/// Worksheet-wide settings.
///
/// Every field has a default matching the statutory form, so a partial JSON document (or `{}`)
/// deserializes to a usable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationSettings {
    /// Shareholder list on the first page: one taxpayer row plus six relatives by default.
    pub shareholder_rows: RowLimits,
    /// Asset and liability lists of the net asset page.
    pub balance_sheet_rows: RowLimits,
    /// Corporate tax equivalent applied to the evaluation difference.
    pub corporate_tax_rate_percent: i64,
    /// Net asset value applied when the controlling group holds the threshold or less.
    pub discounted_net_asset_percent: i64,
    /// Controlling group vote ratio above which the holder belongs to the family group.
    pub control_threshold_percent: i64,
    /// Top group vote ratio separating the columns of the control matrix.
    pub top_group_threshold_percent: i64,
    /// Employee count that makes a company "large" regardless of the other criteria.
    pub large_company_employee_count: i64,
}

impl Default for ValuationSettings {
    fn default() -> Self {
        Self {
            shareholder_rows: RowLimits::new(1, 20, 7),
            balance_sheet_rows: RowLimits::new(1, 40, 16),
            corporate_tax_rate_percent: 37,
            discounted_net_asset_percent: 80,
            control_threshold_percent: 50,
            top_group_threshold_percent: 30,
            large_company_employee_count: 70,
        }
    }
}
