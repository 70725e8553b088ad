use valuation_model::Preset;

/// Structural edit of a repeating-row section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOp {
    /// Grow the section by one empty row, up to the maximum.
    Append,
    /// Remove a row and shift the following rows up. Asks for confirmation when the row holds
    /// any value.
    Delete { index: usize },
    /// Move a row to a new position (list move, not swap).
    Reorder { from: usize, to: usize },
    /// Write catalog subjects into empty rows, skipping subjects already present.
    PresetFill { presets: Vec<Preset> },
    /// Compact non-empty rows to the front and shrink the count.
    PruneEmpty,
    /// Stable sort of the rows by the numeric value of one column.
    SortBy {
        suffix: &'static str,
        descending: bool,
    },
    /// Empty every row after confirmation; the count is kept.
    Clear,
}

impl RowOp {
    pub fn kind(&self) -> &'static str {
        match self {
            RowOp::Append => "append",
            RowOp::Delete { .. } => "delete",
            RowOp::Reorder { .. } => "reorder",
            RowOp::PresetFill { .. } => "preset_fill",
            RowOp::PruneEmpty => "prune_empty",
            RowOp::SortBy { .. } => "sort_by",
            RowOp::Clear => "clear",
        }
    }
}

/// Result of [`crate::RowCollection::apply`]. None of these is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    /// Fields were rewritten; `count` is the new row count.
    Applied { count: usize },
    /// Bounds or arguments made the operation a no-op.
    Unchanged,
    /// The host refused confirmation; nothing was written.
    Declined,
}
