use std::collections::HashSet;

use valuation_format::parse_num;
use valuation_model::{
    FieldAccess, Preset, RowLayout, RowLimits, RowRecord, ValuationSettings, ASSETS, LIABILITIES,
    SHAREHOLDERS,
};

use super::{RowOp, RowOutcome};
use crate::Confirm;

const NAME: &str = "name";
const NOTE: &str = "note";
/// Upper bound on rows cleared past an out-of-range stored count.
const STALE_ROW_SCAN_LIMIT: usize = 1000;

/// A repeating section bound to its layout and row limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCollection {
    layout: &'static RowLayout,
    limits: RowLimits,
    label: &'static str,
}

impl RowCollection {
    pub fn new(layout: &'static RowLayout, limits: RowLimits, label: &'static str) -> Self {
        Self {
            layout,
            limits,
            label,
        }
    }

    pub fn shareholders(settings: &ValuationSettings) -> Self {
        Self::new(&SHAREHOLDERS, settings.shareholder_rows, "株主")
    }

    pub fn assets(settings: &ValuationSettings) -> Self {
        Self::new(&ASSETS, settings.balance_sheet_rows, "資産の部")
    }

    pub fn liabilities(settings: &ValuationSettings) -> Self {
        Self::new(&LIABILITIES, settings.balance_sheet_rows, "負債の部")
    }

    pub fn layout(&self) -> &'static RowLayout {
        self.layout
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn count<A: FieldAccess + ?Sized>(&self, access: &A) -> usize {
        self.layout.row_count(access, &self.limits)
    }

    /// Rows `[0, count)` as records.
    pub fn rows<A: FieldAccess + ?Sized>(&self, access: &A) -> Vec<RowRecord> {
        self.layout.read_rows(access, self.count(access))
    }

    /// Index of the first live row whose name equals `name`.
    pub fn find_by_name<A: FieldAccess + ?Sized>(&self, access: &A, name: &str) -> Option<usize> {
        (0..self.count(access)).find(|&i| self.layout.text(access, NAME, i) == name)
    }

    /// Run one structural operation.
    ///
    /// The new section is computed in memory first and written back as a single batch; a
    /// declined confirmation or a bounds violation returns before any field is touched.
    pub fn apply<A, C>(&self, access: &mut A, op: RowOp, confirm: &mut C) -> RowOutcome
    where
        A: FieldAccess + ?Sized,
        C: Confirm + ?Sized,
    {
        let kind = op.kind();
        let count = self.count(access);
        let rows = self.layout.read_rows(access, count);

        let planned = match op {
            RowOp::Append => self.plan_append(rows),
            RowOp::Delete { index } => self.plan_delete(rows, index, confirm),
            RowOp::Reorder { from, to } => plan_reorder(rows, from, to),
            RowOp::PresetFill { presets } => self.plan_preset_fill(rows, &presets),
            RowOp::PruneEmpty => self.plan_prune(rows),
            RowOp::SortBy { suffix, descending } => self.plan_sort(rows, suffix, descending),
            RowOp::Clear => self.plan_clear(rows, confirm),
        };

        match planned {
            Plan::Rewrite(new_rows) => {
                let new_count = new_rows.len();
                self.commit(access, count, &new_rows);
                log::debug!(
                    "{} {kind}: {count} -> {new_count} rows",
                    self.layout.prefix
                );
                RowOutcome::Applied { count: new_count }
            }
            Plan::Unchanged => {
                log::trace!("{} {kind}: no-op", self.layout.prefix);
                RowOutcome::Unchanged
            }
            Plan::Declined => {
                log::debug!("{} {kind}: declined", self.layout.prefix);
                RowOutcome::Declined
            }
        }
    }

    /// Write `value` into `source` of row `index` and mirror it into `target` when `target` is
    /// empty or still equal to the previous `source` value (e.g. evaluation amount -> book
    /// amount). Returns `false` for rows outside the section.
    pub fn set_synced<A: FieldAccess + ?Sized>(
        &self,
        access: &mut A,
        index: usize,
        source: &str,
        target: &str,
        value: &str,
    ) -> bool {
        if index >= self.count(access) {
            return false;
        }
        let previous = self.layout.text(access, source, index).to_string();
        let mirrored = self.layout.text(access, target, index);
        let follow = mirrored.is_empty() || mirrored == previous;

        let table = self.layout.table;
        access.update_field(table, &self.layout.field_name(source, index), value);
        if follow {
            access.update_field(table, &self.layout.field_name(target, index), value);
        }
        true
    }

    fn commit<A: FieldAccess + ?Sized>(&self, access: &mut A, old_count: usize, rows: &[RowRecord]) {
        // A stored count above `max_rows` still owns populated rows past the clamped count.
        let stale_end = old_count.max(self.layout.stored_count(access).min(STALE_ROW_SCAN_LIMIT));
        for (index, row) in rows.iter().enumerate() {
            self.layout.write_row(access, index, row);
        }
        for index in rows.len()..stale_end {
            self.layout.clear_row(access, index);
        }
        self.layout.write_count(access, rows.len());
    }

    fn plan_append(&self, mut rows: Vec<RowRecord>) -> Plan {
        if rows.len() >= self.limits.max_rows {
            return Plan::Unchanged;
        }
        rows.push(RowRecord::empty(self.layout.width()));
        Plan::Rewrite(rows)
    }

    fn plan_delete<C: Confirm + ?Sized>(
        &self,
        mut rows: Vec<RowRecord>,
        index: usize,
        confirm: &mut C,
    ) -> Plan {
        if rows.len() <= self.limits.min_rows || index >= rows.len() {
            return Plan::Unchanged;
        }

        let row = &rows[index];
        if !row.is_empty() {
            let name = self.layout.column(NAME).map(|col| row.get(col)).unwrap_or("");
            let message = if name.is_empty() {
                format!("行{}を削除しますか？", index + 1)
            } else {
                format!("行{}「{}」を削除しますか？", index + 1, name)
            };
            if !confirm.confirm(&message) {
                return Plan::Declined;
            }
        }

        rows.remove(index);
        Plan::Rewrite(rows)
    }

    fn plan_preset_fill(&self, mut rows: Vec<RowRecord>, presets: &[Preset]) -> Plan {
        let Some(name_col) = self.layout.column(NAME) else {
            return Plan::Unchanged;
        };
        let note_col = self.layout.column(NOTE);

        let mut names: HashSet<String> = rows
            .iter()
            .map(|row| row.get(name_col))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        let mut cursor = 0;
        let mut filled = 0;
        for preset in presets {
            if names.contains(preset.name) {
                continue;
            }
            while cursor < rows.len() && !rows[cursor].is_empty() {
                cursor += 1;
            }
            if cursor >= rows.len() {
                break;
            }

            rows[cursor].set(name_col, preset.name);
            if let (Some(note), Some(col)) = (preset.note, note_col) {
                rows[cursor].set(col, note);
            }
            names.insert(preset.name.to_string());
            cursor += 1;
            filled += 1;
        }

        if filled == 0 {
            Plan::Unchanged
        } else {
            Plan::Rewrite(rows)
        }
    }

    fn plan_prune(&self, rows: Vec<RowRecord>) -> Plan {
        let original = rows.clone();
        let mut compacted: Vec<RowRecord> = rows.into_iter().filter(|row| !row.is_empty()).collect();
        let target = self
            .limits
            .clamp(compacted.len().max(self.limits.default_rows));
        compacted.resize(target, RowRecord::empty(self.layout.width()));

        if compacted == original {
            Plan::Unchanged
        } else {
            Plan::Rewrite(compacted)
        }
    }

    fn plan_sort(&self, mut rows: Vec<RowRecord>, suffix: &str, descending: bool) -> Plan {
        let Some(col) = self.layout.column(suffix) else {
            return Plan::Unchanged;
        };
        let original = rows.clone();
        rows.sort_by(|a, b| {
            let (ka, kb) = (parse_num(a.get(col)), parse_num(b.get(col)));
            if descending {
                kb.cmp(&ka)
            } else {
                ka.cmp(&kb)
            }
        });

        if rows == original {
            Plan::Unchanged
        } else {
            Plan::Rewrite(rows)
        }
    }

    fn plan_clear<C: Confirm + ?Sized>(&self, rows: Vec<RowRecord>, confirm: &mut C) -> Plan {
        if rows.iter().all(RowRecord::is_empty) {
            return Plan::Unchanged;
        }
        if !confirm.confirm(&format!("{}を全てクリアしますか？", self.label)) {
            return Plan::Declined;
        }
        let width = self.layout.width();
        Plan::Rewrite(vec![RowRecord::empty(width); rows.len()])
    }
}

fn plan_reorder(mut rows: Vec<RowRecord>, from: usize, to: usize) -> Plan {
    if from == to || from >= rows.len() || to >= rows.len() {
        return Plan::Unchanged;
    }
    let row = rows.remove(from);
    rows.insert(to, row);
    Plan::Rewrite(rows)
}

enum Plan {
    Rewrite(Vec<RowRecord>),
    Unchanged,
    Declined,
}
