use serde::{Deserialize, Serialize};

use crate::{FieldAccess, RowLimits, TableId};

/// How a repeating section maps onto flat field names.
///
/// Row `i` of a layout with prefix `p` is the tuple of fields `{p}_{suffix}_{i}`, one per entry
/// of `suffixes`, in order. The number of live rows is stored in `count_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub table: TableId,
    pub prefix: &'static str,
    pub count_field: &'static str,
    pub suffixes: &'static [&'static str],
}

/// Shareholders of the taxpayer's group (first page).
pub static SHAREHOLDERS: RowLayout = RowLayout {
    table: TableId::Table1_1,
    prefix: "sh",
    count_field: "sh_count",
    suffixes: &["name", "rel", "role", "shares", "votes", "dozoku", "hittou"],
};

/// Asset side of the balance sheet on the net asset page.
pub static ASSETS: RowLayout = RowLayout {
    table: TableId::Table5,
    prefix: "a",
    count_field: "a_count",
    suffixes: &["name", "eval", "book", "note"],
};

/// Liability side of the balance sheet on the net asset page.
pub static LIABILITIES: RowLayout = RowLayout {
    table: TableId::Table5,
    prefix: "l",
    count_field: "l_count",
    suffixes: &["name", "eval", "book", "note"],
};

impl RowLayout {
    pub fn width(&self) -> usize {
        self.suffixes.len()
    }

    /// Column position of `suffix` within a [`RowRecord`].
    pub fn column(&self, suffix: &str) -> Option<usize> {
        self.suffixes.iter().position(|s| *s == suffix)
    }

    pub fn field_name(&self, suffix: &str, index: usize) -> String {
        format!("{}_{}_{}", self.prefix, suffix, index)
    }

    /// Live row count: the stored count clamped into `limits`, or `limits.default_rows` while the
    /// count field is empty.
    pub fn row_count<A: FieldAccess + ?Sized>(&self, access: &A, limits: &RowLimits) -> usize {
        if !access.is_present(self.table, self.count_field) {
            return limits.clamp(limits.default_rows);
        }
        let stored = access.number(self.table, self.count_field);
        limits.clamp(usize::try_from(stored).unwrap_or(0))
    }

    /// Count field as written, without clamping; `0` when empty or negative.
    pub fn stored_count<A: FieldAccess + ?Sized>(&self, access: &A) -> usize {
        usize::try_from(access.number(self.table, self.count_field)).unwrap_or(0)
    }

    pub fn write_count<A: FieldAccess + ?Sized>(&self, access: &mut A, count: usize) {
        access.update_field(self.table, self.count_field, &count.to_string());
    }

    /// Text of one cell, `""` when unset.
    pub fn text<'a, A: FieldAccess + ?Sized>(
        &self,
        access: &'a A,
        suffix: &str,
        index: usize,
    ) -> &'a str {
        access.text(self.table, &self.field_name(suffix, index))
    }

    pub fn number<A: FieldAccess + ?Sized>(&self, access: &A, suffix: &str, index: usize) -> i64 {
        access.number(self.table, &self.field_name(suffix, index))
    }

    pub fn is_checked<A: FieldAccess + ?Sized>(
        &self,
        access: &A,
        suffix: &str,
        index: usize,
    ) -> bool {
        access.is_checked(self.table, &self.field_name(suffix, index))
    }

    pub fn read_row<A: FieldAccess + ?Sized>(&self, access: &A, index: usize) -> RowRecord {
        RowRecord {
            values: self
                .suffixes
                .iter()
                .map(|suffix| self.text(access, suffix, index).to_string())
                .collect(),
        }
    }

    /// Materialize rows `[0, count)`.
    pub fn read_rows<A: FieldAccess + ?Sized>(&self, access: &A, count: usize) -> Vec<RowRecord> {
        (0..count).map(|i| self.read_row(access, i)).collect()
    }

    pub fn write_row<A: FieldAccess + ?Sized>(&self, access: &mut A, index: usize, row: &RowRecord) {
        for (col, suffix) in self.suffixes.iter().enumerate() {
            access.update_field(self.table, &self.field_name(suffix, index), row.get(col));
        }
    }

    pub fn clear_row<A: FieldAccess + ?Sized>(&self, access: &mut A, index: usize) {
        for suffix in self.suffixes {
            access.update_field(self.table, &self.field_name(suffix, index), "");
        }
    }
}

/// One materialized row: the values of a layout's suffix fields, in layout order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowRecord {
    pub values: Vec<String>,
}

impl RowRecord {
    pub fn empty(width: usize) -> Self {
        Self {
            values: vec![String::new(); width],
        }
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// A row is empty when every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    pub fn get(&self, col: usize) -> &str {
        self.values.get(col).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, col: usize, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(col) {
            *slot = value.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldStore;

    #[test]
    fn field_names_follow_prefix_suffix_index() {
        assert_eq!(ASSETS.field_name("eval", 3), "a_eval_3");
        assert_eq!(SHAREHOLDERS.field_name("votes", 0), "sh_votes_0");
        assert_eq!(LIABILITIES.column("note"), Some(3));
    }

    #[test]
    fn row_count_defaults_until_written() {
        let limits = RowLimits::new(1, 20, 7);
        let mut store = FieldStore::new();
        assert_eq!(SHAREHOLDERS.row_count(&store, &limits), 7);

        SHAREHOLDERS.write_count(&mut store, 3);
        assert_eq!(SHAREHOLDERS.row_count(&store, &limits), 3);

        store.set(TableId::Table1_1, "sh_count", "99");
        assert_eq!(SHAREHOLDERS.row_count(&store, &limits), 20);
        assert_eq!(SHAREHOLDERS.stored_count(&store), 99);

        store.set(TableId::Table1_1, "sh_count", "-4");
        assert_eq!(SHAREHOLDERS.row_count(&store, &limits), 1);
        assert_eq!(SHAREHOLDERS.stored_count(&store), 0);
    }

    #[test]
    fn read_and_write_rows_round_trip_through_fields() {
        let mut store = FieldStore::new();
        let row = RowRecord::from_values(["現金預金", "1200", "1200", ""]);
        ASSETS.write_row(&mut store, 2, &row);

        assert_eq!(store.get(TableId::Table5, "a_name_2"), Some("現金預金"));
        assert_eq!(store.get(TableId::Table5, "a_note_2"), None);
        assert_eq!(ASSETS.read_row(&store, 2), row);

        ASSETS.clear_row(&mut store, 2);
        assert!(ASSETS.read_row(&store, 2).is_empty());
        assert!(store.is_empty());
    }
}
