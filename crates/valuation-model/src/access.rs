use crate::{TableId, CHECKED};

/// Read/write port onto worksheet fields.
///
/// This is the whole surface the valuation rules depend on; hosts (UI state, persistence
/// adapters, tests) implement it over whatever storage they use. [`crate::FieldStore`] is the
/// in-memory implementation.
///
/// `field` returns `None` for a field that was never written or was cleared: an empty string is
/// never observable as a value.
pub trait FieldAccess {
    fn field(&self, table: TableId, name: &str) -> Option<&str>;

    /// Overwrite a field. Writing `""` clears it. No validation happens at this layer.
    fn update_field(&mut self, table: TableId, name: &str, value: &str);

    /// Raw text of a field, `""` when unset.
    fn text(&self, table: TableId, name: &str) -> &str {
        self.field(table, name).unwrap_or("")
    }

    /// Lenient integer value of a field; unset or unparseable fields are `0`.
    fn number(&self, table: TableId, name: &str) -> i64 {
        valuation_format::parse_num(self.text(table, name))
    }

    fn is_present(&self, table: TableId, name: &str) -> bool {
        self.field(table, name).is_some()
    }

    /// Whether a checkbox-coded field holds the checked marker.
    fn is_checked(&self, table: TableId, name: &str) -> bool {
        self.field(table, name) == Some(CHECKED)
    }
}
