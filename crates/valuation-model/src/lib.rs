//! `valuation-model` defines the in-memory state of the valuation worksheet.
//!
//! All user input lives in a sparse [`FieldStore`] addressed by `(TableId, field name)`. Other
//! layers never hold their own copy of worksheet data:
//! - the derivation and classification rules read through [`FieldAccess`]
//! - row operations materialize [`RowRecord`]s from a [`RowLayout`], edit them, and write the
//!   whole range back
//! - persistence collaborators exchange JSON snapshots ([`FieldStore::to_json`])

mod access;
mod preset;
mod row;
mod settings;
mod store;
mod table_id;

pub use access::FieldAccess;
pub use preset::{
    Preset, ASSET_PRESETS, INSURANCE_GAIN_TAX_SUBJECT, LIABILITY_PRESETS, NOTE_LAND, NOTE_STOCKS,
};
pub use row::{RowLayout, RowRecord, ASSETS, LIABILITIES, SHAREHOLDERS};
pub use settings::{RowLimits, ValuationSettings};
pub use store::{FieldStore, SnapshotError};
pub use table_id::{TableId, TableIdParseError};

/// Current snapshot schema version.
///
/// Embedded into every [`FieldStore`] snapshot so newer payloads are rejected instead of being
/// misread.
pub const SCHEMA_VERSION: u32 = 1;

/// Value written to a checkbox field when it is ticked.
pub const CHECKED: &str = "1";
