//! Repeating-row sections.
//!
//! A section's rows live in flat fields (`{prefix}_{suffix}_{i}`, see
//! [`valuation_model::RowLayout`]) with the live count in its own field. Rows `[0, count)` are
//! the section; every field at `i >= count` is empty. [`RowCollection::apply`] keeps that true
//! for every [`RowOp`].

mod collection;
mod ops;

pub use collection::RowCollection;
pub use ops::{RowOp, RowOutcome};
