#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Computation core of the unlisted-stock valuation worksheet.
//!
//! The engine owns no state. Everything is read from, and written back to, a host-provided
//! [`FieldAccess`] implementation:
//!
//! - [`derive`] holds the numeric rules. Each one is a pure function of the current fields and is
//!   re-run on every read; `None` means "not computable from the current inputs", which is
//!   distinct from a computed zero. [`DerivationId`] addresses every rule by name.
//! - [`rows`] manages the repeating sections (shareholders, assets, liabilities). Every
//!   [`RowOp`] materializes the section, edits it in memory and rewrites the whole range in one
//!   batch, so a partially applied operation is never observable.
//! - [`classify`] walks the ordered decision rules (shareholder class, minority judgment, company
//!   size). They re-evaluate from the top on every call and return `None` while an answer they
//!   need is missing.
//!
//! Destructive row operations ask the host through the [`Confirm`] port; a refusal leaves the
//! fields untouched.

pub mod classify;
pub mod confirm;
pub mod derive;
pub mod rows;

pub use classify::{
    classify_company_size, classify_shareholder, control_matrix, judge_minority, Answer,
    CompanySize, ControlBand, ControlMatrixCell, Industry, MinorityAnswers, ShareholderClass,
    ValuationMethod,
};
pub use confirm::Confirm;
pub use derive::{evaluate, DerivationId, FiscalYear};
pub use rows::{RowCollection, RowOp, RowOutcome};

pub use valuation_model::{FieldAccess, FieldStore, TableId, ValuationSettings};
