//! Ordered decision rules producing categorical results.
//!
//! Every rule re-reads its inputs and walks from the first branch on each call. `None` means a
//! required answer or ratio is not available yet.

mod company_size;
mod control;
mod minority;

pub use company_size::{
    apply_company_size, classify_company_size, employee_count, CompanySize, Industry,
    COMPANY_SIZE_FIELDS,
};
pub use control::{
    classify_ratio, classify_shareholder, control_matrix, ControlBand, ControlMatrixCell,
    ShareholderClass,
};
pub use minority::{judge_minority, Answer, MinorityAnswers, ValuationMethod};
