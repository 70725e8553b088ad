use serde::{Deserialize, Serialize};
use valuation_model::{FieldAccess, TableId, ValuationSettings};

const T: TableId = TableId::Table1_2;

const REGULAR_EMPLOYEES: &str = "regular_emp";
const PART_TIME_EMPLOYEES: &str = "part_emp";
const INDUSTRY: &str = "industry_type";
const TOTAL_ASSETS: &str = "total_assets";
const TRANSACTION_AMOUNT: &str = "transaction_amount";
const SIZE_RESULT: &str = "size_result";

/// Industry column of the company size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Wholesale,
    RetailService,
    Other,
}

impl Industry {
    pub fn label(self) -> &'static str {
        match self {
            Industry::Wholesale => "卸売業",
            Industry::RetailService => "小売・サービス",
            Industry::Other => "卸売業、小売・サービス業以外",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [Industry::Wholesale, Industry::RetailService, Industry::Other]
            .into_iter()
            .find(|industry| industry.label() == label)
    }

    /// Lower bounds of total assets (thousand yen) for levels 4, 3, 2 and 1.
    fn asset_thresholds(self) -> [i64; 4] {
        match self {
            Industry::Wholesale => [2_000_000, 400_000, 200_000, 70_000],
            Industry::RetailService => [1_500_000, 500_000, 250_000, 40_000],
            Industry::Other => [1_500_000, 500_000, 250_000, 50_000],
        }
    }

    /// Lower bounds of the annual transaction amount (thousand yen) for levels 4, 3, 2 and 1.
    fn transaction_thresholds(self) -> [i64; 4] {
        match self {
            Industry::Wholesale => [3_000_000, 700_000, 350_000, 200_000],
            Industry::RetailService => [2_000_000, 500_000, 250_000, 60_000],
            Industry::Other => [1_500_000, 400_000, 200_000, 80_000],
        }
    }
}

/// Company size, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompanySize {
    Small,
    MediumSmall,
    MediumMedium,
    MediumLarge,
    Large,
}

impl CompanySize {
    fn from_level(level: u8) -> Self {
        match level {
            4.. => CompanySize::Large,
            3 => CompanySize::MediumLarge,
            2 => CompanySize::MediumMedium,
            1 => CompanySize::MediumSmall,
            0 => CompanySize::Small,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompanySize::Large => "大会社",
            CompanySize::MediumLarge => "中0.90",
            CompanySize::MediumMedium => "中0.75",
            CompanySize::MediumSmall => "中0.60",
            CompanySize::Small => "小会社",
        }
    }
}

fn level_by_thresholds(value: i64, thresholds: [i64; 4]) -> u8 {
    thresholds
        .iter()
        .zip([4u8, 3, 2, 1])
        .find(|(threshold, _)| value >= **threshold)
        .map_or(0, |(_, level)| level)
}

fn level_by_employees(employees: i64) -> u8 {
    match employees {
        n if n > 35 => 4,
        n if n > 20 => 2,
        n if n > 5 => 1,
        _ => 0,
    }
}

/// Regular employees plus half of the others (rounded down); `None` until one of the two
/// headcounts is positive.
pub fn employee_count<A: FieldAccess + ?Sized>(access: &A) -> Option<i64> {
    let regular = access.number(T, REGULAR_EMPLOYEES);
    let part = access.number(T, PART_TIME_EMPLOYEES);
    if regular <= 0 && part <= 0 {
        return None;
    }
    Some(regular.saturating_add(part.div_euclid(2)))
}

/// Company size from the employee count, total assets and transaction amount.
///
/// A company at or above the large-company employee count is large regardless of the rest.
/// Otherwise the smaller of the asset and employee levels is compared with the transaction
/// level and the larger one wins.
pub fn classify_company_size<A: FieldAccess + ?Sized>(
    access: &A,
    settings: &ValuationSettings,
) -> Option<CompanySize> {
    let employees = employee_count(access)?;
    if employees >= settings.large_company_employee_count {
        return Some(CompanySize::Large);
    }

    let industry = Industry::from_label(access.text(T, INDUSTRY))?;
    if !access.is_present(T, TOTAL_ASSETS) || !access.is_present(T, TRANSACTION_AMOUNT) {
        return None;
    }

    let assets = level_by_thresholds(access.number(T, TOTAL_ASSETS), industry.asset_thresholds());
    let transactions = level_by_thresholds(
        access.number(T, TRANSACTION_AMOUNT),
        industry.transaction_thresholds(),
    );
    let level = assets.min(level_by_employees(employees)).max(transactions);
    Some(CompanySize::from_level(level))
}

/// Store the label of [`classify_company_size`] in `size_result`. An undetermined size leaves the
/// field as it was.
pub fn apply_company_size<A: FieldAccess + ?Sized>(
    access: &mut A,
    settings: &ValuationSettings,
) -> Option<CompanySize> {
    let size = classify_company_size(access, settings)?;
    access.update_field(T, SIZE_RESULT, size.label());
    Some(size)
}

/// Inputs cleared by the reset action of the company size page.
pub const COMPANY_SIZE_FIELDS: &[&str] = &[
    TOTAL_ASSETS,
    TRANSACTION_AMOUNT,
    REGULAR_EMPLOYEES,
    PART_TIME_EMPLOYEES,
    INDUSTRY,
    SIZE_RESULT,
];
