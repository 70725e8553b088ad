use serde::{Deserialize, Serialize};
use valuation_model::{FieldAccess, TableId};

const T: TableId = TableId::Table1_1;

const OFFICER: &str = "minority_officer";
const CENTRAL: &str = "minority_central";
const OTHERS_CENTRAL: &str = "minority_others_central";

/// A yes/no question of the minority judgment, possibly not yet answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl Answer {
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::No, Answer::Unanswered];

    fn from_tokens(raw: &str, yes: &str, no: &str) -> Self {
        if raw == yes {
            Answer::Yes
        } else if raw == no {
            Answer::No
        } else {
            Answer::Unanswered
        }
    }
}

/// Valuation method reached by the minority judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationMethod {
    Principle,
    DividendReturn,
}

impl ValuationMethod {
    pub fn label(self) -> &'static str {
        match self {
            ValuationMethod::Principle => "原則的評価方式等",
            ValuationMethod::DividendReturn => "配当還元方式",
        }
    }
}

/// The three questions, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MinorityAnswers {
    /// Is the holder an officer?
    pub officer: Answer,
    /// Is the holder a central shareholder?
    pub central: Answer,
    /// Is someone else a central shareholder?
    pub others_central: Answer,
}

impl MinorityAnswers {
    pub fn new(officer: Answer, central: Answer, others_central: Answer) -> Self {
        Self {
            officer,
            central,
            others_central,
        }
    }

    pub fn read<A: FieldAccess + ?Sized>(access: &A) -> Self {
        Self {
            officer: Answer::from_tokens(access.text(T, OFFICER), "である", "でない"),
            central: Answer::from_tokens(access.text(T, CENTRAL), "である", "でない"),
            others_central: Answer::from_tokens(access.text(T, OTHERS_CENTRAL), "いる", "いない"),
        }
    }

    /// Walks the chain from the top every time; an unanswered question that is reached
    /// yields `None`.
    pub fn judge(&self) -> Option<ValuationMethod> {
        use Answer::{No, Yes};
        match (self.officer, self.central, self.others_central) {
            (Yes, _, _) => Some(ValuationMethod::Principle),
            (No, Yes, _) => Some(ValuationMethod::Principle),
            (No, No, Yes) => Some(ValuationMethod::DividendReturn),
            (No, No, No) => Some(ValuationMethod::Principle),
            _ => None,
        }
    }
}

pub fn judge_minority<A: FieldAccess + ?Sized>(access: &A) -> Option<ValuationMethod> {
    MinorityAnswers::read(access).judge()
}
