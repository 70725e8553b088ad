use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One page of the valuation worksheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TableId {
    /// Shareholder and valuation-method determination.
    #[serde(rename = "table1_1")]
    Table1_1,
    /// Company size determination.
    #[serde(rename = "table1_2")]
    Table1_2,
    #[serde(rename = "table2")]
    Table2,
    #[serde(rename = "table3")]
    Table3,
    /// Comparable-industry valuation inputs (capital, dividends, profit, net assets).
    #[serde(rename = "table4")]
    Table4,
    /// Net asset value per share.
    #[serde(rename = "table5")]
    Table5,
    #[serde(rename = "table6")]
    Table6,
    #[serde(rename = "table7")]
    Table7,
    #[serde(rename = "table8")]
    Table8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown table id '{0}'")]
pub struct TableIdParseError(pub String);

impl TableId {
    pub const ALL: [TableId; 9] = [
        TableId::Table1_1,
        TableId::Table1_2,
        TableId::Table2,
        TableId::Table3,
        TableId::Table4,
        TableId::Table5,
        TableId::Table6,
        TableId::Table7,
        TableId::Table8,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TableId::Table1_1 => "table1_1",
            TableId::Table1_2 => "table1_2",
            TableId::Table2 => "table2",
            TableId::Table3 => "table3",
            TableId::Table4 => "table4",
            TableId::Table5 => "table5",
            TableId::Table6 => "table6",
            TableId::Table7 => "table7",
            TableId::Table8 => "table8",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableId {
    type Err = TableIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TableId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TableIdParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_ids() {
        for id in TableId::ALL {
            assert_eq!(id.as_str().parse::<TableId>(), Ok(id));
        }
        assert_eq!(" Table5 ".parse::<TableId>(), Ok(TableId::Table5));
        assert_eq!(
            "table9".parse::<TableId>(),
            Err(TableIdParseError("table9".to_string()))
        );
    }
}
