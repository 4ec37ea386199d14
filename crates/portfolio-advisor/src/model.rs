//! Domain Models
//!
//! Risk tolerance levels and the bond/equity split recommended for each.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Bond fund used for the fixed-income share
pub const BOND_TICKER: &str = "AGG";

/// Equity fund used for the stock share
pub const EQUITY_TICKER: &str = "SPY";

/// Risk tolerance chosen by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [Self; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Recommended split for this level
    pub const fn allocation(self) -> Allocation {
        match self {
            Self::None => Allocation::new(100),
            Self::Low => Allocation::new(60),
            Self::Medium => Allocation::new(40),
            Self::High => Allocation::new(20),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive
impl FromStr for RiskLevel {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.as_str()))
            .ok_or_else(|| AdvisorError::UnsupportedRiskLevel(s.to_owned()))
    }
}

/// A two-fund portfolio split. Bonds and equities always sum to 100%.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub bonds_percent: u8,
    pub equities_percent: u8,
}

impl Allocation {
    /// Split with the given bond share; the rest goes to equities.
    /// Shares above 100 are capped.
    pub const fn new(bonds_percent: u8) -> Self {
        let bonds_percent = if bonds_percent > 100 { 100 } else { bonds_percent };
        Self {
            bonds_percent,
            equities_percent: 100 - bonds_percent,
        }
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}% bonds ({BOND_TICKER}), {}% equities ({EQUITY_TICKER})",
            self.bonds_percent, self.equities_percent
        )
    }
}
