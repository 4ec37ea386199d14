//! Error Types for the Portfolio Advisor

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Risk level not supported: {0}")]
    UnsupportedRiskLevel(String),
}
