//! Slot Validation
//!
//! Checks the values collected so far during the dialog phase. Checks run
//! in a fixed order (age, investment amount, risk level) and the first
//! failure wins. Slots that have not been collected yet are skipped.

use std::num::IntErrorKind;

use dialog_core::{Message, Slots};
use serde::Serialize;

use crate::model::RiskLevel;
use crate::slot;

/// Ages must be strictly between these bounds
pub const MIN_AGE_EXCLUSIVE: i64 = 0;
pub const MAX_AGE_EXCLUSIVE: i64 = 65;

/// Smallest accepted investment; there is no upper bound
pub const MIN_INVESTMENT: i64 = 5000;

pub const AGE_MESSAGE: &str = "Age should be between 0 and 65.";
pub const INVESTMENT_MESSAGE: &str = "Investment amount should be greater than 5000.";
pub const RISK_LEVEL_MESSAGE: &str = "Risk level should be none, low, medium, or high.";

/// Outcome of parsing a free-text numeric slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedInt {
    Int(i64),
    NotANumber,
}

impl ParsedInt {
    /// True only for a number inside `(low, high)`
    pub const fn within_exclusive(self, low: i64, high: i64) -> bool {
        matches!(self, Self::Int(n) if n > low && n < high)
    }

    /// True only for a number `>= min`
    pub const fn at_least(self, min: i64) -> bool {
        matches!(self, Self::Int(n) if n >= min)
    }
}

/// Parse a slot value as a whole number.
///
/// Surrounding whitespace, a leading sign and single `_` separators between
/// digits (`10_000`) are accepted. Values too large for `i64` saturate rather
/// than failing, so they still compare the way their magnitude says they
/// should.
pub fn parse_int(raw: &str) -> ParsedInt {
    let Some(digits) = strip_digit_separators(raw.trim()) else {
        return ParsedInt::NotANumber;
    };

    match digits.parse::<i64>() {
        Ok(n) => ParsedInt::Int(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => ParsedInt::Int(i64::MAX),
            IntErrorKind::NegOverflow => ParsedInt::Int(i64::MIN),
            _ => ParsedInt::NotANumber,
        },
    }
}

/// Drop `_` separators; each must sit between two digits
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let before = i.checked_sub(1).and_then(|j| bytes.get(j));
            let after = bytes.get(i + 1);
            if !before.is_some_and(u8::is_ascii_digit) || !after.is_some_and(u8::is_ascii_digit) {
                return None;
            }
        }
    }
    Some(s.replace('_', ""))
}

/// The four slots the portfolio intent collects
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortfolioSlots<'a> {
    /// Collected for the conversation only; never validated
    pub first_name: Option<&'a str>,
    pub age: Option<&'a str>,
    pub investment_amount: Option<&'a str>,
    pub risk_level: Option<&'a str>,
}

impl<'a> PortfolioSlots<'a> {
    pub fn from_slots(slots: &'a Slots) -> Self {
        Self {
            first_name: slots.get(slot::FIRST_NAME),
            age: slots.get(slot::AGE),
            investment_amount: slots.get(slot::INVESTMENT_AMOUNT),
            risk_level: slots.get(slot::RISK_LEVEL),
        }
    }
}

/// Validation outcome
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violated_slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl ValidationResult {
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            violated_slot: None,
            message: None,
        }
    }

    pub fn invalid(slot: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            violated_slot: Some(slot.into()),
            message: Some(Message::plain_text(message)),
        }
    }
}

/// Validate the collected slots, reporting only the first violation
pub fn validate(slots: &PortfolioSlots<'_>) -> ValidationResult {
    if let Some(age) = slots.age {
        if !parse_int(age).within_exclusive(MIN_AGE_EXCLUSIVE, MAX_AGE_EXCLUSIVE) {
            return ValidationResult::invalid(slot::AGE, AGE_MESSAGE);
        }
    }

    if let Some(amount) = slots.investment_amount {
        if !parse_int(amount).at_least(MIN_INVESTMENT) {
            return ValidationResult::invalid(slot::INVESTMENT_AMOUNT, INVESTMENT_MESSAGE);
        }
    }

    if let Some(risk) = slots.risk_level {
        if risk.parse::<RiskLevel>().is_err() {
            return ValidationResult::invalid(slot::RISK_LEVEL, RISK_LEVEL_MESSAGE);
        }
    }

    ValidationResult::valid()
}
