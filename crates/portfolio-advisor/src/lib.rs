//! # portfolio-advisor
//!
//! The `recommendPortfolio` intent: collects a name, age, investment amount
//! and risk tolerance, then recommends a two-fund bond/equity split.
//!
//! ## Allocations
//!
//! ```text
//! ┌────────────┬──────────────────────────────────────────┐
//! │ risk level │ allocation                               │
//! ├────────────┼──────────────────────────────────────────┤
//! │ none       │ 100% bonds (AGG),  0% equities (SPY)     │
//! │ low        │  60% bonds (AGG), 40% equities (SPY)     │
//! │ medium     │  40% bonds (AGG), 60% equities (SPY)     │
//! │ high       │  20% bonds (AGG), 80% equities (SPY)     │
//! └────────────┴──────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dialog_core::InvocationContext;
//!
//! let dispatcher = portfolio_advisor::dispatcher();
//! let response = dispatcher.handle_event(request, &InvocationContext::new())?;
//! ```

pub mod error;
pub mod intent;
pub mod model;
pub mod recommendation;
pub mod validation;

pub use error::AdvisorError;
pub use intent::{INTENT_NAME, RecommendPortfolioIntent};
pub use model::{Allocation, RiskLevel};
pub use recommendation::recommend;
pub use validation::{ParsedInt, PortfolioSlots, ValidationResult, parse_int, validate};

use dialog_core::{Dispatcher, IntentRegistry};

/// Slot names as configured on the bot
pub mod slot {
    pub const FIRST_NAME: &str = "firstName";
    pub const AGE: &str = "age";
    pub const INVESTMENT_AMOUNT: &str = "investmentAmount";
    pub const RISK_LEVEL: &str = "riskLevel";
}

/// Registry with every intent this bot supports
pub fn intents() -> IntentRegistry {
    let mut intents = IntentRegistry::new();
    intents.register(RecommendPortfolioIntent);
    intents
}

/// Dispatcher ready to serve code-hook invocations
pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(intents())
}
