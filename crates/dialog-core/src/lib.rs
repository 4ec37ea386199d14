//! # dialog-core
//!
//! Code-hook protocol for a turn-based conversational platform, plus the
//! intent registry and dispatcher that route each turn to a handler.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────┐   DialogRequest   ┌────────────┐   by intent name   ┌───────────────┐
//! │ Platform │──────────────────▶│ Dispatcher │───────────────────▶│ IntentHandler │
//! │          │◀──────────────────│            │◀───────────────────│               │
//! └──────────┘   DialogResponse  └────────────┘                    └───────────────┘
//!                (ElicitSlot | Delegate | Close)
//! ```
//!
//! The platform owns the conversation state. Handlers are stateless: every
//! turn carries the slots collected so far and the session attributes, and
//! every response echoes the session attributes back.

pub mod dispatch;
pub mod error;
pub mod intent;
pub mod message;
pub mod request;
pub mod response;

pub use dispatch::{Dispatcher, InvocationContext};
pub use error::{DialogError, Result};
pub use intent::{IntentHandler, IntentRegistry};
pub use message::{ContentType, Message};
pub use request::{DialogRequest, InvocationSource, SessionAttributes, Slots};
pub use response::{DialogAction, DialogResponse, FulfillmentState, close, delegate, elicit_slot};
