//! Code-Hook Responses
//!
//! Every invocation returns exactly one `DialogResponse`. The `dialogAction`
//! tells the platform what to do next:
//!
//! ```text
//! ElicitSlot  → re-prompt the user for one slot
//! Delegate    → let the platform continue its own slot filling
//! Close       → end the dialog with a final message
//! ```

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::request::{SessionAttributes, Slots};

/// Outcome reported when closing a dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// Next step for the platform
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
    },
    Delegate {
        slots: Slots,
    },
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

impl DialogAction {
    /// Wire name of the action type
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ElicitSlot { .. } => "ElicitSlot",
            Self::Delegate { .. } => "Delegate",
            Self::Close { .. } => "Close",
        }
    }
}

/// Response envelope returned to the platform
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

/// Ask the user for `slot_to_elicit` again
pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

/// Hand control back to the platform's slot filling
pub const fn delegate(session_attributes: SessionAttributes, slots: Slots) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

/// End the dialog
pub const fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}
