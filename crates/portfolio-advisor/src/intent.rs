//! `recommendPortfolio` Intent
//!
//! Dialog phase: validate what the user has said so far and either re-ask
//! for the first bad slot or let the platform keep collecting.
//! Fulfillment phase: answer with the allocation for the chosen risk level.

use dialog_core::{
    DialogRequest, DialogResponse, FulfillmentState, IntentHandler, InvocationSource, Message,
    Result, close, delegate, elicit_slot,
};

use crate::recommendation::{INVALID_RISK_LEVEL, recommend};
use crate::validation::{PortfolioSlots, validate};

pub const INTENT_NAME: &str = "recommendPortfolio";

/// Handler for the portfolio recommendation intent
#[derive(Clone, Copy, Debug, Default)]
pub struct RecommendPortfolioIntent;

impl RecommendPortfolioIntent {
    fn validate_slots(request: DialogRequest) -> DialogResponse {
        let DialogRequest {
            current_intent,
            session_attributes,
            ..
        } = request;
        let mut slots = current_intent.slots;

        let result = {
            let values = PortfolioSlots::from_slots(&slots);
            tracing::debug!(
                first_name = ?values.first_name,
                age = ?values.age,
                investment_amount = ?values.investment_amount,
                risk_level = ?values.risk_level,
                "Validating slots"
            );
            validate(&values)
        };

        match (result.violated_slot, result.message) {
            (Some(violated), Some(message)) if !result.is_valid => {
                tracing::info!(slot = %violated, "Slot failed validation, eliciting again");
                slots.clear(&violated);
                elicit_slot(
                    session_attributes,
                    current_intent.name,
                    slots,
                    violated,
                    message,
                )
            }
            _ => delegate(session_attributes, slots),
        }
    }

    fn fulfill(request: DialogRequest) -> DialogResponse {
        let allocation = request
            .current_intent
            .slots
            .get(crate::slot::RISK_LEVEL)
            .map_or_else(|| INVALID_RISK_LEVEL.to_owned(), recommend);

        tracing::info!(%allocation, "Recommending portfolio");

        close(
            request.session_attributes,
            FulfillmentState::Fulfilled,
            Message::plain_text(format!(
                "Thank you for the previous information. This is the recommended portfolio allocation: {allocation}"
            )),
        )
    }
}

impl IntentHandler for RecommendPortfolioIntent {
    fn name(&self) -> &str {
        INTENT_NAME
    }

    fn handle(&self, request: DialogRequest) -> Result<DialogResponse> {
        tracing::info!(source = %request.invocation_source, "Calling recommend portfolio");

        Ok(match request.invocation_source {
            InvocationSource::DialogCodeHook => Self::validate_slots(request),
            InvocationSource::FulfillmentCodeHook => Self::fulfill(request),
        })
    }
}
