//! Dispatch
//!
//! Routes an inbound code-hook request to the handler registered for its
//! intent. This is the single entry point the hosting platform calls.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{DialogError, Result};
use crate::intent::IntentRegistry;
use crate::request::DialogRequest;
use crate::response::DialogResponse;

/// Opaque per-invocation context supplied by the host.
///
/// Only used for log correlation; handlers never see it.
#[derive(Clone, Debug)]
pub struct InvocationContext {
    pub request_id: String,
    pub received_at: DateTime<Utc>,
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl InvocationContext {
    /// New context with a random request ID
    pub fn new() -> Self {
        Self::with_request_id(Uuid::new_v4().to_string())
    }

    /// New context reusing an ID assigned upstream
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            received_at: Utc::now(),
        }
    }
}

/// Intent dispatcher
pub struct Dispatcher {
    intents: IntentRegistry,
}

impl Dispatcher {
    pub const fn new(intents: IntentRegistry) -> Self {
        Self { intents }
    }

    pub const fn intents(&self) -> &IntentRegistry {
        &self.intents
    }

    /// Route a request by intent name
    pub fn dispatch(&self, request: DialogRequest) -> Result<DialogResponse> {
        let intent_name = request.intent_name();
        tracing::debug!(intent = %intent_name, "Dispatching request");

        let Some(handler) = self.intents.get(intent_name) else {
            tracing::warn!(intent = %intent_name, "No handler registered for intent");
            return Err(DialogError::UnsupportedIntent(intent_name.to_owned()));
        };

        handler.handle(request)
    }

    /// Entry point: handle one typed invocation
    pub fn handle_event(
        &self,
        request: DialogRequest,
        context: &InvocationContext,
    ) -> Result<DialogResponse> {
        tracing::info!(
            request_id = %context.request_id,
            received_at = %context.received_at.to_rfc3339(),
            intent = %request.intent_name(),
            source = %request.invocation_source,
            user_id = request.user_id.as_deref().unwrap_or("-"),
            "Handling code-hook invocation"
        );

        let response = self.dispatch(request)?;

        tracing::info!(
            request_id = %context.request_id,
            action = response.dialog_action.kind(),
            "Invocation complete"
        );
        Ok(response)
    }

    /// Entry point for raw JSON events
    pub fn handle_json(
        &self,
        event: serde_json::Value,
        context: &InvocationContext,
    ) -> Result<serde_json::Value> {
        let request: DialogRequest = serde_json::from_value(event)
            .map_err(|e| DialogError::InvalidRequest(e.to_string()))?;

        let response = self.handle_event(request, context)?;
        Ok(serde_json::to_value(response)?)
    }
}
