//! Code-Hook Requests
//!
//! The inbound turn payload sent by the conversational platform each time
//! the user says something while an intent is active.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque attributes the platform keeps for the session.
///
/// Echoed back unmodified on every response. `None` when the platform sent
/// `null` or omitted the field.
pub type SessionAttributes = Option<serde_json::Map<String, serde_json::Value>>;

/// Which phase of the dialog the platform is in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    /// Still collecting slots; validate what has been supplied so far
    DialogCodeHook,
    /// All required slots are filled; produce the final answer
    FulfillmentCodeHook,
}

impl std::fmt::Display for InvocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DialogCodeHook => write!(f, "DialogCodeHook"),
            Self::FulfillmentCodeHook => write!(f, "FulfillmentCodeHook"),
        }
    }
}

/// Whether the user confirmed or denied the intent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationStatus {
    #[default]
    None,
    Confirmed,
    Denied,
}

/// Slot values collected so far, keyed by slot name.
///
/// A slot the user has not filled yet is either missing or `null`; both read
/// back as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slots(BTreeMap<String, Option<String>>);

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a slot, if one has been collected
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Option::as_deref)
    }

    /// Null out a slot so the platform asks for it again.
    ///
    /// The key is kept with a `null` value.
    pub fn clear(&mut self, name: &str) {
        self.0.insert(name.to_owned(), None);
    }

    /// Whether the slot is known at all (filled or `null`)
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Option<V>)> for Slots {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        )
    }
}

/// The intent the platform recognized for this turn
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,

    #[serde(default)]
    pub slots: Slots,

    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,

    /// Per-slot resolution details; carried for logging only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_details: Option<serde_json::Value>,
}

/// Bot the request was issued for
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotInfo {
    pub name: String,
    pub alias: Option<String>,
    pub version: String,
}

/// A single code-hook invocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogRequest {
    pub current_intent: CurrentIntent,

    pub invocation_source: InvocationSource,

    #[serde(default)]
    pub session_attributes: SessionAttributes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotInfo>,
}

impl DialogRequest {
    /// Build a minimal request, mostly useful for tests and local tooling
    pub fn new(intent_name: impl Into<String>, source: InvocationSource, slots: Slots) -> Self {
        Self {
            current_intent: CurrentIntent {
                name: intent_name.into(),
                slots,
                confirmation_status: ConfirmationStatus::None,
                slot_details: None,
            },
            invocation_source: source,
            session_attributes: None,
            request_attributes: None,
            message_version: None,
            user_id: None,
            output_dialog_mode: None,
            input_transcript: None,
            bot: None,
        }
    }

    pub fn with_session_attributes(
        mut self,
        attributes: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        self.session_attributes = Some(attributes);
        self
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub const fn slots(&self) -> &Slots {
        &self.current_intent.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_platform_event() {
        let event = json!({
            "messageVersion": "1.0",
            "invocationSource": "DialogCodeHook",
            "userId": "user-1",
            "outputDialogMode": "Text",
            "inputTranscript": "I am 30",
            "bot": {"name": "RoboAdvisor", "alias": null, "version": "$LATEST"},
            "currentIntent": {
                "name": "recommendPortfolio",
                "slots": {"firstName": "Ana", "age": "30", "investmentAmount": null, "riskLevel": null},
                "confirmationStatus": "None",
                "slotDetails": {}
            },
            "sessionAttributes": {"visits": "2"},
            "requestAttributes": null
        });

        let request: DialogRequest = serde_json::from_value(event).unwrap();
        assert_eq!(request.intent_name(), "recommendPortfolio");
        assert_eq!(request.invocation_source, InvocationSource::DialogCodeHook);
        assert_eq!(request.slots().get("firstName"), Some("Ana"));
        assert_eq!(request.slots().get("investmentAmount"), None);
        assert!(request.slots().contains("investmentAmount"));
        assert_eq!(request.bot.unwrap().version, "$LATEST");
    }

    #[test]
    fn test_confirmation_status_wire_names() {
        for (wire, expected) in [
            ("None", ConfirmationStatus::None),
            ("Confirmed", ConfirmationStatus::Confirmed),
            ("Denied", ConfirmationStatus::Denied),
        ] {
            let intent: CurrentIntent = serde_json::from_value(json!({
                "name": "recommendPortfolio",
                "confirmationStatus": wire
            }))
            .unwrap();
            assert_eq!(intent.confirmation_status, expected, "{wire}");
        }
    }

    #[test]
    fn test_missing_optional_fields() {
        let request: DialogRequest = serde_json::from_value(json!({
            "invocationSource": "FulfillmentCodeHook",
            "currentIntent": {"name": "recommendPortfolio"}
        }))
        .unwrap();

        assert!(request.slots().is_empty());
        assert!(request.session_attributes.is_none());
    }

    #[test]
    fn test_unknown_invocation_source_rejected() {
        let result = serde_json::from_value::<DialogRequest>(json!({
            "invocationSource": "SomethingElse",
            "currentIntent": {"name": "recommendPortfolio"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_clear_keeps_key_as_null() {
        let mut slots: Slots = [("age", Some("70")), ("riskLevel", None::<&str>)]
            .into_iter()
            .collect();
        slots.clear("age");

        assert_eq!(slots.get("age"), None);
        assert_eq!(
            serde_json::to_value(&slots).unwrap(),
            json!({"age": null, "riskLevel": null})
        );
    }
}
