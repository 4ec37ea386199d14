//! End-to-end code-hook scenarios through the dispatcher.

use dialog_core::{DialogError, InvocationContext};
use serde_json::{Value, json};

fn invoke(event: Value) -> Result<Value, DialogError> {
    portfolio_advisor::dispatcher().handle_json(event, &InvocationContext::with_request_id("test"))
}

fn event(source: &str, intent: &str, slots: Value) -> Value {
    json!({
        "messageVersion": "1.0",
        "invocationSource": source,
        "userId": "user-1",
        "outputDialogMode": "Text",
        "bot": {"name": "RoboAdvisor", "alias": "$LATEST", "version": "$LATEST"},
        "currentIntent": {
            "name": intent,
            "slots": slots,
            "confirmationStatus": "None"
        },
        "sessionAttributes": {"lastTopic": "retirement"}
    })
}

#[test]
fn dialog_hook_with_valid_slots_delegates() {
    let slots = json!({
        "firstName": "Ana",
        "age": "30",
        "investmentAmount": "10000",
        "riskLevel": "low"
    });
    let response = invoke(event("DialogCodeHook", "recommendPortfolio", slots.clone())).unwrap();

    assert_eq!(
        response,
        json!({
            "sessionAttributes": {"lastTopic": "retirement"},
            "dialogAction": {"type": "Delegate", "slots": slots}
        })
    );
}

#[test]
fn dialog_hook_with_out_of_range_age_elicits_age() {
    let response = invoke(event(
        "DialogCodeHook",
        "recommendPortfolio",
        json!({"firstName": "Ana", "age": "70", "investmentAmount": null, "riskLevel": null}),
    ))
    .unwrap();

    assert_eq!(
        response,
        json!({
            "sessionAttributes": {"lastTopic": "retirement"},
            "dialogAction": {
                "type": "ElicitSlot",
                "intentName": "recommendPortfolio",
                "slots": {"firstName": "Ana", "age": null, "investmentAmount": null, "riskLevel": null},
                "slotToElicit": "age",
                "message": {"contentType": "PlainText", "content": "Age should be between 0 and 65."}
            }
        })
    );
}

#[test]
fn dialog_hook_reports_age_before_risk_level() {
    let response = invoke(event(
        "DialogCodeHook",
        "recommendPortfolio",
        json!({"age": "0", "riskLevel": "extreme"}),
    ))
    .unwrap();

    assert_eq!(response["dialogAction"]["slotToElicit"], "age");
    assert_eq!(response["dialogAction"]["slots"]["riskLevel"], "extreme");
}

#[test]
fn dialog_hook_with_garbled_amount_elicits_amount() {
    let response = invoke(event(
        "DialogCodeHook",
        "recommendPortfolio",
        json!({"age": "45", "investmentAmount": "a lot"}),
    ))
    .unwrap();

    assert_eq!(response["dialogAction"]["type"], "ElicitSlot");
    assert_eq!(response["dialogAction"]["slotToElicit"], "investmentAmount");
    assert_eq!(response["dialogAction"]["slots"]["investmentAmount"], Value::Null);
}

#[test]
fn fulfillment_hook_closes_with_recommendation() {
    let response = invoke(event(
        "FulfillmentCodeHook",
        "recommendPortfolio",
        json!({"firstName": "Ana", "age": "30", "investmentAmount": "10000", "riskLevel": "medium"}),
    ))
    .unwrap();

    assert_eq!(response["sessionAttributes"], json!({"lastTopic": "retirement"}));
    assert_eq!(response["dialogAction"]["type"], "Close");
    assert_eq!(response["dialogAction"]["fulfillmentState"], "Fulfilled");
    assert_eq!(response["dialogAction"]["message"]["contentType"], "PlainText");
    assert!(
        response["dialogAction"]["message"]["content"]
            .as_str()
            .unwrap()
            .contains("40% bonds (AGG), 60% equities (SPY)")
    );
}

#[test]
fn null_session_attributes_are_echoed_as_null() {
    let mut request = event("FulfillmentCodeHook", "recommendPortfolio", json!({"riskLevel": "none"}));
    request["sessionAttributes"] = Value::Null;

    let response = invoke(request).unwrap();
    assert_eq!(response["sessionAttributes"], Value::Null);
}

#[test]
fn unknown_intent_is_rejected() {
    let err = invoke(event("DialogCodeHook", "orderFlowers", json!({}))).unwrap_err();

    assert!(matches!(err, DialogError::UnsupportedIntent(ref name) if name == "orderFlowers"));
    assert_eq!(err.to_string(), "Intent with name orderFlowers not supported");
}

#[test]
fn only_portfolio_intent_is_registered() {
    let dispatcher = portfolio_advisor::dispatcher();
    assert_eq!(dispatcher.intents().names(), vec!["recommendPortfolio"]);
}
