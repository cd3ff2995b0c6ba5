//! Order payloads.

use serde::{Deserialize, Serialize};

use super::token::CardResponse;
use super::Environment;

/// Postal address used for billing and delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Merchant-defined key/value pair attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub token: String,
    /// Amount in the minor unit of `currency_code`.
    pub amount: i64,
    pub currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_identifiers: Vec<Entry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorize_only: Option<bool>,
    #[serde(rename = "is3DSOrder", skip_serializing_if = "Option::is_none")]
    pub is_3ds_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_accept_header: Option<String>,
}

/// Lifecycle state of a payment as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Success,
    Failed,
    Authorized,
    PreAuthorized,
    SentForRefund,
    Refunded,
    PartiallyRefunded,
    Settled,
    Cancelled,
    Expired,
    InformationRequested,
    InformationSupplied,
    ChargedBack,
    /// A status this client version does not know about.
    #[serde(other)]
    Unknown,
}

/// Customer identifiers echoed back on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueResponse {
    #[serde(default)]
    pub customer_identifiers: Vec<Entry>,
}

/// Result of creating, capturing or 3DS-authorizing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_response: Option<CardResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_value_response: Option<KeyValueResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    /// Issuer page the shopper must visit for 3DS orders.
    #[serde(rename = "redirectURL", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(rename = "oneTime3DsToken", skip_serializing_if = "Option::is_none")]
    pub one_time_3ds_token: Option<String>,
}

/// An existing order as returned by `GET /orders/{orderCode}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub order_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_response: Option<CardResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
}

/// Body of `POST /orders/{orderCode}/capture`. No amount captures in full.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_amount: Option<i64>,
}

/// Body of a partial `POST /orders/{orderCode}/refund`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundOrderRequest {
    pub refund_amount: i64,
}

/// Shopper details the issuer needs to finish a 3DS authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecureInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_accept_header: Option<String>,
}

/// Body of `PUT /orders/{orderCode}` completing a 3DS flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAuthorizationRequest {
    #[serde(rename = "threeDSResponseCode", skip_serializing_if = "Option::is_none")]
    pub three_ds_response_code: Option<String>,
    #[serde(rename = "threeDSecureInfo", skip_serializing_if = "Option::is_none")]
    pub three_d_secure_info: Option<ThreeDSecureInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_uses_wire_names() {
        let request = OrderRequest {
            token: "tok".to_string(),
            amount: 1999,
            currency_code: "GBP".to_string(),
            name: Some("test name".to_string()),
            is_3ds_order: Some(true),
            customer_identifiers: vec![Entry::new("test key 1", "test value 1")],
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["token"], "tok");
        assert_eq!(json["amount"], 1999);
        assert_eq!(json["currencyCode"], "GBP");
        assert_eq!(json["is3DSOrder"], true);
        assert_eq!(json["customerIdentifiers"][0]["key"], "test key 1");
        assert!(json.get("billingAddress").is_none());
        assert!(json.get("orderDescription").is_none());
    }

    #[test]
    fn order_response_decodes_nested_card_and_ignores_extra_fields() {
        let body = r#"{
            "orderCode": "3ceaac2a-4a8e-4c12-b5d9-855ce2547f20",
            "amount": 1200,
            "currencyCode": "EUR",
            "paymentStatus": "SUCCESS",
            "paymentResponse": {
                "type": "ObfuscatedCard",
                "name": "Shopper Name",
                "expiryMonth": 2,
                "expiryYear": 2017,
                "cardType": "MASTERCARD",
                "maskedCardNumber": "**** **** **** 1111"
            },
            "customerOrderCode": "CustomerOrderCode",
            "environment": "TEST",
            "newPropertyToIgnore": "somevalue"
        }"#;
        let order: OrderResponse = serde_json::from_str(body).unwrap();
        assert_eq!(order.amount, Some(1200));
        assert_eq!(order.payment_status, Some(PaymentStatus::Success));
        assert_eq!(order.environment, Some(Environment::Test));
        let card = order.payment_response.unwrap();
        assert_eq!(card.card_type.as_deref(), Some("MASTERCARD"));
        assert_eq!(card.masked_card_number.as_deref(), Some("**** **** **** 1111"));
    }

    #[test]
    fn unknown_payment_status_is_tolerated() {
        let tx: Transaction =
            serde_json::from_str(r#"{"orderCode":"o","paymentStatus":"SOMETHING_NEW"}"#).unwrap();
        assert_eq!(tx.payment_status, Some(PaymentStatus::Unknown));
    }

    #[test]
    fn three_ds_request_uses_wire_names() {
        let request = OrderAuthorizationRequest {
            three_ds_response_code: Some("IDENTIFIED".to_string()),
            three_d_secure_info: Some(ThreeDSecureInfo {
                shopper_session_id: Some("s".to_string()),
                ..Default::default()
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["threeDSResponseCode"], "IDENTIFIED");
        assert_eq!(json["threeDSecureInfo"]["shopperSessionId"], "s");
    }
}
