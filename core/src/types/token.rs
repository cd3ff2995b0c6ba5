//! Token payloads.

use serde::{Deserialize, Serialize};

/// Discriminator the API expects on card payment methods.
pub const CARD_TYPE: &str = "Card";

/// Card details submitted when creating a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRequest {
    #[serde(rename = "type")]
    pub method_type: String,
    pub name: String,
    pub card_number: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<u16>,
}

impl CardRequest {
    pub fn new(
        name: impl Into<String>,
        card_number: impl Into<String>,
        expiry_month: u8,
        expiry_year: u16,
    ) -> Self {
        Self {
            method_type: CARD_TYPE.to_string(),
            name: name.into(),
            card_number: card_number.into(),
            expiry_month,
            expiry_year,
            cvc: None,
            issue_number: None,
            start_month: None,
            start_year: None,
        }
    }

    #[must_use]
    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }
}

/// Body of `POST /tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub client_key: String,
    #[serde(default)]
    pub reusable: bool,
    pub payment_method: CardRequest,
}

/// Obfuscated card details returned on tokens and orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub method_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_scheme_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_scheme_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepaid: Option<String>,
}

/// A stored payment token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub reusable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<CardResponse>,
}
