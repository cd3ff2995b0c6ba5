//! Payload types exchanged with the payments API.
//!
//! # Design
//! Every type uses the API's camelCase field names. Optional fields are
//! omitted when encoding and default to `None` when absent on decoding; no
//! type rejects unknown fields, so new API fields do not break decoding.
//! Country and currency codes are carried as their ISO 3166 / ISO 4217
//! strings.

pub mod order;
pub mod settings;
pub mod token;
pub mod transfer;
pub mod webhook;

use serde::{Deserialize, Serialize};

pub use order::{
    Address, CaptureOrderRequest, Entry, KeyValueResponse, OrderAuthorizationRequest,
    OrderRequest, OrderResponse, PaymentStatus, RefundOrderRequest, ThreeDSecureInfo,
    Transaction,
};
pub use settings::{OrderSetting, RecurringBillingRequest, RiskSetting, SettingsResponse};
pub use token::{CardRequest, CardResponse, TokenRequest, TokenResponse};
pub use transfer::{Transfer, TransferDetailResponse, TransferSearchResponse, TransferTransaction};
pub use webhook::{
    Notification, OrderStatusChangeNotification, WebhookListResponse, WebhookRequest,
    WebhookResponse,
};

/// Which gateway environment processed a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    Test,
    Live,
}
