//! Webhook registration payloads and inbound notifications.

use serde::{Deserialize, Serialize};

use super::Environment;

/// Body of a webhook registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub web_hook_url: String,
    /// Event types to subscribe to, e.g. `ALL` or `ORDER_STATE_CHANGE`.
    pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub web_hook_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_hook_url: Option<String>,
    #[serde(default)]
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookListResponse {
    #[serde(default)]
    pub web_hooks: Vec<WebhookResponse>,
}

/// Payload of an `ORDER_STATE_CHANGE` notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusChangeNotification {
    pub merchant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,
    pub order_code: String,
    /// Raw status string, e.g. `paid` or `REFUNDED`.
    pub payment_status: String,
    pub environment: Environment,
}

/// Notification posted by the API to a registered webhook URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "notificationEventType")]
pub enum Notification {
    #[serde(rename = "ORDER_STATE_CHANGE")]
    OrderStateChange(OrderStatusChangeNotification),
}
