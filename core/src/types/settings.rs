//! Merchant settings payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSetting {
    #[serde(default)]
    pub opt_in_for_recurring_billing: bool,
}

/// Address and card security code verification switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSetting {
    #[serde(default)]
    pub avs_enabled: bool,
    #[serde(default)]
    pub cvc_enabled: bool,
}

impl RiskSetting {
    pub fn new(avs_enabled: bool, cvc_enabled: bool) -> Self {
        Self {
            avs_enabled,
            cvc_enabled,
        }
    }
}

/// Body of the recurring billing update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringBillingRequest {
    pub opt_in_for_recurring_billing: bool,
}

/// Current settings of a merchant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_setting: Option<OrderSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_setting: Option<RiskSetting>,
}
