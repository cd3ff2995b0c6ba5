use crate::client::Http;
use crate::error::Error;
use crate::types::{RecurringBillingRequest, RiskSetting, SettingsResponse};

use super::path_segment;

/// Merchant settings operations.
#[derive(Debug, Clone, Copy)]
pub struct SettingsService<'a> {
    http: &'a Http,
}

impl<'a> SettingsService<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    pub fn get(&self, merchant_id: &str) -> Result<SettingsResponse, Error> {
        self.http.get(&settings_path(merchant_id)?)
    }

    /// Opt the merchant in to or out of recurring billing.
    pub fn update_recurring_billing(&self, merchant_id: &str, enabled: bool) -> Result<(), Error> {
        let path = format!("{}/orders/recurringBilling", settings_path(merchant_id)?);
        let body = RecurringBillingRequest {
            opt_in_for_recurring_billing: enabled,
        };
        self.http.put_no_content(&path, Some(&body))
    }

    pub fn update_risk_settings(&self, merchant_id: &str, risk: &RiskSetting) -> Result<(), Error> {
        let path = format!("{}/riskSettings", settings_path(merchant_id)?);
        self.http.put_no_content(&path, Some(risk))
    }
}

fn settings_path(merchant_id: &str) -> Result<String, Error> {
    let id = path_segment(merchant_id, "Merchant id")?;
    Ok(format!("/merchants/{id}/settings"))
}
