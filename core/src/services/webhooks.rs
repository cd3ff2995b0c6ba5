use crate::client::Http;
use crate::codec;
use crate::error::Error;
use crate::types::{Notification, WebhookListResponse, WebhookRequest, WebhookResponse};

use super::path_segment;

/// Webhook registration and inbound notification parsing.
#[derive(Debug, Clone, Copy)]
pub struct WebhookService<'a> {
    http: &'a Http,
}

impl<'a> WebhookService<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    pub fn create(&self, merchant_id: &str, request: &WebhookRequest) -> Result<WebhookResponse, Error> {
        self.http.post(&webhooks_path(merchant_id)?, Some(request))
    }

    pub fn list(&self, merchant_id: &str) -> Result<WebhookListResponse, Error> {
        self.http.get(&webhooks_path(merchant_id)?)
    }

    pub fn delete(&self, merchant_id: &str, webhook_id: &str) -> Result<(), Error> {
        let id = path_segment(webhook_id, "Webhook id")?;
        self.http
            .delete(&format!("{}/{id}", webhooks_path(merchant_id)?))
    }

    /// Parse the body of a notification the API posted to a webhook URL.
    ///
    /// No request is made. Unknown event types fail with `Error::Decode`.
    pub fn process(&self, body: &str) -> Result<Notification, Error> {
        codec::decode(body)
    }
}

fn webhooks_path(merchant_id: &str) -> Result<String, Error> {
    let id = path_segment(merchant_id, "Merchant id")?;
    Ok(format!("/merchants/{id}/webhooks"))
}
