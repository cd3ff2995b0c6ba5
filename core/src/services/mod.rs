//! Resource services: thin, per-resource callers of [`Http`].
//!
//! Each service validates its identifiers, interpolates them into the
//! resource path and delegates to the shared client. Errors from the API are
//! returned unchanged.

mod orders;
mod settings;
mod tokens;
mod transfers;
mod webhooks;

pub use orders::OrderService;
pub use settings::SettingsService;
pub use tokens::TokenService;
pub use transfers::TransferService;
pub use webhooks::WebhookService;

use url::form_urlencoded;

use crate::client::Http;
use crate::config::ClientConfig;
use crate::error::Error;

/// Entry point for the payments API.
///
/// ```no_run
/// use payments_core::{ClientConfig, PaymentsClient};
///
/// let config = ClientConfig::new("https://api.worldpay.com/v1", "YOUR_SERVICE_KEY")?;
/// let client = PaymentsClient::new(config);
/// match client.tokens().get("TEST_SU_abc") {
///     Ok(token) => println!("reusable: {}", token.reusable),
///     Err(e) => match e.api_error() {
///         Some(api) => println!("error code: {:?}", api.custom_code()),
///         None => println!("request failed: {e}"),
///     },
/// }
/// # Ok::<(), payments_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    http: Http,
}

impl PaymentsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Http::new(config),
        }
    }

    /// Build a client from the `PAYMENTS_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// Wrap an already configured client, e.g. one with a custom transport.
    pub fn from_http(http: Http) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &Http {
        &self.http
    }

    pub fn orders(&self) -> OrderService<'_> {
        OrderService::new(&self.http)
    }

    pub fn tokens(&self) -> TokenService<'_> {
        TokenService::new(&self.http)
    }

    pub fn settings(&self) -> SettingsService<'_> {
        SettingsService::new(&self.http)
    }

    pub fn transfers(&self) -> TransferService<'_> {
        TransferService::new(&self.http)
    }

    pub fn webhooks(&self) -> WebhookService<'_> {
        WebhookService::new(&self.http)
    }
}

/// Reject empty or blank identifiers before they reach a URL.
fn require_text<'v>(value: &'v str, what: &str) -> Result<&'v str, Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{what} must not be empty")));
    }
    Ok(value)
}

/// Validate an identifier and percent-encode it as a single path segment, so
/// `/`, `?`, `#` and `%` cannot change the request target.
fn path_segment(value: &str, what: &str) -> Result<String, Error> {
    let value = require_text(value, what)?;
    if value == "." || value == ".." {
        return Err(Error::InvalidArgument(format!("{what} must not be a dot segment")));
    }
    // byte_serialize writes a space as `+` and a literal `+` as `%2B`.
    Ok(form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use crate::client::Http;
    use crate::config::ClientConfig;
    use crate::error::TransportError;
    use crate::http::{HttpRequest, HttpResponse, Transport};

    /// Transport that records requests and answers with queued responses.
    #[derive(Clone, Default)]
    pub(crate) struct Recorder {
        pub(crate) responses: Arc<Mutex<VecDeque<(u16, String)>>>,
        pub(crate) requests: Arc<Mutex<Vec<HttpRequest>>>,
    }

    impl Recorder {
        pub(crate) fn reply(&self, status: u16, body: &str) -> &Self {
            self.responses
                .lock()
                .unwrap()
                .push_back((status, body.to_string()));
            self
        }

        pub(crate) fn last(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().expect("no request sent")
        }

        pub(crate) fn count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub(crate) fn http(&self) -> Http {
            let config = ClientConfig::new("http://gateway.test", "T_S_key").unwrap();
            Http::with_transport(config, self.clone())
        }
    }

    impl Transport for Recorder {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            let (status, body) = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or((200, String::new()));
            Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body,
            })
        }
    }
}
