//! Request construction and response classification for the payments API.
//!
//! # Design
//! `Http` holds an immutable `ClientConfig` and a `Transport`; it carries no
//! mutable state between calls, so one instance can be cloned and used from
//! several threads at once. Every call goes through the same three steps:
//!
//! 1. `build` turns `(method, path, body)` into an `HttpRequest` with the
//!    authorization, content negotiation and client identification headers.
//! 2. The transport executes it, bounded by the configured timeouts.
//! 3. `parse_response` branches on the status: `>= 300` becomes an
//!    `ApiError` carrying the redacted request body, anything below is decoded
//!    into the caller's type.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec;
use crate::config::ClientConfig;
use crate::error::{ApiError, Error};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::redact::redact;

pub const AUTHORIZATION: &str = "Authorization";
pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CLIENT_USER_AGENT: &str = "X-wp-client-user-agent";
pub const APPLICATION_JSON: &str = "application/json";

/// Lowest status treated as a failure. Redirects that reach the client count.
pub const HTTP_ERROR_THRESHOLD: u16 = 300;

pub const API_VERSION: &str = "V1";

/// Convenience for calls that send no payload.
pub const NO_BODY: Option<&()> = None;

/// Blocking client for the payments REST API.
#[derive(Clone)]
pub struct Http {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    client_identification: Arc<str>,
}

impl Http {
    /// Client over a `ureq` transport configured with the timeouts in `config`.
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
            client_identification: client_identification().into(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Request construction
    // -----------------------------------------------------------------------

    /// Describe a call to `path` relative to the configured base URL.
    ///
    /// `path` is appended verbatim. `body` is serialized only for POST and PUT;
    /// GET and DELETE requests never carry one.
    pub fn build<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, Error> {
        let body = match body {
            Some(value) if method.sends_body() => Some(codec::encode(value)?),
            _ => None,
        };
        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url()),
            headers: vec![
                (AUTHORIZATION.to_string(), self.config.service_key().to_string()),
                (ACCEPT.to_string(), APPLICATION_JSON.to_string()),
                (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
                (CLIENT_USER_AGENT.to_string(), self.client_identification.to_string()),
            ],
            body,
        })
    }

    // -----------------------------------------------------------------------
    // Execution
    // -----------------------------------------------------------------------

    /// Execute `request` and decode a success body into `T`.
    pub fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, Error> {
        let response = self.exchange(&request)?;
        parse_response(response, request.body.as_deref())
    }

    /// Execute `request` where no payload is expected back.
    ///
    /// Fails only when the API reports an error or the call does not complete.
    pub fn send_expecting_error(&self, request: HttpRequest) -> Result<(), Error> {
        let response = self.exchange(&request)?;
        check_status(&response, request.body.as_deref())?;
        Ok(())
    }

    fn exchange(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let logged_body = request.body.as_deref().map(redact);
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            body = logged_body.as_deref().unwrap_or(""),
            "sending request"
        );

        let response = self.transport.execute(request).map_err(|e| {
            tracing::warn!(
                method = request.method.as_str(),
                url = %request.url,
                kind = %e.kind,
                error = %e.message,
                "request did not complete"
            );
            Error::Transport(e)
        })?;

        tracing::debug!(status = response.status, url = %request.url, "received response");
        Ok(response)
    }

    // -----------------------------------------------------------------------
    // Shorthands used by the resource services
    // -----------------------------------------------------------------------

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let request = self.build(HttpMethod::Get, path, NO_BODY)?;
        self.send(request)
    }

    pub fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build(HttpMethod::Post, path, body)?;
        self.send(request)
    }

    pub fn post_no_content<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error> {
        let request = self.build(HttpMethod::Post, path, body)?;
        self.send_expecting_error(request)
    }

    pub fn put<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build(HttpMethod::Put, path, body)?;
        self.send(request)
    }

    pub fn put_no_content<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error> {
        let request = self.build(HttpMethod::Put, path, body)?;
        self.send_expecting_error(request)
    }

    pub fn delete(&self, path: &str) -> Result<(), Error> {
        let request = self.build(HttpMethod::Delete, path, NO_BODY)?;
        self.send_expecting_error(request)
    }
}

impl fmt::Debug for Http {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Http")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Classify `response` and decode its body into `T` on success.
///
/// `request_body` is the payload that was sent; it is attached, redacted, to
/// the `ApiError` when the status signals a failure.
pub fn parse_response<T: DeserializeOwned>(
    response: HttpResponse,
    request_body: Option<&str>,
) -> Result<T, Error> {
    check_status(&response, request_body)?;
    codec::decode(&response.body)
}

/// Turn a status of 300 or above into an `ApiError`.
pub fn check_status(response: &HttpResponse, request_body: Option<&str>) -> Result<(), ApiError> {
    if response.status < HTTP_ERROR_THRESHOLD {
        return Ok(());
    }
    let error = ApiError::from_response(response.status, &response.body, request_body);
    tracing::warn!(
        status = error.status_code(),
        custom_code = error.custom_code().unwrap_or(""),
        message = error.message().unwrap_or(""),
        "API reported an error"
    );
    Err(error)
}

/// Value of the client identification header.
///
/// Informational only; the API does not route on it.
pub fn client_identification() -> String {
    let lang_version = option_env!("CARGO_PKG_RUST_VERSION")
        .filter(|v| !v.is_empty())
        .unwrap_or("N/A");
    [
        format!("os.name={}", std::env::consts::OS),
        format!("os.arch={}", std::env::consts::ARCH),
        format!("lang.version={lang_version}"),
        format!("api.version={API_VERSION}"),
        "lang=Rust".to_string(),
        "owner=Worldpay".to_string(),
        format!("build={}", env!("CARGO_PKG_VERSION")),
    ]
    .join(",")
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use serde::Deserialize;

    use super::*;
    use crate::error::{TransportError, TransportErrorKind};

    /// Transport that records requests and replays canned outcomes.
    #[derive(Default)]
    struct StubTransport {
        outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
        seen: Arc<Mutex<Vec<HttpRequest>>>,
    }

    impl StubTransport {
        fn replying(status: u16, body: &str) -> Self {
            let stub = Self::default();
            stub.outcomes.lock().unwrap().push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
            stub
        }

        fn failing(kind: TransportErrorKind) -> Self {
            let stub = Self::default();
            stub.outcomes
                .lock()
                .unwrap()
                .push_back(Err(TransportError::new(kind, "simulated")));
            stub
        }
    }

    impl Transport for StubTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("no canned outcome left")
        }
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TokenOnly {
        token: String,
    }

    #[derive(Serialize)]
    struct Login<'a> {
        name: &'a str,
        password: &'a str,
    }

    fn config() -> ClientConfig {
        ClientConfig::new("http://localhost:3000", "T_S_test-key").unwrap()
    }

    fn client(transport: StubTransport) -> (Http, Arc<Mutex<Vec<HttpRequest>>>) {
        let seen = Arc::clone(&transport.seen);
        (Http::with_transport(config(), transport), seen)
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // build
    // -----------------------------------------------------------------------

    #[test]
    fn build_get_attaches_standard_headers() {
        let (http, _) = client(StubTransport::default());
        let req = http.build(HttpMethod::Get, "/tokens/abc", NO_BODY).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/tokens/abc");
        assert!(req.body.is_none());

        let names: Vec<&str> = req.headers.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, [AUTHORIZATION, ACCEPT, CONTENT_TYPE, CLIENT_USER_AGENT]);
        assert_eq!(req.header(AUTHORIZATION), Some("T_S_test-key"));
        assert_eq!(req.header(ACCEPT), Some(APPLICATION_JSON));
        assert_eq!(req.header(CONTENT_TYPE), Some(APPLICATION_JSON));
    }

    #[test]
    fn build_post_serializes_body() {
        let (http, _) = client(StubTransport::default());
        let payload = TokenOnly {
            token: "abc".to_string(),
        };
        let req = http.build(HttpMethod::Post, "/orders", Some(&payload)).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body.as_deref(), Some(r#"{"token":"abc"}"#));
    }

    #[test]
    fn build_put_without_body_sends_none() {
        let (http, _) = client(StubTransport::default());
        let req = http.build(HttpMethod::Put, "/orders/1", NO_BODY).unwrap();
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_and_delete_drop_supplied_body() {
        let (http, _) = client(StubTransport::default());
        let payload = TokenOnly {
            token: "abc".to_string(),
        };
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let req = http.build(method, "/orders/1", Some(&payload)).unwrap();
            assert!(req.body.is_none(), "{method:?}");
        }
    }

    #[test]
    fn build_uses_identical_headers_for_every_method() {
        let (http, _) = client(StubTransport::default());
        let reference = http.build(HttpMethod::Get, "/x", NO_BODY).unwrap().headers;
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete] {
            let req = http.build(method, "/x", NO_BODY).unwrap();
            assert_eq!(req.headers, reference, "{method:?}");
        }
    }

    #[test]
    fn build_concatenates_path_verbatim() {
        let config = ClientConfig::new("http://localhost:3000/", "k").unwrap();
        let http = Http::with_transport(config, StubTransport::default());
        let req = http.build(HttpMethod::Get, "/orders", NO_BODY).unwrap();
        assert_eq!(req.url, "http://localhost:3000//orders");
    }

    #[test]
    fn client_identification_lists_runtime_facts() {
        let value = client_identification();
        assert!(value.contains(&format!("os.name={}", std::env::consts::OS)));
        assert!(value.contains("api.version=V1"));
        assert!(value.contains("lang=Rust"));
        assert!(value.contains(&format!("build={}", env!("CARGO_PKG_VERSION"))));
    }

    // -----------------------------------------------------------------------
    // parse_response
    // -----------------------------------------------------------------------

    #[test]
    fn parse_success_decodes_body() {
        let token: TokenOnly = parse_response(response(200, r#"{"token":"abc"}"#), None).unwrap();
        assert_eq!(token.token, "abc");
    }

    #[test]
    fn parse_success_tolerates_unknown_fields() {
        let token: TokenOnly =
            parse_response(response(201, r#"{"token":"abc","extra":"ignored"}"#), None).unwrap();
        assert_eq!(token.token, "abc");
    }

    #[test]
    fn parse_400_yields_api_error() {
        let err = parse_response::<TokenOnly>(
            response(400, r#"{"customCode":"BAD_REQUEST","message":"bad input"}"#),
            None,
        )
        .unwrap_err();
        let api = err.api_error().expect("domain error");
        assert_eq!(api.status_code(), 400);
        assert_eq!(api.custom_code(), Some("BAD_REQUEST"));
        assert_eq!(api.message(), Some("bad input"));
    }

    #[test]
    fn parse_redirect_status_is_an_error() {
        let err = parse_response::<TokenOnly>(response(302, ""), None).unwrap_err();
        assert_eq!(err.api_error().map(ApiError::status_code), Some(302));
    }

    #[test]
    fn parse_503_with_empty_body_has_no_message() {
        let err = parse_response::<TokenOnly>(response(503, ""), None).unwrap_err();
        let api = err.api_error().expect("domain error");
        assert_eq!(api.status_code(), 503);
        assert_eq!(api.message(), None);
    }

    #[test]
    fn parse_success_with_bad_body_is_decode_error() {
        let err = parse_response::<TokenOnly>(response(200, "not json"), None).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = parse_response::<TokenOnly>(response(200, ""), None).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn parse_error_attaches_redacted_request() {
        let err = parse_response::<TokenOnly>(
            response(401, r#"{"customCode":"UNAUTHORIZED"}"#),
            Some(r#"{"name":"bob","password":"hunter2"}"#),
        )
        .unwrap_err();
        assert_eq!(
            err.api_error().and_then(ApiError::original_request),
            Some(r#"{"name":"bob","password":"********"}"#)
        );
    }

    // -----------------------------------------------------------------------
    // send
    // -----------------------------------------------------------------------

    #[test]
    fn send_returns_decoded_value() {
        let (http, seen) = client(StubTransport::replying(200, r#"{"token":"abc"}"#));
        let token: TokenOnly = http.get("/tokens/abc").unwrap();
        assert_eq!(token.token, "abc");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url, "http://localhost:3000/tokens/abc");
    }

    #[test]
    fn send_error_carries_sent_body_redacted() {
        let (http, _) = client(StubTransport::replying(
            400,
            r#"{"customCode":"BAD_REQUEST","message":"Invalid login"}"#,
        ));
        let login = Login {
            name: "bob",
            password: "hunter2",
        };
        let err = http.post::<_, TokenOnly>("/login", Some(&login)).unwrap_err();
        let api = err.api_error().expect("domain error");
        assert_eq!(api.to_string(), "API error: Invalid login");
        assert_eq!(
            api.original_request(),
            Some(r#"{"name":"bob","password":"********"}"#)
        );
    }

    #[test]
    fn send_expecting_error_ignores_success_body() {
        let (http, seen) = client(StubTransport::replying(200, ""));
        http.post_no_content("/orders/abc/refund", NO_BODY).unwrap();
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].method, HttpMethod::Post);
        assert!(seen[0].body.is_none());
    }

    #[test]
    fn send_expecting_error_surfaces_api_error() {
        let (http, _) = client(StubTransport::replying(
            404,
            r#"{"customCode":"ORDER_NOT_FOUND"}"#,
        ));
        let err = http.delete("/orders/missing").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.api_error().and_then(ApiError::custom_code),
            Some("ORDER_NOT_FOUND")
        );
    }

    #[test]
    fn transport_failure_is_not_a_domain_error() {
        let (http, _) = client(StubTransport::failing(TransportErrorKind::Connect));
        let err = http.get::<TokenOnly>("/tokens/abc").unwrap_err();
        assert!(err.is_transport());
        assert!(err.api_error().is_none());
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Http>();
    }
}
