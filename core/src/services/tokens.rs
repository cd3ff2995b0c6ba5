use crate::client::Http;
use crate::error::Error;
use crate::types::{TokenRequest, TokenResponse};

use super::path_segment;

const TOKENS_PATH: &str = "/tokens";

/// Token operations.
#[derive(Debug, Clone, Copy)]
pub struct TokenService<'a> {
    http: &'a Http,
}

impl<'a> TokenService<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Tokenize a card.
    pub fn create(&self, request: &TokenRequest) -> Result<TokenResponse, Error> {
        self.http.post(TOKENS_PATH, Some(request))
    }

    /// Look up an existing token. An unknown token fails with `TKN_NOT_FOUND`.
    pub fn get(&self, token: &str) -> Result<TokenResponse, Error> {
        let token = path_segment(token, "Token")?;
        self.http.get(&format!("{TOKENS_PATH}/{token}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::services::testing::Recorder;
    use crate::types::CardRequest;

    #[test]
    fn create_sends_card_with_password_free_body() {
        let recorder = Recorder::default();
        recorder.reply(200, r#"{"token":"TEST_RU_1","reusable":true}"#);
        let http = recorder.http();

        let request = TokenRequest {
            client_key: "T_C_key".to_string(),
            reusable: true,
            payment_method: CardRequest::new("name", "4444333322221111", 10, 2030),
        };
        let token = TokenService::new(&http).create(&request).unwrap();
        assert_eq!(token.token, "TEST_RU_1");
        assert!(token.reusable);

        let sent = recorder.last();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "http://gateway.test/tokens");
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["clientKey"], "T_C_key");
        assert_eq!(body["paymentMethod"]["type"], "Card");
    }

    #[test]
    fn get_unknown_token_exposes_custom_code() {
        let recorder = Recorder::default();
        recorder.reply(
            404,
            r#"{"httpStatusCode":404,"customCode":"TKN_NOT_FOUND","message":"Token does not exist"}"#,
        );
        let http = recorder.http();

        let err = TokenService::new(&http).get("invalid-token").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.api_error().unwrap().custom_code(), Some("TKN_NOT_FOUND"));
        assert_eq!(recorder.last().url, "http://gateway.test/tokens/invalid-token");
    }

    #[test]
    fn get_rejects_empty_token() {
        let recorder = Recorder::default();
        let http = recorder.http();
        let err = TokenService::new(&http).get("").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(recorder.count(), 0);
    }
}
