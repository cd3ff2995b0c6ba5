//! In-memory payments gateway used by the client's integration tests.
//!
//! Every route requires the configured service key in `Authorization`.
//! Failures are answered with the same JSON error body the real API uses.

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const DEFAULT_SERVICE_KEY: &str = "T_S_test-service-key";
/// Merchant that has transfers seeded at startup.
pub const SEEDED_MERCHANT: &str = "MERCHANT-1";
pub const SEEDED_TRANSFERS: usize = 25;
pub const TRANSFER_PAGE_SIZE: usize = 10;
pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_secs(3);

const WEBHOOK_EVENTS: [&str; 2] = ["ALL", "ORDER_STATE_CHANGE"];

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Error body returned for every failed call.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub http_status_code: u16,
    pub custom_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_help_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_request: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "type")]
    pub method_type: String,
    pub name: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateToken {
    pub client_key: String,
    #[serde(default)]
    pub reusable: bool,
    pub payment_method: Card,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub token: String,
    pub reusable: bool,
    pub payment_method: Card,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub token: String,
    pub amount: i64,
    pub currency_code: String,
    pub order_description: Option<String>,
    pub customer_order_code: Option<String>,
    #[serde(default)]
    pub authorize_only: bool,
    #[serde(rename = "is3DSOrder", default)]
    pub is_3ds_order: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_code: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_amount: Option<i64>,
    pub currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_code: Option<String>,
    pub payment_status: String,
    pub payment_response: Card,
    pub environment: String,
    #[serde(rename = "redirectURL", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(rename = "oneTime3DsToken", skip_serializing_if = "Option::is_none")]
    pub one_time_3ds_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOrder {
    pub capture_amount: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundOrder {
    pub refund_amount: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorizeOrder {
    #[serde(rename = "threeDSResponseCode")]
    pub three_ds_response_code: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSetting {
    pub opt_in_for_recurring_billing: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSetting {
    pub avs_enabled: bool,
    pub cvc_enabled: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub merchant_id: String,
    pub order_setting: OrderSetting,
    pub risk_setting: RiskSetting,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub transfer_id: String,
    pub merchant_id: String,
    pub amount: i64,
    pub currency_code: String,
    pub status: String,
    #[serde(default)]
    pub transactions: Vec<TransferTransaction>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferTransaction {
    pub order_code: String,
    pub amount: i64,
    pub currency_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPage {
    pub transfers: Vec<Transfer>,
    pub page_number: u32,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferQuery {
    pub merchant_id: String,
    #[serde(default = "first_page")]
    pub page_number: u32,
}

fn first_page() -> u32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(default)]
    pub web_hook_id: String,
    pub web_hook_url: String,
    pub events: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookList {
    pub web_hooks: Vec<Webhook>,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct Store {
    tokens: HashMap<String, Token>,
    orders: HashMap<String, Order>,
    settings: HashMap<String, Settings>,
    transfers: Vec<Transfer>,
    webhooks: HashMap<String, Vec<Webhook>>,
}

impl Store {
    fn seeded() -> Self {
        let transfers = (1..=SEEDED_TRANSFERS)
            .map(|n| Transfer {
                transfer_id: format!("TR-{n:03}"),
                merchant_id: SEEDED_MERCHANT.to_string(),
                amount: 1000 * n as i64,
                currency_code: "GBP".to_string(),
                status: "SETTLED".to_string(),
                transactions: vec![TransferTransaction {
                    order_code: format!("ORDER-{n:03}"),
                    amount: 1000 * n as i64,
                    currency_code: "GBP".to_string(),
                }],
            })
            .collect();
        Self {
            transfers,
            ..Self::default()
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct Gateway {
    service_key: Arc<str>,
    db: Db,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Failure {
    status: StatusCode,
    body: ErrorBody,
}

impl Failure {
    fn new(status: StatusCode, custom_code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                http_status_code: status.as_u16(),
                custom_code: custom_code.to_string(),
                message: message.into(),
                description: None,
                error_help_url: None,
                original_request: None,
            },
        }
    }

    fn bad_request(message: impl Into<String>, original_request: &str) -> Self {
        let mut failure = Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message);
        failure.body.description = Some("Some of request parameters are invalid".to_string());
        failure.body.original_request = Some(original_request.to_string());
        failure
    }

    fn not_found(custom_code: &str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, custom_code, message)
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        tracing::debug!(
            status = self.status.as_u16(),
            custom_code = %self.body.custom_code,
            "rejecting request"
        );
        (self.status, Json(self.body)).into_response()
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, Failure> {
    serde_json::from_str(body).map_err(|e| Failure::bad_request(e.to_string(), body))
}

/// Bodies that may legitimately be absent, e.g. a full refund.
fn parse_optional<T: DeserializeOwned + Default>(body: &str) -> Result<T, Failure> {
    if body.trim().is_empty() {
        Ok(T::default())
    } else {
        parse(body)
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn app() -> Router {
    app_with_key(DEFAULT_SERVICE_KEY)
}

pub fn app_with_key(service_key: &str) -> Router {
    let state = Gateway {
        service_key: service_key.into(),
        db: Arc::new(RwLock::new(Store::seeded())),
    };
    Router::new()
        .route("/tokens", post(create_token))
        .route("/tokens/{token}", get(get_token))
        .route("/orders", post(create_order))
        .route(
            "/orders/{code}",
            get(get_order).put(authorize_order).delete(cancel_order),
        )
        .route("/orders/{code}/refund", post(refund_order))
        .route("/orders/{code}/capture", post(capture_order))
        .route("/merchants/{merchant}/settings", get(get_settings))
        .route(
            "/merchants/{merchant}/settings/orders/recurringBilling",
            put(update_recurring_billing),
        )
        .route(
            "/merchants/{merchant}/settings/riskSettings",
            put(update_risk_settings),
        )
        .route("/transfers", get(search_transfers))
        .route("/transfers/{id}", get(get_transfer))
        .route(
            "/merchants/{merchant}/webhooks",
            post(create_webhook).get(list_webhooks),
        )
        .route(
            "/merchants/{merchant}/webhooks/{id}",
            axum::routing::delete(delete_webhook),
        )
        .route("/redirect", get(redirect))
        .route("/slow", get(slow))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_service_key))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_service_key(
    State(gateway): State<Gateway>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if presented != Some(&*gateway.service_key) {
        return Failure::new(
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Unauthorized Access",
        )
        .into_response();
    }
    next.run(request).await
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

fn obfuscate(card: &Card) -> Card {
    let number = card.card_number.as_deref().unwrap_or_default();
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let last4 = &digits[digits.len().saturating_sub(4)..];
    Card {
        method_type: "ObfuscatedCard".to_string(),
        name: card.name.clone(),
        expiry_month: card.expiry_month,
        expiry_year: card.expiry_year,
        card_number: None,
        masked_card_number: Some(format!("**** **** **** {last4}")),
        card_type: Some("VISA_CREDIT".to_string()),
    }
}

async fn create_token(State(gateway): State<Gateway>, body: String) -> Result<Json<Token>, Failure> {
    let input: CreateToken = parse(&body)?;
    if input.client_key.trim().is_empty() {
        return Err(Failure::bad_request("Client key is missing", &body));
    }
    let prefix = if input.reusable { "TEST_RU" } else { "TEST_SU" };
    let token = Token {
        token: format!("{prefix}_{}", Uuid::new_v4().simple()),
        reusable: input.reusable,
        payment_method: obfuscate(&input.payment_method),
    };
    gateway
        .db
        .write()
        .await
        .tokens
        .insert(token.token.clone(), token.clone());
    Ok(Json(token))
}

async fn get_token(
    State(gateway): State<Gateway>,
    Path(token): Path<String>,
) -> Result<Json<Token>, Failure> {
    let store = gateway.db.read().await;
    store
        .tokens
        .get(&token)
        .cloned()
        .map(Json)
        .ok_or_else(|| Failure::not_found("TKN_NOT_FOUND", "Token does not exist"))
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

async fn create_order(State(gateway): State<Gateway>, body: String) -> Result<Json<Order>, Failure> {
    let input: CreateOrder = parse(&body)?;
    if input.amount <= 0 {
        return Err(Failure::bad_request("Amount must be positive", &body));
    }
    let mut store = gateway.db.write().await;
    let Some(token) = store.tokens.get(&input.token).cloned() else {
        return Err(Failure::bad_request(
            format!("Token {} does not exist", input.token),
            &body,
        ));
    };
    if !token.reusable {
        store.tokens.remove(&input.token);
    }

    let order_code = Uuid::new_v4().to_string();
    let (status, redirect_url, one_time_3ds_token) = if input.is_3ds_order {
        (
            "PRE_AUTHORIZED",
            Some(format!("https://secure-test.example/3ds/{order_code}")),
            Some(format!("RU_{}", Uuid::new_v4().simple())),
        )
    } else if input.authorize_only {
        ("AUTHORIZED", None, None)
    } else {
        ("SUCCESS", None, None)
    };
    let order = Order {
        order_code: order_code.clone(),
        token: token.token,
        order_description: input.order_description,
        amount: input.amount,
        authorized_amount: input.authorize_only.then_some(input.amount),
        currency_code: input.currency_code,
        customer_order_code: input.customer_order_code,
        payment_status: status.to_string(),
        payment_response: token.payment_method,
        environment: "TEST".to_string(),
        redirect_url,
        one_time_3ds_token,
    };
    store.orders.insert(order_code, order.clone());
    Ok(Json(order))
}

fn order_not_found(code: &str) -> Failure {
    Failure::not_found("ORDER_NOT_FOUND", format!("Order {code} does not exist"))
}

async fn get_order(
    State(gateway): State<Gateway>,
    Path(code): Path<String>,
) -> Result<Json<Order>, Failure> {
    let store = gateway.db.read().await;
    store
        .orders
        .get(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| order_not_found(&code))
}

async fn authorize_order(
    State(gateway): State<Gateway>,
    Path(code): Path<String>,
    body: String,
) -> Result<Json<Order>, Failure> {
    let input: AuthorizeOrder = parse(&body)?;
    let mut store = gateway.db.write().await;
    let order = store.orders.get_mut(&code).ok_or_else(|| order_not_found(&code))?;
    if order.payment_status != "PRE_AUTHORIZED" {
        return Err(Failure::bad_request("Order is not awaiting 3DS authentication", &body));
    }
    order.payment_status = if input.three_ds_response_code == "IDENTIFIED" {
        "SUCCESS".to_string()
    } else {
        "FAILED".to_string()
    };
    order.redirect_url = None;
    Ok(Json(order.clone()))
}

async fn cancel_order(
    State(gateway): State<Gateway>,
    Path(code): Path<String>,
) -> Result<StatusCode, Failure> {
    let mut store = gateway.db.write().await;
    let order = store.orders.get_mut(&code).ok_or_else(|| order_not_found(&code))?;
    if order.payment_status != "AUTHORIZED" {
        return Err(Failure::new(
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            "Only authorized orders can be cancelled",
        ));
    }
    order.payment_status = "CANCELLED".to_string();
    Ok(StatusCode::OK)
}

async fn capture_order(
    State(gateway): State<Gateway>,
    Path(code): Path<String>,
    body: String,
) -> Result<Json<Order>, Failure> {
    let input: CaptureOrder = parse_optional(&body)?;
    let mut store = gateway.db.write().await;
    let order = store.orders.get_mut(&code).ok_or_else(|| order_not_found(&code))?;
    if order.payment_status != "AUTHORIZED" {
        return Err(Failure::bad_request("Order is not authorized", &body));
    }
    let amount = input.capture_amount.unwrap_or(order.amount);
    if amount <= 0 || amount > order.amount {
        return Err(Failure::bad_request("Capture amount is invalid", &body));
    }
    order.amount = amount;
    order.payment_status = "SUCCESS".to_string();
    Ok(Json(order.clone()))
}

async fn refund_order(
    State(gateway): State<Gateway>,
    Path(code): Path<String>,
    body: String,
) -> Result<StatusCode, Failure> {
    let input: RefundOrder = parse_optional(&body)?;
    let mut store = gateway.db.write().await;
    let order = store.orders.get_mut(&code).ok_or_else(|| order_not_found(&code))?;
    if order.payment_status != "SUCCESS" && order.payment_status != "PARTIALLY_REFUNDED" {
        return Err(Failure::bad_request("Order cannot be refunded", &body));
    }
    match input.refund_amount {
        Some(amount) if amount <= 0 || amount > order.amount => {
            return Err(Failure::bad_request("Refund amount is invalid", &body));
        }
        Some(amount) if amount < order.amount => {
            order.amount -= amount;
            order.payment_status = "PARTIALLY_REFUNDED".to_string();
        }
        _ => order.payment_status = "REFUNDED".to_string(),
    }
    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

fn settings_entry<'a>(store: &'a mut Store, merchant: &str) -> &'a mut Settings {
    store
        .settings
        .entry(merchant.to_string())
        .or_insert_with(|| Settings {
            merchant_id: merchant.to_string(),
            ..Settings::default()
        })
}

async fn get_settings(
    State(gateway): State<Gateway>,
    Path(merchant): Path<String>,
) -> Json<Settings> {
    let mut store = gateway.db.write().await;
    Json(settings_entry(&mut store, &merchant).clone())
}

async fn update_recurring_billing(
    State(gateway): State<Gateway>,
    Path(merchant): Path<String>,
    body: String,
) -> Result<StatusCode, Failure> {
    let input: OrderSetting = parse(&body)?;
    let mut store = gateway.db.write().await;
    settings_entry(&mut store, &merchant).order_setting = input;
    Ok(StatusCode::OK)
}

async fn update_risk_settings(
    State(gateway): State<Gateway>,
    Path(merchant): Path<String>,
    body: String,
) -> Result<StatusCode, Failure> {
    let input: RiskSetting = parse(&body)?;
    let mut store = gateway.db.write().await;
    settings_entry(&mut store, &merchant).risk_setting = input;
    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Transfers
// ---------------------------------------------------------------------------

async fn search_transfers(
    State(gateway): State<Gateway>,
    Query(query): Query<TransferQuery>,
) -> Json<TransferPage> {
    let store = gateway.db.read().await;
    let matching: Vec<&Transfer> = store
        .transfers
        .iter()
        .filter(|t| t.merchant_id == query.merchant_id)
        .collect();
    let total_pages = matching.len().div_ceil(TRANSFER_PAGE_SIZE);
    let skip = (query.page_number.max(1) as usize - 1) * TRANSFER_PAGE_SIZE;
    let transfers = matching
        .into_iter()
        .skip(skip)
        .take(TRANSFER_PAGE_SIZE)
        .map(|t| Transfer {
            transactions: Vec::new(),
            ..t.clone()
        })
        .collect();
    Json(TransferPage {
        transfers,
        page_number: query.page_number,
        total_pages: total_pages as u32,
    })
}

async fn get_transfer(
    State(gateway): State<Gateway>,
    Path(id): Path<String>,
) -> Result<Json<Transfer>, Failure> {
    let store = gateway.db.read().await;
    store
        .transfers
        .iter()
        .find(|t| t.transfer_id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Failure::not_found("TRANSFER_NOT_FOUND", format!("Transfer {id} does not exist")))
}

// ---------------------------------------------------------------------------
// Webhooks
// ---------------------------------------------------------------------------

async fn create_webhook(
    State(gateway): State<Gateway>,
    Path(merchant): Path<String>,
    body: String,
) -> Result<(StatusCode, Json<Webhook>), Failure> {
    let mut input: Webhook = parse(&body)?;
    if input.web_hook_url.trim().is_empty() {
        return Err(Failure::bad_request("Webhook URL is missing", &body));
    }
    if input.events.is_empty() || input.events.iter().any(|e| !WEBHOOK_EVENTS.contains(&e.as_str())) {
        return Err(Failure::bad_request("Invalid event type", &body));
    }
    input.web_hook_id = Uuid::new_v4().to_string();
    gateway
        .db
        .write()
        .await
        .webhooks
        .entry(merchant)
        .or_default()
        .push(input.clone());
    Ok((StatusCode::CREATED, Json(input)))
}

async fn list_webhooks(
    State(gateway): State<Gateway>,
    Path(merchant): Path<String>,
) -> Json<WebhookList> {
    let store = gateway.db.read().await;
    Json(WebhookList {
        web_hooks: store.webhooks.get(&merchant).cloned().unwrap_or_default(),
    })
}

async fn delete_webhook(
    State(gateway): State<Gateway>,
    Path((merchant, id)): Path<(String, String)>,
) -> Result<StatusCode, Failure> {
    let mut store = gateway.db.write().await;
    let hooks = store.webhooks.entry(merchant).or_default();
    let before = hooks.len();
    hooks.retain(|hook| hook.web_hook_id != id);
    if hooks.len() == before {
        return Err(Failure::not_found("WEBHOOK_NOT_FOUND", format!("Webhook {id} does not exist")));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Transport fixtures
// ---------------------------------------------------------------------------

/// A plain 302 with a location, for checking that clients do not follow it.
async fn redirect() -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, "/tokens")],
    )
        .into_response()
}

async fn slow() -> StatusCode {
    tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str) -> Card {
        Card {
            method_type: "Card".to_string(),
            name: "test name".to_string(),
            expiry_month: 2,
            expiry_year: 2030,
            card_number: Some(number.to_string()),
            masked_card_number: None,
            card_type: None,
        }
    }

    #[test]
    fn obfuscate_keeps_last_four_digits() {
        let masked = obfuscate(&card("4444 3333 2222 1111"));
        assert_eq!(masked.method_type, "ObfuscatedCard");
        assert_eq!(masked.masked_card_number.as_deref(), Some("**** **** **** 1111"));
        assert!(masked.card_number.is_none());
    }

    #[test]
    fn obfuscate_short_number() {
        let masked = obfuscate(&card("12"));
        assert_eq!(masked.masked_card_number.as_deref(), Some("**** **** **** 12"));
    }

    #[test]
    fn error_body_uses_api_field_names() {
        let failure = Failure::bad_request("Token x does not exist", r#"{"token":"x"}"#);
        let json = serde_json::to_value(&failure.body).unwrap();
        assert_eq!(json["httpStatusCode"], 400);
        assert_eq!(json["customCode"], "BAD_REQUEST");
        assert_eq!(json["originalRequest"], r#"{"token":"x"}"#);
        assert!(json.get("errorHelpUrl").is_none());
    }

    #[test]
    fn optional_bodies_default_when_empty() {
        let refund: RefundOrder = parse_optional("").unwrap();
        assert!(refund.refund_amount.is_none());
        let refund: RefundOrder = parse_optional(r#"{"refundAmount":5}"#).unwrap();
        assert_eq!(refund.refund_amount, Some(5));
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let failure = parse::<CreateOrder>("{not json").unwrap_err();
        assert_eq!(failure.status, StatusCode::BAD_REQUEST);
        assert_eq!(failure.body.original_request.as_deref(), Some("{not json"));
    }

    #[test]
    fn seeded_store_has_transfers() {
        let store = Store::seeded();
        assert_eq!(store.transfers.len(), SEEDED_TRANSFERS);
        assert_eq!(store.transfers[0].transfer_id, "TR-001");
    }
}
