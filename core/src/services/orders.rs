use crate::client::{Http, NO_BODY};
use crate::error::Error;
use crate::types::{
    CaptureOrderRequest, OrderAuthorizationRequest, OrderRequest, OrderResponse,
    RefundOrderRequest, Transaction,
};

use super::{path_segment, require_text};

const ORDERS_PATH: &str = "/orders";

/// Order operations: create, look up, capture, refund, cancel, 3DS.
#[derive(Debug, Clone, Copy)]
pub struct OrderService<'a> {
    http: &'a Http,
}

impl<'a> OrderService<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    pub fn create(&self, request: &OrderRequest) -> Result<OrderResponse, Error> {
        self.http.post(ORDERS_PATH, Some(request))
    }

    pub fn find(&self, order_code: &str) -> Result<Transaction, Error> {
        self.http.get(&order_path(order_code)?)
    }

    /// Refund the full amount of an order.
    pub fn refund(&self, order_code: &str) -> Result<(), Error> {
        self.http
            .post_no_content(&format!("{}/refund", order_path(order_code)?), NO_BODY)
    }

    /// Refund `amount` (minor units) of an order.
    pub fn partial_refund(&self, order_code: &str, amount: i64) -> Result<(), Error> {
        let path = format!("{}/refund", order_path(order_code)?);
        let body = RefundOrderRequest {
            refund_amount: amount,
        };
        self.http.post_no_content(&path, Some(&body))
    }

    pub fn capture(
        &self,
        order_code: &str,
        request: &CaptureOrderRequest,
    ) -> Result<OrderResponse, Error> {
        self.http
            .post(&format!("{}/capture", order_path(order_code)?), Some(request))
    }

    /// Cancel an authorized order.
    pub fn cancel(&self, order_code: &str) -> Result<(), Error> {
        self.http.delete(&order_path(order_code)?)
    }

    /// Complete a 3DS order with the issuer's response.
    pub fn authorize_3ds(
        &self,
        order_code: &str,
        request: &OrderAuthorizationRequest,
    ) -> Result<OrderResponse, Error> {
        let path = order_path(order_code)?;
        validate_authorization(request)?;
        self.http.put(&path, Some(request))
    }
}

fn order_path(order_code: &str) -> Result<String, Error> {
    let code = path_segment(order_code, "Order code")?;
    Ok(format!("{ORDERS_PATH}/{code}"))
}

fn validate_authorization(request: &OrderAuthorizationRequest) -> Result<(), Error> {
    let text = |value: &Option<String>, what: &str| {
        require_text(value.as_deref().unwrap_or_default(), what).map(|_| ())
    };
    text(&request.three_ds_response_code, "Three DS response code")?;
    let info = request
        .three_d_secure_info
        .as_ref()
        .ok_or_else(|| Error::InvalidArgument("Three DS secure info must be present".to_string()))?;
    text(&info.shopper_session_id, "Shopper session id")?;
    text(&info.shopper_accept_header, "Shopper accept header")?;
    text(&info.shopper_user_agent, "Shopper user agent")?;
    text(&info.shopper_ip_address, "Shopper IP address")?;
    Ok(())
}
