//! Blocking client core for the payments REST API.
//!
//! # Overview
//! Every resource call funnels through [`Http`]: it builds an `HttpRequest`
//! (base URL + path, authorization and client identification headers, JSON
//! body for POST/PUT), hands it to a [`Transport`], and classifies the
//! `HttpResponse`. Statuses below 300 are decoded into the caller's type;
//! anything else becomes an [`ApiError`] whose `original_request` has had its
//! password values masked.
//!
//! # Design
//! - `HttpRequest` / `HttpResponse` are plain data, so request construction
//!   and response classification are testable without a socket.
//! - The network sits behind the `Transport` trait; [`UreqTransport`] is the
//!   default and tests substitute recording stubs.
//! - [`PaymentsClient`] hands out borrowed per-resource services (orders,
//!   tokens, settings, transfers, webhooks) that share one `Http`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod redact;
pub mod services;
pub mod types;

pub use client::Http;
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorOptions, Error, TransportError, TransportErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use redact::redact;
pub use services::{
    OrderService, PaymentsClient, SettingsService, TokenService, TransferService, WebhookService,
};
pub use types::*;
