//! Payment types for the gold membership upgrade.
//!
//! The payment provider owns charge processing; the client only creates a
//! confirmable intent and reacts to the confirmation outcome.

use serde::{Deserialize, Serialize};

/// A client-confirmable payment intent issued by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
}

/// Identity attached to a payment intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCustomer {
    pub name: String,
    pub email: String,
}

/// Request body for creating a payment intent. Amount is in whole USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub amount: i64,
    pub user: PaymentCustomer,
}

/// Outcome of confirming a payment intent with the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Succeeded,
    Failed,
}

/// Confirmation result handed back by the payment provider integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub client_secret: String,
    pub status: PaymentStatus,
}
