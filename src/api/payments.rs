//! Payment routes of the remote forum API.

use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{CreatePaymentIntentRequest, PaymentCustomer, PaymentIntent};
use crate::remote::Remote;

/// One-time price of the gold membership, in whole USD.
pub const GOLD_MEMBERSHIP_USD: i64 = 5;

/// Client surface for the payment route family.
#[derive(Clone)]
pub struct PaymentsApi {
    remote: Arc<Remote>,
}

impl PaymentsApi {
    pub(crate) fn new(remote: Arc<Remote>) -> Self {
        Self { remote }
    }

    /// POST /create-payment-intent - Create a client-confirmable payment
    /// intent. Confirmation itself happens against the payment provider.
    pub async fn create_intent(
        &self,
        amount: i64,
        customer: PaymentCustomer,
    ) -> Result<PaymentIntent, ApiError> {
        self.remote
            .post(
                "/create-payment-intent",
                &CreatePaymentIntentRequest {
                    amount,
                    user: customer,
                },
            )
            .await
    }
}
