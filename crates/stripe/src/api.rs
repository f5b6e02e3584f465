//! REST API client for the Stripe endpoints used at checkout.
//!
//! Wraps customer lookup/creation, payment-intent creation and retrieval,
//! and refund creation using [`reqwest`]. Stripe takes form-encoded
//! request bodies and bearer authentication with the secret key.

use crate::types::{Customer, ErrorEnvelope, List, PaymentIntent, Refund};

/// Hosted Stripe API base. Overridable for tests and mock servers.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// HTTP client bound to one Stripe account.
pub struct StripeApi {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

/// Errors from the Stripe REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum StripeApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Stripe returned a non-2xx status code.
    #[error("Stripe API error ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Stripe's error message, or the raw body when undecodable.
        message: String,
    },
}

/// Everything needed to create a payment intent.
#[derive(Debug)]
pub struct CreateIntentParams<'a> {
    /// Charge amount in the currency's minor unit (paise for INR).
    pub amount_minor: i64,
    pub currency: &'a str,
    pub customer_id: &'a str,
    pub description: &'a str,
    /// Free-form key/value pairs echoed back on the intent and its events.
    pub metadata: &'a [(&'a str, &'a str)],
    /// Client-supplied idempotency key so retried requests do not double-charge.
    pub idempotency_key: &'a str,
}

impl StripeApi {
    /// Create an API client for the hosted Stripe endpoint.
    pub fn new(secret_key: String) -> Self {
        Self::with_base(secret_key, DEFAULT_API_BASE.to_string())
    }

    /// Create an API client against a custom base URL (tests, stripe-mock).
    pub fn with_base(secret_key: String, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            secret_key,
        }
    }

    /// Look up customers by email, newest first.
    ///
    /// Sends `GET /v1/customers?email=&limit=1`; the checkout flow only
    /// needs to know whether one already exists.
    pub async fn list_customers_by_email(
        &self,
        email: &str,
    ) -> Result<List<Customer>, StripeApiError> {
        let response = self
            .client
            .get(format!("{}/v1/customers", self.api_base))
            .bearer_auth(&self.secret_key)
            .query(&[("email", email), ("limit", "1")])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a customer carrying the enquiry's contact details.
    pub async fn create_customer(
        &self,
        email: &str,
        name: &str,
        phone: &str,
        metadata: &[(&str, &str)],
    ) -> Result<Customer, StripeApiError> {
        let mut form: Vec<(String, String)> = vec![
            ("email".into(), email.into()),
            ("name".into(), name.into()),
            ("phone".into(), phone.into()),
        ];
        for (key, value) in metadata {
            form.push((format!("metadata[{key}]"), (*value).into()));
        }

        let response = self
            .client
            .post(format!("{}/v1/customers", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a payment intent with automatic payment methods enabled.
    pub async fn create_payment_intent(
        &self,
        params: &CreateIntentParams<'_>,
    ) -> Result<PaymentIntent, StripeApiError> {
        let mut form: Vec<(String, String)> = vec![
            ("amount".into(), params.amount_minor.to_string()),
            ("currency".into(), params.currency.into()),
            ("customer".into(), params.customer_id.into()),
            ("description".into(), params.description.into()),
            ("automatic_payment_methods[enabled]".into(), "true".into()),
        ];
        for (key, value) in params.metadata {
            form.push((format!("metadata[{key}]"), (*value).into()));
        }

        let response = self
            .client
            .post(format!("{}/v1/payment_intents", self.api_base))
            .bearer_auth(&self.secret_key)
            .header("Idempotency-Key", params.idempotency_key)
            .form(&form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Retrieve a payment intent with its latest charge expanded.
    pub async fn retrieve_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<PaymentIntent, StripeApiError> {
        let response = self
            .client
            .get(format!(
                "{}/v1/payment_intents/{}",
                self.api_base, intent_id
            ))
            .bearer_auth(&self.secret_key)
            .query(&[("expand[]", "latest_charge")])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a refund against a payment intent.
    ///
    /// `amount_minor = None` refunds the full remaining amount.
    pub async fn create_refund(
        &self,
        payment_intent_id: &str,
        amount_minor: Option<i64>,
    ) -> Result<Refund, StripeApiError> {
        let mut form: Vec<(String, String)> = vec![
            ("payment_intent".into(), payment_intent_id.into()),
            ("reason".into(), "requested_by_customer".into()),
        ];
        if let Some(amount) = amount_minor {
            form.push(("amount".into(), amount.to_string()));
        }

        let response = self
            .client
            .post(format!("{}/v1/refunds", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Deserialize a success body, or convert a non-2xx response into
    /// [`StripeApiError::ApiError`] using Stripe's error envelope when
    /// the body decodes as one.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StripeApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => envelope
                .error
                .message
                .unwrap_or_else(|| "unknown Stripe error".to_string()),
            Err(_) => body,
        };

        Err(StripeApiError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_message_is_extracted() {
        let body = r#"{"error": {"message": "No such customer", "type": "invalid_request_error"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.message.as_deref(), Some("No such customer"));
    }

    #[test]
    fn with_base_points_at_custom_host() {
        let api = StripeApi::with_base("sk_test_x".into(), "http://localhost:12111".into());
        assert_eq!(api.api_base, "http://localhost:12111");
    }
}
