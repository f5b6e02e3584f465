//! Handlers for the payment checkout flow.
//!
//! The flow is thin orchestration over the processor: create an intent
//! and record it locally as `pending`, then mirror the processor's
//! terminal status from the confirm endpoint or the webhook. The local
//! row never leads the processor; it only follows.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use sattva_core::error::CoreError;
use sattva_core::pagination::{clamp_limit, clamp_page, offset_for};
use sattva_core::payment;
use sattva_core::types::DbId;
use sattva_db::models::enquiry::Enquiry;
use sattva_db::models::payment::{CreatePayment, Payment, PaymentListParams};
use sattva_db::repositories::{EnquiryRepo, PaymentRepo, ProgramRepo};
use sattva_stripe::api::CreateIntentParams;
use sattva_stripe::types::PaymentIntent;
use sattva_stripe::webhook;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, PaginatedResponse, Pagination};
use crate::state::AppState;

/// Intent status Stripe reports once the charge has settled.
const INTENT_SUCCEEDED: &str = "succeeded";

// ---------------------------------------------------------------------------
// POST /payments/create-intent
// ---------------------------------------------------------------------------

/// Request body for creating a payment intent.
#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub enquiry_id: DbId,
    pub program_id: DbId,
    /// Charge amount in whole rupees.
    pub amount_inr: i64,
    pub currency: Option<String>,
    pub payment_method: Option<String>,
}

/// What the checkout page needs to drive the processor's payment element.
#[derive(Debug, Serialize)]
pub struct CreateIntentResponse {
    pub client_secret: String,
    pub payment_id: DbId,
    pub customer_id: String,
}

/// Create a processor payment intent and record it locally as `pending`.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(input): Json<CreateIntentRequest>,
) -> AppResult<impl IntoResponse> {
    payment::validate_amount(input.amount_inr)?;
    let method = input.payment_method.as_deref().unwrap_or("card");
    payment::validate_method(method)?;
    let currency = input
        .currency
        .as_deref()
        .unwrap_or(payment::DEFAULT_CURRENCY)
        .to_lowercase();

    let enquiry = EnquiryRepo::find_by_id(&state.pool, input.enquiry_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enquiry",
            id: input.enquiry_id,
        }))?;
    let program = ProgramRepo::find_by_id(&state.pool, input.program_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Program",
            id: input.program_id,
        }))?;

    let customer_id = find_or_create_customer(&state, &enquiry).await?;

    let enquiry_id_str = enquiry.id.to_string();
    let program_id_str = program.id.to_string();
    let description = format!("Payment for {} - {}", program.name, enquiry.name);
    let idempotency_key = uuid::Uuid::new_v4().to_string();

    let intent = state
        .stripe
        .create_payment_intent(&CreateIntentParams {
            amount_minor: payment::to_paise(input.amount_inr),
            currency: &currency,
            customer_id: &customer_id,
            description: &description,
            metadata: &[
                ("enquiry_id", &enquiry_id_str),
                ("program_id", &program_id_str),
                ("customer_name", &enquiry.name),
                ("customer_email", &enquiry.email),
                ("program_name", &program.name),
            ],
            idempotency_key: &idempotency_key,
        })
        .await?;

    let client_secret = intent
        .client_secret
        .clone()
        .ok_or_else(|| AppError::InternalError("Intent returned without client secret".into()))?;

    let record = PaymentRepo::create(
        &state.pool,
        &CreatePayment {
            enquiry_id: enquiry.id,
            program_id: program.id,
            amount_inr: input.amount_inr,
            currency,
            payment_method: method.to_string(),
            stripe_payment_intent_id: intent.id.clone(),
            stripe_customer_id: customer_id.clone(),
            customer_name: enquiry.name.clone(),
            customer_email: enquiry.email.clone(),
            customer_phone: enquiry.phone.clone(),
            program_name: program.name.clone(),
        },
    )
    .await?;

    tracing::info!(
        payment_id = record.id,
        intent_id = %intent.id,
        amount_inr = input.amount_inr,
        "Payment intent created",
    );

    Ok(Json(DataResponse {
        data: CreateIntentResponse {
            client_secret,
            payment_id: record.id,
            customer_id,
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /payments/confirm
// ---------------------------------------------------------------------------

/// Request body for confirming a payment after the checkout page settles.
#[derive(Debug, Deserialize)]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
    pub payment_id: DbId,
}

/// Confirm a payment by re-reading the intent from the processor.
///
/// Only a `succeeded` intent completes the payment; any other processor
/// status is reported back as a 400 without touching the local record.
pub async fn confirm_payment(
    State(state): State<AppState>,
    Json(input): Json<ConfirmPaymentRequest>,
) -> AppResult<impl IntoResponse> {
    let intent = state
        .stripe
        .retrieve_payment_intent(&input.payment_intent_id)
        .await?;

    if intent.status != INTENT_SUCCEEDED {
        return Err(AppError::BadRequest(format!(
            "Payment not completed (processor status: {})",
            intent.status
        )));
    }

    let updated = complete_payment_by_id(&state, input.payment_id, &intent).await?;

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// POST /payments/webhook
// ---------------------------------------------------------------------------

/// Receive a processor webhook delivery.
///
/// The raw body is needed byte-exact for signature verification, so this
/// handler takes `Bytes` rather than a typed JSON extractor. Unhandled
/// event types are acknowledged so the processor stops retrying them.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing Stripe-Signature header".into()))?;

    let event = webhook::construct_event(&body, signature, &state.config.stripe.webhook_secret)?;

    match event.event_type.as_str() {
        webhook::EVENT_PAYMENT_SUCCEEDED => {
            let intent = event.payment_intent().map_err(webhook::WebhookError::from)?;
            if let Some(record) = PaymentRepo::find_by_intent_id(&state.pool, &intent.id).await? {
                complete_payment_by_id(&state, record.id, &intent).await?;
            } else {
                tracing::warn!(intent_id = %intent.id, "Webhook for unknown payment intent");
            }
        }
        webhook::EVENT_PAYMENT_FAILED => {
            let intent = event.payment_intent().map_err(webhook::WebhookError::from)?;
            let reason = intent
                .last_payment_error
                .as_ref()
                .and_then(|e| e.message.clone())
                .unwrap_or_else(|| "Payment failed".to_string());

            if let Some(record) = PaymentRepo::find_by_intent_id(&state.pool, &intent.id).await? {
                PaymentRepo::mark_failed(&state.pool, record.id, &reason).await?;
                tracing::info!(payment_id = record.id, %reason, "Payment failed");
            } else {
                tracing::warn!(intent_id = %intent.id, "Webhook for unknown payment intent");
            }
        }
        other => {
            tracing::debug!(event_type = %other, "Unhandled webhook event type");
        }
    }

    Ok(Json(json!({ "received": true })))
}

// ---------------------------------------------------------------------------
// GET /payments
// ---------------------------------------------------------------------------

/// List payments with optional status/method filters, paginated.
pub async fn list_payments(
    State(state): State<AppState>,
    Query(params): Query<PaymentListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        payment::validate_status(status)?;
    }
    if let Some(ref method) = params.payment_method {
        payment::validate_method(method)?;
    }

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit, 10, 100);
    let offset = offset_for(page, limit);

    let payments = PaymentRepo::list_filtered(
        &state.pool,
        params.status.as_deref(),
        params.payment_method.as_deref(),
        limit,
        offset,
    )
    .await?;

    let total = PaymentRepo::count_filtered(
        &state.pool,
        params.status.as_deref(),
        params.payment_method.as_deref(),
    )
    .await?;

    Ok(Json(PaginatedResponse {
        data: payments,
        pagination: Pagination::new(page, limit, total),
    }))
}

// ---------------------------------------------------------------------------
// GET /payments/:id
// ---------------------------------------------------------------------------

/// Get a single payment by ID.
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = PaymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))?;

    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// POST /payments/:id/refund
// ---------------------------------------------------------------------------

/// Request body for refunding a completed payment.
#[derive(Debug, Deserialize)]
pub struct RefundRequest {
    /// Amount in whole rupees; omitted means a full refund.
    pub amount_inr: Option<i64>,
    pub reason: Option<String>,
}

/// Refund a completed payment through the processor.
pub async fn refund_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RefundRequest>,
) -> AppResult<impl IntoResponse> {
    let record = PaymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))?;

    payment::validate_refundable(&record.status)?;
    if let Some(amount) = input.amount_inr {
        payment::validate_amount(amount)?;
    }

    let intent_id = record.stripe_payment_intent_id.as_deref().ok_or_else(|| {
        AppError::BadRequest("Payment has no processor intent to refund".into())
    })?;

    let refund = state
        .stripe
        .create_refund(intent_id, input.amount_inr.map(payment::to_paise))
        .await?;

    let refund_amount = input.amount_inr.unwrap_or(record.amount_inr);
    let updated = PaymentRepo::mark_refunded(
        &state.pool,
        id,
        refund_amount,
        input.reason.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Payment",
        id,
    }))?;

    tracing::info!(
        payment_id = id,
        refund_id = %refund.id,
        refund_amount_inr = refund_amount,
        "Payment refunded",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Shared completion path
// ---------------------------------------------------------------------------

/// Mark a payment completed from a succeeded intent and move its enquiry
/// to `enrolled`. Shared by the confirm endpoint and the webhook.
async fn complete_payment_by_id(
    state: &AppState,
    payment_id: DbId,
    intent: &PaymentIntent,
) -> Result<Payment, AppError> {
    let charge = intent.latest_charge.as_ref();

    let updated = PaymentRepo::mark_completed(
        &state.pool,
        payment_id,
        charge.map(|c| c.id.as_str()),
        charge.and_then(|c| c.receipt_url.as_deref()),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Payment",
        id: payment_id,
    }))?;

    enroll_enquiry(state, updated.enquiry_id).await?;

    tracing::info!(
        payment_id = updated.id,
        intent_id = %intent.id,
        "Payment completed",
    );

    Ok(updated)
}

/// Move the paying enquiry to `enrolled`.
async fn enroll_enquiry(state: &AppState, enquiry_id: DbId) -> Result<Option<Enquiry>, AppError> {
    let updated = EnquiryRepo::update_status(
        &state.pool,
        enquiry_id,
        sattva_core::enquiry::STATUS_ENROLLED,
    )
    .await?;
    Ok(updated)
}

/// Reuse the customer's existing processor record keyed by email, or
/// create one carrying the enquiry id in metadata.
async fn find_or_create_customer(state: &AppState, enquiry: &Enquiry) -> Result<String, AppError> {
    let existing = state.stripe.list_customers_by_email(&enquiry.email).await?;
    if let Some(customer) = existing.data.into_iter().next() {
        return Ok(customer.id);
    }

    let enquiry_id_str = enquiry.id.to_string();
    let created = state
        .stripe
        .create_customer(
            &enquiry.email,
            &enquiry.name,
            &enquiry.phone,
            &[("enquiry_id", &enquiry_id_str)],
        )
        .await?;
    Ok(created.id)
}
