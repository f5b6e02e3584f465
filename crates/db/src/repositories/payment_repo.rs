//! Repository for the `payments` table.

use sqlx::PgPool;

use sattva_core::payment;
use sattva_core::types::DbId;

use crate::models::payment::{CreatePayment, Payment};

/// Column list for `payments` queries.
const COLUMNS: &str = "\
    id, enquiry_id, program_id, amount_inr, currency, payment_method, \
    stripe_payment_intent_id, stripe_customer_id, status, transaction_id, \
    receipt_url, failure_reason, customer_name, customer_email, \
    customer_phone, program_name, gateway, refund_amount_inr, \
    refund_reason, refunded_at, created_at, updated_at";

/// Provides CRUD and status-transition operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Record a freshly created processor intent as a `pending` payment.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments \
                (enquiry_id, program_id, amount_inr, currency, payment_method, \
                 stripe_payment_intent_id, stripe_customer_id, customer_name, \
                 customer_email, customer_phone, program_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.enquiry_id)
            .bind(input.program_id)
            .bind(input.amount_inr)
            .bind(&input.currency)
            .bind(&input.payment_method)
            .bind(&input.stripe_payment_intent_id)
            .bind(&input.stripe_customer_id)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(&input.customer_phone)
            .bind(&input.program_name)
            .fetch_one(pool)
            .await
    }

    /// Find a payment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a payment by its processor intent id (webhook lookups).
    pub async fn find_by_intent_id(
        pool: &PgPool,
        intent_id: &str,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE stripe_payment_intent_id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(intent_id)
            .fetch_optional(pool)
            .await
    }

    /// List payments with optional status and method filters, newest-first.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        payment_method: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let (where_clause, param_idx) = Self::filter_clause(status, payment_method);

        let query = format!(
            "SELECT {COLUMNS} FROM payments {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, Payment>(&query);
        if let Some(s) = status {
            q = q.bind(s);
        }
        if let Some(m) = payment_method {
            q = q.bind(m);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Count payments matching the same filters as [`Self::list_filtered`].
    pub async fn count_filtered(
        pool: &PgPool,
        status: Option<&str>,
        payment_method: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = Self::filter_clause(status, payment_method);
        let query = format!("SELECT COUNT(*) FROM payments {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = status {
            q = q.bind(s);
        }
        if let Some(m) = payment_method {
            q = q.bind(m);
        }
        q.fetch_one(pool).await
    }

    /// Mark a payment completed with the settled charge details.
    pub async fn mark_completed(
        pool: &PgPool,
        id: DbId,
        transaction_id: Option<&str>,
        receipt_url: Option<&str>,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "UPDATE payments \
             SET status = $1, transaction_id = $2, receipt_url = $3 \
             WHERE id = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(payment::STATUS_COMPLETED)
            .bind(transaction_id)
            .bind(receipt_url)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a payment failed with the processor's reason.
    pub async fn mark_failed(
        pool: &PgPool,
        id: DbId,
        failure_reason: &str,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "UPDATE payments SET status = $1, failure_reason = $2 \
             WHERE id = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(payment::STATUS_FAILED)
            .bind(failure_reason)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a payment refunded with the refund details.
    pub async fn mark_refunded(
        pool: &PgPool,
        id: DbId,
        refund_amount_inr: i64,
        refund_reason: Option<&str>,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "UPDATE payments \
             SET status = $1, refund_amount_inr = $2, refund_reason = $3, \
                 refunded_at = now() \
             WHERE id = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(payment::STATUS_REFUNDED)
            .bind(refund_amount_inr)
            .bind(refund_reason)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // ---- private helpers ----

    fn filter_clause(status: Option<&str>, payment_method: Option<&str>) -> (String, usize) {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if payment_method.is_some() {
            conditions.push(format!("payment_method = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        (where_clause, param_idx)
    }
}
