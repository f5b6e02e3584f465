//! Repository for the `enquiries` table.

use sqlx::PgPool;

use sattva_core::types::DbId;

use crate::models::enquiry::{
    CreateEnquiry, Enquiry, EnquiryStats, ProgramCount, StatusCount,
};

/// Column list for `enquiries` queries.
const COLUMNS: &str = "\
    id, name, email, phone, whatsapp, pincode, program, \
    preferred_location, preferred_date, message, status, source, \
    marketing_consent, created_at, updated_at";

/// Provides CRUD and aggregate operations for enquiries.
pub struct EnquiryRepo;

impl EnquiryRepo {
    /// Create a new enquiry, returning the full row.
    ///
    /// `source` falls back to `website` when the form did not send one.
    pub async fn create(pool: &PgPool, input: &CreateEnquiry) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO enquiries \
                (name, email, phone, whatsapp, pincode, program, \
                 preferred_location, preferred_date, message, source, \
                 marketing_consent) \
             VALUES ($1, lower($2), $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(input.phone.trim())
            .bind(&input.whatsapp)
            .bind(input.pincode.trim())
            .bind(&input.program)
            .bind(&input.preferred_location)
            .bind(input.preferred_date)
            .bind(&input.message)
            .bind(
                input
                    .source
                    .as_deref()
                    .unwrap_or(sattva_core::enquiry::SOURCE_WEBSITE),
            )
            .bind(input.marketing_consent)
            .fetch_one(pool)
            .await
    }

    /// Find an enquiry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enquiries WHERE id = $1");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List enquiries with optional status, program, and free-text filters.
    ///
    /// `search` matches name, email, or phone case-insensitively. Results
    /// are ordered newest-first.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        program: Option<&str>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Enquiry>, sqlx::Error> {
        let (where_clause, param_idx) = Self::filter_clause(status, program, search);

        let query = format!(
            "SELECT {COLUMNS} FROM enquiries {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, Enquiry>(&query);
        q = Self::bind_filters(q, status, program, search);
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Count enquiries matching the same filters as [`Self::list_filtered`].
    pub async fn count_filtered(
        pool: &PgPool,
        status: Option<&str>,
        program: Option<&str>,
        search: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = Self::filter_clause(status, program, search);
        let query = format!("SELECT COUNT(*) FROM enquiries {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(s) = status {
            q = q.bind(s);
        }
        if let Some(p) = program {
            q = q.bind(p);
        }
        if let Some(term) = search {
            q = q.bind(format!("%{term}%"));
        }
        q.fetch_one(pool).await
    }

    /// Update the status of an enquiry. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!("UPDATE enquiries SET status = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Aggregate statistics for the back-office overview: totals, today's
    /// volume, per-status breakdown, and the five most-requested programs.
    pub async fn stats(pool: &PgPool) -> Result<EnquiryStats, sqlx::Error> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enquiries")
            .fetch_one(pool)
            .await?;

        let today = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM enquiries WHERE created_at >= date_trunc('day', now())",
        )
        .fetch_one(pool)
        .await?;

        let status_breakdown = sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM enquiries GROUP BY status ORDER BY count DESC",
        )
        .fetch_all(pool)
        .await?;

        let top_programs = sqlx::query_as::<_, ProgramCount>(
            "SELECT program, COUNT(*) AS count FROM enquiries \
             GROUP BY program ORDER BY count DESC LIMIT 5",
        )
        .fetch_all(pool)
        .await?;

        Ok(EnquiryStats {
            total,
            today,
            status_breakdown,
            top_programs,
        })
    }

    // ---- private helpers ----

    /// Build the WHERE clause for the shared filters. Returns the clause
    /// and the next free bind-parameter index.
    fn filter_clause(
        status: Option<&str>,
        program: Option<&str>,
        search: Option<&str>,
    ) -> (String, usize) {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if program.is_some() {
            conditions.push(format!("program = ${param_idx}"));
            param_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!(
                "(name ILIKE ${param_idx} OR email ILIKE ${param_idx} OR phone ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        (where_clause, param_idx)
    }

    fn bind_filters<'q>(
        mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, Enquiry, sqlx::postgres::PgArguments>,
        status: Option<&'q str>,
        program: Option<&'q str>,
        search: Option<&str>,
    ) -> sqlx::query::QueryAs<'q, sqlx::Postgres, Enquiry, sqlx::postgres::PgArguments> {
        if let Some(s) = status {
            q = q.bind(s);
        }
        if let Some(p) = program {
            q = q.bind(p);
        }
        if let Some(term) = search {
            q = q.bind(format!("%{term}%"));
        }
        q
    }
}
