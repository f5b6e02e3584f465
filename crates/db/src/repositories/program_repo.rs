//! Repository for the `programs` table.

use sqlx::PgPool;

use sattva_core::program::DEFAULT_MAX_PARTICIPANTS;
use sattva_core::types::DbId;

use crate::models::program::{CreateProgram, Program};

/// Column list for `programs` queries.
const COLUMNS: &str = "\
    id, name, category, subcategory, description, short_description, \
    duration, price_inr, original_price_inr, currency, image, images_json, \
    benefits_json, highlights_json, schedule_json, locations_json, \
    instructor_json, max_participants, current_participants, is_online, \
    is_active, featured, tags_json, requirements_json, testimonials_json, \
    created_at, updated_at";

/// Listing order: featured programs first, then newest.
const LIST_ORDER: &str = "ORDER BY featured DESC, created_at DESC";

/// Provides CRUD operations for the program catalog.
pub struct ProgramRepo;

impl ProgramRepo {
    /// Create a new program, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateProgram) -> Result<Program, sqlx::Error> {
        let query = format!(
            "INSERT INTO programs \
                (name, category, subcategory, description, short_description, \
                 duration, price_inr, original_price_inr, currency, image, \
                 images_json, benefits_json, highlights_json, schedule_json, \
                 locations_json, instructor_json, max_participants, \
                 current_participants, is_online, is_active, featured, \
                 tags_json, requirements_json, testimonials_json) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, \
                     $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24) \
             RETURNING {COLUMNS}"
        );
        Self::bind_payload(sqlx::query_as::<_, Program>(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Find a program by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Program>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programs WHERE id = $1");
        sqlx::query_as::<_, Program>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active programs with optional filters.
    ///
    /// `search` matches name, description, or any tag case-insensitively.
    /// Featured programs sort first, then newest.
    pub async fn list_filtered(
        pool: &PgPool,
        category: Option<&str>,
        subcategory: Option<&str>,
        featured: Option<bool>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Program>, sqlx::Error> {
        let (where_clause, param_idx) =
            Self::filter_clause(category, subcategory, featured, search);

        let query = format!(
            "SELECT {COLUMNS} FROM programs {where_clause} {LIST_ORDER} \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, Program>(&query);
        if let Some(c) = category {
            q = q.bind(c);
        }
        if let Some(sc) = subcategory {
            q = q.bind(sc);
        }
        if let Some(f) = featured {
            q = q.bind(f);
        }
        if let Some(term) = search {
            q = q.bind(format!("%{term}%"));
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Count active programs matching the same filters as
    /// [`Self::list_filtered`].
    pub async fn count_filtered(
        pool: &PgPool,
        category: Option<&str>,
        subcategory: Option<&str>,
        featured: Option<bool>,
        search: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = Self::filter_clause(category, subcategory, featured, search);
        let query = format!("SELECT COUNT(*) FROM programs {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(c) = category {
            q = q.bind(c);
        }
        if let Some(sc) = subcategory {
            q = q.bind(sc);
        }
        if let Some(f) = featured {
            q = q.bind(f);
        }
        if let Some(term) = search {
            q = q.bind(format!("%{term}%"));
        }
        q.fetch_one(pool).await
    }

    /// Fully replace a program's fields. Returns the updated row if found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateProgram,
    ) -> Result<Option<Program>, sqlx::Error> {
        let query = format!(
            "UPDATE programs SET \
                name = $1, category = $2, subcategory = $3, description = $4, \
                short_description = $5, duration = $6, price_inr = $7, \
                original_price_inr = $8, currency = $9, image = $10, \
                images_json = $11, benefits_json = $12, highlights_json = $13, \
                schedule_json = $14, locations_json = $15, instructor_json = $16, \
                max_participants = $17, current_participants = $18, \
                is_online = $19, is_active = $20, featured = $21, \
                tags_json = $22, requirements_json = $23, testimonials_json = $24 \
             WHERE id = $25 \
             RETURNING {COLUMNS}"
        );
        Self::bind_payload(sqlx::query_as::<_, Program>(&query), input)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a program. Returns true if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The newest featured, active programs for the home page (up to 6).
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Program>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM programs \
             WHERE featured = TRUE AND is_active = TRUE \
             ORDER BY created_at DESC LIMIT 6"
        );
        sqlx::query_as::<_, Program>(&query).fetch_all(pool).await
    }

    // ---- private helpers ----

    /// Build the WHERE clause for listing. Listings only ever show active
    /// programs; the back office fetches inactive ones by id.
    fn filter_clause(
        category: Option<&str>,
        subcategory: Option<&str>,
        featured: Option<bool>,
        search: Option<&str>,
    ) -> (String, usize) {
        let mut conditions: Vec<String> = vec!["is_active = TRUE".to_string()];
        let mut param_idx: usize = 1;

        if category.is_some() {
            conditions.push(format!("category = ${param_idx}"));
            param_idx += 1;
        }
        if subcategory.is_some() {
            conditions.push(format!("subcategory = ${param_idx}"));
            param_idx += 1;
        }
        if featured.is_some() {
            conditions.push(format!("featured = ${param_idx}"));
            param_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!(
                "(name ILIKE ${param_idx} OR description ILIKE ${param_idx} \
                 OR EXISTS (SELECT 1 FROM jsonb_array_elements_text(coalesce(tags_json, '[]'::jsonb)) tag \
                            WHERE tag ILIKE ${param_idx}))"
            ));
            param_idx += 1;
        }

        (format!("WHERE {}", conditions.join(" AND ")), param_idx)
    }

    fn bind_payload<'q>(
        q: sqlx::query::QueryAs<'q, sqlx::Postgres, Program, sqlx::postgres::PgArguments>,
        input: &'q CreateProgram,
    ) -> sqlx::query::QueryAs<'q, sqlx::Postgres, Program, sqlx::postgres::PgArguments> {
        q.bind(input.name.trim())
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(&input.description)
            .bind(&input.short_description)
            .bind(&input.duration)
            .bind(input.price_inr)
            .bind(input.original_price_inr)
            .bind(
                input
                    .currency
                    .as_deref()
                    .unwrap_or(sattva_core::payment::DEFAULT_CURRENCY),
            )
            .bind(&input.image)
            .bind(&input.images_json)
            .bind(&input.benefits_json)
            .bind(&input.highlights_json)
            .bind(&input.schedule_json)
            .bind(&input.locations_json)
            .bind(&input.instructor_json)
            .bind(input.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS))
            .bind(input.current_participants.unwrap_or(0))
            .bind(input.is_online.unwrap_or(false))
            .bind(input.is_active.unwrap_or(true))
            .bind(input.featured.unwrap_or(false))
            .bind(&input.tags_json)
            .bind(&input.requirements_json)
            .bind(&input.testimonials_json)
    }
}
