//! Repository for the `customers` table.

use crm_core::customer::CustomerInput;
use crm_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{Customer, CustomerListParams};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, contact_number, email, address, vat_number, credit_limit, \
                       credit_period, discount_value, discount_type, net_balance, status, \
                       availability, deleted_at, created_at, updated_at";

/// Page size when `limit` is omitted.
const DEFAULT_LIMIT: i64 = 25;
/// Largest page a caller may request.
const MAX_LIMIT: i64 = 100;

/// Clamp a requested page size into `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Turn free text into an `ILIKE ... ESCAPE '\'` substring pattern, so `%`,
/// `_` and `\` in the text match only themselves.
pub fn substring_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CustomerInput) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (name, contact_number, email, address, vat_number,
                                    credit_limit, credit_period, discount_value, discount_type,
                                    net_balance, status, availability)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.contact_number)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.vat_number)
            .bind(input.credit_limit)
            .bind(input.credit_period.as_str())
            .bind(input.discount_value)
            .bind(input.discount_type.map(|t| t.as_str()))
            .bind(input.net_balance)
            .bind(input.status.as_str())
            .bind(input.availability)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM customers WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List customers alphabetically by name, applying the optional filters.
    /// Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        params: &CustomerListParams,
    ) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customers
             WHERE deleted_at IS NULL
               AND ($1::TEXT IS NULL OR status = $1)
               AND ($2::TEXT IS NULL
                    OR name ILIKE $2 ESCAPE '\\'
                    OR email ILIKE $2 ESCAPE '\\'
                    OR contact_number ILIKE $2 ESCAPE '\\')
             ORDER BY LOWER(name) ASC, id ASC
             LIMIT $3 OFFSET $4"
        );
        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(substring_pattern);
        sqlx::query_as::<_, Customer>(&query)
            .bind(params.status.map(|s| s.as_str()))
            .bind(search)
            .bind(clamp_limit(params.limit))
            .bind(clamp_offset(params.offset))
            .fetch_all(pool)
            .await
    }

    /// Replace every editable column of a customer.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CustomerInput,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET
                name = $2,
                contact_number = $3,
                email = $4,
                address = $5,
                vat_number = $6,
                credit_limit = $7,
                credit_period = $8,
                discount_value = $9,
                discount_type = $10,
                net_balance = $11,
                status = $12,
                availability = $13
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.contact_number)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.vat_number)
            .bind(input.credit_limit)
            .bind(input.credit_period.as_str())
            .bind(input.discount_value)
            .bind(input.discount_type.map(|t| t.as_str()))
            .bind(input.net_balance)
            .bind(input.status.as_str())
            .bind(input.availability)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a customer by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE customers SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted customer. Returns the restored row, if any.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
