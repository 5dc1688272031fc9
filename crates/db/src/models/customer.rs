//! Customer entity model and query parameters.
//!
//! Inserts and replacements take a validated
//! [`crm_core::customer::CustomerInput`]; there is no separate create DTO.

use crm_core::customer::CustomerStatus;
use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer row from the `customers` table.
///
/// Literal columns (`credit_period`, `discount_type`, `status`) hold the
/// same text the form submits.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub vat_number: Option<String>,
    pub credit_limit: Option<f64>,
    pub credit_period: String,
    pub discount_value: Option<f64>,
    pub discount_type: Option<String>,
    pub net_balance: Option<f64>,
    pub status: String,
    pub availability: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Filters for listing customers (`?status=&search=&limit=&offset=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerListParams {
    pub status: Option<CustomerStatus>,
    /// Case-insensitive substring of name, email or contact number.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
