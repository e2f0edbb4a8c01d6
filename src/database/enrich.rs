use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;

/// Sentinel attached when a referenced row cannot be resolved
pub const UNKNOWN: &str = "Unknown";

pub fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

/// Read-time denormalization for link entities: resolve the display names
/// behind the row's two foreign keys and attach them as transient fields.
///
/// Two realizations per entity, selected by call site: `enrich_row` issues
/// two single-row lookups for a fetched-by-key instance; `enrich_rows`
/// issues two dictionary lookups for a whole list so a page of N rows costs
/// three queries instead of 2N+1. Both funnel through the entity's `attach`
/// function and must produce identical output for the same underlying data.
#[async_trait]
pub trait Enrich: Sized + Send {
    async fn enrich_row(&mut self, pool: &PgPool) -> Result<(), DatabaseError>;
    async fn enrich_rows(rows: &mut [Self], pool: &PgPool) -> Result<(), DatabaseError>;
}
