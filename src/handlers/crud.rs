//! Generic handlers shared by every entity router. POST/PUT handlers stay
//! per-entity because they own the request DTOs and validation.

use axum::extract::Path;
use axum::Json;

use crate::database::enrich::Enrich;
use crate::database::manager::Database;
use crate::database::repository::{Repository, Table, TableKey};
use crate::error::ApiError;

pub async fn list_all<T: Table>() -> Result<Json<Vec<T>>, ApiError> {
    let pool = Database::pool().await?;
    let rows = Repository::<T>::new(pool).select_all().await?;
    Ok(Json(rows))
}

pub async fn get_by_id<T: Table>(Path(key): Path<T::Key>) -> Result<Json<T>, ApiError> {
    let pool = Database::pool().await?;
    match Repository::<T>::new(pool).select_one(&key).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found(format!("{} not found", T::NAME))),
    }
}

/// List variant for link entities: one bulk fetch plus two dictionary lookups
pub async fn list_enriched<T: Table + Enrich>() -> Result<Json<Vec<T>>, ApiError> {
    let pool = Database::pool().await?;
    let mut rows = Repository::<T>::new(pool.clone()).select_all().await?;
    T::enrich_rows(&mut rows, &pool).await?;
    Ok(Json(rows))
}

/// Get-by-key variant for link entities: two single-row lookups
pub async fn get_enriched<T: Table + Enrich>(Path(key): Path<T::Key>) -> Result<Json<T>, ApiError> {
    let pool = Database::pool().await?;
    let mut row = Repository::<T>::new(pool.clone())
        .select_one(&key)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("{} not found", T::NAME)))?;
    row.enrich_row(&pool).await?;
    Ok(Json(row))
}

pub async fn delete_by_id<T: Table>(Path(key): Path<T::Key>) -> Result<String, ApiError> {
    let pool = Database::pool().await?;
    if Repository::<T>::new(pool).delete(&key).await? {
        Ok(format!(
            "{} with id: {} is successfully deleted!",
            T::NAME,
            key.describe()
        ))
    } else {
        Err(ApiError::not_found(format!("{} not found", T::NAME)))
    }
}
