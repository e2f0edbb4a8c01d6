use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::Territory;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddTerritoryRequest {
    #[serde(rename = "TerritoryID")]
    pub territory_id: String,
    pub territory_description: String,
    #[serde(rename = "RegionID")]
    pub region_id: i32,
}

impl AddTerritoryRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_fields(&mut errors, &self.territory_id, &self.territory_description);
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditTerritoryRequest {
    #[serde(rename = "TerritoryID")]
    pub territory_id: String,
    pub territory_description: String,
    #[serde(rename = "RegionID")]
    pub region_id: i32,
}

impl EditTerritoryRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_fields(&mut errors, &self.territory_id, &self.territory_description);
        validation::finish(errors)
    }
}

fn validate_fields(errors: &mut FieldErrors, territory_id: &str, description: &str) {
    validation::require(errors, "TerritoryID", "TerritoryID", territory_id);
    validation::max_len(errors, "TerritoryID", "TerritoryID", territory_id, 20);
    validation::digits_only(errors, "TerritoryID", "TerritoryID", territory_id);
    validation::require(errors, "TerritoryDescription", "Territory Description", description);
    validation::max_len(errors, "TerritoryDescription", "Territory Description", description, 50);
}

async fn add_territory(Json(req): Json<AddTerritoryRequest>) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let territory = Territory {
        territory_id: req.territory_id,
        territory_description: req.territory_description,
        region_id: req.region_id,
    };

    let pool = Database::pool().await?;
    let added = Repository::<Territory>::new(pool).insert(&territory).await?;
    let location = format!("/api/Territory/GetTerritoryById/{}", added.territory_id);
    Ok(created(location, added))
}

async fn edit_territory(Json(req): Json<EditTerritoryRequest>) -> Result<Json<Territory>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let territory = Territory {
        territory_id: req.territory_id,
        territory_description: req.territory_description,
        region_id: req.region_id,
    };

    let pool = Database::pool().await?;
    match Repository::<Territory>::new(pool).update(&territory).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Territory not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/Territory/GetAllTerritories", get(crud::list_all::<Territory>))
        .route("/api/Territory/GetTerritoryById/:id", get(crud::get_by_id::<Territory>))
        .route("/api/Territory/AddTerritory", post(add_territory))
        .route("/api/Territory/EditTerritory", put(edit_territory))
        .route("/api/Territory/DeleteTerritory/:id", delete(crud::delete_by_id::<Territory>))
}
