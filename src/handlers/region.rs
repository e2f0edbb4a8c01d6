use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::Region;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddRegionRequest {
    #[serde(rename = "RegionID")]
    pub region_id: i32,
    pub region_description: String,
}

impl AddRegionRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_description(&mut errors, &self.region_description);
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditRegionRequest {
    #[serde(rename = "RegionID")]
    pub region_id: i32,
    pub region_description: String,
}

impl EditRegionRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_description(&mut errors, &self.region_description);
        validation::finish(errors)
    }
}

fn validate_description(errors: &mut FieldErrors, value: &str) {
    validation::require(errors, "RegionDescription", "Region Description", value);
    validation::max_len(errors, "RegionDescription", "Region Description", value, 50);
}

async fn add_region(Json(req): Json<AddRegionRequest>) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let region = Region {
        region_id: req.region_id,
        region_description: req.region_description,
    };

    let pool = Database::pool().await?;
    let added = Repository::<Region>::new(pool).insert(&region).await?;
    let location = format!("/api/Region/GetRegionById/{}", added.region_id);
    Ok(created(location, added))
}

async fn edit_region(Json(req): Json<EditRegionRequest>) -> Result<Json<Region>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let region = Region {
        region_id: req.region_id,
        region_description: req.region_description,
    };

    let pool = Database::pool().await?;
    match Repository::<Region>::new(pool).update(&region).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Region not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/Region/GetAllRegions", get(crud::list_all::<Region>))
        .route("/api/Region/GetRegionById/:id", get(crud::get_by_id::<Region>))
        .route("/api/Region/AddRegion", post(add_region))
        .route("/api/Region/EditRegion", put(edit_region))
        .route("/api/Region/DeleteRegion/:id", delete(crud::delete_by_id::<Region>))
}
