use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::Shipper;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddShipperRequest {
    pub company_name: String,
    pub phone: Option<String>,
}

impl AddShipperRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_fields(&mut errors, &self.company_name, self.phone.as_deref());
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditShipperRequest {
    #[serde(rename = "ShipperID")]
    pub shipper_id: i32,
    pub company_name: String,
    pub phone: Option<String>,
}

impl EditShipperRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_fields(&mut errors, &self.company_name, self.phone.as_deref());
        validation::finish(errors)
    }
}

fn validate_fields(errors: &mut FieldErrors, company_name: &str, phone: Option<&str>) {
    validation::require(errors, "CompanyName", "Company Name", company_name);
    validation::max_len(errors, "CompanyName", "Company Name", company_name, 40);
    validation::max_len_opt(errors, "Phone", "Phone", phone, 24);
}

async fn add_shipper(Json(req): Json<AddShipperRequest>) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let shipper = Shipper {
        shipper_id: 0,
        company_name: req.company_name,
        phone: req.phone,
    };

    let pool = Database::pool().await?;
    let added = Repository::<Shipper>::new(pool).insert(&shipper).await?;
    let location = format!("/api/Shipper/GetShipperById/{}", added.shipper_id);
    Ok(created(location, added))
}

async fn edit_shipper(Json(req): Json<EditShipperRequest>) -> Result<Json<Shipper>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let shipper = Shipper {
        shipper_id: req.shipper_id,
        company_name: req.company_name,
        phone: req.phone,
    };

    let pool = Database::pool().await?;
    match Repository::<Shipper>::new(pool).update(&shipper).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Shipper not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/Shipper/GetAllShippers", get(crud::list_all::<Shipper>))
        .route("/api/Shipper/GetShipperById/:id", get(crud::get_by_id::<Shipper>))
        .route("/api/Shipper/AddShipper", post(add_shipper))
        .route("/api/Shipper/EditShipper", put(edit_shipper))
        .route("/api/Shipper/DeleteShipper/:id", delete(crud::delete_by_id::<Shipper>))
}
