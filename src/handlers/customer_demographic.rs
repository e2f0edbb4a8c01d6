use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::CustomerDemographic;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddCustomerDemographicRequest {
    #[serde(rename = "CustomerTypeID")]
    pub customer_type_id: String,
    pub customer_desc: Option<String>,
}

impl AddCustomerDemographicRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_type_id(&mut errors, &self.customer_type_id);
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditCustomerDemographicRequest {
    #[serde(rename = "CustomerTypeID")]
    pub customer_type_id: String,
    pub customer_desc: Option<String>,
}

impl EditCustomerDemographicRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_type_id(&mut errors, &self.customer_type_id);
        validation::finish(errors)
    }
}

fn validate_type_id(errors: &mut FieldErrors, value: &str) {
    validation::require(errors, "CustomerTypeID", "CustomerTypeID", value);
    validation::max_len(errors, "CustomerTypeID", "CustomerTypeID", value, 10);
    validation::digits_only(errors, "CustomerTypeID", "CustomerTypeID", value);
}

async fn add_customer_demographic(
    Json(req): Json<AddCustomerDemographicRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let demographic = CustomerDemographic {
        customer_type_id: req.customer_type_id,
        customer_desc: req.customer_desc,
    };

    let pool = Database::pool().await?;
    let added = Repository::<CustomerDemographic>::new(pool)
        .insert(&demographic)
        .await?;
    let location = format!(
        "/api/CustomerDemographic/GetCustomerDemographicById/{}",
        added.customer_type_id
    );
    Ok(created(location, added))
}

async fn edit_customer_demographic(
    Json(req): Json<EditCustomerDemographicRequest>,
) -> Result<Json<CustomerDemographic>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let demographic = CustomerDemographic {
        customer_type_id: req.customer_type_id,
        customer_desc: req.customer_desc,
    };

    let pool = Database::pool().await?;
    match Repository::<CustomerDemographic>::new(pool)
        .update(&demographic)
        .await?
    {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Customer demographic not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route(
            "/api/CustomerDemographic/GetAllCustomerDemographics",
            get(crud::list_all::<CustomerDemographic>),
        )
        .route(
            "/api/CustomerDemographic/GetCustomerDemographicById/:id",
            get(crud::get_by_id::<CustomerDemographic>),
        )
        .route(
            "/api/CustomerDemographic/AddCustomerDemographic",
            post(add_customer_demographic),
        )
        .route(
            "/api/CustomerDemographic/EditCustomerDemographic",
            put(edit_customer_demographic),
        )
        .route(
            "/api/CustomerDemographic/DeleteCustomerDemographic/:id",
            delete(crud::delete_by_id::<CustomerDemographic>),
        )
}
