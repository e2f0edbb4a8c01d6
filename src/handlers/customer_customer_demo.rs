use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::CustomerCustomerDemo;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddCustomerCustomerDemoRequest {
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "CustomerTypeID")]
    pub customer_type_id: String,
}

impl AddCustomerCustomerDemoRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_key_pair(&mut errors, &self.customer_id, &self.customer_type_id);
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditCustomerCustomerDemoRequest {
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "CustomerTypeID")]
    pub customer_type_id: String,
}

impl EditCustomerCustomerDemoRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_key_pair(&mut errors, &self.customer_id, &self.customer_type_id);
        validation::finish(errors)
    }
}

fn validate_key_pair(errors: &mut FieldErrors, customer_id: &str, customer_type_id: &str) {
    validation::require(errors, "CustomerID", "CustomerID", customer_id);
    validation::max_len(errors, "CustomerID", "CustomerID", customer_id, 5);
    validation::uppercase_only(errors, "CustomerID", "CustomerID", customer_id);
    validation::require(errors, "CustomerTypeID", "CustomerTypeID", customer_type_id);
    validation::max_len(errors, "CustomerTypeID", "CustomerTypeID", customer_type_id, 10);
    validation::digits_only(errors, "CustomerTypeID", "CustomerTypeID", customer_type_id);
}

async fn add_customer_customer_demo(
    Json(req): Json<AddCustomerCustomerDemoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let customer_customer_demo = CustomerCustomerDemo {
        customer_id: req.customer_id,
        customer_type_id: req.customer_type_id,
        customer_name: None,
        customer_type_description: None,
    };

    let pool = Database::pool().await?;
    let added = Repository::<CustomerCustomerDemo>::new(pool)
        .insert(&customer_customer_demo)
        .await?;
    let location = format!(
        "/api/CustomerCustomerDemo/GetCustomerCustomerDemoById/{}/{}",
        added.customer_id, added.customer_type_id
    );
    Ok(created(location, added))
}

/// No non-key columns exist, so the edit is an existence check on the pair
async fn edit_customer_customer_demo(
    Json(req): Json<EditCustomerCustomerDemoRequest>,
) -> Result<Json<CustomerCustomerDemo>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let customer_customer_demo = CustomerCustomerDemo {
        customer_id: req.customer_id,
        customer_type_id: req.customer_type_id,
        customer_name: None,
        customer_type_description: None,
    };

    let pool = Database::pool().await?;
    match Repository::<CustomerCustomerDemo>::new(pool)
        .update(&customer_customer_demo)
        .await?
    {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Customer customer demo not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route(
            "/api/CustomerCustomerDemo/GetAllCustomerCustomerDemos",
            get(crud::list_enriched::<CustomerCustomerDemo>),
        )
        .route(
            "/api/CustomerCustomerDemo/GetCustomerCustomerDemoById/:customerId/:customerTypeId",
            get(crud::get_enriched::<CustomerCustomerDemo>),
        )
        .route(
            "/api/CustomerCustomerDemo/AddCustomerCustomerDemo",
            post(add_customer_customer_demo),
        )
        .route(
            "/api/CustomerCustomerDemo/EditCustomerCustomerDemo",
            put(edit_customer_customer_demo),
        )
        .route(
            "/api/CustomerCustomerDemo/DeleteCustomerCustomerDemo/:customerId/:customerTypeId",
            delete(crud::delete_by_id::<CustomerCustomerDemo>),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_pair_character_classes_enforced() {
        let req = AddCustomerCustomerDemoRequest {
            customer_id: "alfki".to_string(),
            customer_type_id: "retail".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.contains_key("CustomerID"));
        assert!(errors.contains_key("CustomerTypeID"));
    }
}
