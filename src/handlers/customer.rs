use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::Customer;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddCustomerRequest {
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

impl AddCustomerRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validation::require(&mut errors, "CustomerID", "CustomerID", &self.customer_id);
        validation::max_len(&mut errors, "CustomerID", "CustomerID", &self.customer_id, 5);
        validation::uppercase_only(&mut errors, "CustomerID", "CustomerID", &self.customer_id);
        validation::require(&mut errors, "CompanyName", "Company Name", &self.company_name);
        validation::max_len(&mut errors, "CompanyName", "Company Name", &self.company_name, 40);
        validation::max_len_opt(&mut errors, "ContactName", "Contact Name", self.contact_name.as_deref(), 30);
        validation::max_len_opt(&mut errors, "ContactTitle", "Contact Title", self.contact_title.as_deref(), 30);
        validation::max_len_opt(&mut errors, "Address", "Address", self.address.as_deref(), 60);
        validation::max_len_opt(&mut errors, "City", "City", self.city.as_deref(), 15);
        validation::max_len_opt(&mut errors, "Region", "Region", self.region.as_deref(), 15);
        validation::max_len_opt(&mut errors, "PostalCode", "Postal Code", self.postal_code.as_deref(), 10);
        validation::max_len_opt(&mut errors, "Country", "Country", self.country.as_deref(), 15);
        validation::max_len_opt(&mut errors, "Phone", "Phone", self.phone.as_deref(), 24);
        validation::max_len_opt(&mut errors, "Fax", "Fax", self.fax.as_deref(), 24);
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditCustomerRequest {
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

impl EditCustomerRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validation::require(&mut errors, "CustomerID", "CustomerID", &self.customer_id);
        validation::max_len(&mut errors, "CustomerID", "CustomerID", &self.customer_id, 5);
        validation::uppercase_only(&mut errors, "CustomerID", "CustomerID", &self.customer_id);
        validation::require(&mut errors, "CompanyName", "Company Name", &self.company_name);
        validation::max_len(&mut errors, "CompanyName", "Company Name", &self.company_name, 40);
        validation::max_len_opt(&mut errors, "ContactName", "Contact Name", self.contact_name.as_deref(), 30);
        validation::max_len_opt(&mut errors, "ContactTitle", "Contact Title", self.contact_title.as_deref(), 30);
        validation::max_len_opt(&mut errors, "Address", "Address", self.address.as_deref(), 60);
        validation::max_len_opt(&mut errors, "City", "City", self.city.as_deref(), 15);
        validation::max_len_opt(&mut errors, "Region", "Region", self.region.as_deref(), 15);
        validation::max_len_opt(&mut errors, "PostalCode", "Postal Code", self.postal_code.as_deref(), 10);
        validation::max_len_opt(&mut errors, "Country", "Country", self.country.as_deref(), 15);
        validation::max_len_opt(&mut errors, "Phone", "Phone", self.phone.as_deref(), 24);
        validation::max_len_opt(&mut errors, "Fax", "Fax", self.fax.as_deref(), 24);
        validation::finish(errors)
    }
}

async fn add_customer(Json(req): Json<AddCustomerRequest>) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let customer = Customer {
        customer_id: req.customer_id,
        company_name: req.company_name,
        contact_name: req.contact_name,
        contact_title: req.contact_title,
        address: req.address,
        city: req.city,
        region: req.region,
        postal_code: req.postal_code,
        country: req.country,
        phone: req.phone,
        fax: req.fax,
    };

    let pool = Database::pool().await?;
    let added = Repository::<Customer>::new(pool).insert(&customer).await?;
    let location = format!("/api/Customer/GetCustomerById/{}", added.customer_id);
    Ok(created(location, added))
}

async fn edit_customer(Json(req): Json<EditCustomerRequest>) -> Result<Json<Customer>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let customer = Customer {
        customer_id: req.customer_id,
        company_name: req.company_name,
        contact_name: req.contact_name,
        contact_title: req.contact_title,
        address: req.address,
        city: req.city,
        region: req.region,
        postal_code: req.postal_code,
        country: req.country,
        phone: req.phone,
        fax: req.fax,
    };

    let pool = Database::pool().await?;
    match Repository::<Customer>::new(pool).update(&customer).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Customer not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/Customer/GetAllCustomers", get(crud::list_all::<Customer>))
        .route("/api/Customer/GetCustomerById/:id", get(crud::get_by_id::<Customer>))
        .route("/api/Customer/AddCustomer", post(add_customer))
        .route("/api/Customer/EditCustomer", put(edit_customer))
        .route("/api/Customer/DeleteCustomer/:id", delete(crud::delete_by_id::<Customer>))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_must_be_uppercase() {
        let req = AddCustomerRequest {
            customer_id: "alfki".to_string(),
            company_name: "Alfreds Futterkiste".to_string(),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors
            .get("CustomerID")
            .unwrap()
            .contains("uppercase"));
    }

    #[test]
    fn valid_customer_passes() {
        let req = AddCustomerRequest {
            customer_id: "ALFKI".to_string(),
            company_name: "Alfreds Futterkiste".to_string(),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }
}
