use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::Supplier;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddSupplierRequest {
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
    pub home_page: Option<String>,
}

impl AddSupplierRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
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
pub struct EditSupplierRequest {
    #[serde(rename = "SupplierID")]
    pub supplier_id: i32,
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
    pub home_page: Option<String>,
}

impl EditSupplierRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
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

async fn add_supplier(Json(req): Json<AddSupplierRequest>) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let supplier = Supplier {
        supplier_id: 0,
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
        home_page: req.home_page,
    };

    let pool = Database::pool().await?;
    let added = Repository::<Supplier>::new(pool).insert(&supplier).await?;
    let location = format!("/api/Supplier/GetSupplierById/{}", added.supplier_id);
    Ok(created(location, added))
}

async fn edit_supplier(Json(req): Json<EditSupplierRequest>) -> Result<Json<Supplier>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let supplier = Supplier {
        supplier_id: req.supplier_id,
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
        home_page: req.home_page,
    };

    let pool = Database::pool().await?;
    match Repository::<Supplier>::new(pool).update(&supplier).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Supplier not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/Supplier/GetAllSuppliers", get(crud::list_all::<Supplier>))
        .route("/api/Supplier/GetSupplierById/:id", get(crud::get_by_id::<Supplier>))
        .route("/api/Supplier/AddSupplier", post(add_supplier))
        .route("/api/Supplier/EditSupplier", put(edit_supplier))
        .route("/api/Supplier/DeleteSupplier/:id", delete(crud::delete_by_id::<Supplier>))
}
