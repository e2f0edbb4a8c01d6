use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::Product;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddProductRequest {
    pub product_name: String,
    #[serde(rename = "SupplierID")]
    pub supplier_id: Option<i32>,
    #[serde(rename = "CategoryID")]
    pub category_id: Option<i32>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<Decimal>,
    pub units_in_stock: Option<i16>,
    pub units_on_order: Option<i16>,
    pub reorder_level: Option<i16>,
    pub discontinued: bool,
}

impl AddProductRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_fields(&mut errors, &self.product_name, self.quantity_per_unit.as_deref());
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditProductRequest {
    #[serde(rename = "ProductID")]
    pub product_id: i32,
    pub product_name: String,
    #[serde(rename = "SupplierID")]
    pub supplier_id: Option<i32>,
    #[serde(rename = "CategoryID")]
    pub category_id: Option<i32>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<Decimal>,
    pub units_in_stock: Option<i16>,
    pub units_on_order: Option<i16>,
    pub reorder_level: Option<i16>,
    pub discontinued: bool,
}

impl EditProductRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_fields(&mut errors, &self.product_name, self.quantity_per_unit.as_deref());
        validation::finish(errors)
    }
}

fn validate_fields(errors: &mut FieldErrors, product_name: &str, quantity_per_unit: Option<&str>) {
    validation::require(errors, "ProductName", "Product Name", product_name);
    validation::max_len(errors, "ProductName", "Product Name", product_name, 40);
    validation::max_len_opt(errors, "QuantityPerUnit", "Quantity Per Unit", quantity_per_unit, 20);
}

async fn add_product(Json(req): Json<AddProductRequest>) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let product = Product {
        product_id: 0,
        product_name: req.product_name,
        supplier_id: req.supplier_id,
        category_id: req.category_id,
        quantity_per_unit: req.quantity_per_unit,
        unit_price: req.unit_price,
        units_in_stock: req.units_in_stock,
        units_on_order: req.units_on_order,
        reorder_level: req.reorder_level,
        discontinued: req.discontinued,
    };

    let pool = Database::pool().await?;
    let added = Repository::<Product>::new(pool).insert(&product).await?;
    let location = format!("/api/Product/GetProductById/{}", added.product_id);
    Ok(created(location, added))
}

async fn edit_product(Json(req): Json<EditProductRequest>) -> Result<Json<Product>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let product = Product {
        product_id: req.product_id,
        product_name: req.product_name,
        supplier_id: req.supplier_id,
        category_id: req.category_id,
        quantity_per_unit: req.quantity_per_unit,
        unit_price: req.unit_price,
        units_in_stock: req.units_in_stock,
        units_on_order: req.units_on_order,
        reorder_level: req.reorder_level,
        discontinued: req.discontinued,
    };

    let pool = Database::pool().await?;
    match Repository::<Product>::new(pool).update(&product).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Product not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/Product/GetAllProducts", get(crud::list_all::<Product>))
        .route("/api/Product/GetProductById/:id", get(crud::get_by_id::<Product>))
        .route("/api/Product/AddProduct", post(add_product))
        .route("/api/Product/EditProduct", put(edit_product))
        .route("/api/Product/DeleteProduct/:id", delete(crud::delete_by_id::<Product>))
}
