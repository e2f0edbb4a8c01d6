use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::Order;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddOrderRequest {
    #[serde(rename = "CustomerID")]
    pub customer_id: Option<String>,
    #[serde(rename = "EmployeeID")]
    pub employee_id: Option<i32>,
    pub order_date: Option<NaiveDateTime>,
    pub required_date: Option<NaiveDateTime>,
    pub shipped_date: Option<NaiveDateTime>,
    pub ship_via: Option<i32>,
    pub freight: Option<Decimal>,
    pub ship_name: Option<String>,
    pub ship_address: Option<String>,
    pub ship_city: Option<String>,
    pub ship_region: Option<String>,
    pub ship_postal_code: Option<String>,
    pub ship_country: Option<String>,
}

impl AddOrderRequest {
    // Every field is optional; only the length limits apply
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validation::max_len_opt(&mut errors, "CustomerID", "CustomerID", self.customer_id.as_deref(), 5);
        validation::max_len_opt(&mut errors, "ShipName", "Ship Name", self.ship_name.as_deref(), 40);
        validation::max_len_opt(&mut errors, "ShipAddress", "Ship Address", self.ship_address.as_deref(), 60);
        validation::max_len_opt(&mut errors, "ShipCity", "Ship City", self.ship_city.as_deref(), 15);
        validation::max_len_opt(&mut errors, "ShipRegion", "Ship Region", self.ship_region.as_deref(), 15);
        validation::max_len_opt(&mut errors, "ShipPostalCode", "Ship Postal Code", self.ship_postal_code.as_deref(), 10);
        validation::max_len_opt(&mut errors, "ShipCountry", "Ship Country", self.ship_country.as_deref(), 15);
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditOrderRequest {
    #[serde(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "CustomerID")]
    pub customer_id: Option<String>,
    #[serde(rename = "EmployeeID")]
    pub employee_id: Option<i32>,
    pub order_date: Option<NaiveDateTime>,
    pub required_date: Option<NaiveDateTime>,
    pub shipped_date: Option<NaiveDateTime>,
    pub ship_via: Option<i32>,
    pub freight: Option<Decimal>,
    pub ship_name: Option<String>,
    pub ship_address: Option<String>,
    pub ship_city: Option<String>,
    pub ship_region: Option<String>,
    pub ship_postal_code: Option<String>,
    pub ship_country: Option<String>,
}

impl EditOrderRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validation::max_len_opt(&mut errors, "CustomerID", "CustomerID", self.customer_id.as_deref(), 5);
        validation::max_len_opt(&mut errors, "ShipName", "Ship Name", self.ship_name.as_deref(), 40);
        validation::max_len_opt(&mut errors, "ShipAddress", "Ship Address", self.ship_address.as_deref(), 60);
        validation::max_len_opt(&mut errors, "ShipCity", "Ship City", self.ship_city.as_deref(), 15);
        validation::max_len_opt(&mut errors, "ShipRegion", "Ship Region", self.ship_region.as_deref(), 15);
        validation::max_len_opt(&mut errors, "ShipPostalCode", "Ship Postal Code", self.ship_postal_code.as_deref(), 10);
        validation::max_len_opt(&mut errors, "ShipCountry", "Ship Country", self.ship_country.as_deref(), 15);
        validation::finish(errors)
    }
}

async fn add_order(Json(req): Json<AddOrderRequest>) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let order = Order {
        order_id: 0,
        customer_id: req.customer_id,
        employee_id: req.employee_id,
        order_date: req.order_date,
        required_date: req.required_date,
        shipped_date: req.shipped_date,
        ship_via: req.ship_via,
        freight: req.freight,
        ship_name: req.ship_name,
        ship_address: req.ship_address,
        ship_city: req.ship_city,
        ship_region: req.ship_region,
        ship_postal_code: req.ship_postal_code,
        ship_country: req.ship_country,
    };

    let pool = Database::pool().await?;
    let added = Repository::<Order>::new(pool).insert(&order).await?;
    let location = format!("/api/Order/GetOrderById/{}", added.order_id);
    Ok(created(location, added))
}

async fn edit_order(Json(req): Json<EditOrderRequest>) -> Result<Json<Order>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let order = Order {
        order_id: req.order_id,
        customer_id: req.customer_id,
        employee_id: req.employee_id,
        order_date: req.order_date,
        required_date: req.required_date,
        shipped_date: req.shipped_date,
        ship_via: req.ship_via,
        freight: req.freight,
        ship_name: req.ship_name,
        ship_address: req.ship_address,
        ship_city: req.ship_city,
        ship_region: req.ship_region,
        ship_postal_code: req.ship_postal_code,
        ship_country: req.ship_country,
    };

    let pool = Database::pool().await?;
    match Repository::<Order>::new(pool).update(&order).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Order not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/Order/GetAllOrders", get(crud::list_all::<Order>))
        .route("/api/Order/GetOrderById/:id", get(crud::get_by_id::<Order>))
        .route("/api/Order/AddOrder", post(add_order))
        .route("/api/Order/EditOrder", put(edit_order))
        .route("/api/Order/DeleteOrder/:id", delete(crud::delete_by_id::<Order>))
}
