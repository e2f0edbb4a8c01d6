use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

pub mod category;
pub mod crud;
pub mod customer;
pub mod customer_customer_demo;
pub mod customer_demographic;
pub mod employee;
pub mod employee_territory;
pub mod order;
pub mod order_detail;
pub mod product;
pub mod region;
pub mod shipper;
pub mod supplier;
pub mod territory;

/// 201 with the created body and a Location pointing at its get-by-id route
pub(crate) fn created<T: Serialize>(location: String, body: T) -> impl IntoResponse {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}
