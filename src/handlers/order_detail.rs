use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::OrderDetail;
use crate::database::repository::Repository;
use crate::error::ApiError;

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddOrderDetailRequest {
    #[serde(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "ProductID")]
    pub product_id: i32,
    pub unit_price: Decimal,
    pub quantity: i16,
    pub discount: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditOrderDetailRequest {
    #[serde(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "ProductID")]
    pub product_id: i32,
    pub unit_price: Decimal,
    pub quantity: i16,
    pub discount: f32,
}

async fn add_order_detail(
    Json(req): Json<AddOrderDetailRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order_detail = OrderDetail {
        order_id: req.order_id,
        product_id: req.product_id,
        unit_price: req.unit_price,
        quantity: req.quantity,
        discount: req.discount,
        order_name: None,
        product_name: None,
    };

    let pool = Database::pool().await?;
    let added = Repository::<OrderDetail>::new(pool).insert(&order_detail).await?;
    let location = format!(
        "/api/OrderDetail/GetOrderDetailById/{}/{}",
        added.order_id, added.product_id
    );
    Ok(created(location, added))
}

async fn edit_order_detail(
    Json(req): Json<EditOrderDetailRequest>,
) -> Result<Json<OrderDetail>, ApiError> {
    let order_detail = OrderDetail {
        order_id: req.order_id,
        product_id: req.product_id,
        unit_price: req.unit_price,
        quantity: req.quantity,
        discount: req.discount,
        order_name: None,
        product_name: None,
    };

    let pool = Database::pool().await?;
    match Repository::<OrderDetail>::new(pool).update(&order_detail).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Order detail not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route(
            "/api/OrderDetail/GetAllOrderDetails",
            get(crud::list_enriched::<OrderDetail>),
        )
        .route(
            "/api/OrderDetail/GetOrderDetailById/:orderId/:productId",
            get(crud::get_enriched::<OrderDetail>),
        )
        .route("/api/OrderDetail/AddOrderDetail", post(add_order_detail))
        .route("/api/OrderDetail/EditOrderDetail", put(edit_order_detail))
        .route(
            "/api/OrderDetail/DeleteOrderDetail/:orderId/:productId",
            delete(crud::delete_by_id::<OrderDetail>),
        )
}
