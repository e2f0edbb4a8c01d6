use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow, PgPool};

use crate::database::enrich::{or_unknown, Enrich};
use crate::database::manager::DatabaseError;
use crate::database::repository::Table;

/// Order line item. `order_name` and `product_name` are transient display
/// fields, recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct OrderDetail {
    #[serde(rename = "OrderID")]
    #[sqlx(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "ProductID")]
    #[sqlx(rename = "ProductID")]
    pub product_id: i32,
    #[sqlx(rename = "UnitPrice")]
    pub unit_price: Decimal,
    #[sqlx(rename = "Quantity")]
    pub quantity: i16,
    #[sqlx(rename = "Discount")]
    pub discount: f32,
    #[sqlx(skip)]
    pub order_name: Option<String>,
    #[sqlx(skip)]
    pub product_name: Option<String>,
}

impl Table for OrderDetail {
    type Key = (i32, i32);

    const TABLE: &'static str = "OrderDetails";
    const NAME: &'static str = "Order detail";
    const KEY_COLUMNS: &'static [&'static str] = &["OrderID", "ProductID"];
    const DATA_COLUMNS: &'static [&'static str] = &["UnitPrice", "Quantity", "Discount"];
    const INSERT_KEY: bool = true;

    fn key(&self) -> (i32, i32) {
        (self.order_id, self.product_id)
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.unit_price);
        args.add(self.quantity);
        args.add(self.discount);
    }
}

impl OrderDetail {
    fn attach(&mut self, ship_name: Option<String>, product_name: Option<String>) {
        self.order_name = Some(or_unknown(ship_name));
        self.product_name = Some(or_unknown(product_name));
    }
}

#[async_trait]
impl Enrich for OrderDetail {
    async fn enrich_row(&mut self, pool: &PgPool) -> Result<(), DatabaseError> {
        // ShipName is nullable, so the scalar is an Option itself
        let ship_name: Option<String> = sqlx::query_scalar::<_, Option<String>>(
            r#"SELECT "ShipName" FROM "Orders" WHERE "OrderID" = $1"#,
        )
        .bind(self.order_id)
        .fetch_optional(pool)
        .await?
        .flatten();

        let product_name: Option<String> = sqlx::query_scalar(
            r#"SELECT "ProductName" FROM "Products" WHERE "ProductID" = $1"#,
        )
        .bind(self.product_id)
        .fetch_optional(pool)
        .await?;

        self.attach(ship_name, product_name);
        Ok(())
    }

    async fn enrich_rows(rows: &mut [Self], pool: &PgPool) -> Result<(), DatabaseError> {
        if rows.is_empty() {
            return Ok(());
        }

        let order_ids: Vec<i32> = rows.iter().map(|r| r.order_id).collect();
        let product_ids: Vec<i32> = rows.iter().map(|r| r.product_id).collect();

        let orders: HashMap<i32, Option<String>> = sqlx::query_as::<_, (i32, Option<String>)>(
            r#"SELECT "OrderID", "ShipName" FROM "Orders" WHERE "OrderID" = ANY($1)"#,
        )
        .bind(&order_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        let products: HashMap<i32, String> = sqlx::query_as::<_, (i32, String)>(
            r#"SELECT "ProductID", "ProductName" FROM "Products" WHERE "ProductID" = ANY($1)"#,
        )
        .bind(&product_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        for row in rows.iter_mut() {
            let ship_name = orders.get(&row.order_id).cloned().flatten();
            let product_name = products.get(&row.product_id).cloned();
            row.attach(ship_name, product_name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> OrderDetail {
        OrderDetail {
            order_id: 10248,
            product_id: 11,
            unit_price: Decimal::new(1400, 2),
            quantity: 12,
            discount: 0.0,
            order_name: None,
            product_name: None,
        }
    }

    #[test]
    fn attach_sets_display_fields() {
        let mut row = line();
        row.attach(
            Some("Vins et alcools Chevalier".to_string()),
            Some("Queso Cabrales".to_string()),
        );
        assert_eq!(
            row.order_name.as_deref(),
            Some("Vins et alcools Chevalier")
        );
        assert_eq!(row.product_name.as_deref(), Some("Queso Cabrales"));
    }

    #[test]
    fn attach_defaults_unresolved_keys_to_unknown() {
        let mut row = line();
        row.attach(None, None);
        assert_eq!(row.order_name.as_deref(), Some("Unknown"));
        assert_eq!(row.product_name.as_deref(), Some("Unknown"));
    }

    // An order row that exists but carries a null ShipName still resolves,
    // and must fall back the same way a missing order does.
    #[test]
    fn null_ship_name_becomes_unknown() {
        let orders: HashMap<i32, Option<String>> = [(10248, None)].into();
        let mut row = line();
        let ship_name = orders.get(&row.order_id).cloned().flatten();
        row.attach(ship_name, Some("Queso Cabrales".to_string()));
        assert_eq!(row.order_name.as_deref(), Some("Unknown"));
    }
}
