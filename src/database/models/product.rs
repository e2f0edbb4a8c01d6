use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(rename = "ProductID")]
    #[sqlx(rename = "ProductID")]
    pub product_id: i32,
    #[sqlx(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "SupplierID")]
    #[sqlx(rename = "SupplierID")]
    pub supplier_id: Option<i32>,
    #[serde(rename = "CategoryID")]
    #[sqlx(rename = "CategoryID")]
    pub category_id: Option<i32>,
    #[sqlx(rename = "QuantityPerUnit")]
    pub quantity_per_unit: Option<String>,
    #[sqlx(rename = "UnitPrice")]
    pub unit_price: Option<Decimal>,
    #[sqlx(rename = "UnitsInStock")]
    pub units_in_stock: Option<i16>,
    #[sqlx(rename = "UnitsOnOrder")]
    pub units_on_order: Option<i16>,
    #[sqlx(rename = "ReorderLevel")]
    pub reorder_level: Option<i16>,
    #[sqlx(rename = "Discontinued")]
    pub discontinued: bool,
}

impl Table for Product {
    type Key = i32;

    const TABLE: &'static str = "Products";
    const NAME: &'static str = "Product";
    const KEY_COLUMNS: &'static [&'static str] = &["ProductID"];
    const DATA_COLUMNS: &'static [&'static str] = &[
        "ProductName",
        "SupplierID",
        "CategoryID",
        "QuantityPerUnit",
        "UnitPrice",
        "UnitsInStock",
        "UnitsOnOrder",
        "ReorderLevel",
        "Discontinued",
    ];
    const INSERT_KEY: bool = false;

    fn key(&self) -> i32 {
        self.product_id
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.product_name.clone());
        args.add(self.supplier_id);
        args.add(self.category_id);
        args.add(self.quantity_per_unit.clone());
        args.add(self.unit_price);
        args.add(self.units_in_stock);
        args.add(self.units_on_order);
        args.add(self.reorder_level);
        args.add(self.discontinued);
    }
}
