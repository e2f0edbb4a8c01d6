use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(rename = "OrderID")]
    #[sqlx(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "CustomerID")]
    #[sqlx(rename = "CustomerID")]
    pub customer_id: Option<String>,
    #[serde(rename = "EmployeeID")]
    #[sqlx(rename = "EmployeeID")]
    pub employee_id: Option<i32>,
    #[sqlx(rename = "OrderDate")]
    pub order_date: Option<NaiveDateTime>,
    #[sqlx(rename = "RequiredDate")]
    pub required_date: Option<NaiveDateTime>,
    #[sqlx(rename = "ShippedDate")]
    pub shipped_date: Option<NaiveDateTime>,
    #[sqlx(rename = "ShipVia")]
    pub ship_via: Option<i32>,
    #[sqlx(rename = "Freight")]
    pub freight: Option<Decimal>,
    #[sqlx(rename = "ShipName")]
    pub ship_name: Option<String>,
    #[sqlx(rename = "ShipAddress")]
    pub ship_address: Option<String>,
    #[sqlx(rename = "ShipCity")]
    pub ship_city: Option<String>,
    #[sqlx(rename = "ShipRegion")]
    pub ship_region: Option<String>,
    #[sqlx(rename = "ShipPostalCode")]
    pub ship_postal_code: Option<String>,
    #[sqlx(rename = "ShipCountry")]
    pub ship_country: Option<String>,
}

impl Table for Order {
    type Key = i32;

    const TABLE: &'static str = "Orders";
    const NAME: &'static str = "Order";
    const KEY_COLUMNS: &'static [&'static str] = &["OrderID"];
    const DATA_COLUMNS: &'static [&'static str] = &[
        "CustomerID",
        "EmployeeID",
        "OrderDate",
        "RequiredDate",
        "ShippedDate",
        "ShipVia",
        "Freight",
        "ShipName",
        "ShipAddress",
        "ShipCity",
        "ShipRegion",
        "ShipPostalCode",
        "ShipCountry",
    ];
    const INSERT_KEY: bool = false;

    fn key(&self) -> i32 {
        self.order_id
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.customer_id.clone());
        args.add(self.employee_id);
        args.add(self.order_date);
        args.add(self.required_date);
        args.add(self.shipped_date);
        args.add(self.ship_via);
        args.add(self.freight);
        args.add(self.ship_name.clone());
        args.add(self.ship_address.clone());
        args.add(self.ship_city.clone());
        args.add(self.ship_region.clone());
        args.add(self.ship_postal_code.clone());
        args.add(self.ship_country.clone());
    }
}
