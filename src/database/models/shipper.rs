use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Shipper {
    #[serde(rename = "ShipperID")]
    #[sqlx(rename = "ShipperID")]
    pub shipper_id: i32,
    #[sqlx(rename = "CompanyName")]
    pub company_name: String,
    #[sqlx(rename = "Phone")]
    pub phone: Option<String>,
}

impl Table for Shipper {
    type Key = i32;

    const TABLE: &'static str = "Shippers";
    const NAME: &'static str = "Shipper";
    const KEY_COLUMNS: &'static [&'static str] = &["ShipperID"];
    const DATA_COLUMNS: &'static [&'static str] = &["CompanyName", "Phone"];
    const INSERT_KEY: bool = false;

    fn key(&self) -> i32 {
        self.shipper_id
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.company_name.clone());
        args.add(self.phone.clone());
    }
}
