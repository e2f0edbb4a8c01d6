use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(rename = "CustomerID")]
    #[sqlx(rename = "CustomerID")]
    pub customer_id: String,
    #[sqlx(rename = "CompanyName")]
    pub company_name: String,
    #[sqlx(rename = "ContactName")]
    pub contact_name: Option<String>,
    #[sqlx(rename = "ContactTitle")]
    pub contact_title: Option<String>,
    #[sqlx(rename = "Address")]
    pub address: Option<String>,
    #[sqlx(rename = "City")]
    pub city: Option<String>,
    #[sqlx(rename = "Region")]
    pub region: Option<String>,
    #[sqlx(rename = "PostalCode")]
    pub postal_code: Option<String>,
    #[sqlx(rename = "Country")]
    pub country: Option<String>,
    #[sqlx(rename = "Phone")]
    pub phone: Option<String>,
    #[sqlx(rename = "Fax")]
    pub fax: Option<String>,
}

impl Table for Customer {
    type Key = String;

    const TABLE: &'static str = "Customers";
    const NAME: &'static str = "Customer";
    const KEY_COLUMNS: &'static [&'static str] = &["CustomerID"];
    const DATA_COLUMNS: &'static [&'static str] = &[
        "CompanyName",
        "ContactName",
        "ContactTitle",
        "Address",
        "City",
        "Region",
        "PostalCode",
        "Country",
        "Phone",
        "Fax",
    ];
    const INSERT_KEY: bool = true;

    fn key(&self) -> String {
        self.customer_id.clone()
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.company_name.clone());
        args.add(self.contact_name.clone());
        args.add(self.contact_title.clone());
        args.add(self.address.clone());
        args.add(self.city.clone());
        args.add(self.region.clone());
        args.add(self.postal_code.clone());
        args.add(self.country.clone());
        args.add(self.phone.clone());
        args.add(self.fax.clone());
    }
}
