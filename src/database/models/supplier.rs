use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Supplier {
    #[serde(rename = "SupplierID")]
    #[sqlx(rename = "SupplierID")]
    pub supplier_id: i32,
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
    #[sqlx(rename = "HomePage")]
    pub home_page: Option<String>,
}

impl Table for Supplier {
    type Key = i32;

    const TABLE: &'static str = "Suppliers";
    const NAME: &'static str = "Supplier";
    const KEY_COLUMNS: &'static [&'static str] = &["SupplierID"];
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
        "HomePage",
    ];
    const INSERT_KEY: bool = false;

    fn key(&self) -> i32 {
        self.supplier_id
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
        args.add(self.home_page.clone());
    }
}
