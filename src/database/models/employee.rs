use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    #[serde(rename = "EmployeeID")]
    #[sqlx(rename = "EmployeeID")]
    pub employee_id: i32,
    #[sqlx(rename = "LastName")]
    pub last_name: String,
    #[sqlx(rename = "FirstName")]
    pub first_name: String,
    #[sqlx(rename = "Title")]
    pub title: Option<String>,
    #[sqlx(rename = "TitleOfCourtesy")]
    pub title_of_courtesy: Option<String>,
    #[sqlx(rename = "BirthDate")]
    pub birth_date: Option<NaiveDateTime>,
    #[sqlx(rename = "HireDate")]
    pub hire_date: Option<NaiveDateTime>,
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
    #[sqlx(rename = "HomePhone")]
    pub home_phone: Option<String>,
    #[sqlx(rename = "Extension")]
    pub extension: Option<String>,
    #[sqlx(rename = "Photo")]
    pub photo: Option<Vec<u8>>,
    #[sqlx(rename = "Notes")]
    pub notes: Option<String>,
    #[sqlx(rename = "ReportsTo")]
    pub reports_to: Option<i32>,
    #[sqlx(rename = "PhotoPath")]
    pub photo_path: Option<String>,
    #[sqlx(rename = "Salary")]
    pub salary: Option<f64>,
}

impl Table for Employee {
    type Key = i32;

    const TABLE: &'static str = "Employees";
    const NAME: &'static str = "Employee";
    const KEY_COLUMNS: &'static [&'static str] = &["EmployeeID"];
    const DATA_COLUMNS: &'static [&'static str] = &[
        "LastName",
        "FirstName",
        "Title",
        "TitleOfCourtesy",
        "BirthDate",
        "HireDate",
        "Address",
        "City",
        "Region",
        "PostalCode",
        "Country",
        "HomePhone",
        "Extension",
        "Photo",
        "Notes",
        "ReportsTo",
        "PhotoPath",
        "Salary",
    ];
    const INSERT_KEY: bool = false;

    fn key(&self) -> i32 {
        self.employee_id
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.last_name.clone());
        args.add(self.first_name.clone());
        args.add(self.title.clone());
        args.add(self.title_of_courtesy.clone());
        args.add(self.birth_date);
        args.add(self.hire_date);
        args.add(self.address.clone());
        args.add(self.city.clone());
        args.add(self.region.clone());
        args.add(self.postal_code.clone());
        args.add(self.country.clone());
        args.add(self.home_phone.clone());
        args.add(self.extension.clone());
        args.add(self.photo.clone());
        args.add(self.notes.clone());
        args.add(self.reports_to);
        args.add(self.photo_path.clone());
        args.add(self.salary);
    }
}
