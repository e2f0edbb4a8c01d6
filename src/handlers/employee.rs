use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::Employee;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddEmployeeRequest {
    pub last_name: String,
    pub first_name: String,
    pub title: Option<String>,
    pub title_of_courtesy: Option<String>,
    pub birth_date: Option<NaiveDateTime>,
    pub hire_date: Option<NaiveDateTime>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub home_phone: Option<String>,
    pub extension: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub notes: Option<String>,
    pub reports_to: Option<i32>,
    pub photo_path: Option<String>,
    pub salary: Option<f64>,
}

impl AddEmployeeRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validation::require(&mut errors, "LastName", "Last Name", &self.last_name);
        validation::max_len(&mut errors, "LastName", "Last Name", &self.last_name, 20);
        validation::require(&mut errors, "FirstName", "First Name", &self.first_name);
        validation::max_len(&mut errors, "FirstName", "First Name", &self.first_name, 10);
        validation::max_len_opt(&mut errors, "Title", "Title", self.title.as_deref(), 30);
        validation::max_len_opt(&mut errors, "TitleOfCourtesy", "Title Of Courtesy", self.title_of_courtesy.as_deref(), 25);
        validation::max_len_opt(&mut errors, "Address", "Address", self.address.as_deref(), 60);
        validation::max_len_opt(&mut errors, "City", "City", self.city.as_deref(), 15);
        validation::max_len_opt(&mut errors, "Region", "Region", self.region.as_deref(), 15);
        validation::max_len_opt(&mut errors, "PostalCode", "Postal Code", self.postal_code.as_deref(), 10);
        validation::max_len_opt(&mut errors, "Country", "Country", self.country.as_deref(), 15);
        validation::max_len_opt(&mut errors, "HomePhone", "Home Phone", self.home_phone.as_deref(), 24);
        validation::max_len_opt(&mut errors, "Extension", "Extension", self.extension.as_deref(), 4);
        validation::max_len_opt(&mut errors, "PhotoPath", "Photo Path", self.photo_path.as_deref(), 255);
        validate_dates(&mut errors, &self.birth_date, &self.hire_date);
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditEmployeeRequest {
    #[serde(rename = "EmployeeID")]
    pub employee_id: i32,
    pub last_name: String,
    pub first_name: String,
    pub title: Option<String>,
    pub title_of_courtesy: Option<String>,
    pub birth_date: Option<NaiveDateTime>,
    pub hire_date: Option<NaiveDateTime>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub home_phone: Option<String>,
    pub extension: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub notes: Option<String>,
    pub reports_to: Option<i32>,
    pub photo_path: Option<String>,
    pub salary: Option<f64>,
}

impl EditEmployeeRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validation::require(&mut errors, "LastName", "Last Name", &self.last_name);
        validation::max_len(&mut errors, "LastName", "Last Name", &self.last_name, 20);
        validation::require(&mut errors, "FirstName", "First Name", &self.first_name);
        validation::max_len(&mut errors, "FirstName", "First Name", &self.first_name, 10);
        validation::max_len_opt(&mut errors, "Title", "Title", self.title.as_deref(), 30);
        validation::max_len_opt(&mut errors, "TitleOfCourtesy", "Title Of Courtesy", self.title_of_courtesy.as_deref(), 25);
        validation::max_len_opt(&mut errors, "Address", "Address", self.address.as_deref(), 60);
        validation::max_len_opt(&mut errors, "City", "City", self.city.as_deref(), 15);
        validation::max_len_opt(&mut errors, "Region", "Region", self.region.as_deref(), 15);
        validation::max_len_opt(&mut errors, "PostalCode", "Postal Code", self.postal_code.as_deref(), 10);
        validation::max_len_opt(&mut errors, "Country", "Country", self.country.as_deref(), 15);
        validation::max_len_opt(&mut errors, "HomePhone", "Home Phone", self.home_phone.as_deref(), 24);
        validation::max_len_opt(&mut errors, "Extension", "Extension", self.extension.as_deref(), 4);
        validation::max_len_opt(&mut errors, "PhotoPath", "Photo Path", self.photo_path.as_deref(), 255);
        validate_dates(&mut errors, &self.birth_date, &self.hire_date);
        validation::finish(errors)
    }
}

/// Cross-field rule: an employee cannot be hired before being born
fn validate_dates(
    errors: &mut FieldErrors,
    birth_date: &Option<NaiveDateTime>,
    hire_date: &Option<NaiveDateTime>,
) {
    if let (Some(birth), Some(hire)) = (birth_date, hire_date) {
        if birth > hire {
            errors
                .entry("BirthDate".to_string())
                .or_insert_with(|| "Birth date cannot be greater than hire date".to_string());
        }
    }
}

async fn add_employee(Json(req): Json<AddEmployeeRequest>) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let employee = Employee {
        employee_id: 0,
        last_name: req.last_name,
        first_name: req.first_name,
        title: req.title,
        title_of_courtesy: req.title_of_courtesy,
        birth_date: req.birth_date,
        hire_date: req.hire_date,
        address: req.address,
        city: req.city,
        region: req.region,
        postal_code: req.postal_code,
        country: req.country,
        home_phone: req.home_phone,
        extension: req.extension,
        photo: req.photo,
        notes: req.notes,
        reports_to: req.reports_to,
        photo_path: req.photo_path,
        salary: req.salary,
    };

    let pool = Database::pool().await?;
    let added = Repository::<Employee>::new(pool).insert(&employee).await?;
    let location = format!("/api/Employee/GetEmployeeById/{}", added.employee_id);
    Ok(created(location, added))
}

async fn edit_employee(Json(req): Json<EditEmployeeRequest>) -> Result<Json<Employee>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let employee = Employee {
        employee_id: req.employee_id,
        last_name: req.last_name,
        first_name: req.first_name,
        title: req.title,
        title_of_courtesy: req.title_of_courtesy,
        birth_date: req.birth_date,
        hire_date: req.hire_date,
        address: req.address,
        city: req.city,
        region: req.region,
        postal_code: req.postal_code,
        country: req.country,
        home_phone: req.home_phone,
        extension: req.extension,
        photo: req.photo,
        notes: req.notes,
        reports_to: req.reports_to,
        photo_path: req.photo_path,
        salary: req.salary,
    };

    let pool = Database::pool().await?;
    match Repository::<Employee>::new(pool).update(&employee).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Employee not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/Employee/GetAllEmployees", get(crud::list_all::<Employee>))
        .route("/api/Employee/GetEmployeeById/:id", get(crud::get_by_id::<Employee>))
        .route("/api/Employee/AddEmployee", post(add_employee))
        .route("/api/Employee/EditEmployee", put(edit_employee))
        .route("/api/Employee/DeleteEmployee/:id", delete(crud::delete_by_id::<Employee>))
}
