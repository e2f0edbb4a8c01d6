use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::EmployeeTerritory;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddEmployeeTerritoryRequest {
    #[serde(rename = "EmployeeID")]
    pub employee_id: i32,
    #[serde(rename = "TerritoryID")]
    pub territory_id: String,
}

impl AddEmployeeTerritoryRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_territory_id(&mut errors, &self.territory_id);
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditEmployeeTerritoryRequest {
    #[serde(rename = "EmployeeID")]
    pub employee_id: i32,
    #[serde(rename = "TerritoryID")]
    pub territory_id: String,
}

impl EditEmployeeTerritoryRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_territory_id(&mut errors, &self.territory_id);
        validation::finish(errors)
    }
}

fn validate_territory_id(errors: &mut FieldErrors, value: &str) {
    validation::require(errors, "TerritoryID", "TerritoryID", value);
    validation::max_len(errors, "TerritoryID", "TerritoryID", value, 20);
}

async fn add_employee_territory(
    Json(req): Json<AddEmployeeTerritoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let employee_territory = EmployeeTerritory {
        employee_id: req.employee_id,
        territory_id: req.territory_id,
        employee: None,
        territory: None,
    };

    let pool = Database::pool().await?;
    let added = Repository::<EmployeeTerritory>::new(pool)
        .insert(&employee_territory)
        .await?;
    let location = format!(
        "/api/EmployeeTerritory/GetEmployeeTerritoryById/{}/{}",
        added.employee_id, added.territory_id
    );
    Ok(created(location, added))
}

/// No non-key columns exist, so the edit is an existence check on the pair
async fn edit_employee_territory(
    Json(req): Json<EditEmployeeTerritoryRequest>,
) -> Result<Json<EmployeeTerritory>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let employee_territory = EmployeeTerritory {
        employee_id: req.employee_id,
        territory_id: req.territory_id,
        employee: None,
        territory: None,
    };

    let pool = Database::pool().await?;
    match Repository::<EmployeeTerritory>::new(pool)
        .update(&employee_territory)
        .await?
    {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Employee territory not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route(
            "/api/EmployeeTerritory/GetAllEmployeeTerritories",
            get(crud::list_enriched::<EmployeeTerritory>),
        )
        .route(
            "/api/EmployeeTerritory/GetEmployeeTerritoryById/:employeeId/:territoryId",
            get(crud::get_enriched::<EmployeeTerritory>),
        )
        .route(
            "/api/EmployeeTerritory/AddEmployeeTerritory",
            post(add_employee_territory),
        )
        .route(
            "/api/EmployeeTerritory/EditEmployeeTerritory",
            put(edit_employee_territory),
        )
        .route(
            "/api/EmployeeTerritory/DeleteEmployeeTerritory/:employeeId/:territoryId",
            delete(crud::delete_by_id::<EmployeeTerritory>),
        )
}
