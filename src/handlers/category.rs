use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::database::manager::Database;
use crate::database::models::Category;
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::validation::{self, FieldErrors};

use super::{created, crud};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddCategoryRequest {
    pub category_name: String,
    pub description: Option<String>,
    pub picture: Option<Vec<u8>>,
}

impl AddCategoryRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_name(&mut errors, &self.category_name);
        validation::finish(errors)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EditCategoryRequest {
    #[serde(rename = "CategoryID")]
    pub category_id: i32,
    pub category_name: String,
    pub description: Option<String>,
    pub picture: Option<Vec<u8>>,
}

impl EditCategoryRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_name(&mut errors, &self.category_name);
        validation::finish(errors)
    }
}

fn validate_name(errors: &mut FieldErrors, value: &str) {
    validation::require(errors, "CategoryName", "Category Name", value);
    validation::max_len(errors, "CategoryName", "Category Name", value, 15);
}

async fn add_category(Json(req): Json<AddCategoryRequest>) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let category = Category {
        category_id: 0,
        category_name: req.category_name,
        description: req.description,
        picture: req.picture,
    };

    let pool = Database::pool().await?;
    let added = Repository::<Category>::new(pool).insert(&category).await?;
    let location = format!("/api/Category/GetCategoryById/{}", added.category_id);
    Ok(created(location, added))
}

async fn edit_category(Json(req): Json<EditCategoryRequest>) -> Result<Json<Category>, ApiError> {
    req.validate().map_err(ApiError::from_field_errors)?;

    let category = Category {
        category_id: req.category_id,
        category_name: req.category_name,
        description: req.description,
        picture: req.picture,
    };

    let pool = Database::pool().await?;
    match Repository::<Category>::new(pool).update(&category).await? {
        Some(row) => Ok(Json(row)),
        None => Err(ApiError::not_found("Category not found")),
    }
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/Category/GetAllCategories", get(crud::list_all::<Category>))
        .route("/api/Category/GetCategoryById/:id", get(crud::get_by_id::<Category>))
        .route("/api/Category/AddCategory", post(add_category))
        .route("/api/Category/EditCategory", put(edit_category))
        .route("/api/Category/DeleteCategory/:id", delete(crud::delete_by_id::<Category>))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_over_15_chars_fails() {
        let req = AddCategoryRequest {
            category_name: "Confections Plus".to_string(), // 16 chars
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.get("CategoryName").unwrap().contains("15"));
    }

    #[test]
    fn category_name_required() {
        let req = AddCategoryRequest::default();
        let errors = req.validate().unwrap_err();
        assert_eq!(
            errors.get("CategoryName").map(String::as_str),
            Some("Category Name is required")
        );
    }
}
