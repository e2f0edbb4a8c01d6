use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    #[serde(rename = "CategoryID")]
    #[sqlx(rename = "CategoryID")]
    pub category_id: i32,
    #[sqlx(rename = "CategoryName")]
    pub category_name: String,
    #[sqlx(rename = "Description")]
    pub description: Option<String>,
    #[sqlx(rename = "Picture")]
    pub picture: Option<Vec<u8>>,
}

impl Table for Category {
    type Key = i32;

    const TABLE: &'static str = "Categories";
    const NAME: &'static str = "Category";
    const KEY_COLUMNS: &'static [&'static str] = &["CategoryID"];
    const DATA_COLUMNS: &'static [&'static str] = &["CategoryName", "Description", "Picture"];
    const INSERT_KEY: bool = false;

    fn key(&self) -> i32 {
        self.category_id
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.category_name.clone());
        args.add(self.description.clone());
        args.add(self.picture.clone());
    }
}
