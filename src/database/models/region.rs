use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    #[serde(rename = "RegionID")]
    #[sqlx(rename = "RegionID")]
    pub region_id: i32,
    #[sqlx(rename = "RegionDescription")]
    pub region_description: String,
}

impl Table for Region {
    type Key = i32;

    const TABLE: &'static str = "Region";
    const NAME: &'static str = "Region";
    const KEY_COLUMNS: &'static [&'static str] = &["RegionID"];
    const DATA_COLUMNS: &'static [&'static str] = &["RegionDescription"];
    const INSERT_KEY: bool = true;

    fn key(&self) -> i32 {
        self.region_id
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.region_description.clone());
    }

    // RegionDescription is CHAR(50); strip the padding before returning rows
    fn normalize(&mut self) {
        self.region_description = self.region_description.trim_end().to_string();
    }
}
