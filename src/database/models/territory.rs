use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Territory {
    #[serde(rename = "TerritoryID")]
    #[sqlx(rename = "TerritoryID")]
    pub territory_id: String,
    #[sqlx(rename = "TerritoryDescription")]
    pub territory_description: String,
    #[serde(rename = "RegionID")]
    #[sqlx(rename = "RegionID")]
    pub region_id: i32,
}

impl Table for Territory {
    type Key = String;

    const TABLE: &'static str = "Territories";
    const NAME: &'static str = "Territory";
    const KEY_COLUMNS: &'static [&'static str] = &["TerritoryID"];
    const DATA_COLUMNS: &'static [&'static str] = &["TerritoryDescription", "RegionID"];
    const INSERT_KEY: bool = true;

    fn key(&self) -> String {
        self.territory_id.clone()
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.territory_description.clone());
        args.add(self.region_id);
    }

    // TerritoryDescription is CHAR(50); strip the padding before returning rows
    fn normalize(&mut self) {
        self.territory_description = self.territory_description.trim_end().to_string();
    }
}
