use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, FromRow};

use crate::database::repository::Table;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerDemographic {
    #[serde(rename = "CustomerTypeID")]
    #[sqlx(rename = "CustomerTypeID")]
    pub customer_type_id: String,
    #[sqlx(rename = "CustomerDesc")]
    pub customer_desc: Option<String>,
}

impl Table for CustomerDemographic {
    type Key = String;

    const TABLE: &'static str = "CustomerDemographics";
    const NAME: &'static str = "Customer demographic";
    const KEY_COLUMNS: &'static [&'static str] = &["CustomerTypeID"];
    const DATA_COLUMNS: &'static [&'static str] = &["CustomerDesc"];
    const INSERT_KEY: bool = true;

    fn key(&self) -> String {
        self.customer_type_id.clone()
    }

    fn push_data(&self, args: &mut PgArguments) {
        args.add(self.customer_desc.clone());
    }

    // CustomerTypeID is CHAR(10); strip the padding before returning rows
    fn normalize(&mut self) {
        self.customer_type_id = self.customer_type_id.trim_end().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_char_padding() {
        let mut demographic = CustomerDemographic {
            customer_type_id: "1         ".to_string(),
            customer_desc: Some("Retail".to_string()),
        };
        demographic.normalize();
        assert_eq!(demographic.customer_type_id, "1");
    }
}
