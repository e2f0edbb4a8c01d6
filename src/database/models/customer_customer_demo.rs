use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{FromRow, PgPool};

use crate::database::enrich::{or_unknown, Enrich};
use crate::database::manager::DatabaseError;
use crate::database::repository::Table;

/// Link row between a customer and a demographic type. `customer_name` and
/// `customer_type_description` are transient display fields, recomputed on
/// every read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerCustomerDemo {
    #[serde(rename = "CustomerID")]
    #[sqlx(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "CustomerTypeID")]
    #[sqlx(rename = "CustomerTypeID")]
    pub customer_type_id: String,
    #[sqlx(skip)]
    pub customer_name: Option<String>,
    #[sqlx(skip)]
    pub customer_type_description: Option<String>,
}

impl Table for CustomerCustomerDemo {
    type Key = (String, String);

    const TABLE: &'static str = "CustomerCustomerDemo";
    const NAME: &'static str = "Customer customer demo";
    const KEY_COLUMNS: &'static [&'static str] = &["CustomerID", "CustomerTypeID"];
    const DATA_COLUMNS: &'static [&'static str] = &[];
    const INSERT_KEY: bool = true;

    fn key(&self) -> (String, String) {
        (self.customer_id.clone(), self.customer_type_id.clone())
    }

    fn push_data(&self, _args: &mut PgArguments) {}
}

impl CustomerCustomerDemo {
    fn attach(&mut self, company_name: Option<String>, customer_desc: Option<String>) {
        self.customer_name = Some(or_unknown(company_name));
        self.customer_type_description = Some(or_unknown(customer_desc));
    }
}

#[async_trait]
impl Enrich for CustomerCustomerDemo {
    async fn enrich_row(&mut self, pool: &PgPool) -> Result<(), DatabaseError> {
        let company_name: Option<String> = sqlx::query_scalar(
            r#"SELECT "CompanyName" FROM "Customers" WHERE "CustomerID" = $1"#,
        )
        .bind(self.customer_id.clone())
        .fetch_optional(pool)
        .await?;

        // CustomerDesc is nullable, so the scalar is an Option itself
        let customer_desc: Option<String> = sqlx::query_scalar::<_, Option<String>>(
            r#"SELECT "CustomerDesc" FROM "CustomerDemographics" WHERE "CustomerTypeID" = $1"#,
        )
        .bind(self.customer_type_id.clone())
        .fetch_optional(pool)
        .await?
        .flatten();

        self.attach(company_name, customer_desc);
        Ok(())
    }

    async fn enrich_rows(rows: &mut [Self], pool: &PgPool) -> Result<(), DatabaseError> {
        if rows.is_empty() {
            return Ok(());
        }

        let customer_ids: Vec<String> = rows.iter().map(|r| r.customer_id.clone()).collect();
        let customer_type_ids: Vec<String> =
            rows.iter().map(|r| r.customer_type_id.clone()).collect();

        let customers: HashMap<String, String> = sqlx::query_as::<_, (String, String)>(
            r#"SELECT "CustomerID", "CompanyName" FROM "Customers" WHERE "CustomerID" = ANY($1)"#,
        )
        .bind(&customer_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        let demographics: HashMap<String, Option<String>> =
            sqlx::query_as::<_, (String, Option<String>)>(
                r#"SELECT trim(trailing from "CustomerTypeID"), "CustomerDesc" FROM "CustomerDemographics" WHERE "CustomerTypeID" = ANY($1)"#,
            )
            .bind(&customer_type_ids)
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect();

        for row in rows.iter_mut() {
            let company_name = customers.get(&row.customer_id).cloned();
            let customer_desc = demographics.get(&row.customer_type_id).cloned().flatten();
            row.attach(company_name, customer_desc);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> CustomerCustomerDemo {
        CustomerCustomerDemo {
            customer_id: "ALFKI".to_string(),
            customer_type_id: "1".to_string(),
            customer_name: None,
            customer_type_description: None,
        }
    }

    #[test]
    fn attach_sets_display_fields() {
        let mut row = link();
        row.attach(
            Some("Alfreds Futterkiste".to_string()),
            Some("Retail customer".to_string()),
        );
        assert_eq!(row.customer_name.as_deref(), Some("Alfreds Futterkiste"));
        assert_eq!(
            row.customer_type_description.as_deref(),
            Some("Retail customer")
        );
    }

    #[test]
    fn attach_defaults_unresolved_keys_to_unknown() {
        let mut row = link();
        row.attach(None, None);
        assert_eq!(row.customer_name.as_deref(), Some("Unknown"));
        assert_eq!(row.customer_type_description.as_deref(), Some("Unknown"));
    }
}
