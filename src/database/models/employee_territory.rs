use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::{FromRow, PgPool};

use crate::database::enrich::{or_unknown, Enrich};
use crate::database::manager::DatabaseError;
use crate::database::repository::Table;

/// Link row between an employee and a sales territory. `employee` and
/// `territory` are transient display fields, recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeTerritory {
    #[serde(rename = "EmployeeID")]
    #[sqlx(rename = "EmployeeID")]
    pub employee_id: i32,
    #[serde(rename = "TerritoryID")]
    #[sqlx(rename = "TerritoryID")]
    pub territory_id: String,
    #[sqlx(skip)]
    pub employee: Option<String>,
    #[sqlx(skip)]
    pub territory: Option<String>,
}

impl Table for EmployeeTerritory {
    type Key = (i32, String);

    const TABLE: &'static str = "EmployeeTerritories";
    const NAME: &'static str = "Employee territory";
    const KEY_COLUMNS: &'static [&'static str] = &["EmployeeID", "TerritoryID"];
    const DATA_COLUMNS: &'static [&'static str] = &[];
    const INSERT_KEY: bool = true;

    fn key(&self) -> (i32, String) {
        (self.employee_id, self.territory_id.clone())
    }

    fn push_data(&self, _args: &mut PgArguments) {}
}

impl EmployeeTerritory {
    /// Single point both enrichment paths funnel through: the territory
    /// description is stored CHAR-padded and unresolved keys fall back to
    /// the "Unknown" sentinel.
    fn attach(&mut self, employee: Option<String>, territory: Option<String>) {
        self.employee = Some(or_unknown(employee));
        self.territory = Some(or_unknown(territory.map(|t| t.trim_end().to_string())));
    }
}

#[async_trait]
impl Enrich for EmployeeTerritory {
    async fn enrich_row(&mut self, pool: &PgPool) -> Result<(), DatabaseError> {
        let employee: Option<String> = sqlx::query_scalar(
            r#"SELECT "FirstName" || ' ' || "LastName" FROM "Employees" WHERE "EmployeeID" = $1"#,
        )
        .bind(self.employee_id)
        .fetch_optional(pool)
        .await?;

        let territory: Option<String> = sqlx::query_scalar(
            r#"SELECT "TerritoryDescription" FROM "Territories" WHERE "TerritoryID" = $1"#,
        )
        .bind(self.territory_id.clone())
        .fetch_optional(pool)
        .await?;

        self.attach(employee, territory);
        Ok(())
    }

    async fn enrich_rows(rows: &mut [Self], pool: &PgPool) -> Result<(), DatabaseError> {
        if rows.is_empty() {
            return Ok(());
        }

        let employee_ids: Vec<i32> = rows.iter().map(|r| r.employee_id).collect();
        let territory_ids: Vec<String> = rows.iter().map(|r| r.territory_id.clone()).collect();

        let employees: HashMap<i32, String> = sqlx::query_as::<_, (i32, String)>(
            r#"SELECT "EmployeeID", "FirstName" || ' ' || "LastName" FROM "Employees" WHERE "EmployeeID" = ANY($1)"#,
        )
        .bind(&employee_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        let territories: HashMap<String, String> = sqlx::query_as::<_, (String, String)>(
            r#"SELECT "TerritoryID", "TerritoryDescription" FROM "Territories" WHERE "TerritoryID" = ANY($1)"#,
        )
        .bind(&territory_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        for row in rows.iter_mut() {
            let employee = employees.get(&row.employee_id).cloned();
            let territory = territories.get(&row.territory_id).cloned();
            row.attach(employee, territory);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> EmployeeTerritory {
        EmployeeTerritory {
            employee_id: 1,
            territory_id: "06897".to_string(),
            employee: None,
            territory: None,
        }
    }

    #[test]
    fn attach_trims_territory_description() {
        let mut row = link();
        row.attach(
            Some("Nancy Davolio".to_string()),
            Some("Wilton                                            ".to_string()),
        );
        assert_eq!(row.employee.as_deref(), Some("Nancy Davolio"));
        assert_eq!(row.territory.as_deref(), Some("Wilton"));
    }

    #[test]
    fn attach_defaults_unresolved_keys_to_unknown() {
        let mut row = link();
        row.attach(None, None);
        assert_eq!(row.employee.as_deref(), Some("Unknown"));
        assert_eq!(row.territory.as_deref(), Some("Unknown"));
    }

    // Both enrichment paths call attach with the looked-up values, so a
    // dictionary hit and a single-row hit must agree field for field.
    #[test]
    fn bulk_and_single_merge_produce_identical_output() {
        let employees: HashMap<i32, String> = [(1, "Nancy Davolio".to_string())].into();
        let territories: HashMap<String, String> =
            [("06897".to_string(), "Wilton   ".to_string())].into();

        let mut via_bulk = link();
        via_bulk.attach(
            employees.get(&via_bulk.employee_id).cloned(),
            territories.get(&via_bulk.territory_id).cloned(),
        );

        let mut via_single = link();
        via_single.attach(
            Some("Nancy Davolio".to_string()),
            Some("Wilton   ".to_string()),
        );

        assert_eq!(via_bulk.employee, via_single.employee);
        assert_eq!(via_bulk.territory, via_single.territory);
    }
}
