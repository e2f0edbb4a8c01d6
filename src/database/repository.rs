use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{Arguments, FromRow, PgPool};

use crate::database::manager::DatabaseError;

/// Metadata a row type needs to participate in the generic repository.
///
/// `KEY_COLUMNS` and `DATA_COLUMNS` are disjoint; `push_data` must bind
/// values in `DATA_COLUMNS` order. Entities with a store-assigned key set
/// `INSERT_KEY` to false so the key column is left to the database.
pub trait Table: for<'r> FromRow<'r, PgRow> + Send + Unpin + Serialize + 'static {
    type Key: TableKey;

    const TABLE: &'static str;
    /// Display name used in client-facing messages
    const NAME: &'static str;
    const KEY_COLUMNS: &'static [&'static str];
    const DATA_COLUMNS: &'static [&'static str];
    const INSERT_KEY: bool;

    fn key(&self) -> Self::Key;
    fn push_data(&self, args: &mut PgArguments);

    /// Post-fetch cleanup hook; used to right-trim padded CHAR columns
    fn normalize(&mut self) {}
}

/// Single or composite primary key, bindable in `KEY_COLUMNS` order
pub trait TableKey: Send + Sync + DeserializeOwned + 'static {
    fn push(&self, args: &mut PgArguments);
    fn describe(&self) -> String;
}

impl TableKey for i32 {
    fn push(&self, args: &mut PgArguments) {
        args.add(*self);
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl TableKey for String {
    fn push(&self, args: &mut PgArguments) {
        args.add(self.clone());
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl TableKey for (i32, i32) {
    fn push(&self, args: &mut PgArguments) {
        args.add(self.0);
        args.add(self.1);
    }

    fn describe(&self) -> String {
        format!("{}, {}", self.0, self.1)
    }
}

impl TableKey for (i32, String) {
    fn push(&self, args: &mut PgArguments) {
        args.add(self.0);
        args.add(self.1.clone());
    }

    fn describe(&self) -> String {
        format!("{}, {}", self.0, self.1)
    }
}

impl TableKey for (String, String) {
    fn push(&self, args: &mut PgArguments) {
        args.add(self.0.clone());
        args.add(self.1.clone());
    }

    fn describe(&self) -> String {
        format!("{}, {}", self.0, self.1)
    }
}

fn quote(ident: &str) -> String {
    format!("\"{}\"", ident)
}

fn column_list(columns: &[&str]) -> String {
    columns.iter().map(|c| quote(c)).collect::<Vec<_>>().join(", ")
}

/// `"A" = $first AND "B" = $first+1 ...` over the given columns
fn key_predicate(columns: &[&str], first: usize) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quote(c), first + i))
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn select_all_sql<T: Table>() -> String {
    format!(
        "SELECT * FROM {} ORDER BY {}",
        quote(T::TABLE),
        column_list(T::KEY_COLUMNS)
    )
}

fn select_one_sql<T: Table>() -> String {
    format!(
        "SELECT * FROM {} WHERE {}",
        quote(T::TABLE),
        key_predicate(T::KEY_COLUMNS, 1)
    )
}

fn insert_sql<T: Table>() -> String {
    let mut columns: Vec<&str> = Vec::new();
    if T::INSERT_KEY {
        columns.extend_from_slice(T::KEY_COLUMNS);
    }
    columns.extend_from_slice(T::DATA_COLUMNS);

    let placeholders = (1..=columns.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        quote(T::TABLE),
        column_list(&columns),
        placeholders
    )
}

fn update_sql<T: Table>() -> String {
    let assignments = T::DATA_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quote(c), i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {} RETURNING *",
        quote(T::TABLE),
        assignments,
        key_predicate(T::KEY_COLUMNS, T::DATA_COLUMNS.len() + 1)
    )
}

fn delete_sql<T: Table>() -> String {
    format!(
        "DELETE FROM {} WHERE {}",
        quote(T::TABLE),
        key_predicate(T::KEY_COLUMNS, 1)
    )
}

/// One generic repository instead of a hand-written class per entity.
pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Table> Repository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Every row, ordered by key for stable output
    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = select_all_sql::<T>();
        let mut rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        for row in rows.iter_mut() {
            row.normalize();
        }
        Ok(rows)
    }

    /// The unique row matching every key component, or None
    pub async fn select_one(&self, key: &T::Key) -> Result<Option<T>, DatabaseError> {
        let sql = select_one_sql::<T>();
        let mut args = PgArguments::default();
        key.push(&mut args);

        let row = sqlx::query_as_with::<_, T, _>(&sql, args)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|mut row| {
            row.normalize();
            row
        }))
    }

    /// Append a row and return it with any store-assigned fields filled in.
    ///
    /// Uniqueness is enforced by the primary-key constraint; a violation
    /// surfaces as `DatabaseError::Duplicate` rather than being pre-checked,
    /// so there is no window between check and insert.
    pub async fn insert(&self, entity: &T) -> Result<T, DatabaseError> {
        let sql = insert_sql::<T>();
        let mut args = PgArguments::default();
        if T::INSERT_KEY {
            entity.key().push(&mut args);
        }
        entity.push_data(&mut args);

        match sqlx::query_as_with::<_, T, _>(&sql, args)
            .fetch_one(&self.pool)
            .await
        {
            Ok(mut row) => {
                row.normalize();
                Ok(row)
            }
            Err(sqlx::Error::Database(db))
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                Err(DatabaseError::Duplicate(T::NAME))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Overwrite every non-key column on the matching row; None when absent.
    /// Key columns are never changed. Link entities with no non-key columns
    /// degenerate to an existence check returning the current row.
    pub async fn update(&self, entity: &T) -> Result<Option<T>, DatabaseError> {
        if T::DATA_COLUMNS.is_empty() {
            return self.select_one(&entity.key()).await;
        }

        let sql = update_sql::<T>();
        let mut args = PgArguments::default();
        entity.push_data(&mut args);
        entity.key().push(&mut args);

        let row = sqlx::query_as_with::<_, T, _>(&sql, args)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|mut row| {
            row.normalize();
            row
        }))
    }

    /// Remove the matching row; false when no row matched
    pub async fn delete(&self, key: &T::Key) -> Result<bool, DatabaseError> {
        let sql = delete_sql::<T>();
        let mut args = PgArguments::default();
        key.push(&mut args);

        let result = sqlx::query_with(&sql, args).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{Category, OrderDetail, Region};

    #[test]
    fn builds_select_sql() {
        assert_eq!(
            select_all_sql::<Region>(),
            r#"SELECT * FROM "Region" ORDER BY "RegionID""#
        );
        assert_eq!(
            select_one_sql::<OrderDetail>(),
            r#"SELECT * FROM "OrderDetails" WHERE "OrderID" = $1 AND "ProductID" = $2"#
        );
    }

    #[test]
    fn insert_includes_natural_keys_only() {
        // Region keys are client-supplied, Category keys are store-assigned
        assert_eq!(
            insert_sql::<Region>(),
            r#"INSERT INTO "Region" ("RegionID", "RegionDescription") VALUES ($1, $2) RETURNING *"#
        );
        assert_eq!(
            insert_sql::<Category>(),
            r#"INSERT INTO "Categories" ("CategoryName", "Description", "Picture") VALUES ($1, $2, $3) RETURNING *"#
        );
    }

    #[test]
    fn update_binds_data_before_key() {
        assert_eq!(
            update_sql::<OrderDetail>(),
            r#"UPDATE "OrderDetails" SET "UnitPrice" = $1, "Quantity" = $2, "Discount" = $3 WHERE "OrderID" = $4 AND "ProductID" = $5 RETURNING *"#
        );
    }

    #[test]
    fn builds_delete_sql() {
        assert_eq!(
            delete_sql::<Region>(),
            r#"DELETE FROM "Region" WHERE "RegionID" = $1"#
        );
    }

    #[test]
    fn describes_keys_for_messages() {
        assert_eq!(10.describe(), "10");
        assert_eq!("ALFKI".to_string().describe(), "ALFKI");
        assert_eq!((3, "01581".to_string()).describe(), "3, 01581");
    }
}
