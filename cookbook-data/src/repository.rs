use crate::entity::Entity;
use crate::error::DataError;
use chrono::Utc;
use sqlx::SqlitePool;
use std::marker::PhantomData;
use uuid::Uuid;

/// A generic SQL-based repository for one entity type.
///
/// Wraps an `sqlx::SqlitePool` and builds the CRUD statements from the
/// [`Entity`] metadata. Cloning is cheap (the pool is reference-counted).
///
/// # Example
///
/// ```ignore
/// let recipes = Repository::<Recipe>::new(pool.clone());
/// let all = recipes.find_all().await?;
/// ```
pub struct Repository<E> {
    pool: SqlitePool,
    _marker: PhantomData<E>,
}

impl<E> Repository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    /// Insert the entity, generating a fresh id and stamping both audit
    /// timestamps. Returns the stored row.
    ///
    /// The id and timestamps on the passed entity are ignored; identifiers
    /// are never accepted from callers.
    pub async fn add(&self, entity: &E) -> Result<E, DataError> {
        let now = Utc::now();
        let placeholders = vec!["?"; E::columns().len()].join(", ");
        let sql = format!(
            "INSERT INTO {} (id, {}, created_at, updated_at) VALUES (?, {placeholders}, ?, ?) RETURNING *",
            E::table(),
            E::columns().join(", "),
        );
        let query = sqlx::query_as::<_, E>(&sql).bind(Uuid::new_v4());
        let stored = entity
            .bind(query)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(stored)
    }

    /// Load a single row by id, `None` if absent.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, DataError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", E::table());
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Load every row, in creation order.
    pub async fn find_all(&self) -> Result<Vec<E>, DataError> {
        let sql = format!("SELECT * FROM {} ORDER BY created_at, id", E::table());
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Load the rows whose `column` equals `key`, in creation order.
    ///
    /// `column` is a compile-time constant naming a foreign-key column of
    /// the entity's table; this is how child rows are resolved for a parent.
    pub async fn find_where(&self, column: &'static str, key: Uuid) -> Result<Vec<E>, DataError> {
        let sql = format!(
            "SELECT * FROM {} WHERE {column} = ? ORDER BY created_at, id",
            E::table(),
        );
        let rows = sqlx::query_as::<_, E>(&sql)
            .bind(key)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Persist the full current entity, stamping `updated_at`. The caller
    /// mutates the entity before calling. Returns the stored row.
    pub async fn update(&self, entity: &E) -> Result<E, DataError> {
        let assignments = E::columns()
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {assignments}, updated_at = ? WHERE id = ? RETURNING *",
            E::table(),
        );
        let query = entity.bind(sqlx::query_as::<_, E>(&sql));
        let stored = query
            .bind(Utc::now())
            .bind(entity.id())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DataError::not_found(format!("{} {}", E::table(), entity.id())))?;
        Ok(stored)
    }

    /// Remove the row; `NotFound` if no row with this id exists.
    pub async fn delete(&self, id: Uuid) -> Result<(), DataError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::table());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(DataError::not_found(format!("{} {id}", E::table())));
        }
        Ok(())
    }

    /// Cheap existence probe, used for foreign-key pre-validation.
    pub async fn exists(&self, id: Uuid) -> Result<bool, DataError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", E::table());
        let found = sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }
}
