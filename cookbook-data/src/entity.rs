use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::Sqlite;
use uuid::Uuid;

/// A `query_as` in progress for an entity type, used by the bind hook.
pub type EntityQuery<'q, E> = QueryAs<'q, Sqlite, E, SqliteArguments<'q>>;

/// Trait describing a database entity: its table, data columns, and how to
/// bind its values into a prepared statement.
///
/// `columns()` lists only the data columns; the audit columns (`id`,
/// `created_at`, `updated_at`) are managed by [`Repository`] and must not
/// appear in the list. `bind` must push the value of every column in
/// `columns()`, in the same order.
///
/// # Example
///
/// ```ignore
/// impl Entity for Recipe {
///     fn table() -> &'static str { "recipes" }
///     fn columns() -> &'static [&'static str] { &["title", "description", "difficulty"] }
///     fn id(&self) -> Uuid { self.id }
///     fn bind<'q>(&self, query: EntityQuery<'q, Self>) -> EntityQuery<'q, Self> {
///         query
///             .bind(self.title.clone())
///             .bind(self.description.clone())
///             .bind(self.difficulty.clone())
///     }
/// }
/// ```
///
/// [`Repository`]: crate::Repository
pub trait Entity:
    for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static
{
    fn table() -> &'static str;
    fn columns() -> &'static [&'static str];
    fn id(&self) -> Uuid;
    fn bind<'q>(&self, query: EntityQuery<'q, Self>) -> EntityQuery<'q, Self>;
}
