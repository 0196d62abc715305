use chrono::{DateTime, Utc};
use cookbook_data::{DataError, Entity, EntityQuery, Repository};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
struct Note {
    id: Uuid,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    fn new(title: &str, body: &str) -> Self {
        Self {
            id: Uuid::nil(),
            title: title.into(),
            body: body.into(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }
}

impl Entity for Note {
    fn table() -> &'static str {
        "notes"
    }

    fn columns() -> &'static [&'static str] {
        &["title", "body"]
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind<'q>(&self, query: EntityQuery<'q, Self>) -> EntityQuery<'q, Self> {
        query.bind(self.title.clone()).bind(self.body.clone())
    }
}

async fn repository() -> Repository<Note> {
    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query(
        "CREATE TABLE notes (
            id BLOB PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    Repository::new(pool)
}

#[tokio::test]
async fn add_generates_id_and_stamps_timestamps() {
    let repo = repository().await;

    let stored = repo.add(&Note::new("first", "hello")).await.unwrap();

    assert_ne!(stored.id, Uuid::nil());
    assert_eq!(stored.title, "first");
    assert_eq!(stored.body, "hello");
    assert!(stored.created_at > DateTime::UNIX_EPOCH);
    assert_eq!(stored.created_at, stored.updated_at);
}

#[tokio::test]
async fn add_ignores_caller_supplied_id() {
    let repo = repository().await;

    let mut note = Note::new("first", "hello");
    note.id = Uuid::new_v4();
    let stored = repo.add(&note).await.unwrap();

    assert_ne!(stored.id, note.id);
}

#[tokio::test]
async fn find_by_id_returns_stored_row() {
    let repo = repository().await;
    let stored = repo.add(&Note::new("first", "hello")).await.unwrap();

    let found = repo.find_by_id(stored.id).await.unwrap().unwrap();

    assert_eq!(found.id, stored.id);
    assert_eq!(found.title, "first");
    assert_eq!(found.created_at, stored.created_at);
}

#[tokio::test]
async fn find_by_id_absent_is_none() {
    let repo = repository().await;

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_returns_rows_in_creation_order() {
    let repo = repository().await;
    let a = repo.add(&Note::new("a", "1")).await.unwrap();
    let b = repo.add(&Note::new("b", "2")).await.unwrap();

    let all = repo.find_all().await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, a.id);
    assert_eq!(all[1].id, b.id);
}

#[tokio::test]
async fn update_persists_fields_and_stamps_updated_at() {
    let repo = repository().await;
    let mut stored = repo.add(&Note::new("first", "hello")).await.unwrap();

    stored.title = "renamed".into();
    let updated = repo.update(&stored).await.unwrap();

    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.body, "hello");
    assert_eq!(updated.created_at, stored.created_at);
    assert!(updated.updated_at >= stored.updated_at);
}

#[tokio::test]
async fn update_missing_row_is_not_found() {
    let repo = repository().await;

    let ghost = Note {
        id: Uuid::new_v4(),
        ..Note::new("ghost", "gone")
    };
    let err = repo.update(&ghost).await.unwrap_err();

    assert!(matches!(err, DataError::NotFound(_)));
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let repo = repository().await;
    let stored = repo.add(&Note::new("first", "hello")).await.unwrap();

    repo.delete(stored.id).await.unwrap();
    let err = repo.delete(stored.id).await.unwrap_err();

    assert!(matches!(err, DataError::NotFound(_)));
}

#[tokio::test]
async fn exists_probe() {
    let repo = repository().await;
    let stored = repo.add(&Note::new("first", "hello")).await.unwrap();

    assert!(repo.exists(stored.id).await.unwrap());
    assert!(!repo.exists(Uuid::new_v4()).await.unwrap());
}
