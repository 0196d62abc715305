use chrono::{DateTime, Utc};
use cookbook_data::{Entity, EntityQuery};
use uuid::Uuid;

/// Row of the `recipes` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Recipe {
    fn table() -> &'static str {
        "recipes"
    }

    fn columns() -> &'static [&'static str] {
        &["title", "description", "difficulty"]
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind<'q>(&self, query: EntityQuery<'q, Self>) -> EntityQuery<'q, Self> {
        query
            .bind(self.title.clone())
            .bind(self.description.clone())
            .bind(self.difficulty.clone())
    }
}
