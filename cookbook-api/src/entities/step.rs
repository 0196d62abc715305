use chrono::{DateTime, Utc};
use cookbook_data::{Entity, EntityQuery};
use uuid::Uuid;

/// Row of the `steps` table. Durations are stored as whole seconds.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Step {
    pub id: Uuid,
    pub description: String,
    pub duration_secs: i64,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Step {
    fn table() -> &'static str {
        "steps"
    }

    fn columns() -> &'static [&'static str] {
        &["description", "duration_secs", "recipe_id"]
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind<'q>(&self, query: EntityQuery<'q, Self>) -> EntityQuery<'q, Self> {
        query
            .bind(self.description.clone())
            .bind(self.duration_secs)
            .bind(self.recipe_id)
    }
}
