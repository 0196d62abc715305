use chrono::{DateTime, Utc};
use cookbook_data::{Entity, EntityQuery};
use uuid::Uuid;

/// Row of the `sub_steps` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubStep {
    pub id: Uuid,
    pub description: String,
    pub duration_secs: i64,
    pub step_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for SubStep {
    fn table() -> &'static str {
        "sub_steps"
    }

    fn columns() -> &'static [&'static str] {
        &["description", "duration_secs", "step_id"]
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind<'q>(&self, query: EntityQuery<'q, Self>) -> EntityQuery<'q, Self> {
        query
            .bind(self.description.clone())
            .bind(self.duration_secs)
            .bind(self.step_id)
    }
}
