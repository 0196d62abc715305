use chrono::{DateTime, Utc};
use cookbook_data::{Entity, EntityQuery};
use uuid::Uuid;

/// Row of the `ingredients` table.
///
/// `amount` is stored as text; the create endpoint accepts a number and
/// renders it to its decimal form before persisting.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub amount: String,
    pub amount_type: String,
    pub sub_step_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Ingredient {
    fn table() -> &'static str {
        "ingredients"
    }

    fn columns() -> &'static [&'static str] {
        &["name", "details", "amount", "amount_type", "sub_step_id"]
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind<'q>(&self, query: EntityQuery<'q, Self>) -> EntityQuery<'q, Self> {
        query
            .bind(self.name.clone())
            .bind(self.details.clone())
            .bind(self.amount.clone())
            .bind(self.amount_type.clone())
            .bind(self.sub_step_id)
    }
}
