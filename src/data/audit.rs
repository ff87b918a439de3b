use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    /// Creates a new instance of [`AuditLogRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        actor: &str,
        action: &str,
        detail: Option<String>,
    ) -> Result<entity::audit_log::Model, DbErr> {
        let entry = entity::audit_log::ActiveModel {
            actor: ActiveValue::Set(actor.to_string()),
            action: ActiveValue::Set(action.to_string()),
            detail: ActiveValue::Set(detail),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }
}
