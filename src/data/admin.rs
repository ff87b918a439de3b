use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

/// Admin accounts marked anything else are refused login.
pub const ADMIN_STATUS_ACTIVE: &str = "active";

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    /// Creates a new instance of [`AdminRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get an admin by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Stamp the admin's last successful login
    pub async fn update_last_login(
        &self,
        admin_id: i32,
        at: NaiveDateTime,
    ) -> Result<entity::admin::Model, DbErr> {
        let admin = entity::admin::ActiveModel {
            id: ActiveValue::Unchanged(admin_id),
            last_login: ActiveValue::Set(Some(at)),
            ..Default::default()
        };

        admin.update(self.db).await
    }
}
