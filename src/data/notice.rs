use sea_orm::{
    sea_query::Condition, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_NORMAL: &str = "normal";
pub const PRIORITY_LOW: &str = "low";

pub struct NoticeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeRepository<'a> {
    /// Creates a new instance of [`NoticeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Notices visible to a branch: the branch's own plus global ones.
    ///
    /// Without a branch filter every notice is returned. High priority
    /// sorts first.
    pub async fn list_for_branch(
        &self,
        branch_id: Option<i32>,
    ) -> Result<Vec<entity::notice::Model>, DbErr> {
        let mut query = entity::prelude::Notice::find();

        if let Some(branch_id) = branch_id {
            query = query.filter(
                Condition::any()
                    .add(entity::notice::Column::BranchId.eq(branch_id))
                    .add(entity::notice::Column::BranchId.is_null()),
            );
        }

        let mut notices = query.all(self.db).await?;
        notices.sort_by_key(|n| priority_rank(&n.priority));

        Ok(notices)
    }
}

fn priority_rank(priority: &str) -> u8 {
    match priority {
        PRIORITY_HIGH => 0,
        PRIORITY_NORMAL => 1,
        _ => 2,
    }
}
