use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    /// Creates a new instance of [`SubjectRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subjects, optionally restricted to a set of branches.
    ///
    /// `None` means the whole college.
    pub async fn list_in_branches(
        &self,
        branch_ids: Option<&[i32]>,
    ) -> Result<Vec<entity::subject::Model>, DbErr> {
        let mut query = entity::prelude::Subject::find();

        if let Some(branch_ids) = branch_ids {
            query = query
                .filter(entity::subject::Column::BranchId.is_in(branch_ids.iter().copied()));
        }

        query.all(self.db).await
    }
}
