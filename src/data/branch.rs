use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct BranchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BranchRepository<'a> {
    /// Creates a new instance of [`BranchRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, branch_id: i32) -> Result<Option<entity::branch::Model>, DbErr> {
        entity::prelude::Branch::find_by_id(branch_id)
            .one(self.db)
            .await
    }

    /// Ids of all branches owned by a batch
    pub async fn ids_by_batch(&self, batch_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Branch::find()
            .select_only()
            .column(entity::branch::Column::Id)
            .filter(entity::branch::Column::BatchId.eq(batch_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use registrar_test_utils::prelude::*;

    use crate::data::branch::BranchRepository;

    #[tokio::test]
    async fn lists_branch_ids_of_a_batch() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Batch, entity::prelude::Branch)?;
        let db = &test.state.db;

        let batch = fixtures::insert_batch(db, "2024").await?;
        let other_batch = fixtures::insert_batch(db, "2025").await?;
        let a = fixtures::insert_branch(db, batch.id, "Computer Science").await?;
        let b = fixtures::insert_branch(db, batch.id, "Mechanical").await?;
        fixtures::insert_branch(db, other_batch.id, "Civil").await?;

        let ids = BranchRepository::new(db).ids_by_batch(batch.id).await?;

        assert_eq!(ids, vec![a.id, b.id]);

        Ok(())
    }
}
