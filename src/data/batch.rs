use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct BatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BatchRepository<'a> {
    /// Creates a new instance of [`BatchRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, batch_id: i32) -> Result<Option<entity::batch::Model>, DbErr> {
        entity::prelude::Batch::find_by_id(batch_id).one(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use registrar_test_utils::prelude::*;

    use crate::data::batch::BatchRepository;

    #[tokio::test]
    async fn finds_batch_by_id() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Batch)?;
        let db = &test.state.db;
        let batch = fixtures::insert_batch(db, "2024").await?;
        let repo = BatchRepository::new(db);

        let found = repo.find_by_id(batch.id).await?;
        assert_eq!(found.unwrap().name, "2024");

        assert!(repo.find_by_id(batch.id + 1).await?.is_none());

        Ok(())
    }
}
