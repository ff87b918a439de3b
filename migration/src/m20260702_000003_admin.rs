use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(pk_auto(Admin::Id))
                    .col(string_uniq(Admin::Name))
                    .col(string(Admin::PasswordHash))
                    .col(string(Admin::Role))
                    .col(string(Admin::Status))
                    .col(timestamp_null(Admin::LastLogin))
                    .col(timestamp(Admin::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admin::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Admin {
    Table,
    Id,
    Name,
    PasswordHash,
    Role,
    Status,
    LastLogin,
    CreatedAt,
}
