use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "library_book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub total_copies: i32,
    // 0 <= copies_available <= total_copies; written only by the library
    // transaction manager while holding the row lock.
    pub copies_available: i32,
    pub branch_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchId",
        to = "super::branch::Column::Id"
    )]
    Branch,
    #[sea_orm(has_many = "super::book_issue::Entity")]
    BookIssue,
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::book_issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookIssue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
