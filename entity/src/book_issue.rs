use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "book_issue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub book_id: i32,
    pub issue_date: Date,
    pub due_date: Date,
    pub return_date: Option<Date>,
    pub status: String, // 'issued', then 'returned' (terminal)
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::library_book::Entity",
        from = "Column::BookId",
        to = "super::library_book::Column::Id"
    )]
    LibraryBook,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::library_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LibraryBook.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
