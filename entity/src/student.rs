use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub roll_no: String,
    pub name: String,
    pub password_hash: String,
    // Legacy plaintext column kept for un-migrated seeded records; only the
    // login flow's compatibility fallback may read it.
    pub password: Option<String>,
    pub failed_login_attempts: i32,
    pub lockout_until: Option<DateTime>,
    pub branch_id: i32,
    pub security_question: Option<String>,
    pub security_answer: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchId",
        to = "super::branch::Column::Id"
    )]
    Branch,
    #[sea_orm(has_many = "super::daily_attendance::Entity")]
    DailyAttendance,
    #[sea_orm(has_many = "super::exam_mark::Entity")]
    ExamMark,
    #[sea_orm(has_many = "super::book_issue::Entity")]
    BookIssue,
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::daily_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyAttendance.def()
    }
}

impl Related<super::exam_mark::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamMark.def()
    }
}

impl Related<super::book_issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookIssue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
