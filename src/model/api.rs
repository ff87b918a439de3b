use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The response body when an API request fails
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Login request body; role selects the admin or student flow
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub role: String,
    pub username: String,
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterStudentDto {
    pub roll_no: String,
    pub name: String,
    pub password: String,
    pub branch_id: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub roll_no: String,
    pub name: String,
    pub branch_id: i32,
}

/// Scope filter for dashboard statistics; branch_id wins when both are given
#[derive(Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct StatsScopeParams {
    pub branch_id: Option<i32>,
    pub batch_id: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GlobalStatsDto {
    pub total_students: u64,
    pub avg_attendance: f64,
    pub avg_marks: f64,
    pub total_books_issued: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubjectStatsDto {
    pub subject_id: i32,
    pub code: String,
    pub name: String,
    pub avg_attendance: f64,
    pub avg_marks: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AttendanceSummaryDto {
    pub subject_id: i32,
    /// Calendar month of the records, formatted "YYYY-MM"
    pub month: String,
    pub total_days: u32,
    pub present_days: u32,
    pub percentage: f64,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MarkSummaryDto {
    pub subject_id: i32,
    pub test_name: String,
    /// Calendar month of the exam, formatted "YYYY-MM"
    pub month: String,
    pub marks_obtained: i32,
    pub total_marks: i32,
    pub percentage: f64,
    pub grade: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MarkAttendanceDto {
    pub student_id: i32,
    pub subject_id: i32,
    pub date: NaiveDate,
    /// "present" or "absent"
    pub status: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AttendanceRecordDto {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    pub date: NaiveDate,
    pub status: String,
}

impl From<entity::daily_attendance::Model> for AttendanceRecordDto {
    fn from(record: entity::daily_attendance::Model) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            subject_id: record.subject_id,
            date: record.date,
            status: record.status,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecordMarkDto {
    pub exam_id: i32,
    pub student_id: i32,
    pub marks_obtained: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ExamMarkDto {
    pub id: i32,
    pub exam_id: i32,
    pub student_id: i32,
    pub marks_obtained: i32,
}

impl From<entity::exam_mark::Model> for ExamMarkDto {
    fn from(mark: entity::exam_mark::Model) -> Self {
        Self {
            id: mark.id,
            exam_id: mark.exam_id,
            student_id: mark.student_id,
            marks_obtained: mark.marks_obtained,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IssueBookDto {
    pub student_id: i32,
    pub book_id: i32,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReturnBookDto {
    pub return_date: NaiveDate,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookIssueDto {
    pub id: i32,
    pub student_id: i32,
    pub book_id: i32,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: String,
}

impl From<entity::book_issue::Model> for BookIssueDto {
    fn from(issue: entity::book_issue::Model) -> Self {
        Self {
            id: issue.id,
            student_id: issue.student_id,
            book_id: issue.book_id,
            issue_date: issue.issue_date,
            due_date: issue.due_date,
            return_date: issue.return_date,
            status: issue.status,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletedDto {
    pub deleted: bool,
}

#[derive(Clone, Deserialize, utoipa::IntoParams)]
pub struct NoticeParams {
    pub branch_id: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoticeDto {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub priority: String,
    pub branch_id: Option<i32>,
}

impl From<entity::notice::Model> for NoticeDto {
    fn from(notice: entity::notice::Model) -> Self {
        Self {
            id: notice.id,
            title: notice.title,
            message: notice.message,
            priority: notice.priority,
            branch_id: notice.branch_id,
        }
    }
}
