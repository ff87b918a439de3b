pub use super::admin::Entity as Admin;
pub use super::audit_log::Entity as AuditLog;
pub use super::batch::Entity as Batch;
pub use super::book_issue::Entity as BookIssue;
pub use super::branch::Entity as Branch;
pub use super::daily_attendance::Entity as DailyAttendance;
pub use super::exam::Entity as Exam;
pub use super::exam_mark::Entity as ExamMark;
pub use super::library_book::Entity as LibraryBook;
pub use super::notice::Entity as Notice;
pub use super::student::Entity as Student;
pub use super::subject::Entity as Subject;
