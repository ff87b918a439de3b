//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Admin/student credential login
/// - `GET /api/auth/user` - Get the current session user
/// - `GET /api/auth/logout` - Clear the current session
/// - `POST /api/students` - Register a student
/// - `POST /api/attendance` - Record daily attendance (upsert per day)
/// - `POST /api/exams/marks` - Record an exam mark (upsert per exam)
/// - `GET /api/stats` - Scoped dashboard summary statistics
/// - `GET /api/stats/subjects` - Scoped per-subject statistics
/// - `GET /api/students/{id}/attendance` - Per-month attendance summaries
/// - `GET /api/students/{id}/marks` - Per-exam mark summaries
/// - `POST /api/library/issues` - Issue a book
/// - `POST /api/library/issues/{id}/return` - Return a book
/// - `GET /api/students/{id}/issues` - A student's issue history
/// - `DELETE /api/batches/{id}` - Cascade-delete a batch
/// - `DELETE /api/branches/{id}` - Cascade-delete a branch
/// - `GET /api/notices` - Notices visible to a branch
///
/// # Returns
/// An axum `Router<AppState>` ready to be served once state and the session
/// layer are attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Registrar", description = "Registrar API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::student::STUDENT_TAG, description = "Student management API routes"),
        (name = controller::attendance::ATTENDANCE_TAG, description = "Daily attendance API routes"),
        (name = controller::exam::EXAM_TAG, description = "Exam mark API routes"),
        (name = controller::stats::STATS_TAG, description = "Dashboard statistics API routes"),
        (name = controller::library::LIBRARY_TAG, description = "Library circulation API routes"),
        (name = controller::batch::BATCH_TAG, description = "Batch and branch API routes"),
        (name = controller::notice::NOTICE_TAG, description = "Notice board API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::student::register_student))
        .routes(routes!(controller::attendance::mark_attendance))
        .routes(routes!(controller::exam::record_mark))
        .routes(routes!(controller::stats::global_stats))
        .routes(routes!(controller::stats::subject_stats))
        .routes(routes!(controller::stats::student_attendance))
        .routes(routes!(controller::stats::student_marks))
        .routes(routes!(controller::library::issue_book))
        .routes(routes!(controller::library::return_book))
        .routes(routes!(controller::library::student_issues))
        .routes(routes!(controller::batch::delete_batch))
        .routes(routes!(controller::batch::delete_branch))
        .routes(routes!(controller::notice::list_notices))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
