use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::{auth::auth::AuthUser, error::ApiError, model::employee::Employee, report};

/// Download Employees Report
///
/// Renders every employee row, in insertion order, into a paginated PDF.
#[utoipa::path(
    get,
    path = "/api/reports/download",
    responses(
        (status = 200, description = "PDF report", content_type = "application/pdf"),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Reports",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn download_report(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    auth.require_report_access()?;

    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, email, department, position, salary, date_of_joining, phone_number, status FROM employees ORDER BY id",
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to read employees for report");
        ApiError::from(e)
    })?;

    let generated_at = Utc::now();
    let bytes = report::render_employees_pdf(&employees, generated_at)?;
    let filename = report::report_filename(generated_at);

    info!(rows = employees.len(), %filename, "Report generated");

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(bytes))
}
