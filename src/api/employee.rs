use actix_web::{HttpResponse, web};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, error};

use crate::{
    auth::auth::AuthUser,
    error::ApiError,
    model::employee::{Employee, EmployeeInput},
};

const EMPLOYEE_COLUMNS: &str =
    "id, first_name, last_name, email, department, position, salary, date_of_joining, phone_number, status";

async fn fetch_employee(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    let sql = format!("SELECT {} FROM employees WHERE id = ?", EMPLOYEE_COLUMNS);
    sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees in insertion order", body = [Employee]),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_employees(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin()?;

    let sql = format!("SELECT {} FROM employees ORDER BY id", EMPLOYEE_COLUMNS);
    debug!(sql = %sql, "Fetching employees");

    let employees = sqlx::query_as::<_, Employee>(&sql)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch employees");
            ApiError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_employee(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin()?;

    let employee_id = path.into_inner();

    let employee = fetch_employee(pool.get_ref(), employee_id)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to fetch employee");
            ApiError::from(e)
        })?;

    match employee {
        Some(emp) => Ok(HttpResponse::Ok().json(emp)),
        None => Err(ApiError::EmployeeNotFound),
    }
}

/// Create Employee
///
/// The server assigns the id; `dateOfJoining` defaults to today (UTC) and
/// `status` to `Active` when omitted.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing required fields or store rejection", body = Object, example = json!({
            "message": "firstName, lastName, and email are required fields"
        }))
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_employee(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<EmployeeInput>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin()?;
    payload.validate()?;

    let date_of_joining = payload
        .date_of_joining
        .unwrap_or_else(|| Utc::now().date_naive());
    let status = payload.status.unwrap_or_default();

    let result = sqlx::query(
        r#"
        INSERT INTO employees
        (first_name, last_name, email, department, position, salary, date_of_joining, phone_number, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .bind(&payload.department)
    .bind(&payload.position)
    .bind(payload.salary)
    .bind(date_of_joining)
    .bind(&payload.phone_number)
    .bind(status)
    .execute(pool.get_ref())
    .await;

    let result = match result {
        Ok(r) => r,
        Err(sqlx::Error::Database(db_err)) => {
            error!(error = %db_err, "Store rejected employee insert");
            return Err(ApiError::Conflict(format!(
                "Failed to create employee: {}",
                db_err.message()
            )));
        }
        Err(e) => {
            error!(error = %e, "Failed to create employee");
            return Err(ApiError::from(e));
        }
    };

    let id = result.last_insert_rowid();
    let created = fetch_employee(pool.get_ref(), id)
        .await?
        .ok_or(ApiError::EmployeeNotFound)?;

    Ok(HttpResponse::Created().json(created))
}

/// Update Employee
///
/// Full-record replace. The path id must match the body id.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    request_body = Employee,
    responses(
        (status = 204, description = "Employee updated"),
        (status = 400, description = "ID mismatch or invalid fields", body = Object, example = json!({
            "message": "ID mismatch."
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_employee(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<Employee>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin()?;

    let employee_id = path.into_inner();
    if payload.id != employee_id {
        return Err(ApiError::Validation("ID mismatch.".to_string()));
    }
    payload.validate()?;

    let result = sqlx::query(
        r#"
        UPDATE employees
        SET first_name = ?, last_name = ?, email = ?, department = ?, position = ?,
            salary = ?, date_of_joining = ?, phone_number = ?, status = ?
        WHERE id = ?
        "#,
    )
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .bind(&payload.department)
    .bind(&payload.position)
    .bind(payload.salary)
    .bind(payload.date_of_joining)
    .bind(&payload.phone_number)
    .bind(payload.status)
    .bind(employee_id)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, employee_id, "Failed to update employee");
        ApiError::from(e)
    })?;

    // Zero rows means the record vanished between the caller's read and this
    // write; that surfaces as not-found, never as a silent upsert.
    if result.rows_affected() == 0 {
        return Err(ApiError::EmployeeNotFound);
    }

    Ok(HttpResponse::NoContent().finish())
}

/// Delete Employee
///
/// Physical removal. Deleting an already-removed id reports not-found.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_employee(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin()?;

    let employee_id = path.into_inner();

    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(employee_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to delete employee");
            ApiError::from(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::EmployeeNotFound);
    }

    Ok(HttpResponse::NoContent().finish())
}
