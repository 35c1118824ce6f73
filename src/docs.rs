use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

use crate::model::employee::{Employee, EmployeeInput, EmployeeStatus};
use crate::models::{LoginRequest, LoginResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Management API",
        version = "1.0.0",
        description = r#"
## Employee Management System

REST backend for the employee directory.

### 🔹 Key Features
- **Authentication**
  - JWT bearer login for the single admin account
- **Employee Management**
  - Create, update, list, view, and delete employee records
- **Reports**
  - Download the full employee table as a paginated PDF

### 🔐 Security
All employee and report endpoints require **JWT Bearer authentication**
with the **Admin** role.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,

        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::report::download_report,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            Employee,
            EmployeeInput,
            EmployeeStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication APIs"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Reports", description = "Report download APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
