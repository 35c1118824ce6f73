use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::ApiError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 100;
pub const DEPARTMENT_MAX: usize = 50;
pub const POSITION_MAX: usize = 50;
pub const PHONE_MAX: usize = 20;

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, sqlx::Type, Display, EnumString, ToSchema,
)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Leave,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        EmployeeStatus::Active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "department": "Engineering",
        "position": "Engineer",
        "salary": 90000.0,
        "dateOfJoining": "2024-01-01",
        "phoneNumber": "+15550100",
        "status": "Active"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Ada")]
    pub first_name: String,

    #[schema(example = "Lovelace")]
    pub last_name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "Engineer")]
    pub position: String,

    #[schema(example = 90000.0)]
    pub salary: f64,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date_of_joining: NaiveDate,

    #[schema(example = "+15550100", nullable = true)]
    pub phone_number: Option<String>,

    #[schema(example = "Active")]
    pub status: EmployeeStatus,
}

/// Create payload: an employee without a server-assigned id.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "Engineer")]
    pub position: String,
    #[schema(example = 90000.0)]
    pub salary: f64,
    /// Defaults to the current UTC date when omitted.
    #[schema(example = "2024-01-01", value_type = Option<String>, format = "date")]
    pub date_of_joining: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeeInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.department,
            &self.position,
            self.salary,
            self.phone_number.as_deref(),
        )
    }
}

impl Employee {
    /// Full-record validation for the replace-style update path.
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.department,
            &self.position,
            self.salary,
            self.phone_number.as_deref(),
        )
    }
}

fn validate_fields(
    first_name: &str,
    last_name: &str,
    email: &str,
    department: &str,
    position: &str,
    salary: f64,
    phone_number: Option<&str>,
) -> Result<(), ApiError> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() || email.trim().is_empty() {
        return Err(ApiError::Validation(
            "firstName, lastName, and email are required fields".to_string(),
        ));
    }

    if first_name.len() > NAME_MAX || last_name.len() > NAME_MAX {
        return Err(ApiError::Validation(format!(
            "firstName and lastName must be at most {} characters",
            NAME_MAX
        )));
    }

    if email.len() > EMAIL_MAX {
        return Err(ApiError::Validation(format!(
            "email must be at most {} characters",
            EMAIL_MAX
        )));
    }

    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ApiError::Validation("email must be a valid email address".to_string()));
    }

    if department.trim().is_empty() || department.len() > DEPARTMENT_MAX {
        return Err(ApiError::Validation(format!(
            "department is required and must be at most {} characters",
            DEPARTMENT_MAX
        )));
    }

    if position.trim().is_empty() || position.len() > POSITION_MAX {
        return Err(ApiError::Validation(format!(
            "position is required and must be at most {} characters",
            POSITION_MAX
        )));
    }

    if !salary.is_finite() || salary < 0.0 {
        return Err(ApiError::Validation("salary must be a non-negative number".to_string()));
    }

    if let Some(phone) = phone_number {
        if phone.len() > PHONE_MAX {
            return Err(ApiError::Validation(format!(
                "phoneNumber must be at most {} characters",
                PHONE_MAX
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn input() -> EmployeeInput {
        EmployeeInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            department: "Eng".to_string(),
            position: "Engineer".to_string(),
            salary: 90000.0,
            date_of_joining: None,
            phone_number: None,
            status: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        for field in ["first_name", "last_name", "email"] {
            let mut i = input();
            match field {
                "first_name" => i.first_name = "  ".to_string(),
                "last_name" => i.last_name = String::new(),
                _ => i.email = String::new(),
            }
            assert!(matches!(i.validate(), Err(ApiError::Validation(_))), "{field}");
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["ada", "ada@", "@x.com", "ada@x", "a b@x.com"] {
            let mut i = input();
            i.email = bad.to_string();
            assert!(i.validate().is_err(), "{bad}");
        }
    }

    #[test]
    fn negative_salary_is_rejected() {
        let mut i = input();
        i.salary = -1.0;
        assert!(i.validate().is_err());
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let mut i = input();
        i.department = "d".repeat(DEPARTMENT_MAX + 1);
        assert!(i.validate().is_err());

        let mut i = input();
        i.phone_number = Some("9".repeat(PHONE_MAX + 1));
        assert!(i.validate().is_err());
    }

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!(EmployeeStatus::Leave.to_string(), "Leave");
        assert_eq!(EmployeeStatus::from_str("Inactive").unwrap(), EmployeeStatus::Inactive);
        assert!(EmployeeStatus::from_str("Retired").is_err());
        assert_eq!(EmployeeStatus::default(), EmployeeStatus::Active);
    }
}
