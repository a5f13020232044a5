// src/entity/employee.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HrError, Result};

/// Date format accepted for `hire_date` on input
pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A stored employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub salary: f64,
    pub team: String,
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Typed employee fields, as written by create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub salary: f64,
    pub team: String,
    pub hire_date: NaiveDate,
}

impl EmployeeInput {
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        check_text(&mut issues, "first_name", &self.first_name);
        check_text(&mut issues, "last_name", &self.last_name);
        check_text(&mut issues, "role", &self.role);
        check_text(&mut issues, "team", &self.team);
        check_salary(&mut issues, self.salary);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(HrError::Validation(issues))
        }
    }
}

/// Raw form fields as submitted by a browser or the CLI.
///
/// Every field arrives as text; `parse` turns it into an [`EmployeeInput`]
/// and reports all problems at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub hire_date: String,
}

impl EmployeeForm {
    pub fn parse(self) -> Result<EmployeeInput> {
        let mut issues = Vec::new();
        check_text(&mut issues, "first_name", &self.first_name);
        check_text(&mut issues, "last_name", &self.last_name);
        check_text(&mut issues, "role", &self.role);
        check_text(&mut issues, "team", &self.team);

        let salary = match self.salary.trim().parse::<f64>() {
            Ok(value) => {
                check_salary(&mut issues, value);
                value
            }
            Err(_) => {
                issues.push(format!("salary '{}' is not a number", self.salary));
                0.0
            }
        };

        let hire_date = match NaiveDate::parse_from_str(self.hire_date.trim(), HIRE_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                issues.push(format!(
                    "hire_date '{}' is not a date (expected YYYY-MM-DD)",
                    self.hire_date
                ));
                None
            }
        };

        match hire_date {
            Some(hire_date) if issues.is_empty() => Ok(EmployeeInput {
                first_name: self.first_name,
                last_name: self.last_name,
                role: self.role,
                salary,
                team: self.team,
                hire_date,
            }),
            _ => Err(HrError::Validation(issues)),
        }
    }
}

fn check_text(issues: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(format!("{field} is empty"));
    }
}

fn check_salary(issues: &mut Vec<String>, salary: f64) {
    if !salary.is_finite() {
        issues.push("salary must be a finite number".to_string());
    } else if salary < 0.0 {
        issues.push("salary must not be negative".to_string());
    }
}
