mod employee;

pub use employee::{Employee, EmployeeForm, EmployeeInput, HIRE_DATE_FORMAT};
