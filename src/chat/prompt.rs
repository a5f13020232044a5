//! Prompt assembly for roster questions

use crate::entity::Employee;

/// Sent in place of the roster when there are no employees
pub const EMPTY_ROSTER: &str = "No employees yet.";

/// Returned when the provider answers without any message content
pub const NO_ANSWER: &str = "The assistant gave no answer.";

/// One line per employee: `id: first last, role, salary, team, hire_date`.
/// Salaries always carry a decimal point (`100000.0`).
pub fn roster_text(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    employees
        .iter()
        .map(|e| {
            format!(
                "{}: {} {}, {}, {:?}, {}, {}",
                e.id, e.first_name, e.last_name, e.role, e.salary, e.team, e.hire_date
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn system_prompt(roster: &str, language: &str) -> String {
    format!(
        "You are a helpful assistant answering questions about the company's employees. \
         Answer briefly, precisely and in {language}. \
         The hire date is the date the employee started working, not the end of a contract. \
         Employee list:\n{roster}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(id: i64, first: &str, last: &str) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            role: "Analyst".to_string(),
            salary: 85000.5,
            team: "Finance".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2019, 3, 4).unwrap(),
        }
    }

    #[test]
    fn test_roster_text_lines() {
        let text = roster_text(&[employee(1, "Anna", "Ivanova"), employee(2, "Boris", "Smirnov")]);
        assert_eq!(
            text,
            "1: Anna Ivanova, Analyst, 85000.5, Finance, 2019-03-04\n\
             2: Boris Smirnov, Analyst, 85000.5, Finance, 2019-03-04"
        );
    }

    #[test]
    fn test_roster_text_whole_salary_keeps_decimal() {
        let mut e = employee(7, "Anna", "Ivanova");
        e.salary = 100000.0;
        assert_eq!(
            roster_text(&[e]),
            "7: Anna Ivanova, Analyst, 100000.0, Finance, 2019-03-04"
        );
    }

    #[test]
    fn test_roster_text_empty() {
        assert_eq!(roster_text(&[]), EMPTY_ROSTER);
    }

    #[test]
    fn test_system_prompt_contents() {
        let prompt = system_prompt("1: Anna Ivanova", "Russian");
        assert!(prompt.contains("in Russian"));
        assert!(prompt.contains("started working"));
        assert!(prompt.ends_with("Employee list:\n1: Anna Ivanova"));
    }
}
