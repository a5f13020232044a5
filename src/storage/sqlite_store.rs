use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::entity::{Employee, EmployeeInput};
use crate::error::{HrError, Result};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SELECT_EMPLOYEE: &str =
    "SELECT id, first_name, last_name, role, salary, team, hire_date FROM employees";

/// Handle to the employee database file.
///
/// Cheap to clone; every request or command opens its own
/// [`EmployeeStore`] session through [`Database::session`].
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Self { path };
        let store = db.session()?;
        store.init_schema()?;
        Ok(db)
    }

    /// Open a fresh connection scoped to the caller
    pub fn session(&self) -> Result<EmployeeStore> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(EmployeeStore { conn })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// CRUD operations over the `employees` table, bound to one connection
pub struct EmployeeStore {
    conn: Connection,
}

impl EmployeeStore {
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS employees (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                role TEXT NOT NULL,
                salary REAL NOT NULL,
                team TEXT NOT NULL,
                hire_date TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_employees_first_name ON employees(first_name);
            CREATE INDEX IF NOT EXISTS idx_employees_last_name ON employees(last_name);
            ",
        )?;
        Ok(())
    }

    /// All employees in the roster
    pub fn list(&self) -> Result<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_EMPLOYEE} ORDER BY id"))?;

        let employees = stmt
            .query_map([], row_to_employee)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(employees)
    }

    pub fn get(&self, id: i64) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                &format!("{SELECT_EMPLOYEE} WHERE id = ?1"),
                [id],
                row_to_employee,
            )
            .optional()?;
        Ok(employee)
    }

    /// Exact match on first and last name
    pub fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                &format!("{SELECT_EMPLOYEE} WHERE first_name = ?1 AND last_name = ?2 LIMIT 1"),
                [first_name, last_name],
                row_to_employee,
            )
            .optional()?;
        Ok(employee)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Insert a new employee and return it with its assigned id
    pub fn create(&self, input: &EmployeeInput) -> Result<Employee> {
        self.conn.execute(
            "INSERT INTO employees (first_name, last_name, role, salary, team, hire_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                input.first_name,
                input.last_name,
                input.role,
                input.salary,
                input.team,
                input.hire_date,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        self.get(id)?
            .ok_or_else(|| HrError::Storage(format!("Inserted employee {} could not be reloaded", id)))
    }

    /// Overwrite every field of an existing employee.
    ///
    /// Returns `None` without touching the table when `id` does not exist.
    pub fn update(&self, id: i64, input: &EmployeeInput) -> Result<Option<Employee>> {
        let changed = self.conn.execute(
            "UPDATE employees
             SET first_name = ?1, last_name = ?2, role = ?3, salary = ?4, team = ?5, hire_date = ?6
             WHERE id = ?7",
            params![
                input.first_name,
                input.last_name,
                input.role,
                input.salary,
                input.team,
                input.hire_date,
                id,
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        self.get(id)
    }

    /// Remove an employee, returning the record as it was before deletion
    pub fn delete(&self, id: i64) -> Result<Option<Employee>> {
        let Some(existing) = self.get(id)? else {
            return Ok(None);
        };

        self.conn
            .execute("DELETE FROM employees WHERE id = ?1", [id])?;
        Ok(Some(existing))
    }
}

fn row_to_employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        role: row.get(3)?,
        salary: row.get(4)?,
        team: row.get(5)?,
        hire_date: row.get(6)?,
    })
}

impl From<rusqlite::Error> for HrError {
    fn from(e: rusqlite::Error) -> Self {
        HrError::Storage(format!("SQLite error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn open_db(tmp: &TempDir) -> Database {
        Database::open(tmp.path().join("hr.db")).unwrap()
    }

    fn input(first: &str, last: &str) -> EmployeeInput {
        EmployeeInput {
            first_name: first.to_string(),
            last_name: last.to_string(),
            role: "Engineer".to_string(),
            salary: 100000.0,
            team: "Core".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
        }
    }

    #[test]
    fn test_open_creates_db() {
        let tmp = TempDir::new().unwrap();
        let db = Database::open(tmp.path().join("nested/dir/hr.db")).unwrap();
        assert!(db.path().exists());
    }

    #[test]
    fn test_create_then_list() {
        let tmp = TempDir::new().unwrap();
        let store = open_db(&tmp).session().unwrap();

        assert!(store.list().unwrap().is_empty());

        let created = store.create(&input("Anna", "Ivanova")).unwrap();
        assert!(created.id > 0);

        let roster = store.list().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0], created);
        assert_eq!(roster[0].hire_date, NaiveDate::from_ymd_opt(2022, 1, 10).unwrap());
    }

    #[test]
    fn test_ids_are_fresh() {
        let tmp = TempDir::new().unwrap();
        let store = open_db(&tmp).session().unwrap();

        let first = store.create(&input("Anna", "Ivanova")).unwrap();
        store.delete(first.id).unwrap();
        let second = store.create(&input("Boris", "Smirnov")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let tmp = TempDir::new().unwrap();
        let store = open_db(&tmp).session().unwrap();
        store.create(&input("Anna", "Ivanova")).unwrap();

        assert!(store.find_by_name("Anna", "Ivanova").unwrap().is_some());
        assert!(store.find_by_name("anna", "Ivanova").unwrap().is_none());
        assert!(store.find_by_name("Anna", "Petrova").unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_every_field() {
        let tmp = TempDir::new().unwrap();
        let store = open_db(&tmp).session().unwrap();
        let created = store.create(&input("Anna", "Ivanova")).unwrap();

        let mut changed = input("Anna", "Sidorova");
        changed.role = "Lead".to_string();
        changed.salary = 150000.0;
        changed.team = "Infra".to_string();
        changed.hire_date = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();

        let updated = store.update(created.id, &changed).unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.last_name, "Sidorova");
        assert_eq!(updated.role, "Lead");
        assert_eq!(updated.salary, 150000.0);
        assert_eq!(updated.team, "Infra");
        assert_eq!(store.get(created.id).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_missing_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let store = open_db(&tmp).session().unwrap();

        assert!(store.update(42, &input("Ghost", "Person")).unwrap().is_none());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_returns_prior_state() {
        let tmp = TempDir::new().unwrap();
        let store = open_db(&tmp).session().unwrap();
        let created = store.create(&input("Anna", "Ivanova")).unwrap();

        let deleted = store.delete(created.id).unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert!(store.get(created.id).unwrap().is_none());

        // Second delete reports absence
        assert!(store.delete(created.id).unwrap().is_none());
    }

    #[test]
    fn test_sessions_share_the_file() {
        let tmp = TempDir::new().unwrap();
        let db = open_db(&tmp);

        let created = db.session().unwrap().create(&input("Anna", "Ivanova")).unwrap();
        let other = db.session().unwrap();
        assert_eq!(other.get(created.id).unwrap(), Some(created));
    }
}
