use std::process::Command;
use tempfile::TempDir;

fn hrdesk_cmd(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hrdesk"));
    cmd.current_dir(tmp.path())
        .env("DATABASE_PATH", tmp.path().join("hr.db"))
        .env_remove("GROQ_API_KEY");
    cmd
}

fn add_args<'a>(first: &'a str, last: &'a str) -> Vec<&'a str> {
    vec![
        "add",
        first,
        last,
        "--role",
        "Engineer",
        "--salary",
        "95000",
        "--team",
        "Core",
        "--hire-date",
        "2022-11-07",
    ]
}

#[test]
fn test_list_empty() {
    let tmp = TempDir::new().unwrap();

    let output = hrdesk_cmd(&tmp).args(["list"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No employees found."));
    assert!(tmp.path().join("hr.db").exists());
}

#[test]
fn test_roster_commands_ignore_server_settings() {
    let tmp = TempDir::new().unwrap();

    let output = hrdesk_cmd(&tmp)
        .args(add_args("Anna", "Ivanova"))
        .env("HTTP_PORT", "bogus")
        .env("CHAT_TEMPERATURE", "warm")
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = hrdesk_cmd(&tmp)
        .args(["list"])
        .env("HTTP_PORT", "bogus")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Anna Ivanova"));

    let output = hrdesk_cmd(&tmp)
        .args(["serve"])
        .env("HTTP_PORT", "bogus")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("HTTP_PORT"));
}

#[test]
fn test_full_employee_workflow() {
    let tmp = TempDir::new().unwrap();

    // Add first employee
    let output = hrdesk_cmd(&tmp)
        .args(add_args("Anna", "Ivanova"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created employee 1 - Anna Ivanova"));

    // Add second employee
    let output = hrdesk_cmd(&tmp)
        .args(add_args("Boris", "Smirnov"))
        .output()
        .unwrap();
    assert!(output.status.success());

    // List
    let output = hrdesk_cmd(&tmp).args(["list"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Anna Ivanova"));
    assert!(stdout.contains("Boris Smirnov"));
    assert!(stdout.contains("hired 2022-11-07"));

    // Get with JSON output
    let output = hrdesk_cmd(&tmp)
        .args(["get", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"first_name\": \"Boris\""));
    assert!(stdout.contains("\"hire_date\": \"2022-11-07\""));

    // Delete
    let output = hrdesk_cmd(&tmp)
        .args(["delete", "1", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = hrdesk_cmd(&tmp).args(["list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Anna Ivanova"));
    assert!(stdout.contains("Boris Smirnov"));

    // Deleting again reports absence
    let output = hrdesk_cmd(&tmp)
        .args(["delete", "1", "--force"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Employee not found: 1"));
}

#[test]
fn test_add_duplicate_fails() {
    let tmp = TempDir::new().unwrap();

    let output = hrdesk_cmd(&tmp)
        .args(add_args("Anna", "Ivanova"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = hrdesk_cmd(&tmp)
        .args(add_args("Anna", "Ivanova"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));

    let output = hrdesk_cmd(&tmp)
        .args(["list", "--json"])
        .output()
        .unwrap();
    let employees: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(employees.as_array().unwrap().len(), 1);
}

#[test]
fn test_add_invalid_date_fails() {
    let tmp = TempDir::new().unwrap();

    let output = hrdesk_cmd(&tmp)
        .args([
            "add",
            "Anna",
            "Ivanova",
            "--role",
            "Engineer",
            "--salary",
            "95000",
            "--team",
            "Core",
            "--hire-date",
            "07.11.2022",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hire_date"));
}

#[test]
fn test_update_missing_fails() {
    let tmp = TempDir::new().unwrap();

    let mut args = add_args("Ghost", "Person");
    args[0] = "update";
    args.insert(1, "42");

    let output = hrdesk_cmd(&tmp).args(&args).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Employee not found: 42"));

    let output = hrdesk_cmd(&tmp).args(["list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No employees found."));
}

#[test]
fn test_delete_requires_force_when_not_interactive() {
    let tmp = TempDir::new().unwrap();

    hrdesk_cmd(&tmp)
        .args(add_args("Anna", "Ivanova"))
        .output()
        .unwrap();

    let output = hrdesk_cmd(&tmp)
        .args(["delete", "1"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"));
}

#[test]
fn test_ask_without_api_key_fails() {
    let tmp = TempDir::new().unwrap();

    let output = hrdesk_cmd(&tmp)
        .args(["ask", "Who works here?"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GROQ_API_KEY is not configured"));
}
