pub mod chat;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod http;
pub mod storage;

pub use chat::ChatClient;
pub use config::Config;
pub use error::{HrError, Result};
pub use storage::{Database, EmployeeStore};
