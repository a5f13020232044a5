mod commands;
mod handlers;

pub use commands::{Cli, Commands, EmployeeArgs};
pub use handlers::{
    handle_add, handle_ask, handle_delete, handle_get, handle_list, handle_serve, handle_update,
};
