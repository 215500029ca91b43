// CLI command handlers module
//
// Auth: auth, logout
// Tasks: add, reorder

pub mod auth_commands;
pub mod task_commands;

pub use auth_commands::{handle_auth_command, handle_logout_command};
pub use task_commands::{handle_add_command, handle_reorder_command};
