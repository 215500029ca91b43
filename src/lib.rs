pub mod api;
pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod error;
pub mod logging;
pub mod order;
pub mod ordering;
pub mod position;
pub mod scope;
pub mod sync;

#[cfg(test)]
pub mod test_utils;
