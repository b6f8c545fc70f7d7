//! hc-cli library
//!
//! Session handling, connection status and the command runner behind the
//! `hc` binary. Exported for the integration tests.

pub mod app;
pub mod cli;
pub mod cli_error;
pub(crate) mod client;
pub mod commands;
pub mod connection_resolver;
pub mod logger;
pub mod peer_card;
pub mod peer_commands;
pub mod profile_commands;
pub mod profile_editor;
pub mod registration;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use cli_error::{CliError, CliResult};
pub use client::{CliClientResult, Client, ClientError};
pub use connection_resolver::{ConnectionDirectory, ConnectionStatusResolver};
pub use session_store::SessionStore;
