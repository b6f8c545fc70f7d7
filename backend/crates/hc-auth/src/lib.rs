pub mod auth_gate;
pub mod error;
pub mod file_storage;
pub mod google_credential;
pub mod memory_storage;
pub mod session_record;
pub mod session_storage;

pub use auth_gate::{AuthGate, Guard, RouteDecision, requires_admin, requires_auth};
pub use error::{AuthError, Result};
pub use file_storage::FileStorage;
pub use google_credential::GoogleIdentity;
pub use memory_storage::MemoryStorage;
pub use session_storage::SessionStorage;

#[cfg(test)]
mod tests;
