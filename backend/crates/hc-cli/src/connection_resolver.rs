//! Relationship between the signed-in user and another user.

use crate::{CliClientResult, Client};

use hc_core::{ConnectionStatus, Route, UserId, UserProfile};

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

pub const STATUS_LOAD_FAILED_MESSAGE: &str = "Failed to load connection status.";
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to send connection request.";
pub const INVALID_CHAT_MESSAGE: &str = "Invalid user ID for chat.";
pub const CANNOT_CONNECT_MESSAGE: &str = "Cannot connect at this time.";

/// Where connection state is read from and requests are sent to.
#[async_trait]
pub trait ConnectionDirectory: Send + Sync {
    /// Users with a pending request involving `user_id`.
    async fn pending_requests(&self, user_id: UserId) -> CliClientResult<Vec<UserProfile>>;

    /// Users connected to `user_id`.
    async fn accepted_connections(&self, user_id: UserId) -> CliClientResult<Vec<UserProfile>>;

    /// Send a request; `true` when the backend reports success.
    async fn request_connection(&self, sender: UserId, receiver: UserId) -> CliClientResult<bool>;
}

#[async_trait]
impl ConnectionDirectory for Client {
    async fn pending_requests(&self, user_id: UserId) -> CliClientResult<Vec<UserProfile>> {
        Client::pending_requests(self, user_id).await
    }

    async fn accepted_connections(&self, user_id: UserId) -> CliClientResult<Vec<UserProfile>> {
        self.connections(user_id).await
    }

    async fn request_connection(&self, sender: UserId, receiver: UserId) -> CliClientResult<bool> {
        let body = self.connect(sender, receiver).await?;
        Ok(body.get("success").and_then(Value::as_bool) == Some(true))
    }
}

fn contains(users: &[UserProfile], id: UserId) -> bool {
    users.iter().any(|u| u.id == Some(id))
}

/// Resolves and drives the connection state between two users.
///
/// `status` is `None` until a resolution succeeds; while unresolved both
/// actions stay disabled.
pub struct ConnectionStatusResolver<'a, D: ConnectionDirectory + ?Sized> {
    directory: &'a D,
    current_user_id: Option<UserId>,
    target_user_id: Option<UserId>,
    status: Option<ConnectionStatus>,
    error: Option<String>,
}

impl<'a, D: ConnectionDirectory + ?Sized> ConnectionStatusResolver<'a, D> {
    pub fn new(
        directory: &'a D,
        current_user_id: Option<UserId>,
        target_user_id: Option<UserId>,
    ) -> Self {
        Self {
            directory,
            current_user_id,
            target_user_id,
            status: None,
            error: None,
        }
    }

    pub fn status(&self) -> Option<ConnectionStatus> {
        self.status
    }

    /// Last user-visible failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn pair(&self) -> Option<(UserId, UserId)> {
        match (self.current_user_id, self.target_user_id) {
            (Some(current), Some(target)) if current != target => Some((current, target)),
            _ => None,
        }
    }

    /// Work out the status. Pending requests win over connections.
    ///
    /// A fetch failure records an error and keeps the last resolved status.
    pub async fn resolve(&mut self) -> Option<ConnectionStatus> {
        let Some((current, target)) = self.pair() else {
            self.status = Some(ConnectionStatus::Invalid);
            return self.status;
        };

        match self.fetch(current, target).await {
            Ok(status) => {
                debug!("Connection {} -> {}: {}", current, target, status.as_str());
                self.status = Some(status);
                self.error = None;
            }
            Err(e) => {
                warn!("Connection status lookup failed: {e}");
                self.error = Some(STATUS_LOAD_FAILED_MESSAGE.to_string());
            }
        }

        self.status
    }

    async fn fetch(&self, current: UserId, target: UserId) -> CliClientResult<ConnectionStatus> {
        let pending = self.directory.pending_requests(current).await?;
        if contains(&pending, target) {
            return Ok(ConnectionStatus::Pending);
        }

        let connections = self.directory.accepted_connections(current).await?;
        Ok(if contains(&connections, target) {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::NotConnected
        })
    }

    pub fn can_connect(&self) -> bool {
        self.status.is_some_and(|s| s.allows_connect())
    }

    pub fn can_message(&self) -> bool {
        self.status.is_some_and(|s| s.allows_message())
    }

    /// Send a connection request. On success the status moves to PENDING
    /// without re-reading it from the backend.
    pub async fn connect(&mut self) -> bool {
        let pair = self.pair().filter(|_| self.can_connect());
        let Some((current, target)) = pair else {
            self.error = Some(CANNOT_CONNECT_MESSAGE.to_string());
            return false;
        };

        match self.directory.request_connection(current, target).await {
            Ok(true) => {
                self.status = Some(ConnectionStatus::Pending);
                self.error = None;
                true
            }
            Ok(false) => {
                warn!("Backend declined connection request {} -> {}", current, target);
                false
            }
            Err(e) => {
                warn!("Connection request failed: {e}");
                self.error = Some(CONNECT_FAILED_MESSAGE.to_string());
                false
            }
        }
    }

    /// Chat route for the target, available only once connected.
    pub fn message(&mut self) -> Option<Route> {
        if !self.can_message() {
            return None;
        }

        match self.target_user_id {
            Some(id) => Some(Route::Chat(id)),
            None => {
                self.error = Some(INVALID_CHAT_MESSAGE.to_string());
                None
            }
        }
    }

    /// Unresolved reads the same as NONE.
    pub fn connect_label(&self) -> &'static str {
        self.status
            .unwrap_or(ConnectionStatus::NotConnected)
            .connect_label()
    }
}
