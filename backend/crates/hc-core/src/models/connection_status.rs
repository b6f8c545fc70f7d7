use serde::{Deserialize, Serialize};

/// Relationship between the current user and a viewed user.
///
/// Always derived from the pending and accepted collections, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[serde(rename = "NONE")]
    NotConnected,
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "CONNECTED")]
    Connected,
    /// Self-reference or a missing identifier.
    #[serde(rename = "INVALID")]
    Invalid,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotConnected => "NONE",
            Self::Pending => "PENDING",
            Self::Connected => "CONNECTED",
            Self::Invalid => "INVALID",
        }
    }

    pub fn allows_connect(&self) -> bool {
        matches!(self, Self::NotConnected)
    }

    pub fn allows_message(&self) -> bool {
        matches!(self, Self::Connected)
    }

    pub fn connect_label(&self) -> &'static str {
        match self {
            Self::Pending => "Request Sent",
            Self::Connected => "Connected",
            Self::NotConnected | Self::Invalid => "Connect",
        }
    }
}
