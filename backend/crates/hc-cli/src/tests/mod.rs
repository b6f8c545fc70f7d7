
use crate::{CliClientResult, ClientError, ConnectionDirectory};

use hc_auth::session_record::to_entries;
use hc_auth::{AuthError, MemoryStorage, SessionStorage};
use hc_core::{Role, Session, UserId, UserProfile};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Nothing listens here; tests that must not touch the network use it.
pub(crate) const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

pub(crate) fn sample_session() -> Session {
    Session {
        token: "jwt-abc".to_string(),
        user_id: 5,
        email: "ada@example.com".to_string(),
        username: "ada".to_string(),
        display_name: "Ada Lovelace".to_string(),
        phone_number: None,
        state: Some("CA".to_string()),
        profile_url: None,
        role: Some(Role::User),
    }
}

pub(crate) fn signed_in_storage() -> MemoryStorage {
    MemoryStorage::with_entries(to_entries(&sample_session()))
}

/// Storage whose file cannot be removed but can still be rewritten.
pub(crate) struct UndeletableStorage(pub MemoryStorage);

impl SessionStorage for UndeletableStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.0.snapshot()
    }

    fn replace_all(&mut self, entries: BTreeMap<String, String>) -> hc_auth::Result<()> {
        self.0.replace_all(entries)
    }

    fn clear(&mut self) -> hc_auth::Result<()> {
        Err(AuthError::StorageIo {
            path: PathBuf::from("session.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

fn user(id: UserId) -> UserProfile {
    UserProfile {
        id: Some(id),
        username: format!("user{id}"),
        ..UserProfile::default()
    }
}

/// In-memory directory that counts every call it receives.
#[derive(Default)]
pub(crate) struct FakeDirectory {
    pub pending: Vec<UserId>,
    pub connections: Vec<UserId>,
    pub fail_lookups: AtomicBool,
    pub connect_reply: Mutex<Option<bool>>,
    pub calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn new(pending: &[UserId], connections: &[UserId]) -> Self {
        Self {
            pending: pending.to_vec(),
            connections: connections.to_vec(),
            connect_reply: Mutex::new(Some(true)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, ids: &[UserId]) -> CliClientResult<Vec<UserProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(ClientError::api_error(500, "directory down".to_string()));
        }
        Ok(ids.iter().copied().map(user).collect())
    }
}

#[async_trait]
impl ConnectionDirectory for FakeDirectory {
    async fn pending_requests(&self, _user_id: UserId) -> CliClientResult<Vec<UserProfile>> {
        self.lookup(&self.pending)
    }

    async fn accepted_connections(&self, _user_id: UserId) -> CliClientResult<Vec<UserProfile>> {
        self.lookup(&self.connections)
    }

    async fn request_connection(&self, _sender: UserId, _receiver: UserId) -> CliClientResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.connect_reply.lock().unwrap() {
            Some(reply) => Ok(reply),
            None => Err(ClientError::api_error(502, "bad gateway".to_string())),
        }
    }
}
