//! Runs one parsed command against the session store.

use crate::cli_error::{CliError, CliResult};
use crate::commands::Commands;
use crate::connection_resolver::{
    CONNECT_FAILED_MESSAGE, ConnectionStatusResolver, INVALID_CHAT_MESSAGE,
};
use crate::peer_card::{PeerCard, SKILLS_LOAD_FAILED_MESSAGE, card_skills};
use crate::peer_commands::PeerCommands;
use crate::profile_commands::ProfileCommands;
use crate::profile_editor::{
    LOGIN_REQUIRED_MESSAGE, PROFILE_LOAD_FAILED_MESSAGE, UPDATE_LOGIN_REQUIRED_MESSAGE,
    load_profile, update_profile,
};
use crate::registration;
use crate::session_store::{GOOGLE_LOGIN_FAILED_MESSAGE, LOGIN_FAILED_MESSAGE, SessionStore};

use hc_auth::{AuthGate, RouteDecision, SessionStorage, requires_admin, requires_auth};
use hc_core::{ProfileEdits, RegistrationForm, Route, UserId, UserProfile, parse_user_id};

use std::str::FromStr;

use serde::Serialize;
use serde_json::{Value, json};

pub const PEER_LOGIN_REQUIRED_MESSAGE: &str = "Please log in to view community members.";
pub const NOT_CONNECTED_MESSAGE: &str = "You can only message users you are connected with.";

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| CliError::validation(format!("Failed to serialize output: {e}")))
}

/// Refuse `route` unless the current session may open it.
fn guard<S: SessionStorage>(store: &SessionStore<S>, route: Route, message: &str) -> CliResult<()> {
    match AuthGate::decide(route, store.session()) {
        RouteDecision::Render => Ok(()),
        RouteDecision::Redirect(to) => Err(CliError::redirect(to, message)),
    }
}

fn signed_in_id<S: SessionStorage>(store: &SessionStore<S>) -> CliResult<UserId> {
    match store.session() {
        Some(session) if requires_auth(Some(session)) => Ok(session.user_id),
        _ => Err(CliError::redirect(Route::Login, PEER_LOGIN_REQUIRED_MESSAGE)),
    }
}

fn session_summary<S: SessionStorage>(store: &SessionStore<S>) -> Value {
    json!({
        "authenticated": store.is_authenticated(),
        "admin": requires_admin(store.session()),
        "session": store.session(),
    })
}

/// Execute `command` and return its JSON result.
pub async fn run<S: SessionStorage>(
    command: Commands,
    store: &mut SessionStore<S>,
) -> CliResult<Value> {
    match command {
        Commands::Register {
            username,
            email,
            password,
            confirm_password,
            role,
            accept_terms,
        } => {
            let form = RegistrationForm {
                username,
                email,
                password,
                confirm_password,
                role,
                terms_accepted: accept_terms,
            };
            to_json(&registration::register(store.client(), &form).await?)
        }

        Commands::VerifyOtp { email, otp } => {
            let email = email.unwrap_or_default();
            to_json(&registration::verify_otp(store.client(), &email, &otp).await?)
        }

        Commands::ResendOtp { email } => {
            let email = email.unwrap_or_default();
            to_json(&registration::resend_otp(store.client(), &email).await?)
        }

        Commands::Login { email, password } => {
            if !store.login(&email, &password).await {
                return Err(CliError::authentication(LOGIN_FAILED_MESSAGE));
            }
            Ok(session_summary(store))
        }

        Commands::GoogleLogin { credential } => {
            if !store.google_login(&credential).await {
                return Err(CliError::authentication(GOOGLE_LOGIN_FAILED_MESSAGE));
            }
            Ok(session_summary(store))
        }

        Commands::Logout => {
            store.logout();
            Ok(session_summary(store))
        }

        Commands::Whoami => Ok(session_summary(store)),

        Commands::Route { path } => {
            let route = Route::from_str(&path)?;
            Ok(json!({
                "route": route,
                "guard": AuthGate::guard_for(route),
                "decision": AuthGate::decide(route, store.session()),
            }))
        }

        Commands::Profile { action } => match action {
            ProfileCommands::Show => {
                guard(store, Route::Profile, LOGIN_REQUIRED_MESSAGE)?;
                let profile = load_profile(store).await?;
                Ok(profile_view(&profile))
            }
            ProfileCommands::Update {
                username,
                full_name,
                email,
                phone,
                state,
                bio,
                timezone,
                availability,
                skill_ids,
                photo,
            } => {
                guard(store, Route::UpdateProfile, UPDATE_LOGIN_REQUIRED_MESSAGE)?;
                let edits = ProfileEdits {
                    username,
                    full_name,
                    email,
                    phone,
                    state,
                    bio,
                    timezone,
                    availability,
                    skill_ids,
                };
                update_profile(store, edits, photo.as_deref()).await
            }
        },

        Commands::Skills => {
            let skills = store
                .client()
                .list_skills()
                .await
                .map_err(|e| CliError::request_with(e, SKILLS_LOAD_FAILED_MESSAGE))?;
            to_json(&skills)
        }

        Commands::Peer { action } => run_peer(action, store).await,
    }
}

fn profile_view(profile: &UserProfile) -> Value {
    json!({
        "profile": profile,
        "display_name": profile.display_name(),
        "role": profile.role_label(),
        "timezone": profile.timezone_label(),
        "availability": profile.availability_label(),
    })
}

async fn run_peer<S: SessionStorage>(
    action: PeerCommands,
    store: &mut SessionStore<S>,
) -> CliResult<Value> {
    let current = signed_in_id(store)?;

    let (raw_id, chat) = match action {
        PeerCommands::Card { ref user_id } | PeerCommands::Connect { ref user_id } => {
            (user_id.clone(), false)
        }
        PeerCommands::Message { ref user_id } => (user_id.clone(), true),
    };

    let target = match parse_user_id(&raw_id) {
        Ok(id) => id,
        Err(_) if chat => return Err(CliError::validation(INVALID_CHAT_MESSAGE)),
        Err(e) => return Err(e.into()),
    };

    let client = store.client();
    let user = client
        .get_user(target)
        .await
        .map_err(|e| CliError::request_with(e, PROFILE_LOAD_FAILED_MESSAGE))?;

    let mut resolver = ConnectionStatusResolver::new(client, Some(current), user.id.or(Some(target)));
    resolver.resolve().await;

    match action {
        PeerCommands::Card { .. } => {
            let skills = card_skills(client, &user).await;
            to_json(&PeerCard::new(&user, skills, &resolver))
        }
        PeerCommands::Connect { .. } => {
            if !resolver.connect().await {
                let message = resolver.error().unwrap_or(CONNECT_FAILED_MESSAGE);
                return Err(CliError::validation(message));
            }
            let skills = card_skills(client, &user).await;
            to_json(&PeerCard::new(&user, skills, &resolver))
        }
        PeerCommands::Message { .. } => match resolver.message() {
            Some(route) => Ok(json!({
                "route": route,
                "decision": AuthGate::decide(route, store.session()),
            })),
            None => {
                let message = resolver.error().unwrap_or(NOT_CONNECTED_MESSAGE);
                Err(CliError::validation(message))
            }
        },
    }
}
