use hc_core::{Route, Session};

use serde::Serialize;

/// True iff someone is signed in.
pub fn requires_auth(session: Option<&Session>) -> bool {
    session.is_some_and(Session::is_authenticated)
}

/// True iff the signed-in user carries the ADMIN role.
pub fn requires_admin(session: Option<&Session>) -> bool {
    session.is_some_and(Session::is_admin)
}

/// Which predicate a route is guarded by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Guard {
    Public,
    Authenticated,
    Admin,
}

/// Outcome of evaluating a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "to", rename_all = "snake_case")]
pub enum RouteDecision {
    Render,
    Redirect(Route),
}

/// Route table plus guard evaluation. Stateless: every navigation is
/// evaluated afresh against whatever session is current.
pub struct AuthGate;

impl AuthGate {
    pub fn guard_for(route: Route) -> Guard {
        match route {
            Route::Home | Route::Login | Route::Register | Route::VerifyOtp => Guard::Public,
            Route::Profile | Route::UpdateProfile | Route::Chat(_) => Guard::Authenticated,
            Route::Admin => Guard::Admin,
        }
    }

    pub fn decide(route: Route, session: Option<&Session>) -> RouteDecision {
        match Self::guard_for(route) {
            Guard::Public => RouteDecision::Render,
            Guard::Authenticated if requires_auth(session) => RouteDecision::Render,
            Guard::Authenticated => RouteDecision::Redirect(Route::Login),
            Guard::Admin if requires_admin(session) => RouteDecision::Render,
            Guard::Admin => RouteDecision::Redirect(Route::Home),
        }
    }
}
