//! Router integration.
//!
//! Routers call a pre-navigation hook with `(to, from)` and expect exactly one
//! completion: proceed, a replacement route, or abort. [`AuthCheckGuard`]
//! adapts [`NavigationDecision`] to that protocol and owns the one side effect
//! the guard has, replacing the window location for external redirects.

use navguard_core::{GuardError, GuardResult, RouteTarget, SessionStateProvider};

use crate::guard::{NavigationDecision, NavigationGuard};

/// The browser address (`window.location` in the console).
pub trait Location {
    /// Full current URL.
    fn href(&self) -> String;

    /// Navigate the whole window to `url`.
    fn assign(&mut self, url: &str);
}

/// In-memory location for hosts without a window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    href: String,
    history: Vec<String>,
}

impl MemoryLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            history: Vec::new(),
        }
    }

    /// URLs passed to [`Location::assign`], oldest first.
    pub fn assigned(&self) -> &[String] {
        &self.history
    }
}

impl Location for MemoryLocation {
    fn href(&self) -> String {
        self.href.clone()
    }

    fn assign(&mut self, url: &str) {
        self.href = url.to_string();
        self.history.push(url.to_string());
    }
}

/// Completion handed back to the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// `next()`
    Next,
    /// `next(route)`
    Redirect(RouteTarget),
    /// `next(false)`
    Abort,
}

/// Where a navigation ended up once guard redirects are followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Committed(RouteTarget),
    External(String),
}

pub struct AuthCheckGuard<S, L> {
    guard: NavigationGuard,
    session: S,
    location: L,
}

impl<S, L> AuthCheckGuard<S, L>
where
    S: SessionStateProvider,
    L: Location,
{
    pub fn new(guard: NavigationGuard, session: S, location: L) -> Self {
        Self {
            guard,
            session,
            location,
        }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Pre-navigation hook. `from` is accepted for the router's signature;
    /// the decision does not depend on it.
    pub fn before_each(&mut self, to: &RouteTarget, _from: &RouteTarget) -> HookOutcome {
        match self.check(to) {
            NavigationDecision::Proceed => HookOutcome::Next,
            NavigationDecision::RedirectTo(target) => HookOutcome::Redirect(target),
            // The window is already leaving; nothing in-app may commit.
            NavigationDecision::ExternalRedirect(_) => HookOutcome::Abort,
        }
    }

    /// Run a navigation the way the router does: a guard-issued redirect is
    /// checked exactly once more before it commits.
    pub fn navigate(&mut self, to: RouteTarget) -> GuardResult<Navigation> {
        let redirected = match self.check(&to) {
            NavigationDecision::Proceed => return Ok(Navigation::Committed(to)),
            NavigationDecision::ExternalRedirect(url) => return Ok(Navigation::External(url)),
            NavigationDecision::RedirectTo(target) => target,
        };

        match self.check(&redirected) {
            NavigationDecision::Proceed => Ok(Navigation::Committed(redirected)),
            NavigationDecision::ExternalRedirect(url) => Ok(Navigation::External(url)),
            NavigationDecision::RedirectTo(_) => Err(GuardError::UnsettledRedirect(
                redirected
                    .name()
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
            )),
        }
    }

    fn check(&mut self, to: &RouteTarget) -> NavigationDecision {
        let session = self.session.snapshot();
        let href = self.location.href();
        let decision = self.guard.decide(to, &session, &href);

        if let NavigationDecision::ExternalRedirect(url) = &decision {
            tracing::info!(url = %url, "leaving console for role login redirect");
            self.location.assign(url);
        }

        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use navguard_core::{AnnotationKey, Role, RouteName, SessionState};

    const HREF: &str = "http://localhost:8090/console/attachments";

    fn guard_hook<S: SessionStateProvider>(session: S) -> AuthCheckGuard<S, MemoryLocation> {
        AuthCheckGuard::new(NavigationGuard::default(), session, MemoryLocation::new(HREF))
    }

    #[test]
    fn proceed_maps_to_next() {
        let mut hook = guard_hook(SessionState::authenticated(vec![]));
        let outcome = hook.before_each(&RouteTarget::named("Attachments"), &RouteTarget::unnamed());
        assert_eq!(outcome, HookOutcome::Next);
    }

    #[test]
    fn redirect_maps_to_replacement_route() {
        let mut hook = guard_hook(SessionState::anonymous());
        let outcome = hook.before_each(&RouteTarget::named("Attachments"), &RouteTarget::unnamed());
        let HookOutcome::Redirect(target) = outcome else {
            panic!("expected redirect");
        };
        assert!(target.is(&RouteName::LOGIN));
    }

    #[test]
    fn external_redirect_assigns_location_and_aborts() {
        let role = Role::named("contributor")
            .with_annotation(AnnotationKey::RedirectOnLogin, "https://x/y");
        let mut hook = guard_hook(SessionState::authenticated(vec![role]));

        let outcome = hook.before_each(&RouteTarget::named(RouteName::LOGIN), &RouteTarget::unnamed());

        assert_eq!(outcome, HookOutcome::Abort);
        assert_eq!(hook.location().assigned(), ["https://x/y".to_string()]);
        assert_eq!(hook.location().href(), "https://x/y");
    }

    #[test]
    fn session_is_read_on_every_invocation() {
        let signed_in = Cell::new(false);
        let provider = || {
            if signed_in.get() {
                SessionState::authenticated(vec![])
            } else {
                SessionState::anonymous()
            }
        };
        let mut hook = guard_hook(provider);
        let to = RouteTarget::named("Posts");

        assert!(matches!(hook.before_each(&to, &RouteTarget::unnamed()), HookOutcome::Redirect(_)));
        signed_in.set(true);
        assert_eq!(hook.before_each(&to, &RouteTarget::unnamed()), HookOutcome::Next);
    }

    #[test]
    fn anonymous_navigation_settles_on_login() {
        let mut hook = guard_hook(SessionState::anonymous());
        let Navigation::Committed(target) = hook.navigate(RouteTarget::named("Posts")).unwrap() else {
            panic!("expected committed navigation");
        };
        assert!(target.is(&RouteName::LOGIN));
        assert!(target.query_value("redirect_uri").is_some());
    }

    #[test]
    fn signed_in_login_settles_on_dashboard() {
        let mut hook = guard_hook(SessionState::authenticated(vec![]));
        let navigation = hook.navigate(RouteTarget::named(RouteName::LOGIN)).unwrap();
        assert_eq!(navigation, Navigation::Committed(RouteTarget::named(RouteName::DASHBOARD)));
    }

    #[test]
    fn unsettled_redirect_is_reported() {
        // The session flips to anonymous between the two checks, so the
        // dashboard redirect is itself redirected.
        let calls = Cell::new(0);
        let provider = || {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                SessionState::authenticated(vec![])
            } else {
                SessionState::anonymous()
            }
        };
        let mut hook = guard_hook(provider);

        let err = hook.navigate(RouteTarget::named(RouteName::LOGIN)).unwrap_err();
        assert_eq!(err, GuardError::UnsettledRedirect("Dashboard".to_string()));
    }
}
