use serde::Serialize;

use navguard_core::{AnnotationKey, GuardResult, Role, RouteTarget, SessionState};

use crate::config::GuardConfig;
use crate::encoding::encode_uri_component;

/// Outcome of checking one route transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum NavigationDecision {
    /// Let the transition through unchanged.
    Proceed,

    /// Abort the transition and start a new one to this route.
    RedirectTo(RouteTarget),

    /// Leave the application and load this URL in the whole window.
    ExternalRedirect(String),
}

impl NavigationDecision {
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationDecision::Proceed => "proceed",
            NavigationDecision::RedirectTo(_) => "redirect_to",
            NavigationDecision::ExternalRedirect(_) => "external_redirect",
        }
    }
}

/// Pre-navigation authentication check.
///
/// - No IO
/// - No internal state
/// - Never fails a navigation (every input maps to a decision)
#[derive(Debug, Clone, Default)]
pub struct NavigationGuard {
    config: GuardConfig,
}

impl NavigationGuard {
    pub fn new(config: GuardConfig) -> GuardResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Decide what happens to a transition to `target`.
    ///
    /// `current_url` is the full address at the time of the transition; it is
    /// only read when an anonymous user has to be sent to login.
    pub fn decide(
        &self,
        target: &RouteTarget,
        session: &SessionState,
        current_url: &str,
    ) -> NavigationDecision {
        let decision = self.evaluate(target, session, current_url);

        tracing::debug!(
            route = target.name().map(|n| n.as_str()).unwrap_or_default(),
            anonymous = session.is_anonymous(),
            roles = session.roles().len(),
            decision = decision.kind(),
            "navigation checked"
        );

        decision
    }

    fn evaluate(
        &self,
        target: &RouteTarget,
        session: &SessionState,
        current_url: &str,
    ) -> NavigationDecision {
        let catalog = &self.config.catalog;
        let query_key = self.config.redirect_query_key.as_str();

        if session.is_anonymous() {
            if self.config.whitelist.allows(target.name()) {
                return NavigationDecision::Proceed;
            }
            return NavigationDecision::RedirectTo(
                RouteTarget::named(catalog.login.clone())
                    .with_query(query_key, encode_uri_component(current_url)),
            );
        }

        // Whitelisted or not, signed-in users only get intercepted on login.
        if !target.is(&catalog.login) {
            return NavigationDecision::Proceed;
        }

        if let Some(redirect_uri) = target.query_value(query_key).filter(|v| !v.is_empty()) {
            return NavigationDecision::RedirectTo(
                RouteTarget::named(catalog.redirect.clone()).with_query(query_key, redirect_uri),
            );
        }

        match first_login_redirect(session.roles()) {
            Some(role) => NavigationDecision::ExternalRedirect(self.login_redirect_url(role)),
            None => NavigationDecision::RedirectTo(RouteTarget::named(catalog.dashboard.clone())),
        }
    }

    fn login_redirect_url(&self, role: &Role) -> String {
        role.annotation(AnnotationKey::RedirectOnLogin)
            .filter(|url| !url.is_empty())
            .unwrap_or(self.config.external_fallback_url.as_str())
            .to_string()
    }
}

/// First role, in session order, carrying a non-empty login redirect.
fn first_login_redirect(roles: &[Role]) -> Option<&Role> {
    roles.iter().find(|role| {
        role.annotation(AnnotationKey::RedirectOnLogin)
            .is_some_and(|url| !url.is_empty())
    })
}

/// [`NavigationGuard::decide`] with the console's default catalog.
pub fn decide(target: &RouteTarget, session: &SessionState, current_url: &str) -> NavigationDecision {
    NavigationGuard::default().decide(target, session, current_url)
}
