use serde::{Deserialize, Serialize};

use navguard_core::RouteName;

/// The named routes the guard redirects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteCatalog {
    pub login: RouteName,
    pub dashboard: RouteName,
    /// Hand-off route that completes a deferred navigation to `redirect_uri`.
    pub redirect: RouteName,
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self {
            login: RouteName::LOGIN,
            dashboard: RouteName::DASHBOARD,
            redirect: RouteName::REDIRECT,
        }
    }
}

/// Route names reachable without signing in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Whitelist(Vec<RouteName>);

impl Default for Whitelist {
    fn default() -> Self {
        Self(vec![RouteName::SETUP, RouteName::LOGIN, RouteName::BINDING])
    }
}

impl Whitelist {
    pub fn new(routes: impl IntoIterator<Item = RouteName>) -> Self {
        let mut names: Vec<RouteName> = Vec::new();
        for route in routes {
            if !names.contains(&route) {
                names.push(route);
            }
        }
        Self(names)
    }

    /// An unnamed route is never whitelisted.
    pub fn allows(&self, name: Option<&RouteName>) -> bool {
        name.is_some_and(|name| self.0.contains(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteName> {
        self.0.iter()
    }
}
