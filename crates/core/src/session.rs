//! Point-in-time view of the signed-in user.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Session snapshot read by the guard.
///
/// Deserialization fails closed: a payload without `isAnonymous` is treated as
/// anonymous, and missing or `null` roles mean no roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default = "anonymous_by_default")]
    pub is_anonymous: bool,
    #[serde(default)]
    pub current_roles: Option<Vec<Role>>,
}

fn anonymous_by_default() -> bool {
    true
}

impl Default for SessionState {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self {
            is_anonymous: true,
            current_roles: None,
        }
    }

    pub fn authenticated(roles: Vec<Role>) -> Self {
        Self {
            is_anonymous: false,
            current_roles: Some(roles),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    /// Roles in the order the session store holds them.
    pub fn roles(&self) -> &[Role] {
        self.current_roles.as_deref().unwrap_or_default()
    }
}

/// Source of session snapshots (the user store, in the console).
pub trait SessionStateProvider {
    fn snapshot(&self) -> SessionState;
}

impl SessionStateProvider for SessionState {
    fn snapshot(&self) -> SessionState {
        self.clone()
    }
}

impl<F> SessionStateProvider for F
where
    F: Fn() -> SessionState,
{
    fn snapshot(&self) -> SessionState {
        self()
    }
}
