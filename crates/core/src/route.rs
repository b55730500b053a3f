use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named route identifier.
///
/// Route names are opaque and compared exactly (case-sensitive). The console's
/// well-known routes are provided as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteName(Cow<'static, str>);

impl RouteName {
    pub const LOGIN: RouteName = RouteName(Cow::Borrowed("Login"));
    pub const DASHBOARD: RouteName = RouteName(Cow::Borrowed("Dashboard"));
    pub const REDIRECT: RouteName = RouteName(Cow::Borrowed("Redirect"));
    pub const SETUP: RouteName = RouteName(Cow::Borrowed("Setup"));
    pub const BINDING: RouteName = RouteName(Cow::Borrowed("Binding"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RouteName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for RouteName {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

/// Route query parameters.
pub type Query = BTreeMap<String, String>;

/// A requested route, or a replacement issued by the guard.
///
/// `name` is optional because routers hand the guard unnamed locations too;
/// an unnamed target never matches any named route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<RouteName>,
    #[serde(default, skip_serializing_if = "Query::is_empty")]
    pub query: Query,
}

impl RouteTarget {
    pub fn named(name: impl Into<RouteName>) -> Self {
        Self {
            name: Some(name.into()),
            query: Query::new(),
        }
    }

    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> Option<&RouteName> {
        self.name.as_ref()
    }

    /// Whether this target is the route called `name`.
    pub fn is(&self, name: &RouteName) -> bool {
        self.name.as_ref() == Some(name)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}
