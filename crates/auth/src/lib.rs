//! `navguard-auth` — authentication check run before every console navigation.
//!
//! The guard is a pure decision over a session snapshot and a requested route;
//! [`hook`] adapts it to a router's pre-navigation hook.

pub mod catalog;
pub mod config;
pub mod encoding;
pub mod guard;
pub mod hook;

pub use catalog::{RouteCatalog, Whitelist};
pub use config::GuardConfig;
pub use encoding::{decode_uri_component, encode_uri_component};
pub use guard::{NavigationDecision, NavigationGuard, decide};
pub use hook::{AuthCheckGuard, HookOutcome, Location, MemoryLocation, Navigation};
