//! `navguard-core` — domain primitives for console navigation.
//!
//! Routes, roles, annotations and session snapshots. This crate knows nothing
//! about how the guard decides; it only models what the guard reads.

pub mod annotations;
pub mod error;
pub mod role;
pub mod route;
pub mod session;

pub use annotations::AnnotationKey;
pub use error::{GuardError, GuardResult};
pub use role::{Role, RoleMetadata};
pub use route::{Query, RouteName, RouteTarget};
pub use session::{SessionState, SessionStateProvider};
