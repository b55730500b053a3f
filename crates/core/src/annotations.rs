//! Well-known metadata annotation keys.
//!
//! Annotations are free-form `string -> string` metadata on console resources.
//! The keys the console understands are fixed and modeled as [`AnnotationKey`]
//! so lookups are typed rather than stringly keyed.

use core::str::FromStr;

use crate::error::GuardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKey {
    // plugin
    PluginDisplayName,

    // rbac
    RbacModule,
    RbacRoleNames,
    RbacDisplayName,
    RbacDependencies,
    AvatarAttachmentName,
    LastAvatarAttachmentName,
    /// Absolute URL a user holding the role is sent to after signing in.
    RedirectOnLogin,

    // content
    PreferredEditor,

    // personal access tokens
    PatAccessToken,
}

impl AnnotationKey {
    pub const ALL: [AnnotationKey; 10] = [
        AnnotationKey::PluginDisplayName,
        AnnotationKey::RbacModule,
        AnnotationKey::RbacRoleNames,
        AnnotationKey::RbacDisplayName,
        AnnotationKey::RbacDependencies,
        AnnotationKey::AvatarAttachmentName,
        AnnotationKey::LastAvatarAttachmentName,
        AnnotationKey::RedirectOnLogin,
        AnnotationKey::PreferredEditor,
        AnnotationKey::PatAccessToken,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AnnotationKey::PluginDisplayName => "plugin.halo.run/display-name",
            AnnotationKey::RbacModule => "rbac.authorization.halo.run/module",
            AnnotationKey::RbacRoleNames => "rbac.authorization.halo.run/role-names",
            AnnotationKey::RbacDisplayName => "rbac.authorization.halo.run/display-name",
            AnnotationKey::RbacDependencies => "rbac.authorization.halo.run/dependencies",
            AnnotationKey::AvatarAttachmentName => "halo.run/avatar-attachment-name",
            AnnotationKey::LastAvatarAttachmentName => "halo.run/last-avatar-attachment-name",
            AnnotationKey::RedirectOnLogin => "rbac.authorization.halo.run/redirect-on-login",
            AnnotationKey::PreferredEditor => "content.halo.run/preferred-editor",
            AnnotationKey::PatAccessToken => "security.halo.run/access-token",
        }
    }
}

impl core::fmt::Display for AnnotationKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnotationKey {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnnotationKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| GuardError::UnknownAnnotation(s.to_string()))
    }
}
