use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::annotations::AnnotationKey;

/// A role as held by the current user.
///
/// Only the metadata is modeled; rules and permissions are resolved elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub metadata: RoleMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl Role {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            metadata: RoleMetadata {
                name: Some(name.into()),
                annotations: None,
            },
        }
    }

    pub fn with_annotation(mut self, key: AnnotationKey, value: impl Into<String>) -> Self {
        self.metadata
            .annotations
            .get_or_insert_with(BTreeMap::new)
            .insert(key.as_str().to_string(), value.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Value of a well-known annotation. `None` when the role has no
    /// annotations at all or lacks this key.
    pub fn annotation(&self, key: AnnotationKey) -> Option<&str> {
        self.metadata
            .annotations
            .as_ref()?
            .get(key.as_str())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_absent_without_map() {
        let role = Role::named("guest");
        assert_eq!(role.annotation(AnnotationKey::RedirectOnLogin), None);
    }

    #[test]
    fn annotation_lookup_is_keyed() {
        let role = Role::named("editor")
            .with_annotation(AnnotationKey::RbacDisplayName, "Editor")
            .with_annotation(AnnotationKey::RedirectOnLogin, "https://x/y");

        assert_eq!(role.annotation(AnnotationKey::RedirectOnLogin), Some("https://x/y"));
        assert_eq!(role.annotation(AnnotationKey::RbacDisplayName), Some("Editor"));
        assert_eq!(role.annotation(AnnotationKey::RbacModule), None);
    }

    #[test]
    fn deserializes_role_resource() {
        let json = r#"{
            "metadata": {
                "name": "post-editor",
                "annotations": {
                    "rbac.authorization.halo.run/redirect-on-login": "https://x/y"
                }
            }
        }"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.name(), Some("post-editor"));
        assert_eq!(role.annotation(AnnotationKey::RedirectOnLogin), Some("https://x/y"));
    }
}
