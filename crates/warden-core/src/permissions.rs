//! Resolved permission payloads.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The resolved collection of allowed actions for a role.
///
/// This is the cached payload: whoever resolves a role (out of scope for this
/// crate) produces one of these, and the cache hands out clones until the
/// entry expires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    permissions: BTreeSet<String>,
}

impl PermissionSet {
    /// Creates an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a permission to the set.
    pub fn insert(&mut self, permission: impl Into<String>) {
        self.permissions.insert(permission.into());
    }

    /// Returns true if the set grants the given permission.
    pub fn contains(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Number of permissions in the set.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Returns true if the set grants nothing.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Iterates over the permissions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().map(Into::into).collect(),
        }
    }
}
