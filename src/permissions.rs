//! Startup permission request.
//!
//! The shell asks the host for storage/media access once at startup and
//! shows a single notice with the answer. Nothing in the session depends on
//! the result.

use std::collections::HashSet;
use std::fmt;

use tracing::{info, warn};

/// First platform level that splits storage access into per-media permissions.
pub const MEDIA_PERMISSIONS_API_LEVEL: u32 = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ReadMediaImages,
    ReadMediaVideo,
    ReadMediaAudio,
    ReadExternalStorage,
    WriteExternalStorage,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Permission::ReadMediaImages => "READ_MEDIA_IMAGES",
            Permission::ReadMediaVideo => "READ_MEDIA_VIDEO",
            Permission::ReadMediaAudio => "READ_MEDIA_AUDIO",
            Permission::ReadExternalStorage => "READ_EXTERNAL_STORAGE",
            Permission::WriteExternalStorage => "WRITE_EXTERNAL_STORAGE",
        };
        f.write_str(name)
    }
}

/// Permissions the app wants on a host of the given platform level.
pub fn required_permissions(api_level: u32) -> &'static [Permission] {
    if api_level >= MEDIA_PERMISSIONS_API_LEVEL {
        &[
            Permission::ReadMediaImages,
            Permission::ReadMediaVideo,
            Permission::ReadMediaAudio,
        ]
    } else {
        &[
            Permission::ReadExternalStorage,
            Permission::WriteExternalStorage,
        ]
    }
}

/// The host side of a permission request.
pub trait PermissionProvider: Send + Sync + 'static {
    fn is_granted(&self, permission: Permission) -> bool;

    /// Asks for `permissions` and reports which were granted.
    fn request(&self, permissions: &[Permission]) -> Vec<(Permission, bool)>;
}

/// Provider that answers every request the same way.
#[derive(Debug, Clone, Default)]
pub struct StaticPermissions {
    grant: bool,
    already_granted: HashSet<Permission>,
}

impl StaticPermissions {
    pub fn new(grant: bool) -> Self {
        Self {
            grant,
            already_granted: HashSet::new(),
        }
    }

    #[cfg(test)]
    pub fn with_granted(mut self, permission: Permission) -> Self {
        self.already_granted.insert(permission);
        self
    }
}

impl PermissionProvider for StaticPermissions {
    fn is_granted(&self, permission: Permission) -> bool {
        self.already_granted.contains(&permission)
    }

    fn request(&self, permissions: &[Permission]) -> Vec<(Permission, bool)> {
        permissions.iter().map(|p| (*p, self.grant)).collect()
    }
}

/// Informational message shown after the request completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionNotice {
    Granted,
    NeededForPdfs,
}

impl fmt::Display for PermissionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionNotice::Granted => f.write_str("Permissions granted"),
            PermissionNotice::NeededForPdfs => f.write_str("Permissions are needed to generate PDFs"),
        }
    }
}

/// Requests whatever is still missing and returns the notice to show.
///
/// `None` when everything was already granted and no request was made.
pub fn request_missing(provider: &dyn PermissionProvider, api_level: u32) -> Option<PermissionNotice> {
    let missing: Vec<Permission> = required_permissions(api_level)
        .iter()
        .copied()
        .filter(|p| !provider.is_granted(*p))
        .collect();
    if missing.is_empty() {
        return None;
    }

    let answers = provider.request(&missing);
    let denied: Vec<String> = answers
        .iter()
        .filter(|(_, granted)| !granted)
        .map(|(p, _)| p.to_string())
        .collect();
    if denied.is_empty() {
        info!(count = answers.len(), "Permissions granted");
        Some(PermissionNotice::Granted)
    } else {
        warn!(denied = ?denied, "Permissions denied");
        Some(PermissionNotice::NeededForPdfs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_level_picks_permission_set() {
        assert_eq!(required_permissions(33).len(), 3);
        assert_eq!(required_permissions(34)[0], Permission::ReadMediaImages);
        assert_eq!(
            required_permissions(32),
            &[Permission::ReadExternalStorage, Permission::WriteExternalStorage]
        );
    }

    #[test]
    fn test_granted_request_gives_granted_notice() {
        let provider = StaticPermissions::new(true);
        assert_eq!(request_missing(&provider, 33), Some(PermissionNotice::Granted));
    }

    #[test]
    fn test_denial_is_only_a_notice() {
        let provider = StaticPermissions::new(false);
        let notice = request_missing(&provider, 30);
        assert_eq!(notice, Some(PermissionNotice::NeededForPdfs));
        assert_eq!(notice.unwrap().to_string(), "Permissions are needed to generate PDFs");
    }

    #[test]
    fn test_nothing_requested_when_already_granted() {
        let provider = StaticPermissions::new(false)
            .with_granted(Permission::ReadExternalStorage)
            .with_granted(Permission::WriteExternalStorage);
        assert_eq!(request_missing(&provider, 29), None);
    }
}
