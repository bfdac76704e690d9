//! App version comparison.

/// Leading numeric component of a dotted version string (`"118.2"` → 118).
pub fn major_version(version: &str) -> Option<u32> {
    version.trim().split('.').next()?.trim().parse().ok()
}

/// True when `current` has a higher major version than `saved`.
/// Unparseable versions never count as an update.
pub fn is_major_version_update(saved: &str, current: &str) -> bool {
    match (major_version(saved), major_version(current)) {
        (Some(saved), Some(current)) => saved < current,
        _ => false,
    }
}
