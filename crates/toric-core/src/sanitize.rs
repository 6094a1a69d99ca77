//! Display-name to storage-key sanitization.
//!
//! The mapping keeps alphanumerics, spaces, hyphens, and underscores, drops
//! everything else, trims the result, and maps internal spaces to
//! underscores. It is one-way and non-injective: distinct display names may
//! share a storage key, in which case the stored slot is last-write-wins.

/// Derives the filesystem-safe storage key for a display name.
///
/// The returned string has no `.json` suffix; backends append their own.
/// May be empty when the name contains no retained characters.
pub fn sanitize_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim().replace(' ', "_")
}
