//! Storage errors.

use std::path::PathBuf;

/// Error returned by a [`PreferenceStore`](super::PreferenceStore).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or not reachable.
    #[error("preference storage is unavailable")]
    Unavailable,

    /// The store refused a new entry.
    #[error("preference storage quota exceeded ({limit} entries)")]
    QuotaExceeded { limit: usize },

    #[error("failed to access preference file \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file \"{}\" is not a JSON object of strings: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_error_display() {
        let err = StorageError::QuotaExceeded { limit: 4 };
        assert!(err.to_string().contains("4 entries"));
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = StorageError::Io {
            path: PathBuf::from("/tmp/prefs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/prefs.json"));
        assert!(msg.contains("denied"));
    }
}
