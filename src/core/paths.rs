use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{StorageError, StorageResult};

// ── Path Helpers ─────────────────────────────────────────────────────────────

/// Environment variable that relocates the data directory (tests, portable
/// installs).
pub const HOME_ENV: &str = "FOLIO_HOME";

/// Root of everything Folio keeps on disk: `$FOLIO_HOME`, else `~/.folio`.
pub fn get_folio_dir() -> StorageResult<PathBuf> {
    resolve_folio_dir(std::env::var_os(HOME_ENV), dirs::home_dir())
}

/// An empty override counts as unset.
fn resolve_folio_dir(
    override_dir: Option<OsString>,
    home: Option<PathBuf>,
) -> StorageResult<PathBuf> {
    if let Some(dir) = override_dir.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = home.ok_or(StorageError::NoHomeDir)?;
    Ok(home.join(".folio"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_home() {
        let dir = resolve_folio_dir(
            Some(OsString::from("/srv/folio-data")),
            Some(PathBuf::from("/home/sam")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/srv/folio-data"));
    }

    #[test]
    fn test_defaults_to_dot_folio_in_home() {
        let dir = resolve_folio_dir(None, Some(PathBuf::from("/home/sam"))).unwrap();
        assert_eq!(dir, PathBuf::from("/home/sam/.folio"));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let dir = resolve_folio_dir(Some(OsString::new()), Some(PathBuf::from("/home/sam")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/home/sam/.folio"));
    }

    #[test]
    fn test_no_home_and_no_override_fails() {
        assert!(matches!(
            resolve_folio_dir(None, None),
            Err(StorageError::NoHomeDir)
        ));
        assert!(matches!(
            resolve_folio_dir(Some(OsString::new()), None),
            Err(StorageError::NoHomeDir)
        ));
    }
}
