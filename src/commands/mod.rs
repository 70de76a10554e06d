mod content;
mod session;

pub use content::*;
pub use session::*;

use std::sync::{Mutex, MutexGuard};

use crate::core::{ContentStore, FileStorage};

/// The single store instance, registered as Tauri managed state in `run()`.
pub type AppStore = Mutex<ContentStore<FileStorage>>;

pub(crate) fn lock_store(
    store: &AppStore,
) -> Result<MutexGuard<'_, ContentStore<FileStorage>>, String> {
    store
        .lock()
        .map_err(|_| "Content store is unavailable after an earlier failure".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use tempfile::tempdir;

    fn app_store(dir: &std::path::Path) -> AppStore {
        Mutex::new(ContentStore::new(FileStorage::new(dir.join("storage.json"))))
    }

    #[test]
    fn test_lock_store_returns_guard() {
        let dir = tempdir().unwrap();
        let store = app_store(dir.path());
        let guard = lock_store(&store).unwrap();
        assert_eq!(guard.projects().len(), 3);
    }

    #[test]
    fn test_poisoned_store_is_an_error() {
        let dir = tempdir().unwrap();
        let store = app_store(dir.path());

        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = store.lock().unwrap();
            panic!("command panicked while holding the store");
        }));
        assert!(store.is_poisoned());

        let err = lock_store(&store).err().unwrap();
        assert!(err.contains("unavailable"));
    }
}
