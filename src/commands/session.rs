use tauri::State;

use super::{lock_store, AppStore};

// ── Admin Session ────────────────────────────────────────────────────────────

#[tauri::command]
pub fn is_authenticated(store: State<'_, AppStore>) -> Result<bool, String> {
    Ok(lock_store(&store)?.is_authenticated())
}

/// Returns false for a wrong password; the frontend shows the notice.
#[tauri::command]
pub fn login(store: State<'_, AppStore>, password: &str) -> Result<bool, String> {
    Ok(lock_store(&store)?.login(password))
}

#[tauri::command]
pub fn logout(store: State<'_, AppStore>) -> Result<(), String> {
    lock_store(&store)?.logout();
    Ok(())
}
