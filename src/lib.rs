pub mod core;
pub mod error;
pub mod logging;

mod commands;

use std::sync::Mutex;

// ── App Entry ────────────────────────────────────────────────────────────────

/// Build the content store the webview talks to: seeded content plus any
/// admin session persisted by an earlier run.
pub fn build_store(
    data_dir: &std::path::Path,
    settings: &core::Settings,
) -> core::ContentStore<core::FileStorage> {
    let storage = core::FileStorage::new(data_dir.join(&settings.storage_file));
    core::ContentStore::new(storage)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::*;

    let data_dir = match core::get_folio_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("[folio] {}", e);
            std::process::exit(1);
        }
    };
    let settings = core::read_settings(&data_dir);
    logging::init(&settings.log_filter);

    let store = build_store(&data_dir, &settings);
    tracing::info!(
        data_dir = %data_dir.display(),
        authenticated = store.is_authenticated(),
        "content store ready"
    );

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage::<AppStore>(Mutex::new(store))
        .invoke_handler(tauri::generate_handler![
            get_content,
            is_authenticated,
            login,
            logout,
            update_profile,
            add_project,
            update_project,
            delete_project,
            get_project_categories,
            get_projects_by_category,
            parse_technologies,
            add_skill,
            update_skill,
            delete_skill,
            get_skill_groups,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
