use tauri::State;

use super::{lock_store, AppStore};
use crate::core;

// ── Content ──────────────────────────────────────────────────────────────────
//
// Mutations are not checked against the admin flag: only the admin screen
// calls them, and it is shown only when signed in.

#[tauri::command]
pub fn get_content(store: State<'_, AppStore>) -> Result<core::ContentSnapshot, String> {
    Ok(lock_store(&store)?.snapshot())
}

#[tauri::command]
pub fn update_profile(store: State<'_, AppStore>, profile: core::Profile) -> Result<(), String> {
    lock_store(&store)?.update_profile(profile);
    Ok(())
}

// ── Projects ─────────────────────────────────────────────────────────────────

#[tauri::command]
pub fn add_project(
    store: State<'_, AppStore>,
    project: core::ProjectFields,
) -> Result<core::Project, String> {
    Ok(lock_store(&store)?.add_project(project))
}

#[tauri::command]
pub fn update_project(
    store: State<'_, AppStore>,
    id: &str,
    project: core::ProjectFields,
) -> Result<(), String> {
    lock_store(&store)?.update_project(id, project);
    Ok(())
}

#[tauri::command]
pub fn delete_project(store: State<'_, AppStore>, id: &str) -> Result<(), String> {
    lock_store(&store)?.delete_project(id);
    Ok(())
}

#[tauri::command]
pub fn get_project_categories(store: State<'_, AppStore>) -> Result<Vec<String>, String> {
    Ok(core::project_categories(lock_store(&store)?.projects()))
}

#[tauri::command]
pub fn get_projects_by_category(
    store: State<'_, AppStore>,
    category: &str,
) -> Result<Vec<core::Project>, String> {
    let store = lock_store(&store)?;
    Ok(core::projects_in_category(store.projects(), category)
        .into_iter()
        .cloned()
        .collect())
}

/// Turns the admin form's "React, Node.js" text into a technology list.
#[tauri::command]
pub fn parse_technologies(input: &str) -> Vec<String> {
    core::parse_technologies(input)
}

// ── Skills ───────────────────────────────────────────────────────────────────

#[tauri::command]
pub fn add_skill(
    store: State<'_, AppStore>,
    skill: core::SkillFields,
) -> Result<core::Skill, String> {
    Ok(lock_store(&store)?.add_skill(skill))
}

#[tauri::command]
pub fn update_skill(
    store: State<'_, AppStore>,
    id: &str,
    skill: core::SkillFields,
) -> Result<(), String> {
    lock_store(&store)?.update_skill(id, skill);
    Ok(())
}

#[tauri::command]
pub fn delete_skill(store: State<'_, AppStore>, id: &str) -> Result<(), String> {
    lock_store(&store)?.delete_skill(id);
    Ok(())
}

#[tauri::command]
pub fn get_skill_groups(store: State<'_, AppStore>) -> Result<Vec<core::SkillGroup>, String> {
    Ok(core::skill_groups(lock_store(&store)?.skills()))
}
