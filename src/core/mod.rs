mod auth;
mod catalog;
mod ids;
mod paths;
mod seed;
mod settings;
mod storage;
mod store;
mod types;

// Re-export the public API so callers can use `core::Name` directly.
pub use auth::ADMIN_PASSWORD;
pub use catalog::{
    parse_technologies, project_categories, projects_in_category, skill_groups, SkillGroup,
};
pub use paths::get_folio_dir;
pub use settings::{read_settings, Settings};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::ContentStore;
pub use types::{ContentSnapshot, Profile, Project, ProjectFields, Skill, SkillFields};
