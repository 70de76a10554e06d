use super::auth::AuthGate;
use super::ids::IdGenerator;
use super::seed;
use super::storage::KeyValueStorage;
use super::types::{
    ContentSnapshot, Identified, Profile, Project, ProjectFields, Skill, SkillFields,
};

// ── Content Store ────────────────────────────────────────────────────────────
//
// Owns the profile, project and skill collections plus the admin flag.  Built
// once at startup and handed to whoever renders or edits the site; nothing
// outside this type mutates the collections.
//
// Only the admin flag survives a restart.  Content edits are memory-only and
// the next launch starts from the seeded defaults.
//
// Update and delete with an identifier that is not in the collection do
// nothing and report nothing.  The admin panel relies on that.

pub struct ContentStore<S: KeyValueStorage> {
    storage: S,
    auth: AuthGate,
    ids: IdGenerator,
    profile: Profile,
    projects: Vec<Project>,
    skills: Vec<Skill>,
}

impl<S: KeyValueStorage> ContentStore<S> {
    /// A store holding the default content.  The session flag in `storage`
    /// is read once here, so a sign-in from an earlier run carries over.
    pub fn new(storage: S) -> Self {
        Self::with_content(
            storage,
            seed::default_profile(),
            seed::default_projects(),
            seed::default_skills(),
        )
    }

    pub fn with_content(
        storage: S,
        profile: Profile,
        projects: Vec<Project>,
        skills: Vec<Skill>,
    ) -> Self {
        let mut store = Self {
            storage,
            auth: AuthGate::new(),
            ids: IdGenerator::new(),
            profile,
            projects,
            skills,
        };
        store.restore_session();
        store
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            is_authenticated: self.is_authenticated(),
            profile: self.profile.clone(),
            projects: self.projects.clone(),
            skills: self.skills.clone(),
        }
    }

    // ── Session ──────────────────────────────────────────────────────────────

    pub fn login(&mut self, password: &str) -> bool {
        self.auth.login(password, &mut self.storage)
    }

    pub fn logout(&mut self) {
        self.auth.logout(&mut self.storage);
    }

    pub fn restore_session(&mut self) {
        self.auth.restore_session(&self.storage);
    }

    // ── Projects ─────────────────────────────────────────────────────────────

    pub fn add_project(&mut self, fields: ProjectFields) -> Project {
        let id = next_id(&mut self.ids, &self.projects);
        let project = Project { id, fields };
        self.projects.push(project.clone());
        tracing::info!(project_id = %project.id, title = %project.fields.title, "project added");
        project
    }

    pub fn update_project(&mut self, id: &str, fields: ProjectFields) {
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.fields = fields;
                tracing::info!(project_id = %id, "project updated");
            }
            None => tracing::debug!(project_id = %id, "update of unknown project ignored"),
        }
    }

    pub fn delete_project(&mut self, id: &str) {
        if remove_by_id(&mut self.projects, id) {
            tracing::info!(project_id = %id, "project deleted");
        }
    }

    // ── Skills ───────────────────────────────────────────────────────────────

    pub fn add_skill(&mut self, fields: SkillFields) -> Skill {
        let id = next_id(&mut self.ids, &self.skills);
        let skill = Skill { id, fields };
        self.skills.push(skill.clone());
        tracing::info!(skill_id = %skill.id, name = %skill.fields.name, "skill added");
        skill
    }

    pub fn update_skill(&mut self, id: &str, fields: SkillFields) {
        match self.skills.iter_mut().find(|s| s.id == id) {
            Some(skill) => {
                skill.fields = fields;
                tracing::info!(skill_id = %id, "skill updated");
            }
            None => tracing::debug!(skill_id = %id, "update of unknown skill ignored"),
        }
    }

    pub fn delete_skill(&mut self, id: &str) {
        if remove_by_id(&mut self.skills, id) {
            tracing::info!(skill_id = %id, "skill deleted");
        }
    }

    // ── Profile ──────────────────────────────────────────────────────────────

    /// Replaces every profile field; there is no partial update.
    pub fn update_profile(&mut self, profile: Profile) {
        self.profile = profile;
        tracing::info!("profile updated");
    }
}

fn next_id<T: Identified>(ids: &mut IdGenerator, items: &[T]) -> String {
    ids.next(|candidate| items.iter().any(|item| item.id() == candidate))
}

/// Returns true if an entry was removed.
fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
