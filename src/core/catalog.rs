use serde::Serialize;

use super::types::{Project, Skill};

// ── Catalog Views ────────────────────────────────────────────────────────────
//
// Read-only groupings the portfolio sections render.  Order always follows
// the collections' insertion order.

/// Category entry that matches every project.
pub const ALL_CATEGORIES: &str = "All";

/// Skills that share a category, as shown in one card of the skills section.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Splits the admin form's comma-separated technology list.  Entries are
/// trimmed but otherwise kept as typed, empty ones included.
pub fn parse_technologies(input: &str) -> Vec<String> {
    input.split(',').map(|t| t.trim().to_string()).collect()
}

/// `"All"` followed by each distinct project category in first-seen order.
pub fn project_categories(projects: &[Project]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        if !categories.contains(&project.fields.category) {
            categories.push(project.fields.category.clone());
        }
    }
    categories
}

pub fn projects_in_category<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    if category == ALL_CATEGORIES {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| p.fields.category == category)
        .collect()
}

pub fn skill_groups(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.fields.category) {
            Some(group) => group.skills.push(skill.clone()),
            None => groups.push(SkillGroup {
                category: skill.fields.category.clone(),
                skills: vec![skill.clone()],
            }),
        }
    }
    groups
}
