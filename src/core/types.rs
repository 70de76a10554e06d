use serde::{Deserialize, Serialize};

// ── Data Structures ──────────────────────────────────────────────────────────
//
// Field names are serialised in camelCase because the webview reads these
// records directly (`imageUrl`, `isAuthenticated`, ...).

/// The site owner's public details.  A singleton with no identifier: every
/// update replaces the whole record.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
    /// GitHub profile URL.
    pub github: String,
    /// Resume download URL.
    pub resume: String,
}

/// Editable fields of a [`Project`], i.e. everything except its identifier.
/// This is what the admin form submits for both create and update.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub project_url: String,
    #[serde(default)]
    pub github_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique within the collection and never changed after creation.
    pub id: String,
    #[serde(flatten)]
    pub fields: ProjectFields,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillFields {
    pub name: String,
    pub category: String,
    /// Proficiency, meant to be 0-100.  Not clamped: the form validates it.
    pub level: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    #[serde(flatten)]
    pub fields: SkillFields,
}

/// Everything the presentation layer renders, read in one call.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    pub is_authenticated: bool,
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

/// A collection entry addressed by an opaque string identifier.
pub(crate) trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Skill {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_project_serialises_flat_camel_case() {
        let project = Project {
            id: "42".to_string(),
            fields: ProjectFields {
                title: "A".to_string(),
                description: "d".to_string(),
                category: "c".to_string(),
                technologies: vec!["x".to_string()],
                image_url: "img".to_string(),
                ..Default::default()
            },
        };

        let value: Value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["id"], "42");
        assert_eq!(value["imageUrl"], "img");
        assert_eq!(value["githubUrl"], "");
        assert_eq!(value["technologies"], json!(["x"]));
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn test_skill_fields_accept_form_payload() {
        let fields: SkillFields =
            serde_json::from_value(json!({"name": "Rust", "category": "Backend", "level": 120}))
                .unwrap();
        // Out-of-range levels are kept as submitted.
        assert_eq!(fields.level, 120);
    }
}
