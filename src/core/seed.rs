use super::types::{Profile, Project, ProjectFields, Skill, SkillFields};

// ── Default Content ──────────────────────────────────────────────────────────
//
// What a fresh store shows before anyone edits it.  Edits are memory-only, so
// every launch starts from here again.

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_profile() -> Profile {
    Profile {
        name: "Alex Johnson".into(),
        title: "Full Stack Developer".into(),
        bio: "Passionate full-stack developer with 5+ years of experience building modern web \
              applications. I love creating efficient, scalable solutions and learning new \
              technologies."
            .into(),
        email: "alex@example.com".into(),
        phone: "+1 (555) 123-4567".into(),
        location: "San Francisco, CA".into(),
        linkedin: "https://linkedin.com/in/alexjohnson".into(),
        github: "https://github.com/alexjohnson".into(),
        resume: "https://example.com/resume.pdf".into(),
    }
}

pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            fields: ProjectFields {
                title: "E-Commerce Platform".into(),
                description: "A full-stack e-commerce solution with React, Node.js, and PostgreSQL"
                    .into(),
                category: "Full Stack".into(),
                technologies: strings(&["React", "Node.js", "PostgreSQL", "Tailwind CSS"]),
                image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&w=800&q=80".into(),
                project_url: "https://example.com".into(),
                github_url: "https://github.com".into(),
            },
        },
        Project {
            id: "2".into(),
            fields: ProjectFields {
                title: "Task Management App".into(),
                description: "A collaborative task management application with real-time updates"
                    .into(),
                category: "Frontend".into(),
                technologies: strings(&["React", "Firebase", "Material-UI"]),
                image_url: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?auto=format&fit=crop&w=800&q=80".into(),
                project_url: "https://example.com".into(),
                github_url: "https://github.com".into(),
            },
        },
        Project {
            id: "3".into(),
            fields: ProjectFields {
                title: "AI Chat Assistant".into(),
                description: "An intelligent chatbot powered by OpenAI API with custom training"
                    .into(),
                category: "AI/ML".into(),
                technologies: strings(&["Python", "OpenAI API", "Flask", "React"]),
                image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&w=800&q=80".into(),
                project_url: "https://example.com".into(),
                github_url: "https://github.com".into(),
            },
        },
    ]
}

pub fn default_skills() -> Vec<Skill> {
    [
        ("1", "React", 90, "Frontend"),
        ("2", "TypeScript", 85, "Frontend"),
        ("3", "Node.js", 80, "Backend"),
        ("4", "Python", 75, "Backend"),
        ("5", "PostgreSQL", 70, "Database"),
        ("6", "AWS", 65, "Cloud"),
    ]
    .into_iter()
    .map(|(id, name, level, category)| Skill {
        id: id.into(),
        fields: SkillFields {
            name: name.into(),
            category: category.into(),
            level,
        },
    })
    .collect()
}
