use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technology {
    pub slug: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoftSkill {
    pub value: &'static str,
    pub name: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { slug: "csharp", name: "C#" },
    Technology { slug: "angular", name: "Angular" },
    Technology { slug: "ionic", name: "Ionic" },
    Technology { slug: "blazor", name: "Blazor" },
    Technology { slug: "razor", name: "Razor" },
];

pub const SOFT_SKILLS: &[SoftSkill] = &[
    SoftSkill { value: "communication", name: "Communication" },
    SoftSkill { value: "conflict-resolution", name: "Conflict Resolution" },
    SoftSkill { value: "leadership", name: "Leadership" },
    SoftSkill { value: "teamwork", name: "Teamwork" },
    SoftSkill { value: "adaptability", name: "Adaptability" },
];

pub fn find_technology(slug: &str) -> Option<&'static Technology> {
    TECHNOLOGIES.iter().find(|t| t.slug == slug)
}
