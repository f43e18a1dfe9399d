use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Professional,
    Technical,
    Creative,
    Academic,
}

impl TemplateCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateCategory::Professional => "professional",
            TemplateCategory::Technical => "technical",
            TemplateCategory::Creative => "creative",
            TemplateCategory::Academic => "academic",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ResumeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
}

pub static TEMPLATES: [ResumeTemplate; 4] = [
    ResumeTemplate {
        id: "professional",
        name: "Professional",
        description: "Clean and professional layout suitable for corporate roles",
        category: TemplateCategory::Professional,
    },
    ResumeTemplate {
        id: "technical",
        name: "Technical",
        description: "Developer-focused template with emphasis on technical skills",
        category: TemplateCategory::Technical,
    },
    ResumeTemplate {
        id: "creative",
        name: "Creative",
        description: "Modern design with visual elements for creative fields",
        category: TemplateCategory::Creative,
    },
    ResumeTemplate {
        id: "academic",
        name: "Academic",
        description: "Research-oriented template for academic positions",
        category: TemplateCategory::Academic,
    },
];

pub fn find_template(id: &str) -> Option<&'static ResumeTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}
