//! Step state for the six-step resume builder.
//!
//! The builder is stateless over HTTP: each request carries the current step
//! and profile plus a list of edits, and gets the resulting state back.

use serde::{Deserialize, Serialize};

use crate::resume::profile::{Experience, Project, StudentProfile};
use crate::resume::templates::{find_template, ResumeTemplate, TEMPLATES};

pub const TOTAL_STEPS: u8 = 6;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    Template = 1,
    Personal = 2,
    Education = 3,
    Skills = 4,
    ExperienceAndProjects = 5,
    Review = 6,
}

impl Step {
    fn from_number(n: u8) -> Self {
        match n {
            0 | 1 => Step::Template,
            2 => Step::Personal,
            3 => Step::Education,
            4 => Step::Skills,
            5 => Step::ExperienceAndProjects,
            _ => Step::Review,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Technical,
    Soft,
    Language,
}

/// One builder edit, as sent by the client.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum WizardAction {
    Next,
    Prev,
    SelectTemplate {
        #[serde(rename = "templateId")]
        template_id: String,
    },
    AddSkill {
        kind: SkillKind,
        value: String,
    },
    RemoveSkill {
        kind: SkillKind,
        index: usize,
    },
    AddExperience,
    RemoveExperience {
        index: usize,
    },
    AddProject,
    RemoveProject {
        index: usize,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub step: u8,
    pub stage: Step,
    pub total_steps: u8,
    pub progress: f64,
    pub template_id: &'static str,
    pub profile: StudentProfile,
    /// First missing required field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResumeWizard {
    step: u8,
    template: &'static ResumeTemplate,
    pub profile: StudentProfile,
}

impl ResumeWizard {
    pub fn new(profile: StudentProfile) -> Self {
        Self {
            step: 1,
            template: &TEMPLATES[0],
            profile,
        }
    }

    /// Resumes at `step`, clamped to the valid range.
    pub fn at_step(mut self, step: u8) -> Self {
        self.step = step.clamp(1, TOTAL_STEPS);
        self
    }

    pub fn step(&self) -> Step {
        Step::from_number(self.step)
    }

    pub fn next(&mut self) {
        self.step = (self.step + 1).min(TOTAL_STEPS);
    }

    pub fn prev(&mut self) {
        self.step = self.step.saturating_sub(1).max(1);
    }

    pub fn progress(&self) -> f64 {
        f64::from(self.step) / f64::from(TOTAL_STEPS) * 100.0
    }

    pub fn template(&self) -> &'static ResumeTemplate {
        self.template
    }

    pub fn select_template(&mut self, template: &'static ResumeTemplate) {
        self.template = template;
    }

    fn skills_mut(&mut self, kind: SkillKind) -> &mut Vec<String> {
        match kind {
            SkillKind::Technical => &mut self.profile.skills.technical,
            SkillKind::Soft => &mut self.profile.skills.soft,
            SkillKind::Language => &mut self.profile.skills.languages,
        }
    }

    /// Blank input is ignored.
    pub fn add_skill(&mut self, kind: SkillKind, value: &str) {
        let value = value.trim();
        if !value.is_empty() {
            self.skills_mut(kind).push(value.to_string());
        }
    }

    pub fn remove_skill(&mut self, kind: SkillKind, index: usize) {
        remove_at(self.skills_mut(kind), index);
    }

    pub fn add_experience(&mut self) {
        self.profile.experience.push(Experience::default());
    }

    pub fn remove_experience(&mut self, index: usize) {
        remove_at(&mut self.profile.experience, index);
    }

    pub fn add_project(&mut self) {
        self.profile.projects.push(Project::default());
    }

    pub fn remove_project(&mut self, index: usize) {
        remove_at(&mut self.profile.projects, index);
    }

    /// Unknown template ids are the only edit that can fail.
    pub fn apply(&mut self, action: WizardAction) -> Result<(), String> {
        match action {
            WizardAction::Next => self.next(),
            WizardAction::Prev => self.prev(),
            WizardAction::SelectTemplate { template_id } => {
                let template = find_template(&template_id)
                    .ok_or_else(|| format!("Unknown template '{template_id}'"))?;
                self.select_template(template);
            }
            WizardAction::AddSkill { kind, value } => self.add_skill(kind, &value),
            WizardAction::RemoveSkill { kind, index } => self.remove_skill(kind, index),
            WizardAction::AddExperience => self.add_experience(),
            WizardAction::RemoveExperience { index } => self.remove_experience(index),
            WizardAction::AddProject => self.add_project(),
            WizardAction::RemoveProject { index } => self.remove_project(index),
        }
        Ok(())
    }

    pub fn into_state(self) -> WizardState {
        let problem = self.validate().err();
        WizardState {
            step: self.step,
            stage: self.step(),
            total_steps: TOTAL_STEPS,
            progress: self.progress(),
            template_id: self.template.id,
            profile: self.profile,
            problem,
        }
    }

    /// Presence-only check of the fields a resume cannot go without.
    pub fn validate(&self) -> Result<(), String> {
        let info = &self.profile.personal_info;
        if info.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if info.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        Ok(())
    }
}

/// Out-of-range indices are a no-op.
fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}
