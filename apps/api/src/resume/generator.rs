//! Resume generation: AI draft first, deterministic template on any failure.
//!
//! `AppState` holds an `Arc<ResumeGenerator>`. The drafter behind it is
//! pluggable so the fallback path is testable without a network.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::{LlmClient, LlmError};
use crate::resume::fallback::render_fallback;
use crate::resume::profile::StudentProfile;
use crate::resume::prompts::build_prompt;
use crate::resume::templates::ResumeTemplate;

/// Anything that can turn a prompt into resume HTML.
#[async_trait]
pub trait ResumeDrafter: Send + Sync {
    async fn draft(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl ResumeDrafter for LlmClient {
    async fn draft(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(prompt).await
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSource {
    Ai,
    Template,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResume {
    pub html: String,
    pub source: ResumeSource,
    pub template_id: String,
}

#[derive(Clone)]
pub struct ResumeGenerator {
    drafter: Option<Arc<dyn ResumeDrafter>>,
}

impl ResumeGenerator {
    pub fn new(drafter: Option<Arc<dyn ResumeDrafter>>) -> Self {
        Self { drafter }
    }

    /// Generator that never calls out; always renders the template.
    pub fn template_only() -> Self {
        Self { drafter: None }
    }

    /// Never fails. A missing drafter, an error, or blank output all yield
    /// the template rendering of the same profile.
    pub async fn generate_resume(
        &self,
        profile: &StudentProfile,
        template: &ResumeTemplate,
    ) -> GeneratedResume {
        let drafted = match &self.drafter {
            None => {
                warn!("No generative API key configured, using template resume");
                None
            }
            Some(drafter) => match drafter.draft(&build_prompt(profile, template)).await {
                Ok(html) if !html.trim().is_empty() => Some(html),
                Ok(_) => {
                    warn!("Drafter returned blank output, using template resume");
                    None
                }
                Err(e) => {
                    warn!("Resume drafting failed, using template resume: {e}");
                    None
                }
            },
        };

        let (html, source) = match drafted {
            Some(html) => (html, ResumeSource::Ai),
            None => (render_fallback(profile, template), ResumeSource::Template),
        };
        info!(
            "Generated {:?} resume for {} with template {}",
            source, profile.personal_info.name, template.id
        );

        GeneratedResume {
            html,
            source,
            template_id: template.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::resume::profile::mock_profile;
    use crate::resume::templates::find_template;

    struct FixedDrafter(Result<&'static str, ()>);

    #[async_trait]
    impl ResumeDrafter for FixedDrafter {
        async fn draft(&self, prompt: &str) -> Result<String, LlmError> {
            assert!(prompt.contains("Arjun Sharma"));
            match self.0 {
                Ok(html) => Ok(html.to_string()),
                Err(()) => Err(LlmError::EmptyContent),
            }
        }
    }

    fn profile() -> StudentProfile {
        mock_profile(&fixtures::students().into_iter().next().unwrap())
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back_to_template() {
        let client = LlmClient::new("key".to_string(), Some("http://127.0.0.1:1/generate".to_string()))
            .with_max_retries(1);
        let generator = ResumeGenerator::new(Some(Arc::new(client)));
        let profile = profile();

        let resume = generator
            .generate_resume(&profile, find_template("technical").unwrap())
            .await;

        assert_eq!(resume.source, ResumeSource::Template);
        assert!(resume.html.contains("Arjun Sharma"));
        for skill in &profile.skills.technical {
            assert!(resume.html.contains(skill.as_str()), "missing {skill}");
        }
    }

    #[tokio::test]
    async fn test_missing_key_uses_template() {
        let resume = ResumeGenerator::template_only()
            .generate_resume(&profile(), find_template("professional").unwrap())
            .await;
        assert_eq!(resume.source, ResumeSource::Template);
        assert_eq!(resume.template_id, "professional");
    }

    #[tokio::test]
    async fn test_drafter_output_is_used() {
        let generator = ResumeGenerator::new(Some(Arc::new(FixedDrafter(Ok("<html>ai</html>")))));
        let resume = generator
            .generate_resume(&profile(), find_template("creative").unwrap())
            .await;
        assert_eq!(resume.source, ResumeSource::Ai);
        assert_eq!(resume.html, "<html>ai</html>");
    }

    #[tokio::test]
    async fn test_drafter_error_and_blank_output_fall_back() {
        for drafter in [FixedDrafter(Err(())), FixedDrafter(Ok("   "))] {
            let generator = ResumeGenerator::new(Some(Arc::new(drafter)));
            let resume = generator
                .generate_resume(&profile(), find_template("academic").unwrap())
                .await;
            assert_eq!(resume.source, ResumeSource::Template);
            assert!(resume.html.contains("<h1>Arjun Sharma</h1>"));
        }
    }
}
