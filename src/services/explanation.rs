use async_trait::async_trait;
use rig::completion::Prompt;
use rig::providers::openai;

/// Natural-language rationale generation. Same concurrency/failure contract
/// as [`super::reasoning::ReasoningService`]: `None` means "fall back to a
/// rule template", never an error.
#[async_trait]
pub trait ExplanationService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Option<String>;
}

#[derive(Debug, Default, Clone)]
pub struct DisabledExplanationService;

#[async_trait]
impl ExplanationService for DisabledExplanationService {
    async fn generate(&self, _prompt: &str) -> Option<String> {
        None
    }
}

pub struct RigExplanationService {
    model: String,
    client: openai::Client,
}

impl RigExplanationService {
    pub fn new(client: openai::Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ExplanationService for RigExplanationService {
    async fn generate(&self, prompt: &str) -> Option<String> {
        let agent = self.client.agent(&self.model).build();
        match agent.prompt(prompt).await {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "explanation service call failed");
                None
            }
        }
    }
}
